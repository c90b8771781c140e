//! Search Backend Implementations
//!
//! | Provider | Transport |
//! |----------|-----------|
//! | [`UnixSocketSearchBackend`] | Unix domain stream socket, one connection per request |

pub mod unix_socket;

pub use unix_socket::UnixSocketSearchBackend;
