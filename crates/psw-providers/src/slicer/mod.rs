//! Slicer Implementations
//!
//! | Provider | Transport |
//! |----------|-----------|
//! | [`SubprocessPcapSlicer`] | External program, positional arguments |

pub mod subprocess;

pub use subprocess::SubprocessPcapSlicer;
