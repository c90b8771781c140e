//! Error extension utilities
//!
//! Context methods that turn foreign errors into the shared [`Error`] type
//! while keeping the original as its source.

use psw_domain::error::{Error, Result};
use std::fmt;

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use psw_infrastructure::error_ext::ErrorContext;
///
/// let body = std::fs::read_to_string(&path)
///     .io_context(format!("Failed to read {}", path.display()))?;
///
/// let config: AppConfig = figment.extract().config_context("Invalid configuration")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context, producing an infrastructure error
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context for I/O operations
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

type Source = Option<Box<dyn std::error::Error + Send + Sync>>;

fn wrap<E, C>(context: C, err: E, build: fn(String, Source) -> Error) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
    C: fmt::Display,
{
    build(format!("{context}: {err}"), Some(Box::new(err)))
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| {
            wrap(context, err, |message, source| Error::Infrastructure {
                message,
                source,
            })
        })
    }

    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| wrap(context, err, |message, source| Error::Io { message, source }))
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| {
            wrap(context, err, |message, source| Error::Configuration {
                message,
                source,
            })
        })
    }
}
