//! Error types for dcalendario.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  The [`ensure!`] and
//! [`fail!`] macros are shorthands for the two most common early returns.

use thiserror::Error;

/// The top-level error type used throughout dcalendario.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested date range is not acceptable (start after end, or the
    /// span exceeds the configured cap).  No table is produced.
    #[error("{0}")]
    Validation(String),

    /// An export was requested in a format nobody knows how to write.
    #[error("formato inválido: {0}")]
    UnknownFormat(String),

    /// Invalid calendar date (construction, parsing, or arithmetic).
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument or option value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An encoder failed while producing an export payload.
    #[error("export error: {0}")]
    Export(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout dcalendario.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Validation(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dc_core::{ensure, errors::Error};
/// fn ordered(a: i32, b: i32) -> dc_core::errors::Result<()> {
///     ensure!(a <= b, "{a} must not exceed {b}");
///     Ok(())
/// }
/// assert!(ordered(1, 2).is_ok());
/// assert_eq!(
///     ordered(3, 2),
///     Err(Error::Validation("3 must not exceed 2".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Validation(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use dc_core::{fail, errors::Error};
/// fn always_err() -> dc_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_shown_verbatim() {
        let e = Error::Validation("A data inicial deve ser menor ou igual à data final.".into());
        assert_eq!(
            e.to_string(),
            "A data inicial deve ser menor ou igual à data final."
        );
    }

    #[test]
    fn unknown_format_names_the_format() {
        assert_eq!(
            Error::UnknownFormat("xml".into()).to_string(),
            "formato inválido: xml"
        );
    }
}
