//! Shared error code interface.
//!
//! Every crowdgate error type implements [`ErrorCode`] so request handlers
//! can map failures to stable machine-readable codes and decide whether a
//! retry makes sense.
//!
//! # Example
//!
//! ```
//! use crowdgate_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum LookupFailure {
//!     Timeout,
//!     Corrupt,
//! }
//!
//! impl ErrorCode for LookupFailure {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::Timeout => "LOOKUP_TIMEOUT",
//!             Self::Corrupt => "LOOKUP_CORRUPT",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::Timeout)
//!     }
//! }
//!
//! assert_eq!(LookupFailure::Timeout.code(), "LOOKUP_TIMEOUT");
//! assert!(!LookupFailure::Corrupt.is_recoverable());
//! ```

/// Unified error code interface.
///
/// # Code Format
///
/// - **UPPER_SNAKE_CASE**, e.g. `"AUTH_FORBIDDEN"`
/// - **Prefixed by domain**: `AUTH_`, `LOOKUP_`, `STORE_`, `CONFIG_`
/// - **Stable**: codes are part of the API contract
///
/// # Recoverability
///
/// An error is recoverable when the caller can act and retry: authenticate,
/// wait out a transient outage, fix a config file. A denial for lack of
/// ownership is not recoverable by retrying as the same actor.
pub trait ErrorCode {
    /// Returns a machine-readable error code.
    fn code(&self) -> &'static str;

    /// Returns whether the error is recoverable.
    fn is_recoverable(&self) -> bool;
}

/// Validates that an error code follows crowdgate conventions.
///
/// # Panics
///
/// Panics with a descriptive message if the code is empty, lacks the
/// expected prefix, or is not UPPER_SNAKE_CASE.
///
/// # Example
///
/// ```
/// use crowdgate_types::{assert_error_code, ErrorCode};
///
/// struct Gone;
///
/// impl ErrorCode for Gone {
///     fn code(&self) -> &'static str { "STORE_GONE" }
///     fn is_recoverable(&self) -> bool { false }
/// }
///
/// assert_error_code(&Gone, "STORE_");
/// ```
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "Error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "Error code '{}' must start with prefix '{}'",
        code,
        expected_prefix
    );
    assert!(
        is_upper_snake_case(code),
        "Error code '{}' must be UPPER_SNAKE_CASE",
        code
    );
}

/// Validates every error in `errors` with [`assert_error_code`].
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() || s.starts_with('_') || s.ends_with('_') || s.contains("__") {
        return false;
    }

    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
