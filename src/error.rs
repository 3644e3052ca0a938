//! Error types for DICOMweb service and codec operations
//!
//! This module defines all error types that can occur while registering
//! resource handlers, dispatching requests, and converting numeric
//! attribute values to and from bytes.

use thiserror::Error;

/// DICOMweb adaptor error types
///
/// All fallible operations in this library return `Result<T, DicomWebError>`
/// to provide explicit error handling.
///
/// Note that a request resolving to no handler is *not* an error: resolution
/// returns `Option::None` and the transport layer decides how to surface a
/// not-found response.
#[derive(Error, Debug)]
pub enum DicomWebError {
    /// Unrecognized byte-order token
    ///
    /// This error occurs when:
    /// - A byte-order token other than `"LITTLE_ENDIAN"` or `"BIG_ENDIAN"` is
    ///   passed to the numeric codec boundary
    ///
    /// This is the only error condition in the numeric codec. It fails fast,
    /// before any byte is read or written, so no partial output is produced.
    ///
    /// # Example
    /// ```no_run
    /// # use dicomweb_rust::error::DicomWebError;
    /// let err = DicomWebError::InvalidByteOrder("MIDDLE_ENDIAN".to_string());
    /// ```
    #[error("Invalid byte order: {0}")]
    InvalidByteOrder(String),

    /// Malformed resource path template
    ///
    /// This error occurs at registration time when:
    /// - A template is empty
    /// - A template contains an empty segment (e.g. `"studies//series"`)
    /// - A parameter segment has unbalanced braces (e.g. `"{study"`)
    ///
    /// # Example
    /// ```no_run
    /// # use dicomweb_rust::error::DicomWebError;
    /// let err = DicomWebError::InvalidResourcePath("empty segment".to_string());
    /// ```
    #[error("Invalid resource path template: {0}")]
    InvalidResourcePath(String),

    /// Handler capture arity does not match its path template
    ///
    /// This error occurs at registration time when:
    /// - The number of wildcard segments in the declared path template differs
    ///   from the number of path captures the handler function accepts
    ///
    /// Arity mismatches are always a configuration error and are rejected
    /// before the service is built, never guessed at dispatch time.
    ///
    /// # Example
    /// ```no_run
    /// # use dicomweb_rust::error::DicomWebError;
    /// let err = DicomWebError::CaptureArityMismatch { expected: 2, actual: 1 };
    /// ```
    #[error("Path capture arity mismatch: handler expects {expected} capture(s), template declares {actual}")]
    CaptureArityMismatch {
        /// Number of captures the handler function accepts
        expected: usize,
        /// Number of wildcard segments in the path template
        actual: usize,
    },

    /// Error value produced by an invoked resource handler
    ///
    /// The handler's error is propagated unchanged through the invocation
    /// handle's failure path. The adaptor never retries a failed invocation.
    #[error("Resource handler failed: {0}")]
    Handler(String),

    /// The invocation machinery failed to deliver a completion
    ///
    /// This error occurs when:
    /// - The handler task aborted (e.g. panicked) before completing its handle
    /// - The invocation was dropped without ever being scheduled
    #[error("Invocation aborted: {0}")]
    Invocation(String),
}

/// Result type alias for DICOMweb adaptor operations
pub type Result<T> = std::result::Result<T, DicomWebError>;
