//! DICOMweb Service Adaptor in Rust
//!
//! This library adapts generic transport-level requests (accessor + path
//! segments + query parameters) onto a declared set of typed DICOMweb
//! resource handlers, and converts fixed-width numeric attribute values to
//! and from byte sequences under a configurable byte order, as required by
//! the DICOM wire format.
//!
//! # Features
//!
//! - **Static handler table** - Resource handlers are declared once at
//!   registration time and validated there; no runtime reflection
//! - **Template path matching** - Literal and wildcard segments, exact
//!   length, first-declaration-wins resolution
//! - **Async invocation** - Handlers run on tokio tasks; callers never block
//! - **Isolation-aware scheduling** - Isolated handlers run concurrently,
//!   non-isolated handlers are serialized per service instance
//! - **Exactly-once completion** - Each invocation's handle is completed at
//!   most once, enforced by move semantics
//! - **Byte-order-aware numeric codec** - Lossless int/float conversions with
//!   DICOM's zero-pad and offset rules for odd-sized inputs
//!
//! # Quick Start
//!
//! ## Declaring and dispatching a service
//!
//! ```
//! use dicomweb_rust::service::{DicomRequest, DicomServiceBuilder, ResourceHandler};
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), dicomweb_rust::DicomWebError> {
//! let service = DicomServiceBuilder::new()
//!     .resource("get", "studies", true,
//!         ResourceHandler::plain(|_ctx, _query| async { Ok(json!([])) }))?
//!     .resource("get", "studies/{study}/series/{series}", true,
//!         ResourceHandler::study_series(|study, series, _ctx, _query| async move {
//!             Ok(json!({ "study": study, "series": series }))
//!         }))?
//!     .build();
//!
//! let request = DicomRequest::new("get", ["studies", "1.2.3", "series", "4.5.6"]);
//! let receiver = service.dispatch(request).expect("handler declared above");
//! let value = receiver.recv().await?;
//! assert_eq!(value["study"], "1.2.3");
//! # Ok(())
//! # }
//! ```
//!
//! ## Encoding numeric attribute values
//!
//! ```
//! use dicomweb_rust::codec::{bytes_to_int, int_to_bytes, ByteOrder};
//!
//! let order = ByteOrder::from_token("LITTLE_ENDIAN")?;
//! let bytes = int_to_bytes(1, order);
//! assert_eq!(bytes, vec![0x01, 0x00, 0x00, 0x00]);
//! assert_eq!(bytes_to_int(&bytes, order), 1);
//! # Ok::<(), dicomweb_rust::DicomWebError>(())
//! ```
//!
//! # Architecture
//!
//! The library is organized into three main modules:
//!
//! - **`service`** - Request adaptation layer
//!   - `path` - resource path templates (literal + wildcard segments)
//!   - `resolver` - accessor and template matching over the handler table
//!   - `adaptor` - async invocation with single-completion handles
//!   - `registry` - validated registration and dispatch
//!
//! - **`codec`** - Numeric attribute codec
//!   - `ByteOrder` - the two recognized byte-order tokens
//!   - int/float ⇄ bytes conversions and order-aware resizing
//!
//! - **`error`** - Error handling
//!   - `DicomWebError` - Unified error type for all operations
//!   - `Result<T>` - Type alias for `Result<T, DicomWebError>`
//!
//! # Design Principles
//!
//! 1. **Registration-time validation**: arity and template errors are
//!    rejected before the service exists, never guessed at dispatch time
//! 2. **Absence is not failure**: an unmatched request resolves to `None`;
//!    the transport layer owns the not-found response
//! 3. **No retries, no cancellation**: an invocation runs to exactly one
//!    terminal completion; timeout policy belongs to the transport layer
//! 4. **Explicit error handling**: all fallible operations return
//!    `Result<T, DicomWebError>`
//!
//! # Error Handling
//!
//! ```
//! use dicomweb_rust::codec::ByteOrder;
//! use dicomweb_rust::DicomWebError;
//!
//! match ByteOrder::from_token("MIDDLE_ENDIAN") {
//!     Err(DicomWebError::InvalidByteOrder(token)) => assert_eq!(token, "MIDDLE_ENDIAN"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

pub mod codec;
pub mod error;
pub mod service;

// Re-export commonly used types
pub use error::{DicomWebError, Result};
