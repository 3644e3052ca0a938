//! DICOMweb service adaptation layer
//!
//! Adapts transport-level requests (accessor + path segments + query
//! parameters) onto a statically registered table of resource handlers.
//!
//! - `path` - resource path templates with literal and wildcard segments
//! - `context` - per-request context, query parameters, request descriptor
//! - `handler` - resource handler shapes and their registration descriptors
//! - `resolver` - accessor + template matching over the handler table
//! - `adaptor` - asynchronous invocation with single-completion handles
//! - `registry` - validated service construction and dispatch

pub mod adaptor;
pub mod context;
pub mod handler;
pub mod path;
pub mod registry;
pub mod resolver;

pub use adaptor::{InvocationHandle, InvocationReceiver};
pub use context::{DicomContext, DicomRequest, QueryParams, QueryValue};
pub use handler::{HandlerFuture, HandlerOutcome, ResourceHandler, ResourceHandlerDescriptor, ResourceValue};
pub use path::{PathSegment, PathTemplate};
pub use registry::{DicomService, DicomServiceBuilder};
pub use resolver::resolve;
