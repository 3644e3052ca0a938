//! Validated service construction and request dispatch
//!
//! A [`DicomService`] is built once from an ordered list of resource
//! declarations and is read-only afterwards. Registration validates what the
//! original protocol checks statically: the path template must parse and its
//! wildcard count must equal the handler's capture arity. Dispatch resolves a
//! request against the table and schedules the matched handler without
//! blocking the caller.

use crate::error::{DicomWebError, Result};
use crate::service::adaptor::{spawn_invocation, InvocationHandle, InvocationReceiver};
use crate::service::context::{DicomContext, DicomRequest, QueryParams};
use crate::service::handler::{ResourceHandler, ResourceHandlerDescriptor};
use crate::service::path::PathTemplate;
use crate::service::resolver::resolve;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Builder collecting resource declarations in registration order
///
/// # Examples
///
/// ```
/// use dicomweb_rust::service::{DicomServiceBuilder, ResourceHandler};
/// use serde_json::json;
///
/// let service = DicomServiceBuilder::new()
///     .resource("get", "studies", true,
///         ResourceHandler::plain(|_ctx, _query| async { Ok(json!([])) }))?
///     .resource("get", "studies/{study}", true,
///         ResourceHandler::study(|study, _ctx, _query| async move {
///             Ok(json!({ "study": study }))
///         }))?
///     .build();
///
/// assert_eq!(service.handlers().len(), 2);
/// # Ok::<(), dicomweb_rust::DicomWebError>(())
/// ```
#[derive(Debug, Default)]
pub struct DicomServiceBuilder {
    handlers: Vec<ResourceHandlerDescriptor>,
}

impl DicomServiceBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a resource handler
    ///
    /// Declaration order is preserved and is the resolution tie-break order.
    ///
    /// # Arguments
    ///
    /// * `accessor` - verb served by this handler, matched case-insensitively
    /// * `template` - path template string, e.g. `"studies/{study}"`
    /// * `isolated` - whether the handler may run concurrently with other
    ///   invocations; non-isolated handlers are serialized per service
    /// * `handler` - the handler callable in one of the three shapes
    ///
    /// # Errors
    ///
    /// - [`DicomWebError::InvalidResourcePath`] - the template does not parse
    /// - [`DicomWebError::CaptureArityMismatch`] - the template's wildcard
    ///   count differs from the handler's capture arity
    pub fn resource(
        mut self,
        accessor: impl Into<String>,
        template: &str,
        isolated: bool,
        handler: ResourceHandler,
    ) -> Result<Self> {
        let accessor = accessor.into();
        let template = PathTemplate::parse(template)?;

        if template.wildcard_count() != handler.arity() {
            return Err(DicomWebError::CaptureArityMismatch {
                expected: handler.arity(),
                actual: template.wildcard_count(),
            });
        }

        debug!(
            accessor = %accessor,
            template = %template,
            isolated = isolated,
            "Registered resource handler"
        );

        self.handlers.push(ResourceHandlerDescriptor::new(
            accessor, template, isolated, handler,
        ));
        Ok(self)
    }

    /// Finalize the handler table
    pub fn build(self) -> DicomService {
        info!(
            handler_count = self.handlers.len(),
            "DICOMweb service built"
        );
        DicomService {
            handlers: Arc::new(self.handlers),
            exclusion: Arc::new(Mutex::new(())),
        }
    }
}

/// A DICOMweb service: immutable handler table plus its exclusivity domain
///
/// The handler table is shared read-only across all concurrent resolutions.
/// The exclusion lock serializes non-isolated invocations on this service
/// instance; isolated invocations never touch it.
#[derive(Debug, Clone)]
pub struct DicomService {
    handlers: Arc<Vec<ResourceHandlerDescriptor>>,
    exclusion: Arc<Mutex<()>>,
}

impl DicomService {
    /// The declared handler table, in registration order
    pub fn handlers(&self) -> &[ResourceHandlerDescriptor] {
        &self.handlers
    }

    /// Resolve a request to a handler, if any matches
    ///
    /// First declared match wins; `None` means not found (not an error).
    pub fn resolve(&self, accessor: &str, path: &[String]) -> Option<&ResourceHandlerDescriptor> {
        resolve(&self.handlers, accessor, path)
    }

    /// Invoke a resolved handler asynchronously
    ///
    /// Returns immediately; the terminal outcome arrives through `handle`'s
    /// receiver. A `None` handler is a silent no-op (the caller must have
    /// produced a not-found response before constructing the invocation);
    /// the unused handle is dropped, which the receiver observes as a closed
    /// channel rather than a completion.
    pub fn invoke(
        &self,
        handler: Option<&ResourceHandlerDescriptor>,
        captures: Vec<String>,
        context: DicomContext,
        query: QueryParams,
        handle: InvocationHandle,
    ) {
        let Some(descriptor) = handler else {
            debug!("Invocation skipped: no handler");
            return;
        };
        spawn_invocation(
            descriptor,
            captures,
            context,
            query,
            self.exclusion.clone(),
            handle,
        );
    }

    /// Resolve and invoke in one step
    ///
    /// Returns `None` when no handler matches the request; otherwise the
    /// matched handler is scheduled with its path captures and the receiver
    /// for its completion event is returned.
    pub fn dispatch(&self, request: DicomRequest) -> Option<InvocationReceiver> {
        let descriptor = self.resolve(&request.accessor, &request.path)?;
        let captures = descriptor.template().captures(&request.path);

        let (handle, receiver) = InvocationHandle::channel();
        self.invoke(
            Some(descriptor),
            captures,
            request.context,
            request.query,
            handle,
        );
        Some(receiver)
    }
}
