//! Resource handler shapes and registration descriptors
//!
//! A DICOMweb resource handler is an async function taking its path captures
//! (0, 1, or 2, in template order) followed by the domain context and the
//! query-parameter map, and returning a DICOM JSON value or an error. The
//! three observed shapes of the protocol are modeled as distinct variants so
//! the capture arity is fixed at registration time, not discovered by
//! reflection at dispatch time.

use crate::error::Result;
use crate::service::context::{DicomContext, QueryParams};
use crate::service::path::PathTemplate;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Domain value returned by a resource handler (DICOM JSON model)
pub type ResourceValue = serde_json::Value;

/// Terminal outcome of one handler invocation
pub type HandlerOutcome = Result<ResourceValue>;

/// Boxed future produced by a resource handler
pub type HandlerFuture = Pin<Box<dyn Future<Output = HandlerOutcome> + Send>>;

type PlainFn = dyn Fn(DicomContext, QueryParams) -> HandlerFuture + Send + Sync;
type StudyFn = dyn Fn(String, DicomContext, QueryParams) -> HandlerFuture + Send + Sync;
type StudySeriesFn = dyn Fn(String, String, DicomContext, QueryParams) -> HandlerFuture + Send + Sync;

/// A resource handler in one of the three invocation shapes
///
/// # Examples
///
/// ```
/// use dicomweb_rust::service::ResourceHandler;
/// use serde_json::json;
///
/// let handler = ResourceHandler::study(|study, _ctx, _query| async move {
///     Ok(json!({ "study": study }))
/// });
/// assert_eq!(handler.arity(), 1);
/// ```
#[derive(Clone)]
pub enum ResourceHandler {
    /// No path captures (e.g. `studies`)
    Plain(Arc<PlainFn>),
    /// One capture: the study identifier (e.g. `studies/{study}`)
    Study(Arc<StudyFn>),
    /// Two captures: study then series (e.g. `studies/{study}/series/{series}`)
    StudySeries(Arc<StudySeriesFn>),
}

impl ResourceHandler {
    /// Wrap an async function taking no path captures
    pub fn plain<F, Fut>(f: F) -> Self
    where
        F: Fn(DicomContext, QueryParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerOutcome> + Send + 'static,
    {
        ResourceHandler::Plain(Arc::new(move |ctx, query| Box::pin(f(ctx, query))))
    }

    /// Wrap an async function taking one path capture
    pub fn study<F, Fut>(f: F) -> Self
    where
        F: Fn(String, DicomContext, QueryParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerOutcome> + Send + 'static,
    {
        ResourceHandler::Study(Arc::new(move |study, ctx, query| {
            Box::pin(f(study, ctx, query))
        }))
    }

    /// Wrap an async function taking study and series path captures
    pub fn study_series<F, Fut>(f: F) -> Self
    where
        F: Fn(String, String, DicomContext, QueryParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerOutcome> + Send + 'static,
    {
        ResourceHandler::StudySeries(Arc::new(move |study, series, ctx, query| {
            Box::pin(f(study, series, ctx, query))
        }))
    }

    /// Number of path captures this handler expects
    pub fn arity(&self) -> usize {
        match self {
            ResourceHandler::Plain(_) => 0,
            ResourceHandler::Study(_) => 1,
            ResourceHandler::StudySeries(_) => 2,
        }
    }
}

impl std::fmt::Debug for ResourceHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shape = match self {
            ResourceHandler::Plain(_) => "Plain",
            ResourceHandler::Study(_) => "Study",
            ResourceHandler::StudySeries(_) => "StudySeries",
        };
        f.debug_tuple("ResourceHandler").field(&shape).finish()
    }
}

/// One declared resource handler: accessor, path template, isolation, callable
///
/// Descriptors are created once at service-registration time and are
/// read-only for the adaptor's lifetime. Their declaration order is the
/// resolution tie-break order.
#[derive(Debug, Clone)]
pub struct ResourceHandlerDescriptor {
    accessor: String,
    template: PathTemplate,
    isolated: bool,
    handler: ResourceHandler,
}

impl ResourceHandlerDescriptor {
    pub(crate) fn new(
        accessor: String,
        template: PathTemplate,
        isolated: bool,
        handler: ResourceHandler,
    ) -> Self {
        ResourceHandlerDescriptor {
            accessor,
            template,
            isolated,
            handler,
        }
    }

    /// Accessor (verb) this handler serves, compared case-insensitively
    pub fn accessor(&self) -> &str {
        &self.accessor
    }

    /// Declared path template
    pub fn template(&self) -> &PathTemplate {
        &self.template
    }

    /// Whether this handler may run concurrently with other invocations
    pub fn isolated(&self) -> bool {
        self.isolated
    }

    /// Number of path captures the handler expects
    pub fn arity(&self) -> usize {
        self.handler.arity()
    }

    /// The registered handler callable
    pub fn handler(&self) -> &ResourceHandler {
        &self.handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_arity_per_shape() {
        let plain = ResourceHandler::plain(|_ctx, _query| async { Ok(json!([])) });
        let study = ResourceHandler::study(|_s, _ctx, _query| async { Ok(json!([])) });
        let both = ResourceHandler::study_series(|_s, _r, _ctx, _query| async { Ok(json!([])) });

        assert_eq!(plain.arity(), 0);
        assert_eq!(study.arity(), 1);
        assert_eq!(both.arity(), 2);
    }

    #[test]
    fn test_handler_future_yields_value() {
        let handler = ResourceHandler::study(|study, _ctx, _query| async move {
            Ok(json!({ "study": study }))
        });

        let ResourceHandler::Study(f) = handler else {
            panic!("expected study shape");
        };
        let outcome = tokio_test::block_on(f(
            "1.2.3".to_string(),
            DicomContext::new(),
            QueryParams::new(),
        ));
        assert_eq!(outcome.unwrap(), json!({ "study": "1.2.3" }));
    }

    #[test]
    fn test_descriptor_accessors() {
        let descriptor = ResourceHandlerDescriptor::new(
            "get".to_string(),
            PathTemplate::parse("studies/{study}").unwrap(),
            true,
            ResourceHandler::study(|_s, _ctx, _query| async { Ok(json!([])) }),
        );

        assert_eq!(descriptor.accessor(), "get");
        assert!(descriptor.isolated());
        assert_eq!(descriptor.arity(), 1);
        assert_eq!(descriptor.template().wildcard_count(), 1);
    }

    #[test]
    fn test_debug_names_shape() {
        let handler = ResourceHandler::plain(|_ctx, _query| async { Ok(json!([])) });
        assert!(format!("{handler:?}").contains("Plain"));
    }
}
