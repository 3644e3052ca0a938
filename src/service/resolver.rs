//! Resource resolution over the declared handler table
//!
//! Scans the handler table in declaration order and selects the first entry
//! whose accessor matches case-insensitively and whose path template matches
//! the request path. Declaration order is the only tie-break: two handlers
//! with overlapping templates resolve to whichever was registered first.

use crate::service::handler::ResourceHandlerDescriptor;
use tracing::trace;

/// Select the handler for an accessor and request path
///
/// Returns `None` when no handler qualifies; absence is not an error and the
/// transport layer owns the not-found response.
///
/// # Examples
///
/// ```
/// use dicomweb_rust::service::{resolve, DicomServiceBuilder, ResourceHandler};
/// use serde_json::json;
///
/// let service = DicomServiceBuilder::new()
///     .resource("get", "studies", true, ResourceHandler::plain(|_c, _q| async { Ok(json!([])) }))
///     .unwrap()
///     .build();
///
/// let path = vec!["studies".to_string()];
/// assert!(resolve(service.handlers(), "GET", &path).is_some());
/// assert!(resolve(service.handlers(), "delete", &path).is_none());
/// ```
pub fn resolve<'a>(
    handlers: &'a [ResourceHandlerDescriptor],
    accessor: &str,
    path: &[String],
) -> Option<&'a ResourceHandlerDescriptor> {
    let resolved = handlers.iter().find(|handler| {
        handler.accessor().eq_ignore_ascii_case(accessor) && handler.template().matches(path)
    });

    trace!(
        accessor = accessor,
        path = ?path,
        matched = resolved.is_some(),
        "Resolved resource handler"
    );

    resolved
}
