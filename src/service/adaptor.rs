//! Asynchronous invocation of resolved resource handlers
//!
//! An invocation is represented by a pair of single-use endpoints: the
//! [`InvocationHandle`] the adaptor completes exactly once, and the
//! [`InvocationReceiver`] the transport layer awaits. Completing consumes the
//! handle, so a second completion is unrepresentable; a handle dropped
//! without completing surfaces on the receiver as an invocation failure.
//!
//! Handler bodies run on spawned tokio tasks. An isolated handler runs
//! concurrently with all other in-flight invocations; a non-isolated handler
//! first acquires its owning service's exclusion lock, so at most one
//! non-isolated invocation is active per service instance at a time.

use crate::error::DicomWebError;
use crate::service::context::{DicomContext, QueryParams};
use crate::service::handler::{
    HandlerFuture, HandlerOutcome, ResourceHandler, ResourceHandlerDescriptor,
};
use std::sync::Arc;
use tokio::sync::{oneshot, Mutex};
use tracing::{debug, warn};

/// Single-completion handle for one in-flight invocation
///
/// Owned exclusively by one invocation; never shared or reused. The
/// exactly-once completion invariant is enforced by move semantics:
/// [`complete`](Self::complete) consumes the handle.
#[derive(Debug)]
pub struct InvocationHandle {
    tx: oneshot::Sender<HandlerOutcome>,
}

impl InvocationHandle {
    /// Create a connected handle/receiver pair for one invocation
    pub fn channel() -> (InvocationHandle, InvocationReceiver) {
        let (tx, rx) = oneshot::channel();
        (InvocationHandle { tx }, InvocationReceiver { rx })
    }

    /// Complete the invocation with its terminal outcome
    ///
    /// Consumes the handle; exactly one success or failure completion can
    /// ever be delivered. If the receiver has already been dropped the
    /// outcome is discarded.
    pub fn complete(self, outcome: HandlerOutcome) {
        if self.tx.send(outcome).is_err() {
            warn!("Invocation completed after receiver was dropped");
        }
    }
}

/// Receiving end of one invocation's completion event
#[derive(Debug)]
pub struct InvocationReceiver {
    rx: oneshot::Receiver<HandlerOutcome>,
}

impl InvocationReceiver {
    /// Await the invocation's terminal outcome
    ///
    /// # Errors
    ///
    /// - the handler's own error value, propagated unchanged
    /// - [`DicomWebError::Invocation`] - the handle was dropped without
    ///   completing (e.g. the handler task panicked)
    pub async fn recv(self) -> HandlerOutcome {
        match self.rx.await {
            Ok(outcome) => outcome,
            Err(_) => Err(DicomWebError::Invocation(
                "invocation dropped without completing".to_string(),
            )),
        }
    }
}

/// Schedule a resolved handler and complete the handle when it finishes
///
/// Builds the argument list in fixed order (captures in template order, then
/// context, then query parameters), spawns the handler body, and delivers
/// exactly one completion. `exclusion` is the owning service's lock; it is
/// taken only for non-isolated handlers. Returns immediately.
pub(crate) fn spawn_invocation(
    descriptor: &ResourceHandlerDescriptor,
    captures: Vec<String>,
    context: DicomContext,
    query: QueryParams,
    exclusion: Arc<Mutex<()>>,
    handle: InvocationHandle,
) {
    let future = match build_handler_future(descriptor.handler(), captures, context, query) {
        Ok(future) => future,
        Err(err) => {
            // Capture count disagreed with the handler shape; registration
            // prevents this for resolved descriptors, direct callers get the
            // failure through the normal completion path
            handle.complete(Err(err));
            return;
        }
    };

    debug!(
        accessor = descriptor.accessor(),
        template = %descriptor.template(),
        isolated = descriptor.isolated(),
        "Scheduling resource handler invocation"
    );

    if descriptor.isolated() {
        tokio::spawn(async move {
            handle.complete(future.await);
        });
    } else {
        tokio::spawn(async move {
            let _guard = exclusion.lock().await;
            handle.complete(future.await);
        });
    }
}

fn build_handler_future(
    handler: &ResourceHandler,
    captures: Vec<String>,
    context: DicomContext,
    query: QueryParams,
) -> Result<HandlerFuture, DicomWebError> {
    let mismatch = |expected: usize, actual: usize| DicomWebError::CaptureArityMismatch {
        expected,
        actual,
    };

    match handler {
        ResourceHandler::Plain(f) => {
            if !captures.is_empty() {
                return Err(mismatch(0, captures.len()));
            }
            Ok(f(context, query))
        }
        ResourceHandler::Study(f) => {
            let [study] = <[String; 1]>::try_from(captures).map_err(|v| mismatch(1, v.len()))?;
            Ok(f(study, context, query))
        }
        ResourceHandler::StudySeries(f) => {
            let [study, series] =
                <[String; 2]>::try_from(captures).map_err(|v| mismatch(2, v.len()))?;
            Ok(f(study, series, context, query))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::path::PathTemplate;
    use serde_json::json;

    fn descriptor(isolated: bool) -> ResourceHandlerDescriptor {
        ResourceHandlerDescriptor::new(
            "get".to_string(),
            PathTemplate::parse("studies/{study}").unwrap(),
            isolated,
            ResourceHandler::study(|study, _ctx, _query| async move {
                Ok(json!({ "study": study }))
            }),
        )
    }

    #[tokio::test]
    async fn test_invocation_completes_with_success() {
        let (handle, receiver) = InvocationHandle::channel();
        spawn_invocation(
            &descriptor(true),
            vec!["S1".to_string()],
            DicomContext::new(),
            QueryParams::new(),
            Arc::new(Mutex::new(())),
            handle,
        );

        let outcome = receiver.recv().await.unwrap();
        assert_eq!(outcome, json!({ "study": "S1" }));
    }

    #[tokio::test]
    async fn test_handler_error_propagates_unchanged() {
        let failing = ResourceHandlerDescriptor::new(
            "get".to_string(),
            PathTemplate::parse("studies").unwrap(),
            true,
            ResourceHandler::plain(|_ctx, _query| async {
                Err(DicomWebError::Handler("study not found".to_string()))
            }),
        );

        let (handle, receiver) = InvocationHandle::channel();
        spawn_invocation(
            &failing,
            Vec::new(),
            DicomContext::new(),
            QueryParams::new(),
            Arc::new(Mutex::new(())),
            handle,
        );

        let err = receiver.recv().await.unwrap_err();
        assert!(matches!(err, DicomWebError::Handler(msg) if msg == "study not found"));
    }

    #[tokio::test]
    async fn test_dropped_handle_surfaces_as_invocation_error() {
        let (handle, receiver) = InvocationHandle::channel();
        drop(handle);

        let err = receiver.recv().await.unwrap_err();
        assert!(matches!(err, DicomWebError::Invocation(_)));
    }

    #[tokio::test]
    async fn test_missing_capture_fails_through_completion_path() {
        let (handle, receiver) = InvocationHandle::channel();
        spawn_invocation(
            &descriptor(true),
            Vec::new(),
            DicomContext::new(),
            QueryParams::new(),
            Arc::new(Mutex::new(())),
            handle,
        );

        let err = receiver.recv().await.unwrap_err();
        assert!(matches!(err, DicomWebError::CaptureArityMismatch { .. }));
    }

    #[tokio::test]
    async fn test_panicking_handler_never_completes_twice() {
        let panicking = ResourceHandlerDescriptor::new(
            "get".to_string(),
            PathTemplate::parse("studies").unwrap(),
            true,
            ResourceHandler::plain(|_ctx, _query| async { panic!("handler bug") }),
        );

        let (handle, receiver) = InvocationHandle::channel();
        spawn_invocation(
            &panicking,
            Vec::new(),
            DicomContext::new(),
            QueryParams::new(),
            Arc::new(Mutex::new(())),
            handle,
        );

        // The task aborts, the handle is dropped uncompleted, and the
        // receiver observes exactly one terminal event
        let err = receiver.recv().await.unwrap_err();
        assert!(matches!(err, DicomWebError::Invocation(_)));
    }

    #[tokio::test]
    async fn test_non_isolated_waits_for_exclusion_lock() {
        let exclusion = Arc::new(Mutex::new(()));
        let guard = exclusion.clone().lock_owned().await;

        let (handle, receiver) = InvocationHandle::channel();
        spawn_invocation(
            &descriptor(false),
            vec!["S1".to_string()],
            DicomContext::new(),
            QueryParams::new(),
            exclusion,
            handle,
        );

        let mut recv = tokio_test::task::spawn(receiver.recv());
        tokio::task::yield_now().await;
        tokio_test::assert_pending!(recv.poll());

        drop(guard);
        let outcome = recv.await.unwrap();
        assert_eq!(outcome, json!({ "study": "S1" }));
    }
}
