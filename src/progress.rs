//! Progress-callback trait for per-page recognition events.
//!
//! Inject an [`Arc<dyn RunProgressCallback>`] via
//! [`crate::config::RunConfigBuilder::progress`] to receive events as the
//! pipeline works through the page sequence.
//!
//! # Why callbacks instead of channels?
//!
//! The callback approach is the least-invasive integration point: callers
//! can forward events to a channel, a database record, or a terminal
//! display without the library knowing anything about how the host
//! application communicates.
//!
//! The pipeline is strictly sequential, so all methods are invoked from the
//! calling thread, in page order, with no overlap. The trait is still
//! `Send + Sync` so an implementation can be shared with other threads the
//! host application may run.

use std::sync::Arc;

/// Called by the pipeline as it processes each page.
///
/// All methods have default no-op implementations so callers only override
/// what they care about.
pub trait RunProgressCallback: Send + Sync {
    /// Called once after the page sequence has been obtained, before any
    /// recognition starts.
    fn on_run_start(&self, total_pages: usize) {
        let _ = total_pages;
    }

    /// Called just before recognition starts for a page.
    fn on_page_start(&self, page: usize, total_pages: usize) {
        let _ = (page, total_pages);
    }

    /// Called when a page's text was recognised successfully.
    fn on_page_done(&self, page: usize, total_pages: usize, text_len: usize) {
        let _ = (page, total_pages, text_len);
    }

    /// Called when a page's recognition failed and its text degraded to the
    /// empty string. The run continues with the next page.
    fn on_page_degraded(&self, page: usize, total_pages: usize, error: String) {
        let _ = (page, total_pages, error);
    }

    /// Called once after every page has been attempted.
    ///
    /// `recognized` counts the pages whose text did not degrade.
    fn on_run_complete(&self, total_pages: usize, recognized: usize) {
        let _ = (total_pages, recognized);
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl RunProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::RunConfig`].
pub type ProgressCallback = Arc<dyn RunProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct TrackingCallback {
        starts: AtomicUsize,
        done: AtomicUsize,
        degraded: AtomicUsize,
        run_total: AtomicUsize,
        run_recognized: AtomicUsize,
    }

    impl RunProgressCallback for TrackingCallback {
        fn on_run_start(&self, total_pages: usize) {
            self.run_total.store(total_pages, Ordering::SeqCst);
        }

        fn on_page_start(&self, _page: usize, _total_pages: usize) {
            self.starts.fetch_add(1, Ordering::SeqCst);
        }

        fn on_page_done(&self, _page: usize, _total_pages: usize, _text_len: usize) {
            self.done.fetch_add(1, Ordering::SeqCst);
        }

        fn on_page_degraded(&self, _page: usize, _total_pages: usize, _error: String) {
            self.degraded.fetch_add(1, Ordering::SeqCst);
        }

        fn on_run_complete(&self, _total_pages: usize, recognized: usize) {
            self.run_recognized.store(recognized, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_run_start(3);
        cb.on_page_start(1, 3);
        cb.on_page_done(1, 3, 42);
        cb.on_page_degraded(2, 3, "engine crashed".to_string());
        cb.on_run_complete(3, 2);
    }

    #[test]
    fn tracking_callback_receives_events() {
        let tracker = TrackingCallback {
            starts: AtomicUsize::new(0),
            done: AtomicUsize::new(0),
            degraded: AtomicUsize::new(0),
            run_total: AtomicUsize::new(0),
            run_recognized: AtomicUsize::new(0),
        };

        tracker.on_run_start(2);
        tracker.on_page_start(1, 2);
        tracker.on_page_done(1, 2, 100);
        tracker.on_page_start(2, 2);
        tracker.on_page_degraded(2, 2, "timeout".to_string());
        tracker.on_run_complete(2, 1);

        assert_eq!(tracker.run_total.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.starts.load(Ordering::SeqCst), 2);
        assert_eq!(tracker.done.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.degraded.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.run_recognized.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: Arc<dyn RunProgressCallback> = Arc::new(NoopProgressCallback);
        cb.on_run_start(10);
        cb.on_page_start(1, 10);
        cb.on_page_done(1, 10, 512);
    }
}
