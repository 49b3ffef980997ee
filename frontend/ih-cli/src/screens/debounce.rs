use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Quiet period before typed search text is applied
pub const SEARCH_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Coalesces rapid search edits.
///
/// Each edit calls `settle()`; only the edit that sees no newer one during the
/// quiet period gets `true` and should trigger the fetch. Clones share state,
/// so every keystroke handler can hold its own handle.
#[derive(Debug, Clone)]
pub struct SearchDebounce {
    latest: Arc<AtomicU64>,
    quiet: Duration,
}

impl Default for SearchDebounce {
    fn default() -> Self {
        Self::new(SEARCH_QUIET_PERIOD)
    }
}

impl SearchDebounce {
    pub fn new(quiet: Duration) -> Self {
        Self {
            latest: Arc::new(AtomicU64::new(0)),
            quiet,
        }
    }

    /// Register an edit and wait out the quiet period. True if this is still
    /// the latest edit afterwards.
    pub async fn settle(&self) -> bool {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.quiet).await;
        self.latest.load(Ordering::SeqCst) == ticket
    }
}
