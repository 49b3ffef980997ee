use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Generation a fetch was started in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Active lifetime of a screen.
///
/// Fetches capture the generation when they start and drop their result if
/// it changed by the time they complete. Ending the lifetime (unmount) bumps
/// the generation. Clones share the counter, so a handle held elsewhere can
/// end the lifetime while a fetch is in flight.
#[derive(Debug, Clone, Default)]
pub struct ScreenLifetime {
    generation: Arc<AtomicU64>,
}

impl ScreenLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Generation {
        Generation(self.generation.load(Ordering::SeqCst))
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.current() == generation
    }

    /// Invalidate every fetch started so far
    pub fn end(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}
