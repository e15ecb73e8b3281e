use std::time::Instant;

/// Time source for the controls auto-hide deadline.
///
/// Injected so the 3-second countdown can be exercised against a simulated
/// clock in tests; production code uses [`SystemClock`].
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The real monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
