use std::time::{Duration, Instant};

/// Default settle window for search-as-you-type.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// A debounced search request. Carries the generation it was issued under so
/// results arriving after a newer keystroke can be recognized as stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub term: String,
    generation: u64,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Keystroke debouncer with a request-generation counter.
///
/// Every keystroke bumps the generation; a ticket is only emitted once the
/// term has settled for the full window, and only the latest generation's
/// results should be applied. Clearing the input emits nothing but still
/// bumps the generation, invalidating whatever is in flight.
#[derive(Debug)]
pub struct SearchDebouncer {
    window: Duration,
    generation: u64,
    pending: Option<(String, Instant)>,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW)
    }
}

impl SearchDebouncer {
    pub fn new(window: Duration) -> Self {
        SearchDebouncer {
            window,
            generation: 0,
            pending: None,
        }
    }

    /// Record a keystroke at `now`. Latest keystroke wins.
    pub fn input(&mut self, term: &str, now: Instant) {
        self.generation += 1;
        let trimmed = term.trim();
        if trimmed.is_empty() {
            self.pending = None;
        } else {
            self.pending = Some((trimmed.to_string(), now));
        }
    }

    /// Emit a ticket if the pending term has settled for the full window.
    /// At most one ticket is emitted per settled term.
    pub fn poll(&mut self, now: Instant) -> Option<SearchTicket> {
        let (_, since) = self.pending.as_ref()?;
        if now.duration_since(*since) < self.window {
            return None;
        }
        let (term, _) = self.pending.take()?;
        Some(SearchTicket {
            term,
            generation: self.generation,
        })
    }

    /// Whether results for this ticket are still the latest request.
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_emitted_only_after_window_settles() {
        let base = Instant::now();
        let mut debouncer = SearchDebouncer::default();
        debouncer.input("mat", base);
        assert!(debouncer.poll(base + Duration::from_millis(299)).is_none());
        let ticket = debouncer
            .poll(base + Duration::from_millis(300))
            .expect("settled term should emit");
        assert_eq!(ticket.term, "mat");
        // Emitted once; nothing further without new input.
        assert!(debouncer.poll(base + Duration::from_millis(600)).is_none());
    }

    #[test]
    fn newer_keystroke_restarts_the_window_and_wins() {
        let base = Instant::now();
        let mut debouncer = SearchDebouncer::default();
        debouncer.input("mat", base);
        debouncer.input("matr", base + Duration::from_millis(200));
        // Old deadline passes without a ticket for the superseded term.
        assert!(debouncer.poll(base + Duration::from_millis(350)).is_none());
        let ticket = debouncer
            .poll(base + Duration::from_millis(500))
            .expect("new term settles");
        assert_eq!(ticket.term, "matr");
    }

    #[test]
    fn stale_tickets_are_detected() {
        let base = Instant::now();
        let mut debouncer = SearchDebouncer::default();
        debouncer.input("mat", base);
        let ticket = debouncer.poll(base + Duration::from_millis(300)).unwrap();
        assert!(debouncer.is_current(&ticket));
        // A later keystroke invalidates in-flight results for that ticket.
        debouncer.input("matrix", base + Duration::from_millis(400));
        assert!(!debouncer.is_current(&ticket));
    }

    #[test]
    fn clearing_input_invalidates_without_emitting() {
        let base = Instant::now();
        let mut debouncer = SearchDebouncer::default();
        debouncer.input("mat", base);
        let ticket = debouncer.poll(base + Duration::from_millis(300)).unwrap();
        debouncer.input("", base + Duration::from_millis(350));
        assert!(!debouncer.is_current(&ticket));
        assert!(debouncer.poll(base + Duration::from_secs(5)).is_none());
    }
}
