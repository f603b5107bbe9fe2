use std::time::{Duration, Instant};

/// Cancellable scheduled filter pass. Each `schedule` replaces whatever was
/// pending, so within one quiet window only the last query ever runs; the
/// egui update loop drives `poll` once per frame.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(Instant, String)>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Queue `query` to fire after the quiet delay, cancelling any earlier
    /// scheduled pass.
    pub fn schedule(&mut self, query: String, now: Instant) {
        self.pending = Some((now + self.delay, query));
    }

    /// Hand out the scheduled query once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((deadline, _)) if now >= *deadline => {
                self.pending.take().map(|(_, query)| query)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn nothing_fires_before_the_deadline() {
        let start = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.schedule("rel".into(), start);

        assert_eq!(d.poll(start), None);
        assert_eq!(d.poll(start + Duration::from_millis(299)), None);
        assert!(d.is_pending());
    }

    #[test]
    fn fires_once_after_the_deadline() {
        let start = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.schedule("rel".into(), start);

        assert_eq!(d.poll(start + DELAY), Some("rel".into()));
        assert!(!d.is_pending());
        assert_eq!(d.poll(start + DELAY * 2), None);
    }

    #[test]
    fn rapid_keystrokes_coalesce_to_the_last_query() {
        let start = Instant::now();
        let mut d = Debouncer::new(DELAY);

        // three keystrokes 100ms apart, each rescheduling
        d.schedule("r".into(), start);
        d.schedule("re".into(), start + Duration::from_millis(100));
        d.schedule("rel".into(), start + Duration::from_millis(200));

        // the first two deadlines pass without firing
        assert_eq!(d.poll(start + Duration::from_millis(350)), None);
        assert_eq!(
            d.poll(start + Duration::from_millis(500)),
            Some("rel".into())
        );
    }

    #[test]
    fn cancel_drops_the_pending_pass() {
        let start = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.schedule("rel".into(), start);
        d.cancel();
        assert_eq!(d.poll(start + DELAY), None);
    }
}
