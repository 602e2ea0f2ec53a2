/// What the caller should do with an incoming event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    /// Handle the event now.
    Run,
    /// Too soon; schedule one trailing run after this many milliseconds.
    Defer(u32),
    /// A trailing run is already scheduled and will cover this event.
    Pending,
}

/// Time-based rate limiter for high-frequency browser events.
///
/// Lets the first event through, then at most one event per interval. Events
/// that arrive inside the interval are coalesced into a single trailing run so
/// the last position is never lost.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    last_run: Option<f64>,
    trailing: bool,
}

impl Throttle {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: f64::from(interval_ms),
            last_run: None,
            trailing: false,
        }
    }

    fn elapsed(&self, now_ms: f64) -> Option<f64> {
        self.last_run.map(|last| now_ms - last)
    }

    pub fn poll(&mut self, now_ms: f64) -> Gate {
        match self.elapsed(now_ms) {
            Some(elapsed) if elapsed < self.interval_ms => {
                if self.trailing {
                    Gate::Pending
                } else {
                    self.trailing = true;
                    let wait = (self.interval_ms - elapsed).max(0.0).ceil();
                    Gate::Defer(wait as u32)
                }
            }
            _ => {
                self.last_run = Some(now_ms);
                Gate::Run
            }
        }
    }

    /// Records that the scheduled trailing run happened.
    pub fn complete_trailing(&mut self, now_ms: f64) {
        self.trailing = false;
        self.last_run = Some(now_ms);
    }

}

/// A throttled stream of values where only the newest one matters, such as
/// pointer positions.
#[derive(Debug, Clone)]
pub struct Sampled<T> {
    throttle: Throttle,
    latest: Option<T>,
}

impl<T: Copy> Sampled<T> {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            throttle: Throttle::new(interval_ms),
            latest: None,
        }
    }

    /// Records `value` as the newest sample. On `Gate::Run` the caller applies
    /// it right away; on `Gate::Defer` it schedules `flush`.
    pub fn push(&mut self, now_ms: f64, value: T) -> Gate {
        self.latest = Some(value);
        self.throttle.poll(now_ms)
    }

    /// Ends the trailing wait and hands back the newest sample.
    pub fn flush(&mut self, now_ms: f64) -> Option<T> {
        self.throttle.complete_trailing(now_ms);
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_event_runs_immediately() {
        let mut throttle = Throttle::new(50);
        assert_eq!(throttle.poll(1000.0), Gate::Run);
    }

    #[test]
    fn burst_is_coalesced_into_one_trailing_run() {
        let mut throttle = Throttle::new(50);
        assert_eq!(throttle.poll(0.0), Gate::Run);
        assert_eq!(throttle.poll(10.0), Gate::Defer(40));
        assert_eq!(throttle.poll(20.0), Gate::Pending);
        assert_eq!(throttle.poll(49.0), Gate::Pending);

        throttle.complete_trailing(50.0);
        // the interval restarts from the trailing run
        assert_eq!(throttle.poll(60.0), Gate::Defer(40));
    }

    #[test]
    fn spaced_events_all_run() {
        let mut throttle = Throttle::new(50);
        for step in 0..5 {
            assert_eq!(throttle.poll(f64::from(step) * 50.0), Gate::Run);
        }
    }

    #[test]
    fn fractional_wait_rounds_up() {
        let mut throttle = Throttle::new(50);
        throttle.poll(0.0);
        assert_eq!(throttle.poll(10.4), Gate::Defer(40));
    }

    #[test]
    fn sampled_burst_settles_on_last_value() {
        let mut pointer = Sampled::new(32);
        assert_eq!(pointer.push(0.0, (10.0, 10.0)), Gate::Run);
        assert_eq!(pointer.push(10.0, (20.0, 15.0)), Gate::Defer(22));
        assert_eq!(pointer.push(20.0, (30.0, 25.0)), Gate::Pending);

        assert_eq!(pointer.flush(32.0), Some((30.0, 25.0)));
        assert_eq!(pointer.push(70.0, (40.0, 40.0)), Gate::Run);
    }

    #[test]
    fn sampled_flush_without_samples_is_empty() {
        let mut pointer: Sampled<(f64, f64)> = Sampled::new(32);
        assert_eq!(pointer.flush(0.0), None);
    }
}
