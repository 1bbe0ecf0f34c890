//! Visibility of the floating back-to-top control.
//!
//! Visibility is a pure function of the vertical scroll offset. The control
//! shows once the page has scrolled strictly past
//! [`VISIBILITY_THRESHOLD_PX`]. Scroll events arrive in bursts, so the
//! frontend runs them through a [`ScrollThrottle`] and only touches the DOM
//! when [`BackToTop::update`] reports a change.

use tracing::debug;

/// Offset (CSS px) the page must exceed before the control shows.
pub const VISIBILITY_THRESHOLD_PX: f64 = 450.0;

/// Minimum spacing between two visibility evaluations.
pub const DEFAULT_THROTTLE_MS: f64 = 100.0;

/// Whether the control should be visible at `scroll_y`.
pub fn is_visible_at(scroll_y: f64) -> bool {
    scroll_y > VISIBILITY_THRESHOLD_PX
}

/// Last applied visibility of the control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackToTop {
    visible: bool,
}

impl BackToTop {
    /// Hidden, as on a freshly loaded page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-evaluate at `scroll_y`. Returns the new visibility only when it
    /// differs from the last one.
    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        let visible = is_visible_at(scroll_y);
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        debug!(scroll_y, visible, "back-to-top visibility changed");
        Some(visible)
    }

    /// Current visibility.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// What to do with an incoming scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrottleDecision {
    /// Evaluate now.
    RunNow,
    /// Evaluate once after `delay_ms`, then call
    /// [`ScrollThrottle::fire_trailing`].
    ScheduleTrailing {
        /// Delay before the trailing evaluation.
        delay_ms: f64,
    },
    /// A trailing evaluation is already pending.
    Skip,
}

/// Leading-edge throttle with one trailing evaluation, so the resting scroll
/// position is always evaluated last.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollThrottle {
    interval_ms: f64,
    last_run_ms: Option<f64>,
    trailing_pending: bool,
}

impl Default for ScrollThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_MS)
    }
}

impl ScrollThrottle {
    /// Throttle with the given minimum spacing. Negative intervals clamp to 0.
    pub fn new(interval_ms: f64) -> Self {
        Self { interval_ms: interval_ms.max(0.0), last_run_ms: None, trailing_pending: false }
    }

    /// Decide what to do with a scroll event observed at `now_ms`.
    pub fn poll(&mut self, now_ms: f64) -> ThrottleDecision {
        // A clock that stepped backwards starts a fresh window.
        let elapsed = self
            .last_run_ms
            .map(|last| now_ms - last)
            .filter(|elapsed| *elapsed >= 0.0);
        match elapsed {
            Some(elapsed) if elapsed < self.interval_ms => {
                if self.trailing_pending {
                    ThrottleDecision::Skip
                } else {
                    self.trailing_pending = true;
                    ThrottleDecision::ScheduleTrailing { delay_ms: self.interval_ms - elapsed }
                }
            },
            _ => {
                self.last_run_ms = Some(now_ms);
                ThrottleDecision::RunNow
            },
        }
    }

    /// The scheduled trailing evaluation ran at `now_ms`.
    pub fn fire_trailing(&mut self, now_ms: f64) {
        self.trailing_pending = false;
        self.last_run_ms = Some(now_ms);
    }

    /// Whether a trailing evaluation is scheduled.
    pub fn has_pending_trailing(&self) -> bool {
        self.trailing_pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_visible_at(0.0));
        assert!(!is_visible_at(450.0));
        assert!(is_visible_at(450.5));
    }

    #[test]
    fn offset_sequence_maps_to_visibility_sequence() {
        let visibility: Vec<bool> = [0.0, 460.0, 440.0].into_iter().map(is_visible_at).collect();
        assert_eq!(visibility, vec![false, true, false]);
    }

    #[test]
    fn update_reports_only_changes() {
        let mut control = BackToTop::new();
        assert_eq!(control.update(0.0), None);
        assert_eq!(control.update(460.0), Some(true));
        assert_eq!(control.update(900.0), None);
        assert_eq!(control.update(440.0), Some(false));
        assert!(!control.is_visible());
    }

    #[test]
    fn first_event_runs_immediately() {
        let mut throttle = ScrollThrottle::new(100.0);
        assert_eq!(throttle.poll(5.0), ThrottleDecision::RunNow);
    }

    #[test]
    fn burst_schedules_a_single_trailing_run() {
        let mut throttle = ScrollThrottle::new(100.0);
        assert_eq!(throttle.poll(0.0), ThrottleDecision::RunNow);
        assert_eq!(throttle.poll(30.0), ThrottleDecision::ScheduleTrailing { delay_ms: 70.0 });
        assert!(throttle.has_pending_trailing());
        assert_eq!(throttle.poll(60.0), ThrottleDecision::Skip);

        throttle.fire_trailing(100.0);
        assert!(!throttle.has_pending_trailing());
        assert_eq!(throttle.poll(150.0), ThrottleDecision::ScheduleTrailing { delay_ms: 50.0 });
        assert_eq!(throttle.poll(250.0), ThrottleDecision::RunNow);
    }

    #[test]
    fn clock_stepping_backwards_runs_immediately() {
        let mut throttle = ScrollThrottle::new(100.0);
        let start = 10_000_000.0;
        assert_eq!(throttle.poll(start), ThrottleDecision::RunNow);

        let rewound = start - 3_600_000.0;
        assert_eq!(throttle.poll(rewound), ThrottleDecision::RunNow);
        assert!(!throttle.has_pending_trailing());
        assert_eq!(throttle.poll(rewound + 5_000.0), ThrottleDecision::RunNow);
        assert_eq!(
            throttle.poll(rewound + 5_040.0),
            ThrottleDecision::ScheduleTrailing { delay_ms: 60.0 }
        );
    }

    #[test]
    fn zero_interval_never_defers() {
        let mut throttle = ScrollThrottle::new(-5.0);
        assert_eq!(throttle.poll(1.0), ThrottleDecision::RunNow);
        assert_eq!(throttle.poll(1.0), ThrottleDecision::RunNow);
    }
}
