//! Time based debounce for edge interrupts.
//!
//! An edge is accepted only if at least `interval` ms passed since the last
//! accepted edge. With [`Scope::Shared`] all lines share one timestamp, so a
//! press on one button also masks the other buttons for the interval.

use crate::clock::elapsed;
use crate::tally::Line;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Scope {
    Shared,
    PerLine,
}

pub struct Debouncer {
    scope: Scope,
    interval: u32,
    // Starts at boot, edges within the first interval are dropped
    last_accepted: [u32; Line::COUNT],
}

impl Debouncer {
    pub fn new(scope: Scope, interval: u32) -> Self {
        Debouncer {
            scope,
            interval,
            last_accepted: [0; Line::COUNT],
        }
    }

    /// Returns `true` if the edge on `line` at `now` is a genuine press.
    pub fn accept(&mut self, line: Line, now: u32) -> bool {
        let slot = match self.scope {
            Scope::Shared => 0,
            Scope::PerLine => line.index(),
        };
        if elapsed(self.last_accepted[slot], now) < self.interval {
            return false;
        }
        self.last_accepted[slot] = now;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounce_on_same_line_is_dropped() {
        let mut debouncer = Debouncer::new(Scope::Shared, 300);
        assert!(debouncer.accept(Line::A, 1_000));
        assert!(!debouncer.accept(Line::A, 1_010));
        assert!(!debouncer.accept(Line::A, 1_299));
        assert!(debouncer.accept(Line::A, 1_300));
    }

    #[test]
    fn rejected_edge_does_not_restart_interval() {
        let mut debouncer = Debouncer::new(Scope::Shared, 300);
        assert!(debouncer.accept(Line::B, 1_000));
        assert!(!debouncer.accept(Line::B, 1_200));
        assert!(debouncer.accept(Line::B, 1_300));
    }

    #[test]
    fn edges_right_after_boot_are_dropped() {
        let mut debouncer = Debouncer::new(Scope::Shared, 300);
        assert!(!debouncer.accept(Line::A, 120));
        assert!(debouncer.accept(Line::A, 300));
    }

    #[test]
    fn shared_scope_masks_other_lines() {
        let mut debouncer = Debouncer::new(Scope::Shared, 300);
        assert!(debouncer.accept(Line::A, 1_000));
        assert!(!debouncer.accept(Line::B, 1_100));
        assert!(!debouncer.accept(Line::Joystick, 1_250));
        assert!(debouncer.accept(Line::Joystick, 1_300));
    }

    #[test]
    fn per_line_scope_keeps_lines_apart() {
        let mut debouncer = Debouncer::new(Scope::PerLine, 300);
        assert!(debouncer.accept(Line::A, 1_000));
        assert!(debouncer.accept(Line::B, 1_100));
        assert!(debouncer.accept(Line::Joystick, 1_150));
        assert!(!debouncer.accept(Line::A, 1_200));
        assert!(!debouncer.accept(Line::B, 1_350));
        assert!(debouncer.accept(Line::A, 1_300));
    }

    #[test]
    fn works_across_clock_wrap() {
        let mut debouncer = Debouncer::new(Scope::Shared, 300);
        assert!(debouncer.accept(Line::A, u32::MAX - 100));
        assert!(!debouncer.accept(Line::A, 50));
        assert!(debouncer.accept(Line::A, 200));
    }
}
