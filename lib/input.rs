//! Button interrupt path: debounce, count, and fire the alarm on the stop.

use core::convert::Infallible;
use embedded_hal::digital::v2::OutputPin;

use crate::alarm::Alarm;
use crate::debounce::Debouncer;
use crate::hw::Buzzer;
use crate::tally::{Line, Press, Tally};

/// Outcome of a single falling edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Edge {
    Bounced,
    /// The tally is already stopped, the edge is not looked at.
    Ignored,
    Counted(u32),
    Stopped(u32),
}

/// Handles a falling edge on `line` seen at `now` ms. Bounded and non
/// blocking, meant to run inside the interrupt handler.
pub fn on_edge<B1, B2, L>(
    line: Line,
    now: u32,
    debouncer: &mut Debouncer,
    tally: &mut Tally,
    alarm: &mut Alarm<B1, B2, L>,
) -> Edge
where
    B1: Buzzer,
    B2: Buzzer,
    L: OutputPin<Error = Infallible>,
{
    if tally.is_stopped() {
        return Edge::Ignored;
    }
    if !debouncer.accept(line, now) {
        return Edge::Bounced;
    }

    match tally.press(line) {
        Press::Ignored => Edge::Ignored,
        Press::Counted(count) => Edge::Counted(count),
        Press::Stopped(count) => {
            alarm.trigger();
            Edge::Stopped(count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarm::mock::{alarm, MockAlarm};
    use crate::debounce::Scope;

    struct Rig {
        debouncer: Debouncer,
        tally: Tally,
        alarm: MockAlarm,
        now: u32,
    }

    impl Rig {
        fn new(scope: Scope) -> Self {
            Rig {
                debouncer: Debouncer::new(scope, 300),
                tally: Tally::new(20),
                alarm: alarm(),
                now: 1_000,
            }
        }

        fn edge_after(&mut self, delay: u32, line: Line) -> Edge {
            self.now += delay;
            on_edge(
                line,
                self.now,
                &mut self.debouncer,
                &mut self.tally,
                &mut self.alarm,
            )
        }
    }

    #[test]
    fn bounce_changes_nothing() {
        let mut rig = Rig::new(Scope::Shared);
        assert_eq!(rig.edge_after(0, Line::A), Edge::Counted(1));
        rig.tally.take_refresh();

        assert_eq!(rig.edge_after(12, Line::A), Edge::Bounced);
        assert_eq!(rig.edge_after(12, Line::B), Edge::Bounced);
        assert_eq!(rig.tally.count(), 1);
        assert!(!rig.tally.is_dirty());
        assert!(!rig.tally.is_stopped());
        assert!(!rig.alarm.is_active());
        assert_eq!(rig.tally.take_refresh(), None);
    }

    #[test]
    fn edges_after_stop_skip_debounce() {
        let mut rig = Rig::new(Scope::Shared);
        rig.tally = Tally::new(1);
        assert_eq!(rig.edge_after(0, Line::Joystick), Edge::Stopped(1));

        // Would bounce if it were still looked at
        assert_eq!(rig.edge_after(10, Line::Joystick), Edge::Ignored);
        // The ignored edge did not move the debounce reference
        assert!(rig.debouncer.accept(Line::A, 1_300));
    }

    #[test]
    fn spaced_presses_all_count() {
        let mut rig = Rig::new(Scope::Shared);
        assert_eq!(rig.edge_after(0, Line::A), Edge::Counted(1));
        assert_eq!(rig.edge_after(300, Line::B), Edge::Counted(2));
        assert_eq!(rig.edge_after(450, Line::Joystick), Edge::Counted(3));
    }

    #[test]
    fn shared_debounce_masks_second_button() {
        let mut rig = Rig::new(Scope::Shared);
        rig.edge_after(0, Line::A);
        assert_eq!(rig.edge_after(100, Line::B), Edge::Bounced);

        let mut rig = Rig::new(Scope::PerLine);
        rig.edge_after(0, Line::A);
        assert_eq!(rig.edge_after(100, Line::B), Edge::Counted(2));
    }

    #[test]
    fn threshold_fires_alarm_once() {
        let mut rig = Rig::new(Scope::Shared);
        for n in 1..20 {
            assert_eq!(rig.edge_after(300, Line::A), Edge::Counted(n));
        }
        assert!(!rig.alarm.is_active());

        assert_eq!(rig.edge_after(300, Line::B), Edge::Stopped(20));
        assert!(rig.alarm.is_active());

        for line in [Line::A, Line::B, Line::Joystick] {
            assert_eq!(rig.edge_after(500, line), Edge::Ignored);
        }
        assert_eq!(rig.tally.count(), 20);
        assert!(rig.tally.is_stopped());
        assert!(!rig.alarm.trigger());
    }
}
