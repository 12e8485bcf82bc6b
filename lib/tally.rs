/// Input lines able to register a press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Line {
    /// Primary button, never pushes the count past the threshold.
    A,
    B,
    Joystick,
}

impl Line {
    pub const COUNT: usize = 3;

    pub fn index(self) -> usize {
        match self {
            Line::A => 0,
            Line::B => 1,
            Line::Joystick => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Line::A => "A",
            Line::B => "B",
            Line::Joystick => "joystick",
        }
    }
}

/// Result of feeding one accepted press into the [`Tally`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Press {
    /// Already stopped, nothing changed.
    Ignored,
    Counted(u32),
    /// This press reached the threshold.
    Stopped(u32),
}

/// What the display has to show next.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    Count(u32),
    Halted,
}

/// Counter state shared between the button interrupt and the refresh loop.
pub struct Tally {
    count: u32,
    threshold: u32,
    stopped: bool,
    dirty: bool,
}

impl Tally {
    pub fn new(threshold: u32) -> Self {
        Tally {
            count: 0,
            threshold,
            stopped: false,
            // Show the initial zero
            dirty: true,
        }
    }

    pub fn press(&mut self, line: Line) -> Press {
        if self.stopped {
            return Press::Ignored;
        }

        // Only the primary line checks the cap before counting, the other
        // two rely on the guard below.
        match line {
            Line::A if self.count >= self.threshold => {}
            _ => self.count += 1,
        }
        self.dirty = true;

        if self.count >= self.threshold {
            self.stopped = true;
            Press::Stopped(self.count)
        } else {
            Press::Counted(self.count)
        }
    }

    /// Returns the frame to render if anything changed since the last call.
    ///
    /// A pending halt is reported on every call and never clears the dirty
    /// flag, so the stop cannot be missed by the refresh loop.
    pub fn take_refresh(&mut self) -> Option<Frame> {
        if !self.dirty {
            return None;
        }
        if self.stopped {
            return Some(Frame::Halted);
        }
        self.dirty = false;
        Some(Frame::Count(self.count))
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[cfg(test)]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_n(tally: &mut Tally, line: Line, n: u32) {
        for _ in 0..n {
            tally.press(line);
        }
    }

    #[test]
    fn initial_zero_is_rendered() {
        let mut tally = Tally::new(20);
        assert_eq!(tally.take_refresh(), Some(Frame::Count(0)));
        assert_eq!(tally.take_refresh(), None);
    }

    #[test]
    fn nineteen_primary_presses_keep_running() {
        let mut tally = Tally::new(20);
        tally.take_refresh();
        press_n(&mut tally, Line::A, 19);
        assert_eq!(tally.count(), 19);
        assert!(!tally.is_stopped());
        assert_eq!(tally.take_refresh(), Some(Frame::Count(19)));
    }

    #[test]
    fn twentieth_press_stops() {
        let mut tally = Tally::new(20);
        press_n(&mut tally, Line::A, 19);
        assert_eq!(tally.press(Line::A), Press::Stopped(20));
        assert!(tally.is_stopped());
        assert_eq!(tally.take_refresh(), Some(Frame::Halted));
    }

    #[test]
    fn secondary_line_hits_the_same_guard() {
        for line in [Line::B, Line::Joystick] {
            let mut tally = Tally::new(20);
            press_n(&mut tally, Line::A, 19);
            assert_eq!(tally.press(line), Press::Stopped(20));
            assert!(tally.is_stopped());
        }
    }

    #[test]
    fn presses_after_stop_change_nothing() {
        let mut tally = Tally::new(20);
        press_n(&mut tally, Line::B, 20);
        for line in [Line::A, Line::B, Line::Joystick] {
            assert_eq!(tally.press(line), Press::Ignored);
        }
        assert_eq!(tally.count(), 20);
        assert!(tally.is_stopped());
    }

    #[test]
    fn count_never_passes_threshold() {
        let mut tally = Tally::new(5);
        let lines = [Line::Joystick, Line::A, Line::B];
        let mut last = 0;
        for i in 0..50 {
            tally.press(lines[i % lines.len()]);
            assert!(tally.count() >= last);
            assert!(tally.count() <= 5);
            last = tally.count();
        }
        assert!(tally.is_stopped());
    }

    #[test]
    fn halt_stays_pending() {
        let mut tally = Tally::new(1);
        tally.take_refresh();
        tally.press(Line::Joystick);
        assert_eq!(tally.take_refresh(), Some(Frame::Halted));
        assert_eq!(tally.take_refresh(), Some(Frame::Halted));
        assert!(tally.is_dirty());
    }

    #[test]
    fn stop_wins_over_pending_count() {
        let mut tally = Tally::new(2);
        tally.press(Line::A);
        // Count 1 never rendered before the stop arrives
        tally.press(Line::B);
        assert_eq!(tally.take_refresh(), Some(Frame::Halted));
    }

    #[test]
    fn line_indices_are_distinct() {
        let lines = [Line::A, Line::B, Line::Joystick];
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(line.index(), i);
        }
        assert_eq!(lines.len(), Line::COUNT);
    }
}
