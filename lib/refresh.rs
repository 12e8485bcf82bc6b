//! Cooperative display refresh.
//!
//! The loop polls the [`Tally`](crate::tally::Tally) for a pending frame,
//! renders it and sleeps. A count that failed to render is kept and drawn
//! on the next quiet poll. Rendering the halted message is terminal: the
//! controller never draws again afterwards.

use crate::display::Display;
use crate::error::Result;
use crate::hw::Screen;
use crate::tally::Frame;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    Halted,
}

/// What the loop should do after a poll.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Nothing to draw.
    Idle,
    Redrawn,
    /// Halted message is on the screen, leave the loop.
    Halt,
}

pub struct Refresher {
    state: State,
    // Frame taken from the tally whose render failed
    unrendered: Option<Frame>,
}

impl Refresher {
    pub fn new() -> Self {
        Refresher {
            state: State::Running,
            unrendered: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> State {
        self.state
    }

    pub fn step<S, SCRER>(
        &mut self,
        frame: Option<Frame>,
        display: &mut Display<S>,
    ) -> Result<Step, SCRER>
    where
        S: Screen<Error = SCRER>,
    {
        if self.state == State::Halted {
            return Ok(Step::Halt);
        }

        // A newer frame supersedes the one that failed
        match frame.or_else(|| self.unrendered.take()) {
            None => Ok(Step::Idle),
            Some(Frame::Count(count)) => {
                if let Err(err) = display.show_count(count) {
                    self.unrendered = Some(Frame::Count(count));
                    return Err(err);
                }
                self.unrendered = None;
                Ok(Step::Redrawn)
            }
            Some(Frame::Halted) => {
                // Stay running on failure, the pending halt is polled again
                display.show_halted()?;
                self.state = State::Halted;
                Ok(Step::Halt)
            }
        }
    }
}

impl Default for Refresher {
    fn default() -> Self {
        Refresher::new()
    }
}
