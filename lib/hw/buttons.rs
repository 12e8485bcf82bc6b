use stm32g0xx_hal::exti::{Event, ExtiExt};
use stm32g0xx_hal::gpio::gpiob::{PB13, PB14, PB5};
use stm32g0xx_hal::gpio::{DefaultMode, SignalEdge};
use stm32g0xx_hal::stm32::EXTI;

use crate::hw::helper::{ButtonA, ButtonB, ButtonJoystick};
use crate::tally::Line;

/// Active low buttons, pulled up at rest, all on the EXTI4_15 vector.
pub struct Buttons {
    exti: EXTI,
    _a: ButtonA,
    _b: ButtonB,
    _joystick: ButtonJoystick,
}

impl Buttons {
    const LINES: [Line; Line::COUNT] = [Line::A, Line::B, Line::Joystick];

    pub fn new(
        pac_exti: EXTI,
        a: PB5<DefaultMode>,
        b: PB13<DefaultMode>,
        joystick: PB14<DefaultMode>,
    ) -> Self {
        let mut exti = pac_exti;
        let a = a.into_pull_up_input().listen(SignalEdge::Falling, &mut exti);
        let b = b.into_pull_up_input().listen(SignalEdge::Falling, &mut exti);
        let joystick = joystick
            .into_pull_up_input()
            .listen(SignalEdge::Falling, &mut exti);
        Buttons {
            exti,
            _a: a,
            _b: b,
            _joystick: joystick,
        }
    }

    /// Acknowledges and returns one line with a pending falling edge.
    pub fn take_pending(&mut self) -> Option<Line> {
        for &line in Buttons::LINES.iter() {
            if self.exti.is_pending(Buttons::event(line), SignalEdge::Falling) {
                self.exti.unpend(Buttons::event(line));
                return Some(line);
            }
        }
        None
    }

    fn event(line: Line) -> Event {
        match line {
            Line::A => Event::GPIO5,
            Line::B => Event::GPIO13,
            Line::Joystick => Event::GPIO14,
        }
    }
}
