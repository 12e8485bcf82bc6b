use core::convert::Infallible;
use embedded_hal::digital::v2::OutputPin;

use crate::hw::Buzzer;

/// Duty cycle as a fraction of the PWM period.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Duty {
    num: u16,
    den: u16,
}

impl Duty {
    pub const fn new(num: u16, den: u16) -> Self {
        Duty { num, den }
    }

    /// Compare value for a timer whose full period is `max`.
    pub fn of(self, max: u16) -> u16 {
        (max as u32 * self.num as u32 / self.den as u32) as u16
    }
}

/// One shot audible and visual alert.
pub struct Alarm<B1, B2, L> {
    buzzers: (B1, B2),
    led: L,
    duty: Duty,
    active: bool,
}

impl<B1, B2, L> Alarm<B1, B2, L>
where
    B1: Buzzer,
    B2: Buzzer,
    L: OutputPin<Error = Infallible>,
{
    pub fn new(first: B1, second: B2, led: L, duty: Duty) -> Self {
        Alarm {
            buzzers: (first, second),
            led,
            duty,
            active: false,
        }
    }

    /// Starts both buzzers and lights the LED. Only the first call has an
    /// effect, it returns `true`.
    pub fn trigger(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;

        self.buzzers.0.configure(self.duty);
        self.buzzers.0.enable();
        self.buzzers.1.configure(self.duty);
        self.buzzers.1.enable();
        self.led.set_high().unwrap_or_else(|never| match never {});
        true
    }

    #[cfg(test)]
    pub(crate) fn is_active(&self) -> bool {
        self.active
    }
}
