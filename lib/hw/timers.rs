use stm32g0xx_hal::hal::timer::CountDown;
use stm32g0xx_hal::hal::PwmPin as PwmPinTrait;
use stm32g0xx_hal::rcc::Rcc;
use stm32g0xx_hal::stm32g0::stm32g070::TIM7;
use stm32g0xx_hal::time::U32Ext;
use stm32g0xx_hal::timer::pwm::{Pwm, PwmPin};
use stm32g0xx_hal::timer::{Timer, TimerExt};

use crate::alarm::Duty;
use crate::clock;
use crate::hw::Buzzer;
use crate::TICK_HZ;

/// TIM7 update interrupt at [`TICK_HZ`], the only source of [`clock::tick`].
pub struct TickTimer {
    timer: Timer<TIM7>,
}

impl TickTimer {
    pub fn new(pac_tim: TIM7, rcc: &mut Rcc) -> Self {
        TickTimer {
            timer: pac_tim.timer(rcc),
        }
    }

    /// Starts ticking, the clock stays at zero until then.
    pub fn start(&mut self) {
        self.timer.clear_irq();
        self.timer.listen();
        self.timer.start(TICK_HZ.hz());
    }

    /// Acknowledges the update interrupt and advances the clock by 1 ms.
    pub fn tick(&mut self) {
        self.timer.clear_irq();
        clock::tick();
    }
}

/// Buzzer output, the timer runs at the tone frequency and stays silent
/// until enabled.
pub struct Tone<TIM, CH> {
    _timer: Pwm<TIM>,
    pin: PwmPin<TIM, CH>,
}

impl<TIM, CH> Tone<TIM, CH> {
    pub fn new(timer: Pwm<TIM>, pin: PwmPin<TIM, CH>) -> Self {
        Tone { _timer: timer, pin }
    }
}

impl<TIM, CH> Buzzer for Tone<TIM, CH>
where
    PwmPin<TIM, CH>: PwmPinTrait<Duty = u16>,
{
    fn configure(&mut self, duty: Duty) {
        let max = self.pin.get_max_duty();
        self.pin.set_duty(duty.of(max));
    }

    fn enable(&mut self) {
        self.pin.enable();
    }
}
