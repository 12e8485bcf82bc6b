use stm32g0xx_hal::gpio::gpioa::{PA5, PA6, PA8};
use stm32g0xx_hal::gpio::gpiob::{PB13, PB14, PB5, PB8, PB9};
use stm32g0xx_hal::gpio::{DefaultMode, Input, OpenDrain, Output, PullUp, PushPull};
use stm32g0xx_hal::i2c::{Config as I2cConfig, I2c, I2cExt};
use stm32g0xx_hal::rcc::{Config, PllConfig, Rcc, RccExt};
use stm32g0xx_hal::stm32g0::stm32g070::{I2C1, RCC, TIM1, TIM3};
use stm32g0xx_hal::time::U32Ext;
use stm32g0xx_hal::timer::pwm::PwmExt;
use stm32g0xx_hal::timer::Channel1;

use crate::alarm::Alarm;
use crate::hw::oled::{OledError, OledScreen};
use crate::hw::timers::Tone;
use crate::{DISPLAY_ADDRESS, I2C_KHZ, TONE_HZ};

pub fn init_clock(pac_rcc: RCC) -> Rcc {
    // ((16 MHz / 4) * 32) / 2 = 64 MHz
    let pll_config = PllConfig::with_hsi(4, 32, 2);
    pac_rcc.freeze(Config::pll().pll_cfg(pll_config))
}

// PB5 - Button A (primary)
pub type ButtonA = PB5<Input<PullUp>>;
// PB13 - Button B
pub type ButtonB = PB13<Input<PullUp>>;
// PB14 - Joystick push
pub type ButtonJoystick = PB14<Input<PullUp>>;
// PB9 - I2C1_SDA
type OledSda = PB9<Output<OpenDrain>>;
// PB8 - I2C1_SCL
type OledScl = PB8<Output<OpenDrain>>;

// PA5 - Alarm LED
pub type AlarmLed = PA5<Output<PushPull>>;
// PA8 - TIM1_CH1 buzzer
pub type BuzzerFirst = Tone<TIM1, Channel1>;
// PA6 - TIM3_CH1 buzzer
pub type BuzzerSecond = Tone<TIM3, Channel1>;

pub type OledI2c = I2c<I2C1, OledSda, OledScl>;
pub type HwScreen = OledScreen<OledI2c>;
pub type HwAlarm = Alarm<BuzzerFirst, BuzzerSecond, AlarmLed>;

pub fn init_screen(
    pac_i2c: I2C1,
    sda: PB9<DefaultMode>,
    scl: PB8<DefaultMode>,
    rcc: &mut Rcc,
) -> Result<HwScreen, OledError> {
    let i2c = pac_i2c.i2c(
        sda.into_open_drain_output(),
        scl.into_open_drain_output(),
        I2cConfig::new(I2C_KHZ.khz()),
        rcc,
    );
    OledScreen::new(i2c, DISPLAY_ADDRESS)
}

pub fn init_buzzers(
    pac_tim1: TIM1,
    pac_tim3: TIM3,
    first: PA8<DefaultMode>,
    second: PA6<DefaultMode>,
    rcc: &mut Rcc,
) -> (BuzzerFirst, BuzzerSecond) {
    let first_pwm = pac_tim1.pwm(TONE_HZ.hz(), rcc);
    let first_pin = first_pwm.bind_pin(first);
    let second_pwm = pac_tim3.pwm(TONE_HZ.hz(), rcc);
    let second_pin = second_pwm.bind_pin(second);
    (
        Tone::new(first_pwm, first_pin),
        Tone::new(second_pwm, second_pin),
    )
}
