#![no_main]
#![no_std]

use lib as _;

use lib::alarm::Alarm;
use lib::clock;
use lib::debounce::Debouncer;
use lib::display::Display;
use lib::hw::{
    init_buzzers, init_clock, init_screen, Buttons, HwAlarm, HwScreen, OledError, TickTimer,
};
use lib::input::{on_edge, Edge};
use lib::refresh::{Refresher, Step};
use lib::tally::Tally;
use lib::{DEBOUNCE_MS, DEBOUNCE_SCOPE, REFRESH_PERIOD_MS, THRESHOLD, TONE_DUTY};
use rtic::app;
use stm32g0xx_hal::delay::DelayExt;
use stm32g0xx_hal::gpio::GpioExt;
use stm32g0xx_hal::hal::blocking::delay::DelayMs;
use stm32g0xx_hal::stm32::SYST;
use stm32g0xx_hal::timer::delay::Delay;

#[app(device = stm32g0xx_hal::stm32, peripherals = true)]
const APP: () = {
    struct Resources {
        display: Display<HwScreen>,
        delay: Delay<SYST>,
        tally: Tally,
        debouncer: Debouncer,
        buttons: Buttons,
        alarm: HwAlarm,
        tick_timer: TickTimer,
    }

    #[init]
    fn init(cx: init::Context) -> init::LateResources {
        let core: rtic::export::Peripherals = cx.core;
        let device: stm32g0xx_hal::stm32::Peripherals = cx.device;

        // Clock
        let mut rcc = init_clock(device.RCC);
        let delay = core.SYST.delay(&mut rcc);
        let tick_timer = TickTimer::new(device.TIM7, &mut rcc);

        // GPIO
        let gpioa = device.GPIOA.split(&mut rcc);
        let gpiob = device.GPIOB.split(&mut rcc);

        // Display
        let screen = match init_screen(device.I2C1, gpiob.pb9, gpiob.pb8, &mut rcc) {
            Ok(screen) => screen,
            Err(OledError(_)) => defmt::panic!("SSD1306 did not answer"),
        };
        let display = match Display::new(screen) {
            Ok(display) => display,
            Err(_) => defmt::panic!("Unable to blank the display"),
        };

        // Alarm
        let (first, second) = init_buzzers(
            device.TIM1,
            device.TIM3,
            gpioa.pa8,
            gpioa.pa6,
            &mut rcc,
        );
        let led = gpioa.pa5.into_push_pull_output();
        let alarm = Alarm::new(first, second, led, TONE_DUTY);

        // Buttons
        let buttons = Buttons::new(device.EXTI, gpiob.pb5, gpiob.pb13, gpiob.pb14);

        defmt::info!("Counting up to {=u32}", THRESHOLD);

        init::LateResources {
            display,
            delay,
            tally: Tally::new(THRESHOLD),
            debouncer: Debouncer::new(DEBOUNCE_SCOPE, DEBOUNCE_MS),
            buttons,
            alarm,
            tick_timer,
        }
    }

    #[idle(resources = [display, delay, tally, tick_timer])]
    fn idle(mut cx: idle::Context) -> ! {
        cx.resources.tick_timer.lock(|timer: &mut TickTimer| {
            timer.start();
        });

        let display: &mut Display<HwScreen> = cx.resources.display;
        let delay: &mut Delay<SYST> = cx.resources.delay;
        let mut refresher = Refresher::new();
        loop {
            let frame = cx.resources.tally.lock(|tally: &mut Tally| tally.take_refresh());
            match refresher.step(frame, display) {
                Ok(Step::Halt) => break,
                Ok(_) => {}
                Err(_) => defmt::error!("Display refresh failed"),
            }
            delay.delay_ms(REFRESH_PERIOD_MS);
        }

        defmt::info!("Halted");
        lib::halt()
    }

    #[task(binds = TIM7, priority = 3, resources = [tick_timer])]
    fn tim7(cx: tim7::Context) {
        let timer: &mut TickTimer = cx.resources.tick_timer;

        timer.tick();
    }

    #[task(binds = EXTI4_15, priority = 2, resources = [buttons, debouncer, tally, alarm])]
    fn exti4_15(cx: exti4_15::Context) {
        let buttons: &mut Buttons = cx.resources.buttons;
        let debouncer: &mut Debouncer = cx.resources.debouncer;
        let tally: &mut Tally = cx.resources.tally;
        let alarm: &mut HwAlarm = cx.resources.alarm;

        while let Some(line) = buttons.take_pending() {
            match on_edge(line, clock::now(), debouncer, tally, alarm) {
                Edge::Bounced => defmt::trace!("Bounce on {=str}", line.name()),
                Edge::Ignored => defmt::debug!("Button {=str} ignored, stopped", line.name()),
                Edge::Counted(count) => {
                    defmt::info!("Button {=str} pressed, count {=u32}", line.name(), count)
                }
                Edge::Stopped(count) => {
                    defmt::info!("Button {=str} pressed, count {=u32}", line.name(), count);
                    defmt::warn!("Limit reached, program stopped");
                }
            }
        }
    }
};
