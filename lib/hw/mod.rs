use embedded_graphics::drawable::Drawable;
use embedded_graphics::pixelcolor::BinaryColor;

use crate::alarm::Duty;

#[cfg(target_os = "none")]
mod buttons;
#[cfg(target_os = "none")]
mod helper;
#[cfg(target_os = "none")]
mod oled;
#[cfg(target_os = "none")]
mod timers;

#[cfg(target_os = "none")]
pub use buttons::Buttons;
#[cfg(target_os = "none")]
pub use helper::*;
#[cfg(target_os = "none")]
pub use oled::OledError;
#[cfg(target_os = "none")]
pub use timers::{TickTimer, Tone};

/// Monochrome screen with an off-screen frame buffer.
pub trait Screen {
    type Error;
    fn clear(&mut self) -> Result<(), Self::Error>;
    fn draw<D: Drawable<BinaryColor>>(&mut self, drawable: D) -> Result<(), Self::Error>;
    /// Pushes the frame buffer to the panel.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// PWM driven tone output.
pub trait Buzzer {
    fn configure(&mut self, duty: Duty);
    fn enable(&mut self);
}
