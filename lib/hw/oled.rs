use display_interface::DisplayError;
use embedded_graphics::drawable::Drawable;
use embedded_graphics::pixelcolor::BinaryColor;
use ssd1306::mode::GraphicsMode;
use ssd1306::prelude::{DisplaySize128x64, I2CInterface};
use ssd1306::{Builder, I2CDIBuilder};
use stm32g0xx_hal::hal::blocking::i2c::Write;

use crate::hw::Screen;

#[derive(Debug)]
pub struct OledError(pub DisplayError);

/// SSD1306 panel in buffered graphics mode.
pub struct OledScreen<I2C> {
    oled: GraphicsMode<I2CInterface<I2C>, DisplaySize128x64>,
}

impl<I2C> OledScreen<I2C>
where
    I2C: Write,
{
    pub fn new(i2c: I2C, address: u8) -> Result<Self, OledError> {
        let interface = I2CDIBuilder::new().with_i2c_addr(address).init(i2c);
        let mut oled: GraphicsMode<_, _> = Builder::new()
            .size(DisplaySize128x64)
            .connect(interface)
            .into();
        oled.init().map_err(OledError)?;

        Ok(OledScreen { oled })
    }
}

impl<I2C> Screen for OledScreen<I2C>
where
    I2C: Write,
{
    type Error = OledError;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.oled.clear();
        Ok(())
    }

    fn draw<D: Drawable<BinaryColor>>(&mut self, drawable: D) -> Result<(), Self::Error> {
        drawable.draw(&mut self.oled).map_err(OledError)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.oled.flush().map_err(OledError)
    }
}
