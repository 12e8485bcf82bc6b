use core::fmt::Write;
use embedded_graphics::fonts::{Font6x8, Text};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{Point, Primitive};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::style::{PrimitiveStyle, TextStyle};
use heapless::String;

use crate::error::{Error, Result};
use crate::hw::Screen;
use crate::tally::Frame;

pub struct Display<S> {
    screen: S,
    #[cfg(test)]
    shown: Option<Frame>,
}

impl<S, SCRER> Display<S>
where
    S: Screen<Error = SCRER>,
{
    /// Takes over the screen and blanks it.
    pub fn new(screen: S) -> Result<Self, SCRER> {
        let mut display = Display {
            screen,
            #[cfg(test)]
            shown: None,
        };
        display.init()?;
        Ok(display)
    }

    pub fn show(&mut self, frame: Frame) -> Result<(), SCRER> {
        match frame {
            Frame::Count(count) => self.show_count(count),
            Frame::Halted => self.show_halted(),
        }
    }

    pub fn show_count(&mut self, count: u32) -> Result<(), SCRER> {
        let mut buffer = String::<16>::new();
        write!(&mut buffer, "{}", count).map_err(|_| Error::BufferWrite)?;

        self.begin()?;
        self.draw_text(&buffer, Layout::COUNT_POSITION)?;
        self.screen.flush().map_err(Error::Screen)?;
        #[cfg(test)]
        {
            self.shown = Some(Frame::Count(count));
        }
        Ok(())
    }

    pub fn show_halted(&mut self) -> Result<(), SCRER> {
        self.begin()?;
        self.draw_text(Layout::HALTED_TOP, Layout::HALTED_TOP_POSITION)?;
        self.draw_text(Layout::HALTED_BOTTOM, Layout::HALTED_BOTTOM_POSITION)?;
        self.screen.flush().map_err(Error::Screen)?;
        #[cfg(test)]
        {
            self.shown = Some(Frame::Halted);
        }
        Ok(())
    }

    /// Last frame that made it to the panel.
    #[cfg(test)]
    pub(crate) fn shown(&self) -> Option<Frame> {
        self.shown
    }

    fn begin(&mut self) -> Result<(), SCRER> {
        self.screen.clear().map_err(Error::Screen)?;
        let border = Rectangle::new(Layout::BORDER_TOP_LEFT, Layout::BORDER_BOTTOM_RIGHT)
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1));
        self.screen.draw(&border).map_err(Error::Screen)
    }

    fn draw_text(&mut self, text: &str, position: Point) -> Result<(), SCRER> {
        let text = Text::new(text, position).into_styled(TextStyle::new(Font6x8, BinaryColor::On));
        self.screen.draw(&text).map_err(Error::Screen)
    }

    fn init(&mut self) -> Result<(), SCRER> {
        self.screen.clear().map_err(Error::Screen)?;
        self.screen.flush().map_err(Error::Screen)
    }

    #[cfg(test)]
    pub(crate) fn screen(&self) -> &S {
        &self.screen
    }

    #[cfg(test)]
    pub(crate) fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }
}

struct Layout;

impl Layout {
    const MARGIN: i32 = 3;
    const BORDER_WIDTH: i32 = 122;
    const BORDER_HEIGHT: i32 = 58;

    const BORDER_TOP_LEFT: Point = Point::new(Layout::MARGIN, Layout::MARGIN);
    const BORDER_BOTTOM_RIGHT: Point = Point::new(
        Layout::MARGIN + Layout::BORDER_WIDTH - 1,
        Layout::MARGIN + Layout::BORDER_HEIGHT - 1,
    );

    const COUNT_POSITION: Point = Point::new(53, 30);

    const HALTED_TOP: &'static str = "PROGRAM";
    const HALTED_BOTTOM: &'static str = "STOPPED";
    const HALTED_TOP_POSITION: Point = Point::new(30, 30);
    const HALTED_BOTTOM_POSITION: Point = Point::new(30, 45);
}
