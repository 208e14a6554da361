//! Peripherals.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! micro:bit side of the collaborator traits
//!
//! The bitmap and digit displays are shared with interrupt handlers, so
//! their adapters are zero-sized handles that take the `LockMut` statics
//! in `main.rs` for the duration of each call.

use embedded_graphics::{
    mono_font::{MonoTextStyleBuilder, ascii::FONT_6X10},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use embedded_hal::i2c::I2c;
use lsm303agr::{Lsm303agr, interface::I2cInterface, mode::MagOneShot};
use microbit::{
    display::nonblocking::BitImage,
    hal::{
        Timer,
        gpiote::GpioteChannel,
        pac::{Interrupt, NVIC, TIMER1, TWIM1},
        timer::Periodic,
        twim::Twim,
    },
};
use ssd1306::{Ssd1306, mode::BufferedGraphicsMode, prelude::*};
use tilt_core::{
    AxisSample,
    traits::{
        Acknowledge, AxisSensor, BitmapDisplay, Color, DigitDisplay, InterruptController,
        InterruptSource, PendingSource,
    },
};

use crate::{LED_MATRIX, OLED, glyphs};

/// External 128x64 OLED on the edge connector I2C pins
pub type Oled =
    Ssd1306<I2CInterface<Twim<TWIM1>>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// LSM303AGR accelerometer reporting 8-bit counts
///
/// Expects low-power mode, where one count is 16 mg at +/-2 g.
pub struct Accelerometer<I2C>(pub Lsm303agr<I2cInterface<I2C>, MagOneShot>);

fn saturate(count: i16) -> i8 {
    count.clamp(i8::MIN.into(), i8::MAX.into()) as i8
}

impl<I2C: I2c> AxisSensor for Accelerometer<I2C> {
    type Error = lsm303agr::Error<I2C::Error>;

    fn read(&mut self) -> Result<AxisSample, Self::Error> {
        let accel = self.0.acceleration()?;
        Ok(AxisSample::new(
            saturate(accel.x_unscaled()),
            saturate(accel.y_unscaled()),
            saturate(accel.z_unscaled()),
        ))
    }
}

/// The 5x5 LED matrix as a one-position hex digit
pub struct HexDigit;

impl DigitDisplay for HexDigit {
    fn set_symbol(&mut self, symbol: u8, _position: u8) {
        let image = BitImage::new(&glyphs::glyph(symbol));
        LED_MATRIX.with_lock(|display| display.show(&image));
    }
}

/// The OLED failed to accept a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OledError;

/// Handle to the shared OLED
///
/// `clear` only rewrites the framebuffer so it is cheap enough for the
/// edge interrupt; the next pixel or string written from the main loop
/// pushes it out.
///
/// The flush runs inside the lock, so interrupts stay masked for the I2C
/// transfer: a few hundred microseconds for one dirty pixel, about 25 ms
/// for the whole panel after a clear. The digit timer and the button edge
/// are delayed by that much, not lost.
pub struct SharedOled;

fn binary(color: Color) -> BinaryColor {
    match color {
        Color::Black => BinaryColor::Off,
        Color::White => BinaryColor::On,
    }
}

impl BitmapDisplay for SharedOled {
    type Error = OledError;

    fn clear(&mut self, color: Color) -> Result<(), OledError> {
        let mut result = Ok(());
        OLED.with_lock(|oled| {
            result = DrawTarget::clear(oled, binary(color)).map_err(|_| OledError);
        });
        result
    }

    fn put_pixel(&mut self, x: i16, y: i16, color: Color) -> Result<(), OledError> {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return Ok(());
        };
        let mut result = Ok(());
        OLED.with_lock(|oled| {
            oled.set_pixel(x, y, color == Color::White);
            result = oled.flush().map_err(|_| OledError);
        });
        result
    }

    fn put_string(
        &mut self,
        x: i16,
        y: i16,
        text: &str,
        fg: Color,
        bg: Color,
    ) -> Result<(), OledError> {
        let style = MonoTextStyleBuilder::new()
            .font(&FONT_6X10)
            .text_color(binary(fg))
            .background_color(binary(bg))
            .build();
        let origin = Point::new(x.into(), y.into());

        let mut result = Ok(());
        OLED.with_lock(|oled| {
            result = Text::with_baseline(text, origin, style, Baseline::Top)
                .draw(oled)
                .and_then(|_| oled.flush())
                .map_err(|_| OledError);
        });
        result
    }
}

/// Compare event of the digit timer
pub struct TickAck<'a>(pub &'a mut Timer<TIMER1, Periodic>);

impl Acknowledge for TickAck<'_> {
    fn acknowledge(&mut self) {
        self.0.reset_event();
    }
}

/// GPIOTE channel watching the clear button
pub struct ButtonEdge<'a>(pub GpioteChannel<'a>);

impl Acknowledge for ButtonEdge<'_> {
    fn acknowledge(&mut self) {
        self.0.reset_events();
    }
}

impl PendingSource for ButtonEdge<'_> {
    fn is_pending(&self) -> bool {
        self.0.is_event_triggered()
    }
}

pub struct Nvic;

impl InterruptController for Nvic {
    fn enable(&mut self, source: InterruptSource) {
        let irq = match source {
            InterruptSource::PeriodicTimer => Interrupt::TIMER1,
            InterruptSource::ButtonEdge => Interrupt::GPIOTE,
        };
        unsafe { NVIC::unmask(irq) };
        NVIC::unpend(irq);
    }
}
