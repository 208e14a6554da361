//! Main.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! Tilt cursor demo for the BBC micro:bit v2.
//!
//! Tilting the board moves a cursor over an external 96x64 OLED canvas, leaving a trail of
//! pixels behind it. Pressing button A wipes the canvas. Meanwhile TIMER1 ticks every 1.6 s,
//! rotating the hex digits 0..F across the 5x5 LED matrix and arming a sample flag on the
//! '5', 'A' and 'F' ticks.
//!
//! The board-agnostic logic lives in the `tilt-core` crate. This file owns the interrupt
//! vectors and the peripherals; `peripherals.rs` adapts them to the core's traits.
//!
//! Wiring: SSD1306 128x64 I2C OLED on the edge connector (P19 = SCL, P20 = SDA, 3V, GND).

#![no_main]
#![no_std]

mod glyphs;
mod peripherals;

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};

use core::sync::atomic::AtomicBool;

use cortex_m::asm;
use cortex_m_rt::entry;
use microbit::{
    board::Board,
    display::nonblocking::Display,
    hal::{
        Timer, gpiote,
        pac::{Interrupt, NVIC, TIMER0, TIMER1, interrupt},
        timer::Periodic,
        twim,
    },
    pac::twim0::frequency::FREQUENCY_A,
};

use critical_section_lock_mut::LockMut;
use lsm303agr::{AccelMode, AccelOutputDataRate, Lsm303agr};
use ssd1306::{I2CDisplayInterface, Ssd1306, prelude::*};
use tilt_core::{ProcessState, boot, clear_on_edge, digit_cycler};

use peripherals::{Accelerometer, ButtonEdge, HexDigit, Nvic, Oled, SharedOled, TickAck};

/// TIMER1 counts at 1 MHz
const TICKS_PER_SECOND: u32 = 1_000_000;
/// Digit period: 1.6 s
const TICK_PERIOD: u32 = TICKS_PER_SECOND * 8 / 5;

/// State shared between the interrupt handlers and the main loop
static STATE: ProcessState = ProcessState::new();
/// Never raised on hardware; the cursor loop runs forever
static STOP: AtomicBool = AtomicBool::new(false);

/// Global Mutable peripherals: used inside interrupt handlers
static GPIOTE_PERIPHERAL: LockMut<gpiote::Gpiote> = LockMut::new();
static TICK_TIMER: LockMut<Timer<TIMER1, Periodic>> = LockMut::new();
static LED_MATRIX: LockMut<Display<TIMER0>> = LockMut::new();
static OLED: LockMut<Oled> = LockMut::new();

/// TIMER1 Interrupt handler
///
/// Advances the hex digit on the LED matrix and arms the sample flag.
#[interrupt]
fn TIMER1() {
    TICK_TIMER.with_lock(|timer| {
        let tick = digit_cycler::on_tick(&STATE, &mut TickAck(timer), &mut HexDigit);
        if tick.armed {
            rprintln!("sample armed on '{}'", tick.symbol as char);
        }
    });
}

/// GPIOTE Interrupt handler
///
/// Channel 0 watches button A for a high-to-low edge and wipes the OLED canvas.
#[interrupt]
fn GPIOTE() {
    GPIOTE_PERIPHERAL.with_lock(|gpiote| {
        let mut edge = ButtonEdge(gpiote.channel0());
        if let Err(err) = clear_on_edge::on_edge(&mut edge, &mut SharedOled) {
            rprintln!("clear failed: {:?}", err);
        }
    });
}

/// TIMER0 Interrupt handler: LED matrix refresh
#[interrupt]
fn TIMER0() {
    LED_MATRIX.with_lock(|display| {
        display.handle_display_event();
    });
}

/// Entry point
///
/// TIMER0 refreshes the LED matrix, TIMER1 drives the digit, TIMER2 serves as the delay source
/// for the accelerometer setup. The accelerometer sits on the internal bus (TWIM0), the OLED on
/// the external one (TWIM1).
#[entry]
fn main() -> ! {
    rtt_init_print!();

    let board = Board::take().unwrap();

    // LED matrix, refreshed from TIMER0
    let display = Display::new(board.TIMER0, board.display_pins);
    LED_MATRIX.init(display);
    unsafe { NVIC::unmask(Interrupt::TIMER0) };

    // button A edge on GPIOTE channel 0
    let a_btn = board.buttons.button_a.into_floating_input();
    let gpiote = gpiote::Gpiote::new(board.GPIOTE);
    let channel0 = gpiote.channel0();
    channel0
        .input_pin(&a_btn.degrade())
        .hi_to_lo()
        .enable_interrupt();
    channel0.reset_events();
    GPIOTE_PERIPHERAL.init(gpiote);

    // free-running digit timer; NVIC stays masked until boot enables it
    let mut tick_timer = Timer::periodic(board.TIMER1);
    tick_timer.enable_interrupt();
    tick_timer.reset_event();
    tick_timer.start(TICK_PERIOD);
    TICK_TIMER.init(tick_timer);

    // accelerometer in 8-bit low-power mode
    let mut delay = Timer::new(board.TIMER2);
    let i2c = twim::Twim::new(board.TWIM0, board.i2c_internal.into(), FREQUENCY_A::K100);
    let mut lsm = Lsm303agr::new_with_i2c(i2c);
    lsm.init().unwrap();
    lsm.set_accel_mode_and_odr(&mut delay, AccelMode::LowPower, AccelOutputDataRate::Hz50)
        .unwrap();
    let mut sensor = Accelerometer(lsm);

    // Board does not hand out TWIM1; nothing else in this firmware uses it.
    let twim1 = unsafe { microbit::pac::Peripherals::steal() }.TWIM1;
    let i2c = twim::Twim::new(twim1, board.i2c_external.into(), FREQUENCY_A::K400);
    let mut oled = Ssd1306::new(
        I2CDisplayInterface::new(i2c),
        DisplaySize128x64,
        DisplayRotation::Rotate0,
    )
    .into_buffered_graphics_mode();
    oled.init().unwrap();
    OLED.init(oled);

    let mut tracker = boot(&STATE, &mut sensor, &mut SharedOled, &mut Nvic).unwrap();

    if let Some(offset) = STATE.calibration() {
        rprintln!("offsets: x={} y={} z={}", offset.x, offset.y, offset.z);
    }
    let baseline = tracker.baseline();
    rprintln!("baseline: x={} y={}", baseline.x, baseline.y);

    tracker.run(&STATE, &mut sensor, &mut SharedOled, &STOP, |err| {
        rprintln!("cursor: {:?}", err);
    });

    loop {
        asm::wfi();
    }
}
