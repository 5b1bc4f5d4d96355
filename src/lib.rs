#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Blocking, `no_std` driver for the FocalTech FT6336U capacitive touch panel
//! controller.
//!
//! The FT6336U reports up to two simultaneous touch points over I²C at the
//! fixed address `0x38`. This crate covers:
//!
//! - Presence probing and chip identification at construction time
//! - Switching between working and factory operating modes
//! - Reading the point count and the 12-bit coordinates of both points
//! - Raw register access for everything the typed API does not cover
//!
//! The driver is written against the small [`Bus`] capability, implemented for
//! every `embedded-hal` 1.0 I²C bus. Pass `&mut i2c` to keep ownership of the
//! bus on the caller's side.
//!
//! Polling is left to the caller. Wiring the controller's interrupt line to a
//! GPIO and calling [`Ft6336u::points`] after each falling edge avoids
//! needless bus traffic.
//!
//! ```no_run
//! use embedded_hal::i2c::I2c;
//! use ft6336u::Ft6336u;
//!
//! fn example<I2C: I2c>(i2c: &mut I2C) -> Result<(), ft6336u::Error<I2C::Error>> {
//!   let mut touch = Ft6336u::new(i2c)?;
//!   for point in touch.points()?.iter() {
//!     let _ = (point.x, point.y);
//!   }
//!   Ok(())
//! }
//! ```
mod bus;
mod control;
mod event;
mod init;
#[cfg(test)]
mod mock;
mod reg;
mod rw;

#[cfg(test)]
extern crate std;

use embedded_hal::digital::OutputPin;

pub use bus::{AddressSet, Bus};
pub use control::DeviceMode;
pub use event::{Point, PointSlot, Points, MAX_POINTS};
pub use reg::{Reg, CHIP_CODE_FT6336U, I2C_ADDR};

/// Errors that can occur while interacting with the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// Bus transaction failed with the underlying driver error.
  Bus(E),
  /// Nothing acknowledged the controller's address during the presence probe.
  DeviceNotFound,
  /// The identity register reported a chip other than the FT6336U.
  UnsupportedDevice(u8),
  /// A register read asked for a width other than 1 or 2 bytes.
  InvalidWidth(u8),
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Error::Bus(e) => write!(f, "bus error: {e:?}"),
      Error::DeviceNotFound => write!(f, "no device at address {I2C_ADDR:#04x}"),
      Error::UnsupportedDevice(code) => write!(f, "unsupported chip code {code:#04x}"),
      Error::InvalidWidth(width) => write!(f, "unsupported register width {width}"),
    }
  }
}

/// Placeholder for a controller without a reset line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoReset;

/// FT6336U touch panel controller.
///
/// Construction probes the bus, checks the chip identity and puts the chip into
/// working mode. Afterwards the instance only holds the bus, the optional reset
/// line, and a two byte scratch buffer reused by every register read.
///
/// All register access goes through `&mut self`, so one instance never has two
/// transactions in flight. Sharing it between threads needs an external lock.
#[derive(Debug)]
pub struct Ft6336u<B, RST = NoReset> {
  bus: B,
  rst: Option<RST>,
  buf: [u8; 2],
}

impl<B: Bus> Ft6336u<B, NoReset> {
  /// Bring up a controller whose reset line is not connected to the host.
  pub fn new(bus: B) -> Result<Self, Error<B::Error>> {
    Self::from_parts(bus, None)
  }
}

impl<B, RST> Ft6336u<B, RST>
where
  B: Bus,
  RST: OutputPin,
{
  /// Bring up a controller and keep hold of its reset line.
  ///
  /// The pin is never toggled by the driver. Hardware reset sequencing is up to
  /// the caller, see [`Ft6336u::reset_pin_mut`].
  pub fn with_reset(bus: B, rst: RST) -> Result<Self, Error<B::Error>> {
    Self::from_parts(bus, Some(rst))
  }

  /// Borrow the reset line handed over at construction.
  pub fn reset_pin_mut(&mut self) -> Option<&mut RST> {
    self.rst.as_mut()
  }
}

impl<B: Bus, RST> Ft6336u<B, RST> {
  fn from_parts(bus: B, rst: Option<RST>) -> Result<Self, Error<B::Error>> {
    let mut dev = Self { bus, rst, buf: [0; 2] };
    dev.init()?;
    Ok(dev)
  }

  /// Give back the bus and the reset line.
  pub fn release(self) -> (B, Option<RST>) {
    (self.bus, self.rst)
  }
}
