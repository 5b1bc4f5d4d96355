use crate::{Bus, Error, Ft6336u, Reg};

/// Operating mode selected through [`Reg::ModeSwitch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DeviceMode {
  /// Normal touch sensing.
  Working = 0x00,
  /// Diagnostic and calibration mode.
  Factory = 0x40,
}

impl DeviceMode {
  pub const fn into_bits(self) -> u8 {
    self as _
  }
}

impl From<DeviceMode> for u8 {
  fn from(mode: DeviceMode) -> Self {
    mode.into_bits()
  }
}

impl<B: Bus, RST> Ft6336u<B, RST> {
  /// Switch the operating mode. The chip is not read back.
  pub fn set_mode(&mut self, mode: DeviceMode) -> Result<(), Error<B::Error>> {
    #[cfg(feature = "defmt")]
    defmt::debug!("FT6336U: mode {}", mode);
    self.write_register(Reg::ModeSwitch, mode.into())
  }

  /// Put the chip into normal touch sensing.
  pub fn set_mode_working(&mut self) -> Result<(), Error<B::Error>> {
    self.set_mode(DeviceMode::Working)
  }

  /// Put the chip into factory (diagnostic) mode.
  pub fn set_mode_factory(&mut self) -> Result<(), Error<B::Error>> {
    self.set_mode(DeviceMode::Factory)
  }
}
