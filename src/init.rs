use crate::{Bus, Error, Ft6336u, Reg, CHIP_CODE_FT6336U, I2C_ADDR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum InitState {
  Probe,
  VerifyChip,
  SetWorkingMode,
}

impl<B: Bus, RST> Ft6336u<B, RST> {
  pub(crate) fn init(&mut self) -> Result<(), Error<B::Error>> {
    let mut state = InitState::Probe;

    loop {
      match state {
        InitState::Probe => {
          let found = self.bus.scan().map_err(Error::Bus)?;
          if !found.contains(I2C_ADDR) {
            #[cfg(feature = "defmt")]
            defmt::error!("FT6336U: nothing at {=u8:#x}", I2C_ADDR);
            return Err(Error::DeviceNotFound);
          }
          state = InitState::VerifyChip;
        }

        InitState::VerifyChip => {
          let code = self.chip_code()?;
          if code != CHIP_CODE_FT6336U {
            #[cfg(feature = "defmt")]
            defmt::error!("FT6336U: unsupported chip code {=u8:#x}", code);
            return Err(Error::UnsupportedDevice(code));
          }
          #[cfg(feature = "defmt")]
          defmt::info!("FT6336U: chip code {=u8:#x}", code);
          state = InitState::SetWorkingMode;
        }

        // Power-on mode is undocumented, so it is always forced.
        InitState::SetWorkingMode => return self.set_mode_working(),
      }
    }
  }

  fn chip_code(&mut self) -> Result<u8, Error<B::Error>> {
    self.read_u8(Reg::CipherLow)
  }
}
