use crate::{Bus, Error, Ft6336u, Reg, I2C_ADDR};

impl<B: Bus, RST> Ft6336u<B, RST> {
  /// Read one register, or two consecutive registers as a big-endian value.
  ///
  /// `width` must be 1 or 2. The scratch buffer is overwritten on every call.
  pub fn read_register(&mut self, reg: Reg, width: u8) -> Result<u16, Error<B::Error>> {
    let len = match width {
      1 | 2 => width as usize,
      _ => return Err(Error::InvalidWidth(width)),
    };

    self.bus.read(I2C_ADDR, reg.into(), &mut self.buf[..len]).map_err(Error::Bus)?;

    Ok(match len {
      1 => u16::from(self.buf[0]),
      _ => u16::from_be_bytes(self.buf),
    })
  }

  /// Write a single byte to a register.
  pub fn write_register(&mut self, reg: Reg, value: u8) -> Result<(), Error<B::Error>> {
    self.bus.write(I2C_ADDR, reg.into(), value).map_err(Error::Bus)
  }

  // Typed helpers
  pub(crate) fn read_u8(&mut self, reg: Reg) -> Result<u8, Error<B::Error>> {
    self.read_register(reg, 1).map(|v| v as u8)
  }

  pub(crate) fn read_u16(&mut self, reg: Reg) -> Result<u16, Error<B::Error>> {
    self.read_register(reg, 2)
  }
}
