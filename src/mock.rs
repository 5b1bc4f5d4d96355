//! In-memory FT6336U stand-in used by the unit tests.
use std::vec::Vec;

use embedded_hal::digital;
use embedded_hal::i2c::{self, ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation, SevenBitAddress};

use crate::{Reg, CHIP_CODE_FT6336U, I2C_ADDR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
  Nack,
  Fault,
}

impl i2c::Error for MockError {
  fn kind(&self) -> ErrorKind {
    match self {
      MockError::Nack => ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address),
      MockError::Fault => ErrorKind::Bus,
    }
  }
}

/// One completed transfer addressed to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
  Probe,
  Read { reg: u8, len: usize },
  Write { reg: u8, data: Vec<u8> },
}

/// Register file behind a fake I²C bus with a single device at [`I2C_ADDR`].
#[derive(Debug)]
pub struct MockBus {
  pub regs: [u8; 256],
  pub present: bool,
  pub fault: bool,
  /// Fail any transfer that selects this register.
  pub fail_reg: Option<u8>,
  pub attempts: usize,
  /// Length of every write operation handed to the bus, in order.
  pub write_ops: Vec<usize>,
  pub log: Vec<Access>,
}

impl MockBus {
  /// A responding FT6336U.
  pub fn new() -> Self {
    let mut bus = Self { regs: [0; 256], present: true, fault: false, fail_reg: None, attempts: 0, write_ops: Vec::new(), log: Vec::new() };
    bus.set(Reg::CipherLow, CHIP_CODE_FT6336U);
    bus
  }

  /// A bus where nothing answers.
  pub fn absent() -> Self {
    Self { present: false, ..Self::new() }
  }

  pub fn set(&mut self, reg: impl Into<u8>, value: u8) {
    self.regs[reg.into() as usize] = value;
  }

  /// Store `value` big-endian across `reg` and `reg + 1`.
  pub fn set_u16(&mut self, reg: Reg, value: u16) {
    let [hi, lo] = value.to_be_bytes();
    self.set(reg, hi);
    self.set(reg as u8 + 1, lo);
  }

  pub fn clear_log(&mut self) {
    self.log.clear();
    self.write_ops.clear();
    self.attempts = 0;
  }

  pub fn reads(&self) -> Vec<(u8, usize)> {
    self
      .log
      .iter()
      .filter_map(|a| match a {
        Access::Read { reg, len } => Some((*reg, *len)),
        _ => None,
      })
      .collect()
  }

  pub fn writes(&self) -> Vec<(u8, Vec<u8>)> {
    self
      .log
      .iter()
      .filter_map(|a| match a {
        Access::Write { reg, data } => Some((*reg, data.clone())),
        _ => None,
      })
      .collect()
  }
}

impl ErrorType for MockBus {
  type Error = MockError;
}

impl I2c<SevenBitAddress> for MockBus {
  fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
    self.attempts += 1;
    if self.fault {
      return Err(MockError::Fault);
    }
    if address != I2C_ADDR || !self.present {
      return Err(MockError::Nack);
    }

    // First written byte selects the register, the rest is payload.
    let mut start: Option<u8> = None;
    let mut cursor = 0u8;
    let mut written = Vec::new();

    for op in operations.iter_mut() {
      match op {
        Operation::Write(bytes) => {
          self.write_ops.push(bytes.len());
          for &b in bytes.iter() {
            if start.is_none() {
              if self.fail_reg == Some(b) {
                return Err(MockError::Fault);
              }
              start = Some(b);
              cursor = b;
            } else {
              self.regs[cursor as usize] = b;
              written.push(b);
              cursor = cursor.wrapping_add(1);
            }
          }
        }
        Operation::Read(buf) => {
          let Some(_) = start else {
            self.log.push(Access::Probe);
            continue;
          };
          let reg = cursor;
          for b in buf.iter_mut() {
            *b = self.regs[cursor as usize];
            cursor = cursor.wrapping_add(1);
          }
          self.log.push(Access::Read { reg, len: buf.len() });
        }
      }
    }

    if let (Some(reg), false) = (start, written.is_empty()) {
      self.log.push(Access::Write { reg, data: written });
    }

    Ok(())
  }
}

/// Reset line that only counts how often it was driven.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MockPin {
  pub toggles: usize,
}

impl digital::ErrorType for MockPin {
  type Error = core::convert::Infallible;
}

impl digital::OutputPin for MockPin {
  fn set_low(&mut self) -> Result<(), Self::Error> {
    self.toggles += 1;
    Ok(())
  }

  fn set_high(&mut self) -> Result<(), Self::Error> {
    self.toggles += 1;
    Ok(())
  }
}
