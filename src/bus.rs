use embedded_hal::i2c::{Error as _, ErrorKind, I2c, SevenBitAddress};

/// Lowest and highest non-reserved 7-bit addresses probed by [`Bus::scan`].
const SCAN_FIRST: u8 = 0x08;
const SCAN_LAST: u8 = 0x77;

/// Set of 7-bit bus addresses that answered a presence probe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressSet(u128);

impl AddressSet {
  /// An empty set.
  pub const fn new() -> Self {
    Self(0)
  }

  /// Mark `addr` as present. Addresses above `0x7F` are ignored.
  pub fn insert(&mut self, addr: u8) {
    if addr < 0x80 {
      self.0 |= 1u128 << addr;
    }
  }

  /// Whether `addr` answered the probe.
  pub const fn contains(&self, addr: u8) -> bool {
    addr < 0x80 && self.0 & (1u128 << addr) != 0
  }

  /// `true` if nothing answered.
  pub const fn is_empty(&self) -> bool {
    self.0 == 0
  }

  /// Number of addresses that answered.
  pub const fn len(&self) -> u32 {
    self.0.count_ones()
  }

  /// Iterate the present addresses in ascending order.
  pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
    (0u8..0x80).filter(move |&a| self.contains(a))
  }
}

/// Register-oriented bus capability the driver is written against.
///
/// Every [`embedded_hal::i2c::I2c`] implementation (and `&mut` to one) gets this
/// for free, so the driver can either own the bus or borrow it from the caller.
pub trait Bus {
  type Error;

  /// Probe the bus and report every address that acknowledged.
  fn scan(&mut self) -> Result<AddressSet, Self::Error>;

  /// Read `buf.len()` bytes starting at `register` of the device at `address`.
  fn read(&mut self, address: u8, register: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

  /// Write one byte to `register` of the device at `address`.
  fn write(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error>;
}

impl<I> Bus for I
where
  I: I2c<SevenBitAddress>,
{
  type Error = I::Error;

  fn scan(&mut self) -> Result<AddressSet, Self::Error> {
    let mut found = AddressSet::new();
    let mut probe = [0u8; 1];

    for addr in SCAN_FIRST..=SCAN_LAST {
      match I2c::read(self, addr, &mut probe) {
        Ok(()) => found.insert(addr),
        // Nobody home
        Err(e) if matches!(e.kind(), ErrorKind::NoAcknowledge(_)) => {}
        Err(e) => return Err(e),
      }
    }

    Ok(found)
  }

  fn read(&mut self, address: u8, register: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
    I2c::write_read(self, address, &[register], buf)
  }

  fn write(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
    I2c::write(self, address, &[register, value])
  }
}
