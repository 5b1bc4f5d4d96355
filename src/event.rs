use bitfield_struct::bitfield;

use crate::{Bus, Error, Ft6336u, Reg};

/// Number of touch points the controller tracks.
pub const MAX_POINTS: usize = 2;

/// Big-endian `xH:xL` / `yH:yL` register pair. The upper nibble of the high byte
/// carries event and id flags which this driver does not use.
#[bitfield(u16)]
struct Coordinate {
  #[bits(12)]
  value: u16,
  #[bits(4)]
  __: u8,
}

/// Position of a single contact, 12 bits per axis.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
  pub x: u16,
  pub y: u16,
}

impl Point {
  /// A point at `(x, y)`.
  pub const fn new(x: u16, y: u16) -> Self {
    Self { x, y }
  }
}

impl core::fmt::Debug for Point {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

/// One of the two point slots in the register file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PointSlot {
  /// Point 1, registers `0x03..=0x06`.
  Primary,
  /// Point 2, registers `0x09..=0x0C`.
  Secondary,
}

impl PointSlot {
  const fn x_reg(self) -> Reg {
    match self {
      PointSlot::Primary => Reg::P1XHigh,
      PointSlot::Secondary => Reg::P2XHigh,
    }
  }

  const fn y_reg(self) -> Reg {
    match self {
      PointSlot::Primary => Reg::P1YHigh,
      PointSlot::Secondary => Reg::P2YHigh,
    }
  }
}

/// Active points of one poll, primary first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Points {
  points: [Point; MAX_POINTS],
  len: usize,
}

impl Points {
  /// An empty set of points.
  pub const fn new() -> Self {
    Self { points: [Point::new(0, 0); MAX_POINTS], len: 0 }
  }

  fn push(&mut self, point: Point) {
    if self.len < MAX_POINTS {
      self.points[self.len] = point;
      self.len += 1;
    }
  }

  /// The active points, primary first.
  pub fn as_slice(&self) -> &[Point] {
    &self.points[..self.len]
  }
}

impl core::ops::Deref for Points {
  type Target = [Point];

  fn deref(&self) -> &[Point] {
    self.as_slice()
  }
}

impl<'a> IntoIterator for &'a Points {
  type Item = &'a Point;
  type IntoIter = core::slice::Iter<'a, Point>;

  fn into_iter(self) -> Self::IntoIter {
    self.as_slice().iter()
  }
}

impl<B: Bus, RST> Ft6336u<B, RST> {
  /// Raw content of the touch status register.
  ///
  /// Anything above [`MAX_POINTS`] is returned as read. Such values are not
  /// expected from the chip and are logged when the `defmt` feature is on.
  pub fn point_count(&mut self) -> Result<u8, Error<B::Error>> {
    let count = self.read_u8(Reg::TdStatus)?;
    if usize::from(count) > MAX_POINTS {
      #[cfg(feature = "defmt")]
      defmt::warn!("FT6336U: unexpected point count {=u8:#x}", count);
    }
    Ok(count)
  }

  /// X coordinate of the given slot.
  pub fn point_x(&mut self, slot: PointSlot) -> Result<u16, Error<B::Error>> {
    self.read_coordinate(slot.x_reg())
  }

  /// Y coordinate of the given slot.
  pub fn point_y(&mut self, slot: PointSlot) -> Result<u16, Error<B::Error>> {
    self.read_coordinate(slot.y_reg())
  }

  /// Both coordinates of the given slot.
  ///
  /// The values are only meaningful while [`Ft6336u::point_count`] says the slot
  /// is in use.
  pub fn point(&mut self, slot: PointSlot) -> Result<Point, Error<B::Error>> {
    let x = self.point_x(slot)?;
    let y = self.point_y(slot)?;
    Ok(Point::new(x, y))
  }

  /// Poll the controller for the currently active points.
  ///
  /// Reads the point count once and then only the slots it marks as active.
  /// Any failed read aborts the whole poll.
  pub fn points(&mut self) -> Result<Points, Error<B::Error>> {
    let count = self.point_count()?;
    let mut points = Points::new();

    if count > 0 {
      points.push(self.point(PointSlot::Primary)?);
    }
    if count > 1 {
      points.push(self.point(PointSlot::Secondary)?);
    }

    Ok(points)
  }

  fn read_coordinate(&mut self, reg: Reg) -> Result<u16, Error<B::Error>> {
    let raw = self.read_u16(reg)?;
    Ok(Coordinate::from_bits(raw).value())
  }
}
