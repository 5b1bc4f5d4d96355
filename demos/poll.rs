//! Polling loop example: bring up the controller and read touch points.
#![allow(unused)]
use embedded_hal::i2c::I2c;
use ft6336u::{Ft6336u, Point};

#[allow(dead_code)]
fn main_blocking<I2C, E>(i2c: &mut I2C) -> Result<(), ft6336u::Error<E>>
where
  I2C: I2c<Error = E>,
{
  let mut dev = Ft6336u::new(i2c)?;

  loop {
    // Ideally gated on a falling edge of the controller's INT line.
    for point in dev.points()?.iter() {
      let Point { x, y } = *point;
      let _ = (x, y);
      // handle touch
    }
  }
}

fn main() {}
