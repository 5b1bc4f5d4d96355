/******************************************************************************
 * Refer to the FT6336U datasheet and application note for details:          *
 * - FocalTech FT6336U datasheet, register map chapter                        *
 * ========================================================================== *
 *                        FT6336U - Registers & Memory Map                    *
*******************************************************************************/

/// Fixed 7-bit bus address of the FT6336U.
pub const I2C_ADDR: u8 = 0x38;

/// Value of [`Reg::CipherLow`] reported by the FT6336U.
///
/// Sibling parts share the register map but report other codes (FT6236G
/// `0x00`, FT6336G `0x01`, FT6426 `0x03`) and are rejected.
pub const CHIP_CODE_FT6336U: u8 = 0x02;

/// Registers of the FT6336U.
///
/// Only the mode switch, touch status, point coordinate and cipher registers
/// have dedicated accessors. Everything else can be reached through
/// [`crate::Ft6336u::read_register`] and [`crate::Ft6336u::write_register`].
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reg {
  // Device mode (0x00)
  ModeSwitch = 0x00,

  // Touch data (0x02..0x0E)
  TdStatus = 0x02,
  P1XHigh = 0x03,
  P1XLow = 0x04,
  P1YHigh = 0x05,
  P1YLow = 0x06,
  P1Weight = 0x07,
  P1Misc = 0x08,
  P2XHigh = 0x09,
  P2XLow = 0x0A,
  P2YHigh = 0x0B,
  P2YLow = 0x0C,
  P2Weight = 0x0D,
  P2Misc = 0x0E,

  // Thresholds and timing (0x80..0x96)
  ThresholdGroup = 0x80,
  ThresholdDiff = 0x85,
  Ctrl = 0x86,
  TimeEnterMonitor = 0x87,
  PeriodActive = 0x88,
  PeriodMonitor = 0x89,
  FreqHoppingEnable = 0x8B,
  TestModeFilter = 0x96,

  // Identification (0x9F..0xAF)
  CipherMid = 0x9F,
  CipherLow = 0xA0,
  LibVersionHigh = 0xA1,
  LibVersionLow = 0xA2,
  CipherHigh = 0xA3,
  Mode = 0xA4,
  PowerMode = 0xA5,
  FirmwareId = 0xA6,
  FocaltechId = 0xA8,
  VirtualKeyThreshold = 0xA9,
  IsCalling = 0xAD,
  FactoryMode = 0xAE,
  ReleaseCodeId = 0xAF,

  // Misc (0xB0..0xBC)
  FaceDetectMode = 0xB0,
  State = 0xBC,
}

impl Reg {
  /// Every register in the map, in address order.
  pub const ALL: [Reg; 37] = [
    Reg::ModeSwitch,
    Reg::TdStatus,
    Reg::P1XHigh,
    Reg::P1XLow,
    Reg::P1YHigh,
    Reg::P1YLow,
    Reg::P1Weight,
    Reg::P1Misc,
    Reg::P2XHigh,
    Reg::P2XLow,
    Reg::P2YHigh,
    Reg::P2YLow,
    Reg::P2Weight,
    Reg::P2Misc,
    Reg::ThresholdGroup,
    Reg::ThresholdDiff,
    Reg::Ctrl,
    Reg::TimeEnterMonitor,
    Reg::PeriodActive,
    Reg::PeriodMonitor,
    Reg::FreqHoppingEnable,
    Reg::TestModeFilter,
    Reg::CipherMid,
    Reg::CipherLow,
    Reg::LibVersionHigh,
    Reg::LibVersionLow,
    Reg::CipherHigh,
    Reg::Mode,
    Reg::PowerMode,
    Reg::FirmwareId,
    Reg::FocaltechId,
    Reg::VirtualKeyThreshold,
    Reg::IsCalling,
    Reg::FactoryMode,
    Reg::ReleaseCodeId,
    Reg::FaceDetectMode,
    Reg::State,
  ];
}

impl From<Reg> for u8 {
  #[inline]
  fn from(r: Reg) -> Self {
    r as u8
  }
}
