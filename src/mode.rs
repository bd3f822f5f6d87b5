//! Operating modes and measurement channels.

use crate::register::Register;

/// Start-register value that triggers one measurement.
pub(crate) const START_SINGLE_SHOT: u8 = 0x01;
/// Start-register value that puts a channel in continuous mode.
pub(crate) const START_CONTINUOUS: u8 = 0x03;
/// Value written to [`Register::InterleavedModeEnable`] to enable interleaving.
pub(crate) const INTERLEAVED_ENABLE: u8 = 0x01;

/// Measurement channel of the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Time-of-flight proximity ranging
    Range,
    /// Ambient light sensing
    AmbientLight,
}

impl Channel {
    /// Start register of the channel.
    #[must_use]
    pub fn start_register(self) -> Register {
        match self {
            Channel::Range => Register::SysrangeStart,
            Channel::AmbientLight => Register::SysalsStart,
        }
    }

    /// Bit written to [`Register::SystemInterruptClear`] to clear this channel.
    #[must_use]
    pub fn interrupt_clear_bit(self) -> u8 {
        match self {
            Channel::Range => 0x01,
            Channel::AmbientLight => 0x02,
        }
    }
}

/// Operating mode of the sensor. Exactly one is active at a time.
///
/// Single-shot channels are idle until a start bit is written for each
/// measurement. Continuous channels re-trigger on their own after being enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Range and ALS both single-shot
    #[default]
    RangeSingleShot,
    /// ALS single-shot, range idle
    AlsSingleShot,
    /// ALS continuous
    AlsContinuous,
    /// Range continuous
    RangeContinuous,
    /// Range continuous, ALS single-shot
    RangeContinuousAlsSingleShot,
    /// Range single-shot, ALS continuous
    RangeSingleShotAlsContinuous,
    /// Range and ALS measured alternately by the device
    Interleaved,
}

impl Mode {
    /// Whether entering this mode stops every acquisition first.
    ///
    /// `Interleaved` is entered by setting its enable bit on top of the current state.
    #[must_use]
    pub fn clears_first(self) -> bool {
        self != Mode::Interleaved
    }

    /// The single register write that enters this mode, or `None` when clearing
    /// alone is enough.
    #[must_use]
    pub fn entry_write(self) -> Option<(Register, u8)> {
        match self {
            Mode::RangeSingleShot | Mode::AlsSingleShot => None,
            Mode::AlsContinuous | Mode::RangeSingleShotAlsContinuous => {
                Some((Register::SysalsStart, START_CONTINUOUS))
            }
            Mode::RangeContinuous | Mode::RangeContinuousAlsSingleShot => {
                Some((Register::SysrangeStart, START_CONTINUOUS))
            }
            Mode::Interleaved => Some((Register::InterleavedModeEnable, INTERLEAVED_ENABLE)),
        }
    }

    /// Whether the device samples `channel` on its own in this mode.
    #[must_use]
    pub fn is_continuous(self, channel: Channel) -> bool {
        match channel {
            Channel::Range => matches!(
                self,
                Mode::RangeContinuous | Mode::RangeContinuousAlsSingleShot | Mode::Interleaved
            ),
            Channel::AmbientLight => matches!(
                self,
                Mode::AlsContinuous | Mode::RangeSingleShotAlsContinuous | Mode::Interleaved
            ),
        }
    }

    /// The single-shot mode used to take one measurement on `channel`.
    #[must_use]
    pub fn single_shot(channel: Channel) -> Self {
        match channel {
            Channel::Range => Mode::RangeSingleShot,
            Channel::AmbientLight => Mode::AlsSingleShot,
        }
    }
}
