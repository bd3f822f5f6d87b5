//! Decoding of [`Register::ResultInterruptStatusGpio`](crate::Register::ResultInterruptStatusGpio).

use crate::mode::Channel;

/// Interrupt code reported when an unread sample is available.
pub const NEW_SAMPLE_READY: u8 = 4;

const RANGE_SHIFT: u8 = 0;
const ALS_SHIFT: u8 = 3;
const CODE_MASK: u8 = 0x07;

/// Snapshot of the interrupt status register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptStatus(u8);

impl InterruptStatus {
    /// Raw register value.
    #[must_use]
    pub fn raw(self) -> u8 {
        self.0
    }

    /// Interrupt code of `channel` (bits [2:0] for range, [5:3] for ALS).
    #[must_use]
    pub fn code(self, channel: Channel) -> u8 {
        let shift = match channel {
            Channel::Range => RANGE_SHIFT,
            Channel::AmbientLight => ALS_SHIFT,
        };
        (self.0 >> shift) & CODE_MASK
    }

    /// Whether `channel` has a new sample waiting.
    #[must_use]
    pub fn is_ready(self, channel: Channel) -> bool {
        self.code(channel) == NEW_SAMPLE_READY
    }

    /// Whether a new range sample is waiting.
    #[must_use]
    pub fn range_ready(self) -> bool {
        self.is_ready(Channel::Range)
    }

    /// Whether a new ALS sample is waiting.
    #[must_use]
    pub fn als_ready(self) -> bool {
        self.is_ready(Channel::AmbientLight)
    }
}

impl From<u8> for InterruptStatus {
    fn from(value: u8) -> Self {
        InterruptStatus(value)
    }
}
