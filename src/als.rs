//! Ambient light channel: analogue gain tiers, integration period encoding and
//! the count-to-lux conversion.

use core::ops::RangeInclusive;

/// Lux per count at 1x gain and the reference integration period.
pub const LUX_RESOLUTION: f32 = 0.32;

/// Integration period (ms) the lux resolution is specified against.
pub const REFERENCE_INTEGRATION_PERIOD_MS: u16 = 100;

/// Integration periods the 8-bit register can hold.
pub const INTEGRATION_PERIOD_MS: RangeInclusive<u16> = 1..=256;

/// Analogue gain of the ALS channel.
///
/// The register codes are not monotonic in the multiplier, so both are looked
/// up from a fixed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnalogGain {
    /// 1.0x
    #[default]
    X1,
    /// 1.25x
    X1p25,
    /// 1.67x
    X1p67,
    /// 2.5x
    X2p5,
    /// 5.0x
    X5,
    /// 10x
    X10,
    /// 20x
    X20,
    /// 40x
    X40,
}

impl AnalogGain {
    /// All tiers in ascending order of multiplier.
    pub const TIERS: [AnalogGain; 8] = [
        AnalogGain::X1,
        AnalogGain::X1p25,
        AnalogGain::X1p67,
        AnalogGain::X2p5,
        AnalogGain::X5,
        AnalogGain::X10,
        AnalogGain::X20,
        AnalogGain::X40,
    ];

    /// Multiplier applied by this tier.
    #[must_use]
    pub fn multiplier(self) -> f32 {
        match self {
            AnalogGain::X1 => 1.0,
            AnalogGain::X1p25 => 1.25,
            AnalogGain::X1p67 => 1.67,
            AnalogGain::X2p5 => 2.5,
            AnalogGain::X5 => 5.0,
            AnalogGain::X10 => 10.0,
            AnalogGain::X20 => 20.0,
            AnalogGain::X40 => 40.0,
        }
    }

    /// Value written to [`Register::SysalsAnalogueGain`](crate::Register::SysalsAnalogueGain).
    #[must_use]
    pub fn register_code(self) -> u8 {
        match self {
            AnalogGain::X1 => 6,
            AnalogGain::X1p25 => 5,
            AnalogGain::X1p67 => 4,
            AnalogGain::X2p5 => 3,
            AnalogGain::X5 => 2,
            AnalogGain::X10 => 1,
            AnalogGain::X20 => 0,
            AnalogGain::X40 => 7,
        }
    }

    /// Picks the smallest tier whose multiplier is at least `requested`.
    ///
    /// Requests above 40x are not clamped: they fall back to the 1x tier.
    /// Returns `None` for NaN, infinite, zero or negative requests.
    ///
    /// ```
    /// use vl6180::AnalogGain;
    ///
    /// assert_eq!(AnalogGain::quantize(3.0), Some(AnalogGain::X5));
    /// assert_eq!(AnalogGain::quantize(41.0), Some(AnalogGain::X1));
    /// assert_eq!(AnalogGain::quantize(f32::NAN), None);
    /// ```
    #[must_use]
    pub fn quantize(requested: f32) -> Option<Self> {
        if !requested.is_finite() || requested <= 0.0 {
            return None;
        }
        let tier = Self::TIERS
            .iter()
            .copied()
            .find(|tier| requested <= tier.multiplier())
            .unwrap_or(AnalogGain::X1);
        Some(tier)
    }
}

/// Encodes an integration period for [`Register::SysalsIntegrationPeriod`](crate::Register::SysalsIntegrationPeriod).
///
/// The register holds `ms - 1`; `None` if `ms` is outside [`INTEGRATION_PERIOD_MS`].
#[must_use]
pub fn encode_integration_period(ms: u16) -> Option<u8> {
    if !INTEGRATION_PERIOD_MS.contains(&ms) {
        return None;
    }
    u8::try_from(ms - 1).ok()
}

/// Converts a raw ALS count to lux for the given gain and integration period.
///
/// `period_ms` must be non-zero; the driver only stores validated periods.
#[must_use]
pub fn lux_from_raw(raw: u16, gain: AnalogGain, period_ms: u16) -> f32 {
    LUX_RESOLUTION
        * (f32::from(raw) / gain.multiplier())
        * (f32::from(REFERENCE_INTEGRATION_PERIOD_MS) / f32::from(period_ms))
}
