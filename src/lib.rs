//! # VL6180 Proximity and Ambient Light Sensor Driver
//!
//! This crate provides a `no_std` driver for ST-Microelectronics' VL6180 time-of-flight
//! proximity sensor with integrated ambient light sensor (ALS). The driver is blocking by
//! default; enable the `async` feature to build it on `embedded-hal-async` instead.
//!
//! Measurements are completed by polling the interrupt status register, bounded by a
//! configurable number of attempts.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use vl6180::Vl6180;
//!
//! let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
//! let delay = embedded_hal_mock::eh1::delay::NoopDelay;
//! let mut sensor = Vl6180::new(i2c, delay);
//!
//! sensor.init().unwrap();
//!
//! let distance_mm = sensor.read_range_single_shot().unwrap();
//! println!("Distance: {} mm", distance_mm);
//!
//! sensor.set_analog_gain(5.0).unwrap();
//! let lux = sensor.read_als_single_shot().unwrap();
//! println!("Ambient light: {} lux", lux);
//! ```
#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod fmt; // <-- must be first module!

mod als;
mod mode;
mod register;
mod status;

pub use als::{
    encode_integration_period, lux_from_raw, AnalogGain, INTEGRATION_PERIOD_MS, LUX_RESOLUTION,
    REFERENCE_INTEGRATION_PERIOD_MS,
};
pub use mode::{Channel, Mode};
pub use register::Register;
pub use status::{InterruptStatus, NEW_SAMPLE_READY};

#[cfg(not(feature = "async"))]
use embedded_hal::{delay::DelayNs, i2c::I2c};
#[cfg(feature = "async")]
use embedded_hal_async::{delay::DelayNs, i2c::I2c};

use mode::START_SINGLE_SHOT;

/// 7-bit I2C address of the VL6180. It is fixed for this driver.
pub const DEVICE_ADDRESS: u8 = 0x29;

/// Value of [`Register::IdentificationModelId`] on a VL6180.
pub const MODEL_ID: u8 = 0xB4;

/// Default number of status reads before a measurement gives up.
pub const DEFAULT_MAX_POLL_ATTEMPTS: u16 = 1000;

/// Default ALS integration period in milliseconds.
pub const DEFAULT_INTEGRATION_PERIOD_MS: u16 = 100;

/// Driver-side view of the sensor settings.
///
/// Only the driver mutates it, and only through its mode and ALS operations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// I2C address of the sensor
    pub address: u8,
    /// Current operating mode
    pub mode: Mode,
    /// Current ALS analogue gain tier
    pub analog_gain: AnalogGain,
    /// Current ALS integration period in milliseconds
    pub integration_period_ms: u16,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            address: DEVICE_ADDRESS,
            mode: Mode::default(),
            analog_gain: AnalogGain::default(),
            integration_period_ms: DEFAULT_INTEGRATION_PERIOD_MS,
        }
    }
}

/// A single decoded measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Measurement {
    /// Distance in millimeters (0-255)
    Range(u8),
    /// Ambient light in lux
    AmbientLight(f32),
}

/// VL6180 proximity and ambient light sensor driver.
///
/// The driver owns the bus, the delay provider and the sensor settings. It is not
/// meant to be shared between execution contexts without external locking.
pub struct Vl6180<I2C, D> {
    /// I2C interface for communication with the sensor
    i2c: I2C,
    /// Delay implementation used between status polls
    delay: D,
    /// Current sensor settings
    config: SensorConfig,
    /// Status reads allowed per measurement
    max_poll_attempts: u16,
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), keep_self),
    async(feature = "async", keep_self)
)]
impl<I2C, E, D> Vl6180<I2C, D>
where
    I2C: I2c<Error = E>,
    E: core::fmt::Debug,
    D: DelayNs,
{
    /// Creates a new VL6180 driver instance.
    ///
    /// No bus traffic happens here. Call [`init`](Self::init) to put the sensor in a
    /// known state.
    ///
    /// # Default Configuration
    ///
    /// - **I2C Address**: 0x29
    /// - **Mode**: [`Mode::RangeSingleShot`]
    /// - **ALS Gain**: 1.0x
    /// - **ALS Integration Period**: 100 ms
    /// - **Poll Budget**: [`DEFAULT_MAX_POLL_ATTEMPTS`] status reads, 1 ms apart
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use vl6180::Vl6180;
    ///
    /// let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
    /// let delay = embedded_hal_mock::eh1::delay::NoopDelay;
    ///
    /// let mut sensor = Vl6180::new(i2c, delay);
    /// ```
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self {
            i2c,
            delay,
            config: SensorConfig::default(),
            max_poll_attempts: DEFAULT_MAX_POLL_ATTEMPTS,
        }
    }

    /// Consumes the driver and returns the I2C bus and delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// Current sensor settings.
    #[must_use]
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Current operating mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    /// Current ALS analogue gain tier.
    #[must_use]
    pub fn analog_gain(&self) -> AnalogGain {
        self.config.analog_gain
    }

    /// Current ALS integration period in milliseconds.
    #[must_use]
    pub fn integration_period_ms(&self) -> u16 {
        self.config.integration_period_ms
    }

    /// Number of status reads a measurement may spend waiting for its sample.
    #[must_use]
    pub fn max_poll_attempts(&self) -> u16 {
        self.max_poll_attempts
    }

    /// Sets how many status reads a measurement may spend waiting for its sample.
    ///
    /// # Errors
    ///
    /// * `Err(Error::InvalidArgument)` - If `attempts` is zero
    pub fn set_max_poll_attempts(&mut self, attempts: u16) -> Result<(), Error<E>> {
        if attempts == 0 {
            error!("Invalid poll attempts: {}", attempts);
            return Err(Error::InvalidArgument);
        }
        self.max_poll_attempts = attempts;
        Ok(())
    }

    /// Puts the sensor in its default state.
    ///
    /// Stops every running acquisition, selects [`Mode::RangeSingleShot`], sets the ALS
    /// gain to 1.0x and the integration period to 100 ms.
    ///
    /// # Errors
    ///
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use vl6180::{AnalogGain, Mode, Vl6180};
    ///
    /// let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
    /// let delay = embedded_hal_mock::eh1::delay::NoopDelay;
    /// let mut sensor = Vl6180::new(i2c, delay);
    ///
    /// sensor.init().unwrap();
    /// assert_eq!(sensor.mode(), Mode::RangeSingleShot);
    /// assert_eq!(sensor.analog_gain(), AnalogGain::X1);
    /// ```
    pub async fn init(&mut self) -> Result<(), Error<E>> {
        info!("Initializing VL6180");
        self.set_mode(Mode::RangeSingleShot).await?;
        self.set_analog_gain(1.0).await?;
        self.set_integration_period(DEFAULT_INTEGRATION_PERIOD_MS)
            .await?;
        Ok(())
    }

    /// Reads the model identification register.
    ///
    /// A VL6180 answers [`MODEL_ID`] (0xB4).
    ///
    /// # Errors
    ///
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use vl6180::{Vl6180, MODEL_ID};
    ///
    /// let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
    /// let delay = embedded_hal_mock::eh1::delay::NoopDelay;
    /// let mut sensor = Vl6180::new(i2c, delay);
    ///
    /// if sensor.get_model_id().unwrap() != MODEL_ID {
    ///     println!("No VL6180 on the bus");
    /// }
    /// ```
    pub async fn get_model_id(&mut self) -> Result<u8, Error<E>> {
        self.read_byte(Register::IdentificationModelId).await
    }

    /// Stops every acquisition.
    ///
    /// Writes 0 to the range start, ALS start and interleaved enable registers, in that
    /// order. Idempotent. The stored mode is left untouched.
    ///
    /// # Errors
    ///
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    pub async fn clear_modes(&mut self) -> Result<(), Error<E>> {
        self.write_byte(Register::SysrangeStart, 0x00).await?;
        self.write_byte(Register::SysalsStart, 0x00).await?;
        self.write_byte(Register::InterleavedModeEnable, 0x00)
            .await?;
        Ok(())
    }

    /// Switches the sensor to `mode`.
    ///
    /// The stored mode is updated first. Every mode except `Interleaved` then stops
    /// all acquisition with [`clear_modes`](Self::clear_modes) before its own write:
    ///
    /// | Mode | Clear first | Mode write |
    /// |------|-------------|------------|
    /// | `RangeSingleShot`, `AlsSingleShot` | yes | none |
    /// | `AlsContinuous`, `RangeSingleShotAlsContinuous` | yes | ALS start = 0x03 |
    /// | `RangeContinuous`, `RangeContinuousAlsSingleShot` | yes | range start = 0x03 |
    /// | `Interleaved` | no | interleaved enable = 0x01 |
    ///
    /// Single-shot start bits are written per measurement, not here.
    ///
    /// # Errors
    ///
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use vl6180::{Mode, Vl6180};
    ///
    /// let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
    /// let delay = embedded_hal_mock::eh1::delay::NoopDelay;
    /// let mut sensor = Vl6180::new(i2c, delay);
    ///
    /// sensor.set_mode(Mode::RangeContinuous).unwrap();
    /// let distance_mm = sensor.read_range_from_continuous().unwrap();
    /// ```
    pub async fn set_mode(&mut self, mode: Mode) -> Result<(), Error<E>> {
        self.config.mode = mode;
        debug!("Entering mode {:?}", mode);
        if mode.clears_first() {
            self.clear_modes().await?;
        }
        if let Some((register, value)) = mode.entry_write() {
            self.write_byte(register, value).await?;
        }
        Ok(())
    }

    /// Sets the ALS analogue gain to the smallest tier that reaches `gain`.
    ///
    /// Tiers are 1.0, 1.25, 1.67, 2.5, 5, 10, 20 and 40. A request above 40x selects
    /// the 1.0x tier rather than clamping to 40x.
    ///
    /// # Arguments
    ///
    /// * `gain` - Requested multiplier, must be finite and positive
    ///
    /// # Returns
    ///
    /// * `Ok(AnalogGain)` - The tier that was written and stored
    ///
    /// # Errors
    ///
    /// * `Err(Error::InvalidArgument)` - If `gain` is NaN, infinite, zero or negative
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use vl6180::{AnalogGain, Vl6180};
    ///
    /// let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
    /// let delay = embedded_hal_mock::eh1::delay::NoopDelay;
    /// let mut sensor = Vl6180::new(i2c, delay);
    ///
    /// assert_eq!(sensor.set_analog_gain(3.0).unwrap(), AnalogGain::X5);
    /// ```
    pub async fn set_analog_gain(&mut self, gain: f32) -> Result<AnalogGain, Error<E>> {
        let Some(tier) = AnalogGain::quantize(gain) else {
            error!("Invalid analog gain: {}", gain);
            return Err(Error::InvalidArgument);
        };
        if gain > AnalogGain::X40.multiplier() {
            warn!("Analog gain {} above 40x, using 1x", gain);
        }
        self.write_byte(Register::SysalsAnalogueGain, tier.register_code())
            .await?;
        self.config.analog_gain = tier;
        Ok(tier)
    }

    /// Sets the ALS integration period.
    ///
    /// The register holds `ms - 1`, so the valid range is 1-256 ms.
    ///
    /// # Errors
    ///
    /// * `Err(Error::InvalidArgument)` - If `ms` is outside 1-256
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    pub async fn set_integration_period(&mut self, ms: u16) -> Result<(), Error<E>> {
        let Some(encoded) = encode_integration_period(ms) else {
            error!("Invalid integration period in ms: {}", ms);
            return Err(Error::InvalidArgument);
        };
        self.write_byte(Register::SysalsIntegrationPeriod, encoded)
            .await?;
        self.config.integration_period_ms = ms;
        Ok(())
    }

    /// Reads and decodes the interrupt status register.
    ///
    /// # Errors
    ///
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    pub async fn read_interrupt_status(&mut self) -> Result<InterruptStatus, Error<E>> {
        let status = self.read_byte(Register::ResultInterruptStatusGpio).await?;
        Ok(InterruptStatus::from(status))
    }

    /// Checks once whether a new range sample is waiting.
    ///
    /// # Errors
    ///
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    pub async fn new_range_data(&mut self) -> Result<bool, Error<E>> {
        Ok(self.read_interrupt_status().await?.range_ready())
    }

    /// Checks once whether a new ALS sample is waiting.
    ///
    /// # Errors
    ///
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    pub async fn new_als_data(&mut self) -> Result<bool, Error<E>> {
        Ok(self.read_interrupt_status().await?.als_ready())
    }

    /// Clears the pending interrupt of `channel`.
    ///
    /// The measurement functions already do this after reading a result.
    ///
    /// # Errors
    ///
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    pub async fn clear_interrupt(&mut self, channel: Channel) -> Result<(), Error<E>> {
        self.write_byte(Register::SystemInterruptClear, channel.interrupt_clear_bit())
            .await
    }

    /// Takes one range measurement.
    ///
    /// Selects [`Mode::RangeSingleShot`], writes the range start bit, polls the
    /// interrupt status until bits [2:0] report a new sample, then reads the result.
    ///
    /// # Returns
    ///
    /// * `Ok(u8)` - Distance in millimeters
    ///
    /// # Errors
    ///
    /// * `Err(Error::Timeout)` - If no sample arrived within the poll budget
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use vl6180::Vl6180;
    ///
    /// let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
    /// let delay = embedded_hal_mock::eh1::delay::NoopDelay;
    /// let mut sensor = Vl6180::new(i2c, delay);
    ///
    /// sensor.init().unwrap();
    /// match sensor.read_range_single_shot() {
    ///     Ok(distance_mm) => println!("Distance: {} mm", distance_mm),
    ///     Err(vl6180::Error::Timeout) => println!("No target response"),
    ///     Err(e) => println!("Error: {}", e),
    /// }
    /// ```
    pub async fn read_range_single_shot(&mut self) -> Result<u8, Error<E>> {
        self.single_shot(Channel::Range).await?;
        self.read_range_result().await
    }

    /// Takes one ambient light measurement.
    ///
    /// Selects [`Mode::AlsSingleShot`], writes the ALS start bit, polls the interrupt
    /// status until bits [5:3] report a new sample, then reads the 16-bit count and
    /// converts it with [`lux_from_raw`] using the stored gain and integration period.
    ///
    /// # Returns
    ///
    /// * `Ok(f32)` - Ambient light in lux
    ///
    /// # Errors
    ///
    /// * `Err(Error::Timeout)` - If no sample arrived within the poll budget
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use vl6180::Vl6180;
    ///
    /// let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
    /// let delay = embedded_hal_mock::eh1::delay::NoopDelay;
    /// let mut sensor = Vl6180::new(i2c, delay);
    ///
    /// sensor.init().unwrap();
    /// sensor.set_integration_period(50).unwrap();
    /// let lux = sensor.read_als_single_shot().unwrap();
    /// println!("Ambient light: {:.1} lux", lux);
    /// ```
    pub async fn read_als_single_shot(&mut self) -> Result<f32, Error<E>> {
        self.single_shot(Channel::AmbientLight).await?;
        self.read_als_result().await
    }

    /// Takes one single-shot measurement on `channel`.
    ///
    /// # Errors
    ///
    /// * `Err(Error::Timeout)` - If no sample arrived within the poll budget
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    pub async fn measure_single_shot(&mut self, channel: Channel) -> Result<Measurement, Error<E>> {
        match channel {
            Channel::Range => Ok(Measurement::Range(self.read_range_single_shot().await?)),
            Channel::AmbientLight => Ok(Measurement::AmbientLight(
                self.read_als_single_shot().await?,
            )),
        }
    }

    /// Reads the next range sample of a continuously ranging sensor.
    ///
    /// No start bit is written. The current mode must range continuously
    /// ([`Mode::RangeContinuous`], [`Mode::RangeContinuousAlsSingleShot`] or
    /// [`Mode::Interleaved`]).
    ///
    /// # Errors
    ///
    /// * `Err(Error::NotContinuous)` - If the current mode does not range continuously
    /// * `Err(Error::Timeout)` - If no sample arrived within the poll budget
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    pub async fn read_range_from_continuous(&mut self) -> Result<u8, Error<E>> {
        self.ensure_continuous(Channel::Range)?;
        self.wait_for_new_sample(Channel::Range).await?;
        self.read_range_result().await
    }

    /// Reads the next ALS sample of a continuously sampling sensor, in lux.
    ///
    /// No start bit is written. The current mode must sample ALS continuously
    /// ([`Mode::AlsContinuous`], [`Mode::RangeSingleShotAlsContinuous`] or
    /// [`Mode::Interleaved`]).
    ///
    /// # Errors
    ///
    /// * `Err(Error::NotContinuous)` - If the current mode does not sample ALS continuously
    /// * `Err(Error::Timeout)` - If no sample arrived within the poll budget
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    pub async fn read_als_from_continuous(&mut self) -> Result<f32, Error<E>> {
        self.ensure_continuous(Channel::AmbientLight)?;
        self.wait_for_new_sample(Channel::AmbientLight).await?;
        self.read_als_result().await
    }

    async fn single_shot(&mut self, channel: Channel) -> Result<(), Error<E>> {
        self.set_mode(Mode::single_shot(channel)).await?;
        self.write_byte(channel.start_register(), START_SINGLE_SHOT)
            .await?;
        self.wait_for_new_sample(channel).await
    }

    fn ensure_continuous(&self, channel: Channel) -> Result<(), Error<E>> {
        if self.config.mode.is_continuous(channel) {
            Ok(())
        } else {
            error!(
                "{:?} is not sampled continuously in mode {:?}",
                channel, self.config.mode
            );
            Err(Error::NotContinuous)
        }
    }

    async fn wait_for_new_sample(&mut self, channel: Channel) -> Result<(), Error<E>> {
        let mut attempts = 0u16;
        loop {
            let status = self.read_interrupt_status().await?;
            if status.is_ready(channel) {
                break Ok(());
            }

            attempts += 1;
            if attempts >= self.max_poll_attempts {
                warn!(
                    "No {:?} sample after {} status reads (last status {})",
                    channel,
                    attempts,
                    status.raw()
                );
                break Err(Error::Timeout);
            }

            self.delay.delay_ms(1).await;
        }
    }

    async fn read_range_result(&mut self) -> Result<u8, Error<E>> {
        let range_mm = self.read_byte(Register::ResultRangeVal).await?;
        self.clear_interrupt(Channel::Range).await?;
        debug!("Range: {} mm", range_mm);
        Ok(range_mm)
    }

    async fn read_als_result(&mut self) -> Result<f32, Error<E>> {
        let raw = self.read_word(Register::ResultAlsVal).await?;
        self.clear_interrupt(Channel::AmbientLight).await?;
        let lux = lux_from_raw(
            raw,
            self.config.analog_gain,
            self.config.integration_period_ms,
        );
        debug!("ALS: {} counts, {} lux", raw, lux);
        Ok(lux)
    }

    /// Writes a single byte to a sensor register.
    ///
    /// This is a low-level function; the register address is sent as two bytes,
    /// high byte first, followed by `value`.
    ///
    /// # Errors
    ///
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use vl6180::{Register, Vl6180};
    ///
    /// let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
    /// let delay = embedded_hal_mock::eh1::delay::NoopDelay;
    /// let mut sensor = Vl6180::new(i2c, delay);
    ///
    /// sensor.write_byte(Register::SysrangeThreshHigh, 200).unwrap();
    /// sensor.write_byte(0x0019u16, 200).unwrap();
    /// ```
    pub async fn write_byte<R>(&mut self, register_address: R, value: u8) -> Result<(), Error<E>>
    where
        R: Into<u16>,
    {
        let reg: u16 = register_address.into();
        let mut buffer = [0u8; 3];
        buffer[0..2].copy_from_slice(&reg.to_be_bytes());
        buffer[2] = value;
        self.i2c.write(self.config.address, &buffer).await?;
        Ok(())
    }

    /// Reads a single byte from a sensor register.
    ///
    /// # Errors
    ///
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    pub async fn read_byte<R>(&mut self, register_address: R) -> Result<u8, Error<E>>
    where
        R: Into<u16>,
    {
        let reg: u16 = register_address.into();
        let mut read_buffer = [0u8; 1];
        self.i2c
            .write_read(self.config.address, &reg.to_be_bytes(), &mut read_buffer)
            .await?;
        Ok(read_buffer[0])
    }

    /// Writes a big-endian 16-bit word to a sensor register.
    ///
    /// # Errors
    ///
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    pub async fn write_word<R>(&mut self, register_address: R, value: u16) -> Result<(), Error<E>>
    where
        R: Into<u16>,
    {
        let reg: u16 = register_address.into();
        let mut buffer = [0u8; 4];
        buffer[0..2].copy_from_slice(&reg.to_be_bytes());
        buffer[2..4].copy_from_slice(&value.to_be_bytes());
        self.i2c.write(self.config.address, &buffer).await?;
        Ok(())
    }

    /// Reads a big-endian 16-bit word from a sensor register.
    ///
    /// # Errors
    ///
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    pub async fn read_word<R>(&mut self, register_address: R) -> Result<u16, Error<E>>
    where
        R: Into<u16>,
    {
        let reg: u16 = register_address.into();
        let mut read_buffer = [0u8; 2];
        self.i2c
            .write_read(self.config.address, &reg.to_be_bytes(), &mut read_buffer)
            .await?;
        Ok(u16::from_be_bytes(read_buffer))
    }
}

/// Error type for VL6180 sensor operations.
///
/// # Examples
///
/// ```rust,no_run
/// use vl6180::Error;
///
/// let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
/// let delay = embedded_hal_mock::eh1::delay::NoopDelay;
/// let mut sensor = vl6180::Vl6180::new(i2c, delay);
///
/// match sensor.read_range_single_shot() {
///     Ok(mm) => println!("Distance: {} mm", mm),
///     Err(Error::Timeout) => println!("Measurement timed out"),
///     Err(Error::InvalidArgument) => println!("Invalid parameter provided"),
///     Err(Error::NotContinuous) => println!("Channel is not in continuous mode"),
///     Err(Error::I2cError(e)) => println!("I2C communication error: {:?}", e),
/// }
/// ```
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E: core::fmt::Debug> {
    /// I2C communication error from the underlying hardware
    I2cError(E),
    /// No new sample within the poll budget
    Timeout,
    /// Invalid parameter value provided
    InvalidArgument,
    /// Continuous read on a channel the current mode does not sample continuously
    NotContinuous,
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl<E: core::fmt::Debug> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::I2cError(error)
    }
}

#[cfg(all(test, not(feature = "async")))]
mod tests {
    use super::*;

    extern crate std;
    use std::vec;
    use std::vec::Vec;

    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    fn write(reg: Register, value: u8) -> I2cTransaction {
        let [hi, lo] = u16::from(reg).to_be_bytes();
        I2cTransaction::write(DEVICE_ADDRESS, vec![hi, lo, value])
    }

    fn read(reg: Register, data: &[u8]) -> I2cTransaction {
        let [hi, lo] = u16::from(reg).to_be_bytes();
        I2cTransaction::write_read(DEVICE_ADDRESS, vec![hi, lo], data.to_vec())
    }

    fn clear_sequence() -> Vec<I2cTransaction> {
        vec![
            write(Register::SysrangeStart, 0x00),
            write(Register::SysalsStart, 0x00),
            write(Register::InterleavedModeEnable, 0x00),
        ]
    }

    fn sensor(expectations: &[I2cTransaction]) -> Vl6180<I2cMock, NoopDelay> {
        Vl6180::new(I2cMock::new(expectations), NoopDelay::new())
    }

    fn finish(sensor: Vl6180<I2cMock, NoopDelay>) {
        let (mut i2c, _) = sensor.release();
        i2c.done();
    }

    #[test]
    fn new_does_no_bus_traffic() {
        let sensor = sensor(&[]);
        assert_eq!(*sensor.config(), SensorConfig::default());
        assert_eq!(sensor.config().address, 0x29);
        assert_eq!(sensor.integration_period_ms(), 100);
        assert_eq!(sensor.analog_gain(), AnalogGain::X1);
        assert_eq!(sensor.mode(), Mode::RangeSingleShot);
        finish(sensor);
    }

    #[test]
    fn init_clears_modes_and_writes_defaults() {
        let mut expectations = clear_sequence();
        expectations.push(write(Register::SysalsAnalogueGain, 6));
        expectations.push(write(Register::SysalsIntegrationPeriod, 99));

        let mut sensor = sensor(&expectations);
        sensor.init().unwrap();
        assert_eq!(sensor.mode(), Mode::RangeSingleShot);
        finish(sensor);
    }

    #[test]
    fn model_id_is_read_from_identification_register() {
        let mut sensor = sensor(&[read(Register::IdentificationModelId, &[0xB4])]);
        assert_eq!(sensor.get_model_id().unwrap(), MODEL_ID);
        finish(sensor);
    }

    #[test]
    fn clear_modes_writes_three_zeros_from_any_mode() {
        let mut expectations = vec![write(Register::InterleavedModeEnable, 0x01)];
        expectations.extend(clear_sequence());

        let mut sensor = sensor(&expectations);
        sensor.set_mode(Mode::Interleaved).unwrap();
        sensor.clear_modes().unwrap();
        assert_eq!(sensor.mode(), Mode::Interleaved);
        finish(sensor);
    }

    #[test]
    fn interleaved_entry_is_a_single_enable_write() {
        let mut sensor = sensor(&[write(Register::InterleavedModeEnable, 0x01)]);
        sensor.set_mode(Mode::Interleaved).unwrap();
        assert_eq!(sensor.mode(), Mode::Interleaved);
        finish(sensor);
    }

    #[test]
    fn interleaved_entry_leaves_running_channels_alone() {
        let mut expectations = clear_sequence();
        expectations.push(write(Register::SysrangeStart, 0x03));
        expectations.push(
            write(Register::InterleavedModeEnable, 0x01).with_error(ErrorKind::Other),
        );

        let mut sensor = sensor(&expectations);
        sensor.set_mode(Mode::RangeContinuous).unwrap();
        let err = sensor.set_mode(Mode::Interleaved).unwrap_err();
        assert!(matches!(err, Error::I2cError(ErrorKind::Other)));
        assert_eq!(sensor.mode(), Mode::Interleaved);
        finish(sensor);
    }

    #[test]
    fn single_shot_modes_only_clear() {
        let mut expectations = clear_sequence();
        expectations.extend(clear_sequence());

        let mut sensor = sensor(&expectations);
        sensor.set_mode(Mode::RangeSingleShot).unwrap();
        sensor.set_mode(Mode::AlsSingleShot).unwrap();
        assert_eq!(sensor.mode(), Mode::AlsSingleShot);
        finish(sensor);
    }

    #[test]
    fn als_continuous_writes_one_start_after_clearing() {
        let mut expectations = clear_sequence();
        expectations.push(write(Register::SysalsStart, 0x03));

        let mut sensor = sensor(&expectations);
        sensor.set_mode(Mode::AlsContinuous).unwrap();
        assert_eq!(sensor.mode(), Mode::AlsContinuous);
        finish(sensor);
    }

    #[test]
    fn mixed_modes_start_only_their_continuous_channel() {
        let mut expectations = clear_sequence();
        expectations.push(write(Register::SysrangeStart, 0x03));
        expectations.extend(clear_sequence());
        expectations.push(write(Register::SysalsStart, 0x03));
        expectations.extend(clear_sequence());
        expectations.push(write(Register::SysrangeStart, 0x03));

        let mut sensor = sensor(&expectations);
        sensor.set_mode(Mode::RangeContinuousAlsSingleShot).unwrap();
        sensor.set_mode(Mode::RangeSingleShotAlsContinuous).unwrap();
        sensor.set_mode(Mode::RangeContinuous).unwrap();
        finish(sensor);
    }

    #[test]
    fn set_mode_records_mode_even_when_bus_fails() {
        let expectations = [write(Register::SysrangeStart, 0x00).with_error(ErrorKind::Other)];

        let mut sensor = sensor(&expectations);
        let err = sensor.set_mode(Mode::RangeContinuous).unwrap_err();
        assert!(matches!(err, Error::I2cError(ErrorKind::Other)));
        assert_eq!(sensor.mode(), Mode::RangeContinuous);
        finish(sensor);
    }

    #[test]
    fn analog_gain_writes_tier_code() {
        let expectations = [
            write(Register::SysalsAnalogueGain, 2),
            write(Register::SysalsAnalogueGain, 7),
            write(Register::SysalsAnalogueGain, 4),
        ];

        let mut sensor = sensor(&expectations);
        assert_eq!(sensor.set_analog_gain(3.0).unwrap(), AnalogGain::X5);
        assert_eq!(sensor.set_analog_gain(40.0).unwrap(), AnalogGain::X40);
        assert_eq!(sensor.analog_gain(), AnalogGain::X40);
        assert_eq!(sensor.set_analog_gain(1.6).unwrap(), AnalogGain::X1p67);
        finish(sensor);
    }

    #[test]
    fn analog_gain_above_max_falls_back_to_unity() {
        let expectations = [
            write(Register::SysalsAnalogueGain, 1),
            write(Register::SysalsAnalogueGain, 6),
        ];

        let mut sensor = sensor(&expectations);
        sensor.set_analog_gain(10.0).unwrap();
        assert_eq!(sensor.set_analog_gain(80.0).unwrap(), AnalogGain::X1);
        assert_eq!(sensor.analog_gain(), AnalogGain::X1);
        finish(sensor);
    }

    #[test]
    fn invalid_analog_gain_is_rejected_without_bus_traffic() {
        let mut sensor = sensor(&[]);
        for gain in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let err = sensor.set_analog_gain(gain).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument));
        }
        assert_eq!(sensor.analog_gain(), AnalogGain::X1);
        finish(sensor);
    }

    #[test]
    fn integration_period_bounds() {
        let expectations = [
            write(Register::SysalsIntegrationPeriod, 0),
            write(Register::SysalsIntegrationPeriod, 255),
        ];

        let mut sensor = sensor(&expectations);
        sensor.set_integration_period(1).unwrap();
        assert_eq!(sensor.integration_period_ms(), 1);
        sensor.set_integration_period(256).unwrap();
        assert_eq!(sensor.integration_period_ms(), 256);
        assert!(matches!(
            sensor.set_integration_period(0),
            Err(Error::InvalidArgument)
        ));
        assert!(matches!(
            sensor.set_integration_period(257),
            Err(Error::InvalidArgument)
        ));
        assert_eq!(sensor.integration_period_ms(), 256);
        finish(sensor);
    }

    #[test]
    fn range_single_shot_polls_until_ready() {
        let mut expectations = clear_sequence();
        expectations.extend([
            write(Register::SysrangeStart, 0x01),
            read(Register::ResultInterruptStatusGpio, &[0x00]),
            read(Register::ResultInterruptStatusGpio, &[0x20]),
            read(Register::ResultInterruptStatusGpio, &[0x04]),
            read(Register::ResultRangeVal, &[0x0A]),
            write(Register::SystemInterruptClear, 0x01),
        ]);

        let mut sensor = sensor(&expectations);
        assert_eq!(sensor.read_range_single_shot().unwrap(), 10);
        assert_eq!(sensor.mode(), Mode::RangeSingleShot);
        finish(sensor);
    }

    #[test]
    fn als_single_shot_decodes_lux() {
        let mut expectations = clear_sequence();
        expectations.extend([
            write(Register::SysalsStart, 0x01),
            read(Register::ResultInterruptStatusGpio, &[0x04]),
            read(Register::ResultInterruptStatusGpio, &[0x20]),
            read(Register::ResultAlsVal, &[0x00, 0x64]),
            write(Register::SystemInterruptClear, 0x02),
        ]);

        let mut sensor = sensor(&expectations);
        let lux = sensor.read_als_single_shot().unwrap();
        assert!((lux - 32.0).abs() < 1e-4);
        assert_eq!(sensor.mode(), Mode::AlsSingleShot);
        finish(sensor);
    }

    #[test]
    fn als_single_shot_uses_stored_gain_and_period() {
        let mut expectations = vec![
            write(Register::SysalsAnalogueGain, 1),
            write(Register::SysalsIntegrationPeriod, 49),
        ];
        expectations.extend(clear_sequence());
        expectations.extend([
            write(Register::SysalsStart, 0x01),
            read(Register::ResultInterruptStatusGpio, &[0x20]),
            read(Register::ResultAlsVal, &[0x12, 0x34]),
            write(Register::SystemInterruptClear, 0x02),
        ]);

        let mut sensor = sensor(&expectations);
        sensor.set_analog_gain(10.0).unwrap();
        sensor.set_integration_period(50).unwrap();
        let lux = sensor.read_als_single_shot().unwrap();
        // 0x1234 counts / 10x gain, twice the reference rate at 50 ms
        let expected = 0.32 * (4660.0 / 10.0) * 2.0;
        assert!((lux - expected).abs() < 1e-3);
        finish(sensor);
    }

    #[test]
    fn poll_gives_up_after_budget() {
        let mut expectations = clear_sequence();
        expectations.extend([
            write(Register::SysrangeStart, 0x01),
            read(Register::ResultInterruptStatusGpio, &[0x00]),
            read(Register::ResultInterruptStatusGpio, &[0x00]),
            read(Register::ResultInterruptStatusGpio, &[0x00]),
        ]);

        let mut sensor = sensor(&expectations);
        sensor.set_max_poll_attempts(3).unwrap();
        let err = sensor.read_range_single_shot().unwrap_err();
        assert!(matches!(err, Error::Timeout));
        finish(sensor);
    }

    #[test]
    fn zero_poll_budget_is_rejected() {
        let mut sensor = sensor(&[]);
        assert!(matches!(
            sensor.set_max_poll_attempts(0),
            Err(Error::InvalidArgument)
        ));
        assert_eq!(sensor.max_poll_attempts(), DEFAULT_MAX_POLL_ATTEMPTS);
        finish(sensor);
    }

    #[test]
    fn bus_error_while_polling_is_propagated() {
        let mut expectations = clear_sequence();
        expectations.extend([
            write(Register::SysalsStart, 0x01),
            read(Register::ResultInterruptStatusGpio, &[0x00]).with_error(ErrorKind::Other),
        ]);

        let mut sensor = sensor(&expectations);
        let err = sensor.read_als_single_shot().unwrap_err();
        assert!(matches!(err, Error::I2cError(ErrorKind::Other)));
        finish(sensor);
    }

    #[test]
    fn measure_single_shot_dispatches_on_channel() {
        let mut expectations = clear_sequence();
        expectations.extend([
            write(Register::SysrangeStart, 0x01),
            read(Register::ResultInterruptStatusGpio, &[0x04]),
            read(Register::ResultRangeVal, &[0xFF]),
            write(Register::SystemInterruptClear, 0x01),
        ]);

        let mut sensor = sensor(&expectations);
        assert_eq!(
            sensor.measure_single_shot(Channel::Range).unwrap(),
            Measurement::Range(255)
        );
        finish(sensor);
    }

    #[test]
    fn continuous_range_read_does_not_retrigger() {
        let mut expectations = clear_sequence();
        expectations.extend([
            write(Register::SysrangeStart, 0x03),
            read(Register::ResultInterruptStatusGpio, &[0x04]),
            read(Register::ResultRangeVal, &[0x2A]),
            write(Register::SystemInterruptClear, 0x01),
        ]);

        let mut sensor = sensor(&expectations);
        sensor.set_mode(Mode::RangeContinuous).unwrap();
        assert_eq!(sensor.read_range_from_continuous().unwrap(), 42);
        assert_eq!(sensor.mode(), Mode::RangeContinuous);
        finish(sensor);
    }

    #[test]
    fn continuous_als_read_in_interleaved_mode() {
        let expectations = [
            write(Register::InterleavedModeEnable, 0x01),
            read(Register::ResultInterruptStatusGpio, &[0x24]),
            read(Register::ResultAlsVal, &[0x00, 0x00]),
            write(Register::SystemInterruptClear, 0x02),
        ];

        let mut sensor = sensor(&expectations);
        sensor.set_mode(Mode::Interleaved).unwrap();
        let lux = sensor.read_als_from_continuous().unwrap();
        assert!(lux.abs() < 1e-6);
        finish(sensor);
    }

    #[test]
    fn continuous_read_requires_continuous_channel() {
        let mut sensor = sensor(&[]);
        assert!(matches!(
            sensor.read_range_from_continuous(),
            Err(Error::NotContinuous)
        ));
        assert!(matches!(
            sensor.read_als_from_continuous(),
            Err(Error::NotContinuous)
        ));
        finish(sensor);
    }

    #[test]
    fn status_helpers_read_once() {
        let expectations = [
            read(Register::ResultInterruptStatusGpio, &[0x04]),
            read(Register::ResultInterruptStatusGpio, &[0x04]),
        ];

        let mut sensor = sensor(&expectations);
        assert!(sensor.new_range_data().unwrap());
        assert!(!sensor.new_als_data().unwrap());
        finish(sensor);
    }

    #[test]
    fn word_access_is_big_endian_with_wide_address() {
        let expectations = [
            I2cTransaction::write(DEVICE_ADDRESS, vec![0x00, 0x3A, 0x01, 0x02]),
            I2cTransaction::write_read(DEVICE_ADDRESS, vec![0x00, 0x50], vec![0xAB, 0xCD]),
        ];

        let mut sensor = sensor(&expectations);
        sensor.write_word(Register::SysalsThreshHigh, 0x0102).unwrap();
        assert_eq!(sensor.read_word(Register::ResultAlsVal).unwrap(), 0xABCD);
        finish(sensor);
    }
}
