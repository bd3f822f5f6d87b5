//! VL6180 register map.
//!
//! Addresses are 16 bits wide on the bus (high byte first), even though most of
//! the map lives below `0x100`.

/// Register addresses for the VL6180 sensor.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Model identification (0x000), reads [`MODEL_ID`](crate::MODEL_ID)
    IdentificationModelId = 0x000,
    /// Model revision, major (0x001)
    IdentificationModelRevMajor = 0x001,
    /// Model revision, minor (0x002)
    IdentificationModelRevMinor = 0x002,
    /// Module revision, major (0x003)
    IdentificationModuleRevMajor = 0x003,
    /// Module revision, minor (0x004)
    IdentificationModuleRevMinor = 0x004,
    /// Manufacturing date, high byte (0x006)
    IdentificationDateHi = 0x006,
    /// Manufacturing date, low byte (0x007)
    IdentificationDateLow = 0x007,
    /// Manufacturing time, 16-bit (0x008)
    IdentificationTime = 0x008,
    /// GPIO0 mode (0x010)
    SystemModeGpio0 = 0x010,
    /// GPIO1 mode (0x011)
    SystemModeGpio1 = 0x011,
    /// History buffer control (0x012)
    SystemHistoryCtrl = 0x012,
    /// Interrupt source configuration on GPIO1 (0x014)
    SystemInterruptConfigGpio = 0x014,
    /// Interrupt clear, bit 0 range, bit 1 ALS, bit 2 error (0x015)
    SystemInterruptClear = 0x015,
    /// Fresh out of reset flag (0x016)
    SystemFreshOutOfReset = 0x016,
    /// Grouped parameter hold (0x017)
    SystemGroupedParameterHold = 0x017,
    /// Range start/stop and mode select (0x018)
    SysrangeStart = 0x018,
    /// Range high threshold (0x019)
    SysrangeThreshHigh = 0x019,
    /// Range low threshold (0x01A)
    SysrangeThreshLow = 0x01A,
    /// Range inter-measurement period (0x01B)
    SysrangeIntermeasurementPeriod = 0x01B,
    /// Range maximum convergence time (0x01C)
    SysrangeMaxConvergenceTime = 0x01C,
    /// Crosstalk compensation rate, 16-bit (0x01E)
    SysrangeCrosstalkCompensationRate = 0x01E,
    /// Crosstalk valid height (0x021)
    SysrangeCrosstalkValidHeight = 0x021,
    /// Early convergence estimate, 16-bit (0x022)
    SysrangeEarlyConvergenceEstimate = 0x022,
    /// Part to part range offset (0x024)
    SysrangePartToPartRangeOffset = 0x024,
    /// Range ignore valid height (0x025)
    SysrangeRangeIgnoreValidHeight = 0x025,
    /// Range ignore threshold, 16-bit (0x026)
    SysrangeRangeIgnoreThreshold = 0x026,
    /// Maximum ambient level multiplier (0x02C)
    SysrangeMaxAmbientLevelMult = 0x02C,
    /// Range check enables (0x02D)
    SysrangeRangeCheckEnables = 0x02D,
    /// VHV recalibrate (0x02E)
    SysrangeRecalibrate = 0x02E,
    /// VHV repeat rate (0x031)
    SysrangeRepeatRate = 0x031,
    /// ALS start/stop and mode select (0x038)
    SysalsStart = 0x038,
    /// ALS high threshold, 16-bit (0x03A)
    SysalsThreshHigh = 0x03A,
    /// ALS low threshold, 16-bit (0x03C)
    SysalsThreshLow = 0x03C,
    /// ALS inter-measurement period (0x03E)
    SysalsIntermeasurementPeriod = 0x03E,
    /// ALS analogue gain code (0x03F)
    SysalsAnalogueGain = 0x03F,
    /// ALS integration period, encoded as `ms - 1` (0x040)
    SysalsIntegrationPeriod = 0x040,
    /// Range result status (0x04D)
    ResultRangeStatus = 0x04D,
    /// ALS result status (0x04E)
    ResultAlsStatus = 0x04E,
    /// Interrupt status, range in bits [2:0], ALS in bits [5:3] (0x04F)
    ResultInterruptStatusGpio = 0x04F,
    /// ALS result, 16-bit big-endian count (0x050)
    ResultAlsVal = 0x050,
    /// History buffer 0, 16-bit (0x052)
    ResultHistoryBuffer0 = 0x052,
    /// History buffer 1, 16-bit (0x054)
    ResultHistoryBuffer1 = 0x054,
    /// History buffer 2, 16-bit (0x056)
    ResultHistoryBuffer2 = 0x056,
    /// History buffer 3, 16-bit (0x058)
    ResultHistoryBuffer3 = 0x058,
    /// History buffer 4, 16-bit (0x05A)
    ResultHistoryBuffer4 = 0x05A,
    /// History buffer 5, 16-bit (0x05C)
    ResultHistoryBuffer5 = 0x05C,
    /// History buffer 6, 16-bit (0x05E)
    ResultHistoryBuffer6 = 0x05E,
    /// History buffer 7, 16-bit (0x060)
    ResultHistoryBuffer7 = 0x060,
    /// Range result in millimeters (0x062)
    ResultRangeVal = 0x062,
    /// Raw range result (0x064)
    ResultRangeRaw = 0x064,
    /// Range return signal rate, 16-bit (0x066)
    ResultRangeReturnRate = 0x066,
    /// Range reference signal rate, 16-bit (0x068)
    ResultRangeReferenceRate = 0x068,
    /// Range return signal count, 32-bit (0x06C)
    ResultRangeReturnSignalCount = 0x06C,
    /// Range reference signal count, 32-bit (0x070)
    ResultRangeReferenceSignalCount = 0x070,
    /// Range return ambient count, 32-bit (0x074)
    ResultRangeReturnAmbCount = 0x074,
    /// Range reference ambient count, 32-bit (0x078)
    ResultRangeReferenceAmbCount = 0x078,
    /// Range return convergence time, 32-bit (0x07C)
    ResultRangeReturnConvTime = 0x07C,
    /// Range reference convergence time, 32-bit (0x080)
    ResultRangeReferenceConvTime = 0x080,
    /// Readout averaging sample period (0x10A)
    ReadoutAveragingSamplePeriod = 0x10A,
    /// Firmware bootup flag (0x119)
    FirmwareBootup = 0x119,
    /// Firmware result scaler (0x120)
    FirmwareResultScaler = 0x120,
    /// I2C slave device address (0x212)
    I2cSlaveDeviceAddress = 0x212,
    /// Interleaved mode enable (0x2A3)
    InterleavedModeEnable = 0x2A3,
}

impl From<Register> for u16 {
    fn from(r: Register) -> Self {
        r as u16
    }
}
