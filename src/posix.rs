//! POSIX time in its six supported wire representations: 32- or 64-bit
//! width, signed or unsigned, at whole-second, microsecond, or nanosecond
//! resolution (not every width/signedness/resolution combination is wired
//! up — only the six the source format actually carries).

use crate::calendar;
use crate::values::{
    hex_fallback_single_width, write_hex_fallback_single, CodeUnit, DateTimeFormat,
    DateTimeValues, StringFormatFlags,
};
use crate::{byteorder, CoreError, Endian};

const HEX_FALLBACK_WIDTH_32BIT: usize = hex_fallback_single_width(8);
const HEX_FALLBACK_WIDTH_64BIT: usize = hex_fallback_single_width(16);
const EPOCH_YEAR: i32 = 1970;

/// Which of the six wire representations a [`PosixTime`] carries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PosixTimeValueType {
    Seconds32BitUnsigned,
    Seconds32BitSigned,
    Seconds64BitUnsigned,
    Seconds64BitSigned,
    MicroSeconds64BitSigned,
    NanoSeconds64BitSigned,
}

impl PosixTimeValueType {
    const fn is_32bit(self) -> bool {
        matches!(
            self,
            Self::Seconds32BitUnsigned | Self::Seconds32BitSigned
        )
    }

    const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::Seconds32BitSigned
                | Self::Seconds64BitSigned
                | Self::MicroSeconds64BitSigned
                | Self::NanoSeconds64BitSigned
        )
    }

    /// Divisor turning the raw integer into whole seconds: 1 for the
    /// second-resolution variants, 10^6 for microseconds, 10^9 for
    /// nanoseconds.
    const fn divisor(self) -> i64 {
        match self {
            Self::MicroSeconds64BitSigned => 1_000_000,
            Self::NanoSeconds64BitSigned => 1_000_000_000,
            _ => 1,
        }
    }
}

/// A POSIX timestamp, stored as the raw wire bit pattern plus the
/// [`PosixTimeValueType`] that says how to interpret it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PosixTime {
    pub value: u64,
    pub value_type: PosixTimeValueType,
}

impl PosixTime {
    /// Builds a `PosixTime` from its raw wire value, rejecting the
    /// width-appropriate "invalid" sentinel (`0x80000000` for 32-bit,
    /// `0x8000000000000000` for 64-bit) on the signed variants.
    pub fn new(value: u64, value_type: PosixTimeValueType) -> Result<Self, CoreError> {
        let is_sentinel = if value_type.is_32bit() {
            value == 0x8000_0000
        } else {
            value == 0x8000_0000_0000_0000
        };
        if value_type.is_signed() && is_sentinel {
            return Err(CoreError::UnsupportedValue(
                "posix time sentinel value is not valid",
            ));
        }
        Ok(Self { value, value_type })
    }

    /// Decodes the wire-appropriate width (4 bytes for the 32-bit
    /// variants, 8 otherwise) in the given endianness.
    pub fn from_byte_stream(
        bytes: &[u8],
        endian: Endian,
        value_type: PosixTimeValueType,
    ) -> Result<Self, CoreError> {
        if value_type.is_32bit() {
            if bytes.len() < 4 {
                return Err(CoreError::ValueTooSmall("byte stream too small"));
            }
            Self::copy_from_u32(byteorder::read_u32(bytes, endian), value_type)
        } else {
            if bytes.len() < 8 {
                return Err(CoreError::ValueTooSmall("byte stream too small"));
            }
            Self::copy_from_u64(byteorder::read_u64(bytes, endian), value_type)
        }
    }

    /// Builds a `PosixTime` from a 32-bit wire integer. Rejects a
    /// `value_type` that doesn't name one of the 32-bit variants, the
    /// way the source library's 32-bit setter rejects a 64-bit tag.
    pub fn copy_from_u32(value: u32, value_type: PosixTimeValueType) -> Result<Self, CoreError> {
        if !value_type.is_32bit() {
            return Err(CoreError::UnsupportedValue(
                "value_type does not match a 32-bit posix time",
            ));
        }
        Self::new(u64::from(value), value_type)
    }

    /// Builds a `PosixTime` from a 64-bit wire integer. Rejects a
    /// `value_type` that names one of the 32-bit variants, the way the
    /// source library's 64-bit setter rejects a 32-bit tag.
    pub fn copy_from_u64(value: u64, value_type: PosixTimeValueType) -> Result<Self, CoreError> {
        if value_type.is_32bit() {
            return Err(CoreError::UnsupportedValue(
                "value_type does not match a 64-bit posix time",
            ));
        }
        Self::new(value, value_type)
    }

    /// Returns the raw wire value as a 32-bit integer. Fails with
    /// [`CoreError::UnsupportedValue`] when this `PosixTime` actually
    /// stores one of the 64-bit variants, matching the source library's
    /// 32-bit getter.
    pub fn copy_to_u32(&self) -> Result<u32, CoreError> {
        if !self.value_type.is_32bit() {
            return Err(CoreError::UnsupportedValue(
                "posix time does not fit a 32-bit getter",
            ));
        }
        Ok(self.value as u32)
    }

    /// Returns the raw wire value as a 64-bit integer. Always succeeds:
    /// every stored variant, 32- or 64-bit, widens losslessly.
    #[must_use]
    pub const fn copy_to_u64(&self) -> u64 {
        self.value
    }

    fn signed_seconds_and_subsecond(&self) -> (i64, i64) {
        let divisor = self.value_type.divisor();
        let raw = if self.value_type.is_32bit() {
            if self.value_type.is_signed() {
                i64::from(self.value as u32 as i32)
            } else {
                i64::from(self.value as u32)
            }
        } else if self.value_type.is_signed() {
            self.value as i64
        } else {
            // Unsigned 64-bit: values beyond i64::MAX are out of the range
            // this crate's Non-goals promise to cover.
            self.value as i64
        };
        (raw.div_euclid(divisor), raw.rem_euclid(divisor))
    }

    fn date_time_values(&self) -> DateTimeValues {
        let (seconds, subsecond) = self.signed_seconds_and_subsecond();
        let (year, month, day, hours, minutes, secs) =
            calendar::unwind_seconds(EPOCH_YEAR, seconds);

        let (milli_seconds, micro_seconds, nano_seconds) = match self.value_type {
            PosixTimeValueType::MicroSeconds64BitSigned => {
                ((subsecond / 1000) as u16, (subsecond % 1000) as u16, 0)
            }
            PosixTimeValueType::NanoSeconds64BitSigned => (
                (subsecond / 1_000_000) as u16,
                ((subsecond / 1000) % 1000) as u16,
                (subsecond % 1000) as u16,
            ),
            _ => (0, 0, 0),
        };

        DateTimeValues {
            year: year as u16,
            month,
            day,
            hours,
            minutes,
            seconds: secs,
            milli_seconds,
            micro_seconds,
            nano_seconds,
        }
    }

    fn hex_fallback_width(&self) -> usize {
        if self.value_type.is_32bit() {
            HEX_FALLBACK_WIDTH_32BIT
        } else {
            HEX_FALLBACK_WIDTH_64BIT
        }
    }

    pub fn string_size(
        &self,
        flags: StringFormatFlags,
        format: DateTimeFormat,
    ) -> Result<usize, CoreError> {
        let size = DateTimeValues::string_size(flags, format)?;
        Ok(size.max(self.hex_fallback_width()))
    }

    pub fn write_with_index<W: CodeUnit>(
        &self,
        buf: &mut [W],
        index: &mut usize,
        flags: StringFormatFlags,
        format: DateTimeFormat,
    ) -> Result<(), CoreError> {
        let values = self.date_time_values();
        if values.write_with_index(buf, index, flags, format)? {
            return Ok(());
        }
        let digits = if self.value_type.is_32bit() { 8 } else { 16 };
        write_hex_fallback_single(buf, index, self.value, digits)
    }
}
