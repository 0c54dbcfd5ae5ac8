//! The Windows FILETIME: a 64-bit count of 100-nanosecond ticks since
//! 1601-01-01T00:00:00Z, split across an `upper` and `lower` 32-bit half.

use crate::calendar;
use crate::values::{
    hex_fallback_pair_width, write_hex_fallback_pair, CodeUnit, DateTimeFormat, DateTimeValues,
    StringFormatFlags,
};
use crate::{byteorder, CoreError, Endian};

const HEX_FALLBACK_WIDTH: usize = hex_fallback_pair_width(8, 8);
const TICKS_PER_SECOND: u64 = 10_000_000;

/// A Windows FILETIME, stored as the wire format stores it: two 32-bit
/// halves rather than one `u64`, so [`Self::add`] can reproduce the source
/// library's addition exactly (see its docs).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Filetime {
    pub upper: u32,
    pub lower: u32,
}

impl Filetime {
    #[must_use]
    pub const fn new(upper: u32, lower: u32) -> Self {
        Self { upper, lower }
    }

    /// Decodes 8 bytes: little-endian reads `lower` then `upper` (each a
    /// little-endian `u32`); big-endian reads `upper` then `lower` (each a
    /// big-endian `u32`).
    pub fn from_byte_stream(bytes: &[u8], endian: Endian) -> Result<Self, CoreError> {
        if bytes.len() < 8 {
            return Err(CoreError::ValueTooSmall("byte stream too small"));
        }
        Ok(match endian {
            Endian::Little => Self {
                lower: byteorder::read_u32(bytes, endian),
                upper: byteorder::read_u32(&bytes[4..], endian),
            },
            Endian::Big => Self {
                upper: byteorder::read_u32(bytes, endian),
                lower: byteorder::read_u32(&bytes[4..], endian),
            },
        })
    }

    #[must_use]
    pub const fn from_u64(value: u64) -> Self {
        Self {
            upper: (value >> 32) as u32,
            lower: (value & 0xffff_ffff) as u32,
        }
    }

    #[must_use]
    pub const fn to_u64(self) -> u64 {
        ((self.upper as u64) << 32) | self.lower as u64
    }

    /// Adds `other` into `self` component-wise, with **no carry** from
    /// `lower` into `upper`. This reproduces the source library's addition
    /// verbatim (it is almost certainly a bug there); use
    /// [`Self::checked_add_full`] for a correct 64-bit addition.
    pub fn add(&mut self, other: Self) {
        self.lower = self.lower.wrapping_add(other.lower);
        self.upper = self.upper.wrapping_add(other.upper);
    }

    /// A correct 64-bit addition, returning `None` on overflow.
    #[must_use]
    pub fn checked_add_full(self, other: Self) -> Option<Self> {
        self.to_u64()
            .checked_add(other.to_u64())
            .map(Self::from_u64)
    }

    fn date_time_values(&self) -> DateTimeValues {
        let total_ticks = self.to_u64();
        let remainder_100ns = total_ticks % TICKS_PER_SECOND;
        let total_seconds = (total_ticks / TICKS_PER_SECOND) as i64;

        let (year, month, day, hours, minutes, seconds) =
            calendar::unwind_seconds(1601, total_seconds);

        DateTimeValues {
            year: year as u16,
            month,
            day,
            hours,
            minutes,
            seconds,
            milli_seconds: ((remainder_100ns / 10_000) % 1000) as u16,
            micro_seconds: ((remainder_100ns / 10) % 1000) as u16,
            nano_seconds: ((remainder_100ns % 10) * 100) as u16,
        }
    }

    pub fn string_size(
        flags: StringFormatFlags,
        format: DateTimeFormat,
    ) -> Result<usize, CoreError> {
        let size = DateTimeValues::string_size(flags, format)?;
        Ok(size.max(HEX_FALLBACK_WIDTH))
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
        write_hex_fallback_pair(
            buf,
            index,
            u64::from(self.upper),
            8,
            u64::from(self.lower),
            8,
        )
    }
}
