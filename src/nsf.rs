//! The Lotus Notes/Domino (NSF) timedate: a Julian day number paired with
//! a hundredths-of-a-second count within that day, plus a packed
//! time-zone/DST tag that is decoded but never applied to the rendered
//! output (the source library marks this a TODO; this crate preserves
//! that behavior and exposes the decoded bits as accessors instead).

use crate::calendar;
use crate::values::{
    hex_fallback_pair_width, write_hex_fallback_pair, CodeUnit, DateTimeFormat, DateTimeValues,
    StringFormatFlags,
};
use crate::{byteorder, CoreError, Endian};

const HEX_FALLBACK_WIDTH: usize = hex_fallback_pair_width(8, 8);

/// An NSF timedate: `lower` is a hundredths-of-a-second count within the
/// day, `upper` packs a 24-bit Julian day number plus time-zone/DST bits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NsfTimedate {
    pub lower: u32,
    pub upper: u32,
}

impl NsfTimedate {
    #[must_use]
    pub const fn new(lower: u32, upper: u32) -> Self {
        Self { lower, upper }
    }

    /// Decodes 8 bytes: little-endian reads `lower` then `upper` (each a
    /// little-endian `u32`); big-endian reads `upper` then `lower` (each a
    /// big-endian `u32`) — the same layout convention as [`crate::Filetime`].
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

    /// The 24-bit Julian day number (bits 0-23 of `upper`).
    #[must_use]
    pub const fn julian_day(self) -> u32 {
        self.upper & 0x00ff_ffff
    }

    /// UTC offset in whole hours, as stored (bits 24-27 of `upper`).
    #[must_use]
    pub const fn utc_offset_hours(self) -> u32 {
        (self.upper >> 24) & 0x0f
    }

    /// UTC offset in 15-minute quarters beyond the whole-hour part (bits
    /// 28-29 of `upper`).
    #[must_use]
    pub const fn utc_offset_quarters(self) -> u32 {
        (self.upper >> 28) & 0x03
    }

    /// Whether the UTC offset is positive (bit 30 of `upper`; `false`
    /// means negative).
    #[must_use]
    pub const fn utc_offset_is_positive(self) -> bool {
        (self.upper >> 30) & 0x01 != 0
    }

    /// The decoded DST flag (bit 31 of `upper`).
    #[must_use]
    pub const fn is_dst(self) -> bool {
        (self.upper >> 31) & 0x01 != 0
    }

    fn date_time_values(&self) -> DateTimeValues {
        let (year, month, day) = calendar::julian_day_to_gregorian(i64::from(self.julian_day()));

        let total_hundredths = self.lower;
        let seconds_of_day = total_hundredths / 100;
        let remainder_hundredths = total_hundredths % 100;

        let hours = (seconds_of_day / 3600) as u8;
        let minutes = ((seconds_of_day % 3600) / 60) as u8;
        let seconds = (seconds_of_day % 60) as u8;

        DateTimeValues {
            year: year as u16,
            month,
            day,
            hours,
            minutes,
            seconds,
            milli_seconds: (remainder_hundredths * 10) as u16,
            micro_seconds: 0,
            nano_seconds: 0,
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
        write_hex_fallback_pair(buf, index, u64::from(self.upper), 8, u64::from(self.lower), 8)
    }
}
