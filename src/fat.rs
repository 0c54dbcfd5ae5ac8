//! The FAT filesystem's packed 32-bit date and time: a 16-bit date and a
//! 16-bit time, each a small bitfield, together spanning 1980-2107 at
//! 2-second resolution.

use crate::values::{
    hex_fallback_pair_width, write_hex_fallback_pair, CodeUnit, DateTimeFormat, DateTimeValues,
    StringFormatFlags,
};
use crate::{byteorder, CoreError, Endian};

const HEX_FALLBACK_WIDTH: usize = hex_fallback_pair_width(4, 4);

/// A FAT packed date and time: `date` bits 9-15 are years since 1980,
/// 5-8 the month, 0-4 the day; `time` bits 11-15 are hours, 5-10 minutes,
/// 0-4 seconds/2 (so real seconds are even, 0-58).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FatDateTime {
    pub date: u16,
    pub time: u16,
}

impl FatDateTime {
    /// Builds a `FatDateTime` directly from its packed fields.
    #[must_use]
    pub const fn new(date: u16, time: u16) -> Self {
        Self { date, time }
    }

    /// Decodes 4 bytes in the given endianness into `date` then `time`.
    pub fn from_byte_stream(bytes: &[u8], endian: Endian) -> Result<Self, CoreError> {
        if bytes.len() < 4 {
            return Err(CoreError::ValueTooSmall("byte stream too small"));
        }
        let date = byteorder::read_u16(bytes, endian);
        let time = byteorder::read_u16(&bytes[2..], endian);
        Ok(Self { date, time })
    }

    /// Recovers the packed `date`/`time` pair from a 32-bit integer with
    /// `date` in the high 16 bits and `time` in the low 16 bits.
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Self {
            date: (value >> 16) as u16,
            time: (value & 0xffff) as u16,
        }
    }

    /// The inverse of [`Self::from_u32`].
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        ((self.date as u32) << 16) | self.time as u32
    }

    fn date_time_values(&self) -> DateTimeValues {
        DateTimeValues {
            year: 1980 + ((self.date >> 9) & 0x7f),
            month: ((self.date >> 5) & 0x0f) as u8,
            day: (self.date & 0x1f) as u8,
            hours: ((self.time >> 11) & 0x1f) as u8,
            minutes: ((self.time >> 5) & 0x3f) as u8,
            seconds: (self.time & 0x1f) as u8 * 2,
            milli_seconds: 0,
            micro_seconds: 0,
            nano_seconds: 0,
        }
    }

    /// The exact buffer size `write_utf8_with_index` and friends need,
    /// including the terminating NUL and enough room for the hex fallback.
    pub fn string_size(
        flags: StringFormatFlags,
        format: DateTimeFormat,
    ) -> Result<usize, CoreError> {
        let size = DateTimeValues::string_size(flags, format)?;
        Ok(size.max(HEX_FALLBACK_WIDTH))
    }

    /// Renders the date/time (or, if invalid, its hex fallback) into `buf`
    /// starting at `*index`, advancing `*index` past what was written.
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
        write_hex_fallback_pair(buf, index, u64::from(self.date), 4, u64::from(self.time), 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_little_endian_scenario() {
        let fat = FatDateTime::from_byte_stream(&[0x0c, 0x3d, 0xd0, 0xa8], Endian::Little)
            .unwrap();
        let flags = StringFormatFlags::DATE_TIME;
        let size = FatDateTime::string_size(flags, DateTimeFormat::Ctime).unwrap();
        let mut buf = vec![0u8; size];
        let mut idx = 0;
        fat.write_with_index(&mut buf, &mut idx, flags, DateTimeFormat::Ctime)
            .unwrap();
        let s = core::str::from_utf8(&buf[..idx - 1]).unwrap();
        assert_eq!(s, "Aug 12, 2010 21:06:32");
    }

    #[test]
    fn big_endian_interpretation_falls_back_to_hex() {
        let fat =
            FatDateTime::from_byte_stream(&[0x0c, 0x3d, 0xd0, 0xa8], Endian::Big).unwrap();
        let flags = StringFormatFlags::DATE_TIME;
        let size = FatDateTime::string_size(flags, DateTimeFormat::Ctime).unwrap();
        let mut buf = vec![0u8; size];
        let mut idx = 0;
        fat.write_with_index(&mut buf, &mut idx, flags, DateTimeFormat::Ctime)
            .unwrap();
        let s = core::str::from_utf8(&buf[..idx - 1]).unwrap();
        assert_eq!(s, "(0x0c3d 0xd0a8)");
    }

    #[test]
    fn integer_round_trip() {
        let fat = FatDateTime::new(0x0c3d, 0xd0a8);
        assert_eq!(FatDateTime::from_u32(fat.to_u32()), fat);
    }

    #[test]
    fn byte_stream_too_short_is_an_error() {
        let err = FatDateTime::from_byte_stream(&[0x0c, 0x3d, 0xd0], Endian::Little).unwrap_err();
        assert_eq!(err, CoreError::ValueTooSmall("byte stream too small"));
    }
}
