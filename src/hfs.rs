//! Apple HFS/HFS+ time: a 32-bit count of seconds since
//! 1904-01-01T00:00:00, interpreted in local time (this crate performs no
//! time-zone lookups; the rendered time is the stored value, uninterpreted).

use crate::calendar;
use crate::values::{
    hex_fallback_single_width, write_hex_fallback_single, CodeUnit, DateTimeFormat,
    DateTimeValues, StringFormatFlags,
};
use crate::{byteorder, CoreError, Endian};

const HEX_FALLBACK_WIDTH: usize = hex_fallback_single_width(8);
const EPOCH_YEAR: i32 = 1904;

/// An HFS/HFS+ timestamp: seconds since 1904-01-01T00:00:00.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HfsTime(pub u32);

impl HfsTime {
    #[must_use]
    pub const fn new(seconds: u32) -> Self {
        Self(seconds)
    }

    pub fn from_byte_stream(bytes: &[u8], endian: Endian) -> Result<Self, CoreError> {
        if bytes.len() < 4 {
            return Err(CoreError::ValueTooSmall("byte stream too small"));
        }
        Ok(Self(byteorder::read_u32(bytes, endian)))
    }

    #[must_use]
    pub const fn seconds(self) -> u32 {
        self.0
    }

    fn date_time_values(&self) -> DateTimeValues {
        let (year, month, day, hours, minutes, seconds) =
            calendar::unwind_seconds(EPOCH_YEAR, i64::from(self.0));
        DateTimeValues {
            year: year as u16,
            month,
            day,
            hours,
            minutes,
            seconds,
            milli_seconds: 0,
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
        write_hex_fallback_single(buf, index, u64::from(self.0), 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_big_endian_scenario() {
        let hfs = HfsTime::from_byte_stream(&[0xcc, 0x28, 0xb9, 0x75], Endian::Big).unwrap();
        let flags = StringFormatFlags::DATE_TIME;
        let size = HfsTime::string_size(flags, DateTimeFormat::Ctime).unwrap();
        let mut buf = vec![0u8; size];
        let mut idx = 0;
        hfs.write_with_index(&mut buf, &mut idx, flags, DateTimeFormat::Ctime)
            .unwrap();
        let s = core::str::from_utf8(&buf[..idx - 1]).unwrap();
        assert_eq!(s, "Jul 15, 2012 18:16:21");
    }

    #[test]
    fn byte_stream_too_short_is_an_error() {
        let err = HfsTime::from_byte_stream(&[0xcc, 0x28, 0xb9], Endian::Big).unwrap_err();
        assert_eq!(err, CoreError::ValueTooSmall("byte stream too small"));
    }
}
