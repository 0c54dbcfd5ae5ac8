//! The Windows `SYSTEMTIME` structure: eight 16-bit fields already split
//! into calendar components, so no epoch arithmetic is needed — only
//! validation and rendering.

use crate::values::{CodeUnit, DateTimeFormat, DateTimeValues, StringFormatFlags};
use crate::{byteorder, CoreError, Endian};

/// A Windows `SYSTEMTIME`: year, month, weekday (ignored on rendering),
/// day, hours, minutes, seconds, milliseconds, in that wire order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Systemtime {
    pub year: u16,
    pub month: u16,
    pub weekday: u16,
    pub day: u16,
    pub hours: u16,
    pub minutes: u16,
    pub seconds: u16,
    pub milli_seconds: u16,
}

impl Systemtime {
    /// Decodes 16 bytes as 8 consecutive `u16` fields in the given
    /// endianness, in wire order.
    pub fn from_byte_stream(bytes: &[u8], endian: Endian) -> Result<Self, CoreError> {
        if bytes.len() < 16 {
            return Err(CoreError::ValueTooSmall("byte stream too small"));
        }
        let read = |offset: usize| byteorder::read_u16(&bytes[offset..], endian);
        Ok(Self {
            year: read(0),
            month: read(2),
            weekday: read(4),
            day: read(6),
            hours: read(8),
            minutes: read(10),
            seconds: read(12),
            milli_seconds: read(14),
        })
    }

    fn date_time_values(&self) -> DateTimeValues {
        DateTimeValues {
            year: self.year,
            month: self.month as u8,
            day: self.day as u8,
            hours: self.hours as u8,
            minutes: self.minutes as u8,
            seconds: self.seconds as u8,
            milli_seconds: self.milli_seconds,
            micro_seconds: 0,
            nano_seconds: 0,
        }
    }

    pub fn string_size(
        flags: StringFormatFlags,
        format: DateTimeFormat,
    ) -> Result<usize, CoreError> {
        DateTimeValues::string_size(flags, format)
    }

    /// Renders the date/time into `buf`. Unlike the other per-format
    /// types, `SYSTEMTIME` has no hexadecimal fallback: out-of-range
    /// fields surface as `Ok(false)`, mirroring
    /// [`DateTimeValues::write_with_index`] directly.
    pub fn write_with_index<W: CodeUnit>(
        &self,
        buf: &mut [W],
        index: &mut usize,
        flags: StringFormatFlags,
        format: DateTimeFormat,
    ) -> Result<bool, CoreError> {
        self.date_time_values()
            .write_with_index(buf, index, flags, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_little_endian_fields_in_wire_order() {
        let mut bytes = [0u8; 16];
        bytes[0..2].copy_from_slice(&2010u16.to_le_bytes());
        bytes[2..4].copy_from_slice(&8u16.to_le_bytes());
        bytes[4..6].copy_from_slice(&4u16.to_le_bytes());
        bytes[6..8].copy_from_slice(&12u16.to_le_bytes());
        bytes[8..10].copy_from_slice(&21u16.to_le_bytes());
        bytes[10..12].copy_from_slice(&6u16.to_le_bytes());
        bytes[12..14].copy_from_slice(&32u16.to_le_bytes());
        bytes[14..16].copy_from_slice(&500u16.to_le_bytes());

        let st = Systemtime::from_byte_stream(&bytes, Endian::Little).unwrap();
        let flags = StringFormatFlags::DATE_TIME_MILLI_SECONDS;
        let size = Systemtime::string_size(flags, DateTimeFormat::Ctime).unwrap();
        let mut buf = vec![0u8; size];
        let mut idx = 0;
        assert!(st
            .write_with_index(&mut buf, &mut idx, flags, DateTimeFormat::Ctime)
            .unwrap());
        let s = core::str::from_utf8(&buf[..idx - 1]).unwrap();
        assert_eq!(s, "Aug 12, 2010 21:06:32.500");
    }

    #[test]
    fn byte_stream_too_short_is_an_error() {
        let err = Systemtime::from_byte_stream(&[0u8; 15], Endian::Little).unwrap_err();
        assert_eq!(err, CoreError::ValueTooSmall("byte stream too small"));
    }

    #[test]
    fn invalid_month_returns_not_valid_with_no_hex_fallback() {
        let mut st = Systemtime::from_byte_stream(&[0u8; 16], Endian::Little).unwrap();
        st.month = 13;
        let flags = StringFormatFlags::DATE_TIME;
        let size = Systemtime::string_size(flags, DateTimeFormat::Ctime).unwrap();
        let mut buf = vec![0u8; size];
        let mut idx = 0;
        let ok = st
            .write_with_index(&mut buf, &mut idx, flags, DateTimeFormat::Ctime)
            .unwrap();
        assert!(!ok);
    }
}
