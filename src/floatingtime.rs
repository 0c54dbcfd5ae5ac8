//! The OLE Automation date (`FLOATINGTIME`): an IEEE-754 double counting
//! days since 1899-12-30, with the fractional part giving the time of
//! day.

use crate::calendar;
use crate::values::{
    hex_fallback_single_width, write_hex_fallback_single, CodeUnit, DateTimeFormat,
    DateTimeValues, StringFormatFlags,
};
use crate::{byteorder, CoreError, Endian};

const HEX_FALLBACK_WIDTH: usize = hex_fallback_single_width(16);

/// An OLE Automation date/time, stored as its raw `f64` bit pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floatingtime(pub u64);

impl Floatingtime {
    #[must_use]
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    #[must_use]
    pub fn from_value(value: f64) -> Self {
        Self(value.to_bits())
    }

    #[must_use]
    pub fn value(self) -> f64 {
        f64::from_bits(self.0)
    }

    pub fn from_byte_stream(bytes: &[u8], endian: Endian) -> Result<Self, CoreError> {
        if bytes.len() < 8 {
            return Err(CoreError::ValueTooSmall("byte stream too small"));
        }
        Ok(Self(byteorder::read_u64(bytes, endian)))
    }

    fn date_time_values(&self) -> Option<DateTimeValues> {
        let value = self.value();
        if !value.is_finite() {
            return None;
        }
        let (year, month, day, hours, minutes, seconds, milli_seconds, micro_seconds, nano_seconds) =
            calendar::split_ole_automation_date(value);
        Some(DateTimeValues {
            year: year as u16,
            month,
            day,
            hours,
            minutes,
            seconds,
            milli_seconds,
            micro_seconds,
            nano_seconds,
        })
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
        if let Some(values) = self.date_time_values() {
            if values.write_with_index(buf, index, flags, format)? {
                return Ok(());
            }
        } else {
            // Validate the flags/format combination the same way
            // DateTimeValues would, so a bad format still reports -1
            // rather than silently falling back to hex.
            DateTimeValues::string_size(flags, format)?;
        }
        write_hex_fallback_single(buf, index, self.0, 16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_little_endian_scenario_with_nanoseconds() {
        let bytes = [0x61, 0x0b, 0xb6, 0x60, 0x8f, 0x04, 0xe5, 0x40];
        let ft = Floatingtime::from_byte_stream(&bytes, Endian::Little).unwrap();
        let flags = StringFormatFlags::DATE_TIME_NANO_SECONDS;
        let size = Floatingtime::string_size(flags, DateTimeFormat::Ctime).unwrap();
        let mut buf = vec![0u8; size];
        let mut idx = 0;
        ft.write_with_index(&mut buf, &mut idx, flags, DateTimeFormat::Ctime)
            .unwrap();
        let s = core::str::from_utf8(&buf[..idx - 1]).unwrap();
        assert_eq!(s, "Nov 05, 2017 11:32:00.000000181");
    }

    #[test]
    fn nan_falls_back_to_hex() {
        let ft = Floatingtime::from_value(f64::NAN);
        let flags = StringFormatFlags::DATE_TIME;
        let size = Floatingtime::string_size(flags, DateTimeFormat::Ctime).unwrap();
        let mut buf = vec![0u8; size];
        let mut idx = 0;
        ft.write_with_index(&mut buf, &mut idx, flags, DateTimeFormat::Ctime)
            .unwrap();
        assert!(idx > 0);
        let rendered = core::str::from_utf8(&buf[..idx - 1]).unwrap();
        assert!(rendered.starts_with("(0x"));
    }

    #[test]
    fn infinity_falls_back_to_hex() {
        let ft = Floatingtime::from_value(f64::INFINITY);
        let flags = StringFormatFlags::DATE_TIME;
        let size = Floatingtime::string_size(flags, DateTimeFormat::Ctime).unwrap();
        let mut buf = vec![0u8; size];
        let mut idx = 0;
        ft.write_with_index(&mut buf, &mut idx, flags, DateTimeFormat::Ctime)
            .unwrap();
        let rendered = core::str::from_utf8(&buf[..idx - 1]).unwrap();
        assert!(rendered.starts_with("(0x"));
    }
}
