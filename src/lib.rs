//! Decoders, calendar arithmetic, and renderers for the binary date/time
//! stamps encountered in digital-forensics contexts: Microsoft FILETIME,
//! the FAT packed date/time, Apple HFS/HFS+ time, POSIX time (six
//! sec/µs/ns × 32/64-bit × signed/unsigned variants), the Lotus NSF
//! timedate, Microsoft SYSTEMTIME, and OLE FLOATINGTIME.
//!
//! Every format type decodes from a raw byte stream (with an explicit
//! [`Endian`]) or from its native integer representation, and renders into
//! a [`DateTimeValues`] record that is then turned into CTIME- or
//! ISO-8601-style text. If the decoded fields fail validation (out of
//! range month, day, hour, ...) rendering falls back to a hexadecimal
//! `(0x.. 0x..)` representation instead of failing outright.
//!
//! This crate does not look up time zones, does not handle leap seconds,
//! and does not parse text back into any of these binary representations.
#![cfg_attr(not(feature = "std"), no_std)]

mod byteorder;
mod calendar;
mod values;

mod fat;
mod filetime;
mod floatingtime;
mod hfs;
mod nsf;
mod posix;
mod systemtime;

pub use byteorder::Endian;
pub use fat::FatDateTime;
pub use filetime::Filetime;
pub use floatingtime::Floatingtime;
pub use hfs::HfsTime;
pub use nsf::NsfTimedate;
pub use posix::{PosixTime, PosixTimeValueType};
pub use systemtime::Systemtime;
pub use values::{DateTimeValues, DateTimeFormat, StringFormatFlags};

#[cfg(not(feature = "std"))]
use core::fmt;

/// Errors that can be raised while decoding or rendering a timestamp.
///
/// This enumerates the `Arguments`, `Memory`, and `Runtime` error domains
/// that the core is specified to emit (the `Compression`, `IO`, `Input`, and
/// `Output` domains belong to collaborating components and never originate
/// here). The logical "not valid, fall back to hex" outcome used by the
/// string renderers is *not* one of these variants: it is represented in
/// the return type of the affected functions instead, since unlike these
/// variants it is not reported to an [`ErrorSink`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum CoreError {
    /// A pointer/slice argument was null or otherwise unusable.
    #[cfg_attr(feature = "std", error("invalid argument: {0}"))]
    InvalidArgument(&'static str),
    /// The caller's buffer is smaller than the format requires.
    #[cfg_attr(feature = "std", error("buffer too small: {0}"))]
    ValueTooSmall(&'static str),
    /// A requested size exceeds what can be represented.
    #[cfg_attr(feature = "std", error("value exceeds maximum: {0}"))]
    ValueExceedsMaximum(&'static str),
    /// An endian tag, value-type tag, format flag set, or format type was
    /// not one of the supported values.
    #[cfg_attr(feature = "std", error("unsupported value: {0}"))]
    UnsupportedValue(&'static str),
    /// An index or bit field fell outside the range the caller promised.
    #[cfg_attr(feature = "std", error("value out of bounds: {0}"))]
    OutOfBounds(&'static str),
}

#[cfg(not(feature = "std"))]
impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(what) => write!(f, "invalid argument: {what}"),
            Self::ValueTooSmall(what) => write!(f, "buffer too small: {what}"),
            Self::ValueExceedsMaximum(what) => write!(f, "value exceeds maximum: {what}"),
            Self::UnsupportedValue(what) => write!(f, "unsupported value: {what}"),
            Self::OutOfBounds(what) => write!(f, "value out of bounds: {what}"),
        }
    }
}

/// The error domain a [`CoreError`] belongs to, used when reporting to an
/// [`ErrorSink`]. Matches the domain taxonomy in the external error
/// collaborator's interface; the core only ever emits these three.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorDomain {
    Arguments,
    Memory,
    Runtime,
}

impl CoreError {
    /// The domain this error belongs to, for reporting through an
    /// [`ErrorSink`].
    #[must_use]
    pub const fn domain(&self) -> ErrorDomain {
        match self {
            Self::InvalidArgument(_) | Self::ValueTooSmall(_) | Self::ValueExceedsMaximum(_) => {
                ErrorDomain::Arguments
            }
            Self::UnsupportedValue(_) | Self::OutOfBounds(_) => ErrorDomain::Runtime,
        }
    }
}

/// The contract of the external error-capture collaborator described in the
/// purpose/scope of this crate: a typed sink that records `(domain, code,
/// context)` tuples. This crate only consumes this interface; it does not
/// provide a logging implementation of its own.
pub trait ErrorSink {
    /// Record a single error occurrence. `code` is the specific
    /// [`CoreError`] and `context` is a short human-readable description of
    /// where it was raised (conventionally the function name).
    fn record(&mut self, domain: ErrorDomain, code: CoreError, context: &str);
}

/// An [`ErrorSink`] that discards everything. Used by callers who don't
/// need error telemetry and by the default trait methods below.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullSink;

impl ErrorSink for NullSink {
    fn record(&mut self, _domain: ErrorDomain, _code: CoreError, _context: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An [`ErrorSink`] that records every call, for asserting on what a
    /// decoder reported without wiring up a real logger.
    #[derive(Default)]
    struct VecSink(Vec<(ErrorDomain, CoreError, String)>);

    impl ErrorSink for VecSink {
        fn record(&mut self, domain: ErrorDomain, code: CoreError, context: &str) {
            self.0.push((domain, code, context.into()));
        }
    }

    #[test]
    fn vec_sink_records_every_call() {
        let mut sink = VecSink::default();
        sink.record(ErrorDomain::Arguments, CoreError::ValueTooSmall("x"), "decode");
        assert_eq!(sink.0.len(), 1);
        assert_eq!(sink.0[0].0, ErrorDomain::Arguments);
    }

    #[test]
    fn error_domains_match_spec_taxonomy() {
        assert_eq!(
            CoreError::InvalidArgument("x").domain(),
            ErrorDomain::Arguments
        );
        assert_eq!(
            CoreError::ValueTooSmall("x").domain(),
            ErrorDomain::Arguments
        );
        assert_eq!(
            CoreError::UnsupportedValue("x").domain(),
            ErrorDomain::Runtime
        );
        assert_eq!(CoreError::OutOfBounds("x").domain(), ErrorDomain::Runtime);
    }

    #[test]
    fn null_sink_is_a_noop() {
        let mut sink = NullSink;
        sink.record(ErrorDomain::Runtime, CoreError::OutOfBounds("x"), "test");
    }
}
