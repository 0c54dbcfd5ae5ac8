//! Proleptic Gregorian calendar arithmetic shared by every per-format
//! renderer: leap-year rule, days-in-month table, the iterative
//! "epoch unwind" used by FILETIME/POSIX/HFS, the Julian-day conversion
//! used by the NSF timedate, and the day-fraction split used by
//! FLOATINGTIME.
//!
//! None of this handles leap seconds, time zones, or dates outside what
//! fits in an `i64` day count — consistent with the Non-goals this crate
//! carries throughout.

/// Whether `year` is a leap year under the proleptic Gregorian rule:
/// divisible by 4, except centuries, except again every 4th century.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_year(year: i32) -> i64 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Number of days in `month` (1-based) of `year`. `month` must be `1..=12`.
///
/// # Panics
/// Panics if `month` is 0 or greater than 12 — callers validate the month
/// before reaching calendar arithmetic.
#[must_use]
pub fn days_in_month(month: u8, year: i32) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => panic!("month out of range: {month}"),
    }
}

/// Converts a day count relative to 1 January of `epoch_year` (0 meaning
/// 1 January itself) into a (year, month, day) civil date, walking years
/// and then months the way the source library's epoch unwind does:
/// iteratively subtract `days_in_year`, then `days_in_month`, until the
/// remainder fits. Negative offsets walk backward a year at a time first.
#[must_use]
pub fn civil_from_day_offset(epoch_year: i32, offset: i64) -> (i32, u8, u8) {
    let mut year = epoch_year;
    // Day 0 is 1 Jan, which is the *first* day of the year, hence +1.
    let mut remaining = offset + 1;

    while remaining <= 0 {
        year -= 1;
        remaining += days_in_year(year);
    }
    loop {
        let diy = days_in_year(year);
        if remaining <= diy {
            break;
        }
        remaining -= diy;
        year += 1;
    }

    let mut month: u8 = 1;
    loop {
        let dim = i64::from(days_in_month(month, year));
        if remaining <= dim {
            break;
        }
        remaining -= dim;
        month += 1;
    }
    (year, month, remaining as u8)
}

/// The day offset (relative to 1 January of `year`, 0-based) of the given
/// civil date within the same year.
#[must_use]
fn day_offset_within_year(year: i32, month: u8, day: u8) -> i64 {
    let mut offset: i64 = i64::from(day) - 1;
    for m in 1..month {
        offset += i64::from(days_in_month(m, year));
    }
    offset
}

/// Unwinds a signed second count since midnight 1 January of `epoch_year`
/// into (year, month, day, hour, minute, second). Seconds per day is fixed
/// at 86,400 — no leap-second handling, matching this crate's Non-goals.
#[must_use]
pub fn unwind_seconds(epoch_year: i32, total_seconds: i64) -> (i32, u8, u8, u8, u8, u8) {
    let days = total_seconds.div_euclid(86_400);
    let secs_of_day = total_seconds.rem_euclid(86_400);

    let (year, month, day) = civil_from_day_offset(epoch_year, days);

    let hour = (secs_of_day / 3600) as u8;
    let minute = ((secs_of_day % 3600) / 60) as u8;
    let second = (secs_of_day % 60) as u8;
    (year, month, day, hour, minute, second)
}

/// Converts an NSF-style 24-bit Julian day number into a (year, month, day)
/// civil date using the standard astronomical Julian-to-Gregorian
/// algorithm (Fliegel & Van Flandern), shifted by 32044 days to land the
/// division on the Gregorian quadricentennial. `jd` is expected
/// non-negative, as is guaranteed by the 24-bit field it comes from.
#[must_use]
pub fn julian_day_to_gregorian(jd: i64) -> (i32, u8, u8) {
    let jd = jd + 32_044;
    let q = jd / 146_097;
    let r = jd % 146_097;
    let c = ((r / 36_524) + 1) * 3 / 4;
    let r = r - c * 36_524;
    let p = r / 1461;
    let r = r % 1461;
    let a = ((r / 365) + 1) * 3 / 4;
    let r = r - a * 365;

    let years_since_march_4801bc = q * 400 + c * 100 + p * 4 + a;
    let months_since_march = (r * 5 + 308) / 153 - 2;
    let day = r - ((months_since_march + 4) * 153 / 5) + 122 + 1;
    let year = years_since_march_4801bc - 4_800 + (months_since_march + 2) / 12;
    let month = (months_since_march + 2) % 12 + 1;

    (year as i32, month as u8, day as u8)
}

/// Splits an OLE automation date (days since 1899-12-30, as an IEEE-754
/// double) into its civil date and time-of-day with nanosecond precision.
/// The caller is responsible for rejecting NaN/infinite inputs first.
#[must_use]
pub fn split_ole_automation_date(value: f64) -> (i32, u8, u8, u8, u8, u8, u16, u16, u16) {
    let whole_days = value.floor();
    let day_fraction = value - whole_days;

    // 1899-12-30 expressed as a day offset from 1 January 1899.
    const EPOCH_YEAR: i32 = 1899;
    let epoch_offset_from_jan1 = day_offset_within_year(EPOCH_YEAR, 12, 30);

    let day_offset = epoch_offset_from_jan1 + whole_days as i64;
    let (year, month, day) = civil_from_day_offset(EPOCH_YEAR, day_offset);

    // See the design note on FLOATINGTIME sub-second precision: an f64
    // carries ~15-16 significant digits, so the low nanosecond digits are
    // not faithful. Truncate rather than round: the reference decoder
    // computes whole sub-units via integer division of the scaled
    // fraction, which truncates, and rounding would occasionally carry an
    // extra nanosecond the source never produces.
    let total_nanos = (day_fraction * 86_400_000_000_000f64) as i64;
    let total_nanos = total_nanos.clamp(0, 86_399_999_999_999);
    let seconds_of_day = total_nanos / 1_000_000_000;
    let remainder_ns = total_nanos % 1_000_000_000;

    let hour = (seconds_of_day / 3600) as u8;
    let minute = ((seconds_of_day % 3600) / 60) as u8;
    let second = (seconds_of_day % 60) as u8;

    let milli_seconds = (remainder_ns / 1_000_000) as u16;
    let micro_seconds = ((remainder_ns / 1_000) % 1_000) as u16;
    let nano_seconds = (remainder_ns % 1_000) as u16;

    (year, month, day, hour, minute, second, milli_seconds, micro_seconds, nano_seconds)
}
