//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` for post dates read from frontmatter.
//!
//! ```ignore
//! let dt = DateTimeUtc::parse("2024-06-15").unwrap();
//! let dt = DateTimeUtc::parse("2024-06-15T14:30:45Z").unwrap();
//! let dt = DateTimeUtc::parse("06/15/2024").unwrap();
//! assert_eq!(dt.month_name(), "June");
//! ```

use anyhow::{Result, bail};
use serde::{Serialize, Serializer};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// UTC datetime without timezone complexity.
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse a frontmatter date.
    ///
    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.fff][Z]` (`T` or space),
    /// and `MM/DD/YYYY`. Zone designators other than UTC are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let dt = if s.contains('/') {
            Self::parse_us(s)?
        } else {
            Self::parse_iso(s.as_bytes())?
        };
        dt.validate().ok()?;
        Some(dt)
    }

    fn parse_iso(bytes: &[u8]) -> Option<Self> {
        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }
        let year = parse_u16(&bytes[0..4])?;
        let month = parse_u8(&bytes[5..7])?;
        let day = parse_u8(&bytes[8..10])?;

        if bytes.len() == 10 {
            return Some(Self::from_ymd(year, month, day));
        }
        if bytes.len() < 19 || !matches!(bytes[10], b'T' | b' ') {
            return None;
        }
        if bytes[13] != b':' || bytes[16] != b':' {
            return None;
        }

        let mut zone = &bytes[19..];
        if let Some(fraction) = zone.strip_prefix(b".") {
            let digits = fraction.iter().take_while(|b| b.is_ascii_digit()).count();
            if digits == 0 {
                return None;
            }
            zone = &fraction[digits..];
        }
        if !matches!(zone, b"" | b"Z" | b"+00:00") {
            return None;
        }

        Some(Self::new(
            year,
            month,
            day,
            parse_u8(&bytes[11..13])?,
            parse_u8(&bytes[14..16])?,
            parse_u8(&bytes[17..19])?,
        ))
    }

    /// "MM/DD/YYYY", month and day may be a single digit.
    fn parse_us(s: &str) -> Option<Self> {
        let mut parts = s.split('/');
        let (month, day, year) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }

        let two_digits = |part: &str| match part.len() {
            1 => parse_u8(format!("0{part}").as_bytes()),
            2 => parse_u8(part.as_bytes()),
            _ => None,
        };
        Some(Self::from_ymd(
            parse_u16(year.as_bytes())?,
            two_digits(month)?,
            two_digits(day)?,
        ))
    }

    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// English month name ("January" .. "December").
    pub fn month_name(self) -> &'static str {
        MONTHS[usize::from(self.month.clamp(1, 12) - 1)]
    }

    /// Format as `YYYY-MM-DD`.
    pub fn to_iso_date(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Format as RFC 3339: `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Serialized as an RFC 3339 string.
impl Serialize for DateTimeUtc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let dt = DateTimeUtc::parse("2024-06-15").unwrap();
        assert_eq!(dt, DateTimeUtc::from_ymd(2024, 6, 15));
    }

    #[test]
    fn test_parse_with_time() {
        let dt = DateTimeUtc::parse("2024-06-15T14:30:45Z").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2024, 6, 15, 14, 30, 45));

        let dt = DateTimeUtc::parse("2024-06-15 08:00:00").unwrap();
        assert_eq!(dt.hour, 8);
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let dt = DateTimeUtc::parse("2024-03-16T10:00:00.000Z").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2024, 3, 16, 10, 0, 0));
        assert!(DateTimeUtc::parse("2024-03-16T10:00:00.123456").is_some());
        assert!(DateTimeUtc::parse("2024-03-16T10:00:00.Z").is_none());
    }

    #[test]
    fn test_parse_us_format() {
        assert_eq!(DateTimeUtc::parse("03/16/2024"), Some(DateTimeUtc::from_ymd(2024, 3, 16)));
        assert_eq!(DateTimeUtc::parse("3/6/2024"), Some(DateTimeUtc::from_ymd(2024, 3, 6)));
        assert!(DateTimeUtc::parse("16/03/2024").is_none());
        assert!(DateTimeUtc::parse("03/16/24").is_none());
        assert!(DateTimeUtc::parse("03/16/2024/1").is_none());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(DateTimeUtc::parse("").is_none());
        assert!(DateTimeUtc::parse("2024/06/15").is_none());
        assert!(DateTimeUtc::parse("2024-13-01").is_none());
        assert!(DateTimeUtc::parse("2023-02-29").is_none());
        assert!(DateTimeUtc::parse("2024-06-15T14:30:45+08:00").is_none());
        assert!(DateTimeUtc::parse("June 15, 2024").is_none());
    }

    #[test]
    fn test_leap_year() {
        assert!(DateTimeUtc::parse("2024-02-29").is_some());
        assert!(DateTimeUtc::parse("2000-02-29").is_some());
        assert!(DateTimeUtc::parse("1900-02-29").is_none());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = DateTimeUtc::parse("2023-12-31").unwrap();
        let b = DateTimeUtc::parse("2024-01-01").unwrap();
        let c = DateTimeUtc::parse("2024-01-01T00:00:01Z").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_formatting() {
        let dt = DateTimeUtc::new(2024, 3, 5, 9, 7, 1);
        assert_eq!(dt.month_name(), "March");
        assert_eq!(dt.to_iso_date(), "2024-03-05");
        assert_eq!(dt.to_rfc3339(), "2024-03-05T09:07:01Z");
    }
}
