//! Julian Day Number ↔ proleptic Gregorian calendar conversion.
//!
//! Integer arithmetic throughout: a JDN labels a whole civil day, so there is
//! no fractional part and no time-of-day offset. Division uses `div_euclid`
//! so that years before the JDN epoch still floor correctly.

/// JDN of 1900-01-01, the anchor for the day-cycle count.
pub const JDN_1900_01_01: i64 = 2_415_021;

/// JDN of 2000-01-01.
pub const JDN_2000_01_01: i64 = 2_451_545;

/// Convert a proleptic Gregorian date to its Julian Day Number.
///
/// Standard Fliegel–Van Flandern style formula; valid for any date the
/// arithmetic can represent (month 1-12, day 1-31 assumed).
pub fn civil_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let year = i64::from(year);
    let month = i64::from(month);
    let day = i64::from(day);

    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32_045
}

/// Convert a Julian Day Number back to a proleptic Gregorian `(year, month, day)`.
pub fn jdn_to_civil(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32_044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);
    (year as i32, month as u32, day as u32)
}
