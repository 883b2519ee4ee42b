//! Leap-year and month-length rules of the proleptic Gregorian calendar

/// Returns true if `year` is a Gregorian leap year
///
/// Divisible by 4, except centuries, except every fourth century. Total over
/// all integers; years before 1970 are accepted even though the engine never
/// asks about them.
///
/// # Example
/// ```rust
/// use timesphere::calendar::is_leap_year;
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(2100));
/// assert!(is_leap_year(2024));
/// ```
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` of `year`
///
/// Months outside 1..=12 fall through to 31 days. Checked encode rejects
/// them before they get here.
///
/// # Example
/// ```rust
/// use timesphere::calendar::days_in_month;
/// assert_eq!(days_in_month(2, 2024), 29);
/// assert_eq!(days_in_month(2, 2023), 28);
/// assert_eq!(days_in_month(4, 2023), 30);
/// ```
pub const fn days_in_month(month: u8, year: i32) -> u8 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Returns 366 for leap years, 365 otherwise
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}
