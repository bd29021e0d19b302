/// Earliest supported year (proleptic, so year 0 is 1 BC)
pub const MIN_YEAR: i32 = -9999;
/// Latest supported year
pub const MAX_YEAR: i32 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;
/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_IN_GREGORIAN_CYCLE: i64 = 146_097;

/// Mean Gregorian calendar year in Earth days
pub const GREGORIAN_YEAR_DAYS: f64 = 365.2425;

/// Weeks in a Gregorian year, used for the length of a "birthweek"
pub const WEEKS_PER_YEAR: f64 = 52.1789;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Month-first format separator (US format, `MM/DD/YYYY`)
pub const MONTH_FIRST_SEPARATOR: char = '/';
