use chrono::{Datelike, NaiveDate, NaiveTime};

/// Approximate sunrise and sunset for Warsaw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: NaiveTime,
    pub sunset: NaiveTime,
}

// Mid-month values per month, DST folded in. Indexed January..December.
const TIMES: [(u32, u32, u32, u32); 12] = [
    (7, 42, 15, 45),
    (6, 55, 16, 40),
    (5, 55, 17, 35),
    (5, 40, 19, 30),
    (4, 45, 20, 20),
    (4, 15, 21, 0),
    (4, 35, 20, 50),
    (5, 15, 20, 0),
    (6, 5, 18, 50),
    (7, 0, 17, 40),
    (7, 0, 15, 50),
    (7, 40, 15, 25),
];

/// Sunrise/sunset approximation for `date`, from the per-month table.
pub fn sun_times(date: NaiveDate) -> SunTimes {
    let (rh, rm, sh, sm) = TIMES[date.month0() as usize];
    SunTimes {
        sunrise: NaiveTime::from_hms_opt(rh, rm, 0).unwrap_or(NaiveTime::MIN),
        sunset: NaiveTime::from_hms_opt(sh, sm, 0).unwrap_or(NaiveTime::MIN),
    }
}
