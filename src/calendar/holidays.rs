//! Fixed Polish public holidays.
//!
//! The following date-fixed holidays are carried:
//! * New Year's Day (Jan 1)
//! * Epiphany (Jan 6)
//! * Labour Day (May 1)
//! * Constitution Day (May 3)
//! * Assumption of Mary (Aug 15)
//! * All Saints' Day (Nov 1)
//! * Independence Day (Nov 11)
//! * Christmas, first and second day (Dec 25, 26)
//!
//! Movable feasts (Easter Monday, Corpus Christi) come from an external
//! holiday service in the consuming application and are not computed here.

use chrono::{Datelike, Days, NaiveDate};

/// A date-fixed holiday, with its Polish display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday {
    pub month: u32,
    pub day: u32,
    pub name: &'static str,
    pub work_free: bool,
}

/// A holiday resolved to a concrete calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayEvent {
    pub date: NaiveDate,
    pub name: &'static str,
    pub work_free: bool,
}

pub static FIXED_HOLIDAYS: &[Holiday] = &[
    Holiday { month: 1, day: 1, name: "Nowy Rok", work_free: true },
    Holiday { month: 1, day: 6, name: "Trzech Króli", work_free: true },
    Holiday { month: 5, day: 1, name: "Święto Pracy", work_free: true },
    Holiday { month: 5, day: 3, name: "Święto Konstytucji 3 Maja", work_free: true },
    Holiday { month: 8, day: 15, name: "Wniebowzięcie NMP", work_free: true },
    Holiday { month: 11, day: 1, name: "Wszystkich Świętych", work_free: true },
    Holiday { month: 11, day: 11, name: "Święto Niepodległości", work_free: true },
    Holiday { month: 12, day: 25, name: "Boże Narodzenie (pierwszy dzień)", work_free: true },
    Holiday { month: 12, day: 26, name: "Boże Narodzenie (drugi dzień)", work_free: true },
];

/// Fixed holidays falling exactly on `date`.
pub fn holidays_on(date: NaiveDate) -> Vec<&'static Holiday> {
    FIXED_HOLIDAYS
        .iter()
        .filter(|h| h.month == date.month() && h.day == date.day())
        .collect()
}

/// All fixed holidays within `[start, start + days]`, sorted chronologically.
/// Both the start year and the next are checked so a December window picks up
/// January holidays.
pub fn upcoming_holidays(start: NaiveDate, days: u64) -> Vec<HolidayEvent> {
    let end = start.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);

    let mut upcoming: Vec<HolidayEvent> = [start.year(), start.year() + 1]
        .iter()
        .flat_map(|&year| {
            FIXED_HOLIDAYS.iter().filter_map(move |h| {
                let date = NaiveDate::from_ymd_opt(year, h.month, h.day)?;
                (date >= start && date <= end).then_some(HolidayEvent {
                    date,
                    name: h.name,
                    work_free: h.work_free,
                })
            })
        })
        .collect();

    upcoming.sort_by_key(|e| e.date);
    upcoming
}
