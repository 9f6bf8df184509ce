pub mod holidays;

pub use holidays::{holidays_on, upcoming_holidays, Holiday, HolidayEvent};
