pub mod moon;
pub mod sun;
pub mod zodiac;

pub use moon::{moon_phase, MoonPhase};
pub use sun::{sun_times, SunTimes};
pub use zodiac::{zodiac_sign, ZodiacSign};
