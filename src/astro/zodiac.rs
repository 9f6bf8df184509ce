use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Tropical zodiac sign, displayed under its Polish name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZodiacSign {
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ZodiacSign::Aquarius => "Wodnik",
            ZodiacSign::Pisces => "Ryby",
            ZodiacSign::Aries => "Baran",
            ZodiacSign::Taurus => "Byk",
            ZodiacSign::Gemini => "Bliźnięta",
            ZodiacSign::Cancer => "Rak",
            ZodiacSign::Leo => "Lew",
            ZodiacSign::Virgo => "Panna",
            ZodiacSign::Libra => "Waga",
            ZodiacSign::Scorpio => "Skorpion",
            ZodiacSign::Sagittarius => "Strzelec",
            ZodiacSign::Capricorn => "Koziorożec",
        };
        f.write_str(name)
    }
}

/// Sign for a calendar date by the usual month/day boundary table.
pub fn zodiac_sign(date: NaiveDate) -> ZodiacSign {
    use ZodiacSign::*;
    match (date.month(), date.day()) {
        (1, 20..) | (2, ..=18) => Aquarius,
        (2, 19..) | (3, ..=20) => Pisces,
        (3, 21..) | (4, ..=19) => Aries,
        (4, 20..) | (5, ..=20) => Taurus,
        (5, 21..) | (6, ..=20) => Gemini,
        (6, 21..) | (7, ..=22) => Cancer,
        (7, 23..) | (8, ..=22) => Leo,
        (8, 23..) | (9, ..=22) => Virgo,
        (9, 23..) | (10, ..=22) => Libra,
        (10, 23..) | (11, ..=21) => Scorpio,
        (11, 22..) | (12, ..=21) => Sagittarius,
        _ => Capricorn,
    }
}
