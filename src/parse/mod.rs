// src/parse/mod.rs
//
// Extracts (day, month, names) tuples from the flat SQL seed and builds the
// date-keyed lookup. Anything in the text that does not match the tuple
// pattern is skipped; there is no fallback parsing.

use crate::table::NamedayTable;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `('D', 'M', 'Names')` literals. Day and month are 1-2 digit
/// integers, optionally quoted and padded with spaces; names run up to the
/// next single quote.
static TUPLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(\s*'?\s*(\d{1,2})\s*'?\s*,\s*'?\s*(\d{1,2})\s*'?\s*,\s*'([^']+)'")
        .expect("tuple pattern should be valid")
});

/// Scan `text` for all nameday tuples and build the lookup table.
/// Returns the table and the count of tuples processed; on duplicate dates
/// the later tuple's names win.
pub fn extract_namedays(text: &str) -> (NamedayTable, usize) {
    let mut table = NamedayTable::new();
    let mut count = 0;

    for caps in TUPLE_RE.captures_iter(text) {
        // the pattern only admits 1-2 digit numbers, so parse cannot fail
        let day: u32 = caps[1].parse().unwrap_or(0);
        let month: u32 = caps[2].parse().unwrap_or(0);
        table.insert(day, month, &caps[3]);
        count += 1;
    }

    (table, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_well_formed_tuples() {
        let sql = "INSERT INTO namedays VALUES ('7', '3', 'Tomasz, Paweł');";
        let (table, count) = extract_namedays(sql);
        assert_eq!(count, 1);
        // day-month source order becomes month-day key order
        assert_eq!(table.get(3, 7), Some("Tomasz, Paweł"));
    }

    #[test]
    fn test_zero_pads_single_digit_components() {
        let (table, _) = extract_namedays("('5', '5', 'Irena, Waldemar')");
        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["05-05"]);
    }

    #[test]
    fn test_unquoted_numbers_accepted() {
        let (table, count) = extract_namedays("(24, 12, 'Adam, Ewa')");
        assert_eq!(count, 1);
        assert_eq!(table.get(12, 24), Some("Adam, Ewa"));
    }

    #[test]
    fn test_duplicate_date_last_wins() {
        let sql = "('1', '1', 'Mieszko'), ('1', '1', 'Mieczysław')";
        let (table, count) = extract_namedays(sql);
        assert_eq!(count, 2);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(1, 1), Some("Mieczysław"));
    }

    #[test]
    fn test_malformed_tuples_skipped() {
        let sql = concat!(
            "('x', '1', 'NotADay'), ",     // non-numeric day
            "('123', '1', 'TooManyDigits'), ",
            "('1', '1', unquoted), ",      // names without quotes
            "('2', '2', 'Maria')",
        );
        let (table, count) = extract_namedays(sql);
        assert_eq!(count, 1);
        assert_eq!(table.get(2, 2), Some("Maria"));
        assert!(table.get(1, 1).is_none());
    }

    #[test]
    fn test_empty_input_yields_empty_table() {
        let (table, count) = extract_namedays("");
        assert_eq!(count, 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_end_to_end_example() {
        let sql = "('1','1','Mieszko, Mieczysław') ('05','05','Irena, Waldemar')";
        let (table, count) = extract_namedays(sql);
        assert_eq!(count, 2);
        assert_eq!(table.get(1, 1), Some("Mieszko, Mieczysław"));
        assert_eq!(table.get(5, 5), Some("Irena, Waldemar"));
    }
}
