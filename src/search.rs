//! Record search
//!
//! Case-insensitive substring match over every field value. A record matches when
//! any of its values contains the query; matches keep their dataset order.

use crate::models::{Dataset, Record};

pub fn filter_records(records: &[Record], query: &str) -> Dataset {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches(record, &needle))
        .cloned()
        .collect()
}

fn matches(record: &Record, needle: &str) -> bool {
    record
        .values()
        .any(|value| value.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_csv;

    fn people() -> Dataset {
        parse_csv(b"name,age\nAna,30\nBob,25").unwrap()
    }

    #[test]
    fn test_substring_is_case_insensitive() {
        let found = filter_records(&people(), "an");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].get("name"), Some("Ana"));

        let found = filter_records(&people(), "BOB");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].get("name"), Some("Bob"));
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter_records(&people(), "9").is_empty());
    }

    #[test]
    fn test_matches_any_field_and_keeps_order() {
        let data = parse_csv(b"city,code\nLima,x1\nQuito,a1\nLa Paz,b2\n").unwrap();
        let found = filter_records(&data, "1");
        let cities: Vec<_> = found.iter().filter_map(|r| r.get("city")).collect();
        assert_eq!(cities, vec!["Lima", "Quito"]);
    }

    #[test]
    fn test_repeated_search_is_stable() {
        let data = people();
        assert_eq!(filter_records(&data, "b"), filter_records(&data, "b"));
    }

    #[test]
    fn test_unicode_lowercase() {
        let data = parse_csv("name\nÁNGEL\nbob\n".as_bytes()).unwrap();
        let found = filter_records(&data, "ángel");
        assert_eq!(found.len(), 1);
    }
}
