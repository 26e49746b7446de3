//! # Contact Search
//!
//! Search runs in two passes and both are observable:
//!
//! 1. **Fuzzy ranking** against `first`, `last` and `super_name`. Records that
//!    do not match at all are dropped, the rest are ordered best match first.
//! 2. **Display sort** by `last`, then `created_at`. This always runs, with or
//!    without a query, so the best matches end up reordered by last name.
//!
//! ## Rank Tiers
//!
//! Each field value is ranked against the query; the best field wins:
//!
//! | Tier                  | Example (query `man`)       |
//! |-----------------------|-----------------------------|
//! | case-sensitive equal  | `man`                       |
//! | equal                 | `Man`                       |
//! | starts with           | `Mandarin`                  |
//! | word starts with      | `Iron Man`                  |
//! | contains              | `Spider-Woman`              |
//! | acronym               | `Mad Artificial Neuron`     |
//! | in-order characters   | `Madison`                   |
//!
//! The last tier carries a closeness bonus so tighter matches rank higher.
//! Queries with several words that fail as a whole are retried word by word,
//! which tolerates out-of-order input like `stark tony`.

use crate::model::ContactRecord;
use std::cmp::Ordering;

const CASE_SENSITIVE_EQUAL: f64 = 7.0;
const EQUAL: f64 = 6.0;
const STARTS_WITH: f64 = 5.0;
const WORD_STARTS_WITH: f64 = 4.0;
const CONTAINS: f64 = 3.0;
const ACRONYM: f64 = 2.0;
const MATCHES: f64 = 1.0;
const NO_MATCH: f64 = 0.0;

/// Filters and orders `records` for display.
pub fn search(records: Vec<ContactRecord>, query: Option<&str>) -> Vec<ContactRecord> {
    let query = query.map(str::trim).unwrap_or("");

    let mut results = if query.is_empty() {
        records
    } else {
        rank_records(records, query)
    };

    sort_for_display(&mut results);
    results
}

/// Stable sort by last name (absent sorts as empty), then creation time.
pub fn sort_for_display(records: &mut [ContactRecord]) {
    records.sort_by(|a, b| {
        let last_a = a.last.as_deref().unwrap_or("");
        let last_b = b.last.as_deref().unwrap_or("");
        last_a
            .cmp(last_b)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
}

struct Ranked {
    record: ContactRecord,
    rank: f64,
    key_index: usize,
    matched: String,
    position: usize,
}

fn rank_records(records: Vec<ContactRecord>, query: &str) -> Vec<ContactRecord> {
    let mut ranked: Vec<Ranked> = records
        .into_iter()
        .enumerate()
        .filter_map(|(position, record)| {
            let (rank, key_index) = rank_record(&record, query);
            if rank >= MATCHES {
                let matched = search_keys(&record)[key_index]
                    .unwrap_or("")
                    .to_lowercase();
                Some(Ranked {
                    record,
                    rank,
                    key_index,
                    matched,
                    position,
                })
            } else {
                None
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.rank
            .partial_cmp(&a.rank)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.key_index.cmp(&b.key_index))
            .then_with(|| a.matched.cmp(&b.matched))
            .then_with(|| a.position.cmp(&b.position))
    });

    ranked.into_iter().map(|r| r.record).collect()
}

fn search_keys(record: &ContactRecord) -> [Option<&str>; 3] {
    [
        record.first.as_deref(),
        record.last.as_deref(),
        record.super_name.as_deref(),
    ]
}

/// Best rank across the searchable fields, with the index of the winning field.
fn rank_record(record: &ContactRecord, query: &str) -> (f64, usize) {
    let best = best_key_rank(record, query);
    if best.0 >= MATCHES {
        return best;
    }

    let tokens: Vec<&str> = query.split_whitespace().collect();
    if tokens.len() < 2 {
        return best;
    }

    // Every token has to land somewhere; the weakest one decides.
    let mut weakest = (f64::MAX, 0);
    for token in tokens {
        let (rank, key_index) = best_key_rank(record, token);
        if rank < MATCHES {
            return (NO_MATCH, 0);
        }
        if rank < weakest.0 {
            weakest = (rank, key_index);
        }
    }
    weakest
}

fn best_key_rank(record: &ContactRecord, query: &str) -> (f64, usize) {
    search_keys(record)
        .iter()
        .enumerate()
        .filter_map(|(index, value)| value.map(|v| (rank_value(v, query), index)))
        .fold((NO_MATCH, 0), |best, candidate| {
            if candidate.0 > best.0 {
                candidate
            } else {
                best
            }
        })
}

/// Ranks a single field value against the query.
pub fn rank_value(value: &str, query: &str) -> f64 {
    if query.is_empty() || query.chars().count() > value.chars().count() {
        return NO_MATCH;
    }
    if value == query {
        return CASE_SENSITIVE_EQUAL;
    }

    let value = value.to_lowercase();
    let query = query.to_lowercase();

    if value == query {
        return EQUAL;
    }
    if value.starts_with(&query) {
        return STARTS_WITH;
    }
    if value.contains(&format!(" {}", query)) {
        return WORD_STARTS_WITH;
    }
    if value.contains(&query) {
        return CONTAINS;
    }
    if query.chars().count() == 1 {
        return NO_MATCH;
    }
    if acronym(&value).contains(&query) {
        return ACRONYM;
    }
    closeness(&value, &query)
}

/// First letter of every word, splitting on spaces and hyphens.
fn acronym(value: &str) -> String {
    value
        .split(' ')
        .flat_map(|word| word.split('-'))
        .filter_map(|part| part.chars().next())
        .collect()
}

/// In-order character match. Scores between `MATCHES` and `ACRONYM`, higher
/// when the matched characters sit close together.
fn closeness(value: &str, query: &str) -> f64 {
    let value: Vec<char> = value.chars().collect();
    let mut first_match: Option<usize> = None;
    let mut last_match = 0;
    let mut cursor = 0;

    for wanted in query.chars() {
        let found = value[cursor..].iter().position(|c| *c == wanted);
        match found {
            Some(offset) => {
                let index = cursor + offset;
                first_match.get_or_insert(index);
                last_match = index;
                cursor = index + 1;
            }
            None => return NO_MATCH,
        }
    }

    let matched = query.chars().count() as f64;
    let spread = (last_match - first_match.unwrap_or(0) + 1) as f64;
    MATCHES + (matched / value.len() as f64) * (1.0 / spread)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContactFields;
    use chrono::{Duration, Utc};

    fn contact(id: &str, first: &str, last: &str, super_name: &str, age_secs: i64) -> ContactRecord {
        let mut record = ContactRecord::new(
            id.to_string(),
            ContactFields {
                first: Some(first.to_string()),
                last: Some(last.to_string()),
                super_name: Some(super_name.to_string()),
                ..ContactFields::default()
            },
        );
        record.created_at = Utc::now() - Duration::seconds(age_secs);
        record
    }

    fn heroes() -> Vec<ContactRecord> {
        vec![
            contact("iron-man", "Tony", "Stark", "Iron Man", 30),
            contact("captain-america", "Steve", "Rogers", "Captain America", 20),
            contact("spider-man", "Peter", "Parker", "Spider-Man", 10),
        ]
    }

    fn ids(records: &[ContactRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn equal_ranks_break_ties_alphabetically() {
        let records = vec![
            contact("rogers", "Steven", "Rogers", "Captain America", 20),
            contact("hunter", "Stella", "Hunter", "", 10),
        ];
        let ranked = rank_records(records, "ste");
        assert_eq!(ids(&ranked), vec!["hunter", "rogers"]);
    }

    #[test]
    fn empty_query_keeps_everything_sorted_by_last_name() {
        let results = search(heroes(), Some(""));
        assert_eq!(ids(&results), vec!["spider-man", "captain-america", "iron-man"]);

        let results = search(heroes(), None);
        assert_eq!(ids(&results), vec!["spider-man", "captain-america", "iron-man"]);
    }

    #[test]
    fn stark_matches_only_tony() {
        let results = search(heroes(), Some("stark"));
        assert_eq!(ids(&results), vec!["iron-man"]);
    }

    #[test]
    fn fuzzy_matches_are_reordered_by_last_name() {
        // "man" hits Iron Man (word start) before Spider-Man (contains),
        // but display order is by last name.
        let results = search(heroes(), Some("man"));
        assert_eq!(ids(&results), vec!["spider-man", "iron-man"]);
    }

    #[test]
    fn out_of_order_tokens_still_match() {
        let results = search(heroes(), Some("stark tony"));
        assert_eq!(ids(&results), vec!["iron-man"]);

        let results = search(heroes(), Some("stark steve"));
        assert!(results.is_empty());
    }

    #[test]
    fn absent_last_name_sorts_first_and_ties_break_on_created_at() {
        let mut nameless_old = ContactRecord::new("old".into(), ContactFields::default());
        nameless_old.created_at = Utc::now() - Duration::seconds(100);
        let nameless_new = ContactRecord::new("new".into(), ContactFields::default());

        let mut records = heroes();
        records.push(nameless_new);
        records.push(nameless_old);

        let results = search(records, None);
        assert_eq!(
            ids(&results),
            vec!["old", "new", "spider-man", "captain-america", "iron-man"]
        );
    }

    #[test]
    fn no_matches_is_empty() {
        assert!(search(heroes(), Some("zzz")).is_empty());
    }

    #[test]
    fn rank_tiers() {
        assert_eq!(rank_value("Man", "Man"), CASE_SENSITIVE_EQUAL);
        assert_eq!(rank_value("Man", "man"), EQUAL);
        assert_eq!(rank_value("Mandarin", "man"), STARTS_WITH);
        assert_eq!(rank_value("Iron Man", "man"), WORD_STARTS_WITH);
        assert_eq!(rank_value("Spider-Woman", "man"), CONTAINS);
        assert_eq!(rank_value("Captain America", "ca"), STARTS_WITH);
        assert_eq!(rank_value("Spider-Man", "sm"), ACRONYM);
        assert_eq!(rank_value("Iron", "ironman"), NO_MATCH);
        assert_eq!(rank_value("Rogers", "x"), NO_MATCH);
    }

    #[test]
    fn closeness_prefers_tight_matches() {
        assert_eq!(rank_value("xxabcxx", "abd"), NO_MATCH);

        let close = rank_value("steve rogers", "sv");
        let far = rank_value("steve rogers", "ss");
        assert!(close > MATCHES && close < ACRONYM);
        assert!(far > MATCHES && far < close);
    }
}
