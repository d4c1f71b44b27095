//! Stateless sort and filter operations over a reconciled publication list.
//!
//! Every function returns a fresh `Vec` and leaves its input untouched. An
//! empty result is a valid "no data" outcome; the only error in this module
//! is an unrecognized sort-field name, which is reported distinctly so it
//! cannot be mistaken for "no matches".

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::PubfuseError;
use crate::types::MergedPublication;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Year,
    Venue,
}

impl FromStr for SortField {
    type Err = PubfuseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "year" => Ok(Self::Year),
            "venue" => Ok(Self::Venue),
            other => Err(PubfuseError::InvalidSortField(other.to_string())),
        }
    }
}

/// Stable sort. Case-insensitive lexicographic compare for title and venue
/// (a missing venue compares as empty), numeric compare for year with
/// missing years treated as 0. Descending order reverses the comparator,
/// not the result, so equal-key entries keep their relative order.
pub fn sort_by(
    publications: &[MergedPublication],
    field: SortField,
    ascending: bool,
) -> Vec<MergedPublication> {
    let mut sorted = publications.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match field {
            SortField::Title => compare_case_insensitive(&a.title, &b.title),
            SortField::Year => a.year.unwrap_or(0).cmp(&b.year.unwrap_or(0)),
            SortField::Venue => compare_case_insensitive(
                a.venue.as_deref().unwrap_or(""),
                b.venue.as_deref().unwrap_or(""),
            ),
        };
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
    sorted
}

pub fn filter_by_title_contains(
    publications: &[MergedPublication],
    keyword: &str,
) -> Vec<MergedPublication> {
    let needle = keyword.to_lowercase();
    publications
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn filter_by_venue_contains(
    publications: &[MergedPublication],
    keyword: &str,
) -> Vec<MergedPublication> {
    let needle = keyword.to_lowercase();
    publications
        .iter()
        .filter(|p| {
            p.venue
                .as_deref()
                .is_some_and(|venue| venue.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Exact year equality; entries without a year never match.
pub fn filter_by_year(publications: &[MergedPublication], year: i32) -> Vec<MergedPublication> {
    publications
        .iter()
        .filter(|p| p.year == Some(year))
        .cloned()
        .collect()
}

fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn publication(title: &str, year: Option<i32>, venue: Option<&str>) -> MergedPublication {
        MergedPublication {
            title: title.to_string(),
            year,
            venue: venue.map(str::to_string),
            authors: Vec::new(),
            urls: Vec::new(),
        }
    }

    fn sample() -> Vec<MergedPublication> {
        vec![
            publication("beta work", Some(2023), Some("NeurIPS")),
            publication("Alpha Work", None, None),
            publication("gamma work", Some(2022), Some("ICML")),
        ]
    }

    #[test]
    fn sort_field_parses_known_names_case_insensitively() {
        assert_eq!("Year".parse::<SortField>().unwrap(), SortField::Year);
        assert_eq!(" title ".parse::<SortField>().unwrap(), SortField::Title);
        assert_eq!("venue".parse::<SortField>().unwrap(), SortField::Venue);
    }

    #[test]
    fn unknown_sort_field_is_an_error_not_an_empty_result() {
        let err = "citations".parse::<SortField>().unwrap_err();
        assert!(matches!(err, PubfuseError::InvalidSortField(ref f) if f == "citations"));
    }

    #[test]
    fn sort_by_title_is_case_insensitive() {
        let sorted = sort_by(&sample(), SortField::Title, true);
        let titles: Vec<_> = sorted.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha Work", "beta work", "gamma work"]);
    }

    #[test]
    fn sort_by_year_descending_puts_missing_years_last() {
        let sorted = sort_by(&sample(), SortField::Year, false);
        let years: Vec<_> = sorted.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![Some(2023), Some(2022), None]);
    }

    #[test]
    fn sort_does_not_mutate_its_input() {
        let input = sample();
        let _ = sort_by(&input, SortField::Year, false);
        assert_eq!(input[0].title, "beta work");
    }

    #[test]
    fn repeated_descending_year_sort_is_idempotent() {
        let input = vec![
            publication("first of 2020", Some(2020), None),
            publication("second of 2020", Some(2020), None),
            publication("from 2024", Some(2024), None),
        ];

        let once = sort_by(&input, SortField::Year, false);
        let twice = sort_by(&once, SortField::Year, false);
        assert_eq!(once, twice);
        assert_eq!(once[1].title, "first of 2020");
        assert_eq!(once[2].title, "second of 2020");
    }

    #[test]
    fn title_filter_is_case_insensitive_substring() {
        let hits = filter_by_title_contains(&sample(), "ALPHA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Alpha Work");

        assert!(filter_by_title_contains(&sample(), "delta").is_empty());
    }

    #[test]
    fn venue_filter_skips_entries_without_venue() {
        let hits = filter_by_venue_contains(&sample(), "neurips");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "beta work");
    }

    #[test]
    fn year_filter_is_exact_and_ignores_missing_years() {
        let input = vec![
            publication("a", Some(2023), None),
            publication("b", None, None),
            publication("c", Some(2022), None),
        ];

        let hits = filter_by_year(&input, 2023);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "a");
    }
}
