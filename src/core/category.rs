use crate::core::store::RecordStore;
use crate::domain::model::SiteRecord;
use crate::utils::error::{Result, SiteError};

/// How a category's keywords match against a site name.
///
/// Every category matches whole whitespace tokens except "Historic
/// District", whose keyword is a two-word phrase and can only ever match as
/// a substring of the full name. That asymmetry comes from the keyword data
/// itself; it is special-cased here rather than generalized.
#[derive(Debug, Clone, Copy)]
enum KeywordRule {
    Tokens(&'static [&'static str]),
    Phrase(&'static str),
}

impl KeywordRule {
    fn matches(&self, name: &str) -> bool {
        match self {
            KeywordRule::Tokens(keywords) => name
                .split_whitespace()
                .any(|word| keywords.contains(&word.to_lowercase().as_str())),
            KeywordRule::Phrase(phrase) => name.to_lowercase().contains(phrase),
        }
    }
}

/// The category every record belongs to unconditionally.
pub const ALL_LABEL: &str = "All";

// Non-exhaustive keyword lists; the labels are a closed set defined here,
// not user free-text.
static CATEGORY_RULES: &[(&str, KeywordRule)] = &[
    (
        "Home",
        KeywordRule::Tokens(&[
            "cabin",
            "house",
            "residence",
            "cottage",
            "villa",
            "mansion",
            "estate",
            "homestead",
            "home",
            "manor",
        ]),
    ),
    ("Historic District", KeywordRule::Phrase("historic district")),
    (
        "Building",
        KeywordRule::Tokens(&[
            "building",
            "hall",
            "courthouse",
            "armory",
            "library",
            "mill",
            "theater",
            "theatre",
            "center",
            "plant",
        ]),
    ),
    ("Cemetery", KeywordRule::Tokens(&["cemetery"])),
    ("Bridge", KeywordRule::Tokens(&["bridge"])),
    (
        "Religious Site",
        KeywordRule::Tokens(&["church", "chapel", "temple", "synagogue"]),
    ),
    ("Hotel/Inn", KeywordRule::Tokens(&["hotel", "inn"])),
    ("Farm", KeywordRule::Tokens(&["farm", "barn", "farmhouse"])),
    ("Park", KeywordRule::Tokens(&["park"])),
];

/// All selectable category labels, "All" first, in presentation order.
pub fn category_labels() -> Vec<&'static str> {
    let mut labels = vec![ALL_LABEL];
    labels.extend(CATEGORY_RULES.iter().map(|(label, _)| *label));
    labels
}

/// Filters the store down to the records in one category, preserving store
/// order. A record with several matching tokens appears once. Returns a
/// fresh sequence per call; nothing is accumulated across queries.
///
/// An unknown label is a code/config mismatch, not bad user input, and
/// fails loudly instead of returning an empty or full result.
pub fn classify<'a>(store: &'a RecordStore, label: &str) -> Result<Vec<&'a SiteRecord>> {
    if label == ALL_LABEL {
        return Ok(store.records().iter().collect());
    }

    let rule = CATEGORY_RULES
        .iter()
        .find(|(candidate, _)| *candidate == label)
        .map(|(_, rule)| rule)
        .ok_or_else(|| SiteError::UnknownCategory {
            label: label.to_string(),
        })?;

    Ok(store
        .records()
        .iter()
        .filter(|record| rule.matches(&record.name))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RawRow;

    fn store_of(names: &[&str]) -> RecordStore {
        let rows = names
            .iter()
            .enumerate()
            .map(|(i, name)| RawRow {
                resource_name: name.to_string(),
                register_number: format!("{:02}NR{:03}", i, i),
                register_date: "1980-05-01".to_string(),
                county: "Albany".to_string(),
                latitude: 42.65,
                longitude: -73.75,
            })
            .collect();
        RecordStore::load(rows).unwrap()
    }

    fn names<'a>(records: &[&'a crate::domain::model::SiteRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_all_is_identity_in_original_order() {
        let store = store_of(&["Old Bridge", "Smith House", "Elm Park"]);

        let result = classify(&store, "All").unwrap();

        assert_eq!(names(&result), vec!["Old Bridge", "Smith House", "Elm Park"]);
    }

    #[test]
    fn test_token_match_is_case_insensitive() {
        let store = store_of(&["SMITH HOUSE", "Jones Residence", "Main Street School"]);

        let result = classify(&store, "Home").unwrap();

        assert_eq!(names(&result), vec!["SMITH HOUSE", "Jones Residence"]);
    }

    #[test]
    fn test_multiple_matching_tokens_included_once() {
        // "house" and "estate" both hit the Home keyword set
        let store = store_of(&["Estate House of Brown", "Old Bridge"]);

        let result = classify(&store, "Home").unwrap();

        assert_eq!(names(&result), vec!["Estate House of Brown"]);
    }

    #[test]
    fn test_token_match_requires_whole_token() {
        // "farmhouse" is a Farm keyword; "Farmhouses" is not a token match
        let store = store_of(&["Wilson Farmhouse", "Farmhouses of Erie"]);

        let result = classify(&store, "Farm").unwrap();

        assert_eq!(names(&result), vec!["Wilson Farmhouse"]);
    }

    #[test]
    fn test_historic_district_matches_as_substring() {
        let store = store_of(&[
            "Broadway Historic District",
            "Something Historic District Park",
            "Historic Districts of Albany",
            "Smith House",
        ]);

        let result = classify(&store, "Historic District").unwrap();

        // Substring containment, including partial-word containment
        assert_eq!(
            names(&result),
            vec![
                "Broadway Historic District",
                "Something Historic District Park",
                "Historic Districts of Albany",
            ]
        );
    }

    #[test]
    fn test_classify_preserves_store_order() {
        let store = store_of(&["Zion Church", "Abbey Chapel", "Old Bridge", "First Temple"]);

        let result = classify(&store, "Religious Site").unwrap();

        assert_eq!(
            names(&result),
            vec!["Zion Church", "Abbey Chapel", "First Temple"]
        );
    }

    #[test]
    fn test_unknown_label_fails_loudly() {
        let store = store_of(&["Smith House"]);

        let err = classify(&store, "Castle").unwrap_err();

        match err {
            SiteError::UnknownCategory { label } => assert_eq!(label, "Castle"),
            other => panic!("expected UnknownCategory, got {:?}", other),
        }
    }

    #[test]
    fn test_category_labels_closed_set() {
        let labels = category_labels();
        assert_eq!(labels[0], "All");
        assert_eq!(labels.len(), 10);
        assert!(labels.contains(&"Hotel/Inn"));
    }
}
