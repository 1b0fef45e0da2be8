//! Read-only accessors over the bedside-and-screening store.

use patedu_model::{BedsideCategory, BedsideScreeningEntry, ComplexityLevel};

use crate::store;

/// Every bedside/screening record, in store declaration order.
pub fn all_bedside_screening() -> impl Iterator<Item = &'static BedsideScreeningEntry> {
    store::bedside_screening()
}

/// Looks up a bedside/screening record by exact id.
pub fn get_bedside_screening(id: &str) -> Option<&'static BedsideScreeningEntry> {
    store::bedside_screening().find(|entry| entry.id == id)
}

/// All records in the given category (bedside or screening).
pub fn bedside_screening_by_category(
    category: BedsideCategory,
) -> Vec<&'static BedsideScreeningEntry> {
    store::bedside_screening()
        .filter(|entry| entry.category == category)
        .collect()
}

/// All records at the given complexity level.
pub fn bedside_screening_by_complexity(
    complexity: ComplexityLevel,
) -> Vec<&'static BedsideScreeningEntry> {
    store::bedside_screening()
        .filter(|entry| entry.complexity == complexity)
        .collect()
}

/// All records listing the given specialty (case-insensitive).
pub fn bedside_screening_by_specialty(specialty: &str) -> Vec<&'static BedsideScreeningEntry> {
    store::bedside_screening()
        .filter(|entry| entry.has_specialty(specialty))
        .collect()
}

/// All records touching the given body region (case-insensitive).
pub fn bedside_screening_by_body_region(region: &str) -> Vec<&'static BedsideScreeningEntry> {
    store::bedside_screening()
        .filter(|entry| entry.has_body_region(region))
        .collect()
}

/// Case-insensitive substring search across id, names, and both
/// description languages. An empty keyword matches every record.
pub fn search_bedside_screening(keyword: &str) -> Vec<&'static BedsideScreeningEntry> {
    let keyword = keyword.to_lowercase();
    store::bedside_screening()
        .filter(|entry| entry.matches_keyword(&keyword))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use patedu_model::Language;

    #[test]
    fn get_record_by_exact_id() {
        let entry = get_bedside_screening("bed-venipuncture").unwrap();
        assert_eq!(entry.name, "Blood Draw / Venipuncture");
        assert!(get_bedside_screening("bed-unknown").is_none());
    }

    #[test]
    fn both_categories_are_populated() {
        let bedside = bedside_screening_by_category(BedsideCategory::Bedside);
        let screening = bedside_screening_by_category(BedsideCategory::Screening);
        assert!(!bedside.is_empty());
        assert!(!screening.is_empty());
        assert_eq!(
            bedside.len() + screening.len(),
            all_bedside_screening().count()
        );
    }

    #[test]
    fn specialty_filter_ignores_case() {
        assert_eq!(
            bedside_screening_by_specialty("nursing"),
            bedside_screening_by_specialty("Nursing")
        );
    }

    #[test]
    fn body_region_filter_ignores_case() {
        let hits = bedside_screening_by_body_region("SKIN");
        assert!(hits.iter().any(|e| e.id == "bed-wound-care"));
        assert_eq!(hits, bedside_screening_by_body_region("skin"));
    }

    #[test]
    fn search_spans_spanish_description() {
        let hits = search_bedside_screening("pleural");
        assert!(hits.iter().any(|e| e.id == "bed-thoracentesis"));
    }

    #[test]
    fn every_record_carries_full_spanish_text() {
        for entry in all_bedside_screening() {
            assert!(!entry.localized_description(Language::Spanish).is_empty());
            assert!(!entry.spanish_preparation.is_empty(), "{}", entry.id);
            assert!(!entry.spanish_risks.is_empty(), "{}", entry.id);
            assert!(!entry.spanish_follow_up.is_empty(), "{}", entry.id);
        }
    }
}
