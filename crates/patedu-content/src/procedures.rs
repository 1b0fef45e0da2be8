//! Read-only accessors over the general procedure store.
//!
//! All lookups are linear scans over the compiled-in arrays. Misses are
//! normal outcomes (`None` or an empty `Vec`), never errors.

use patedu_model::{ComplexityLevel, ProcedureCategory, ProcedureEntry};

use crate::store;

/// Every procedure record, in store declaration order.
pub fn all_procedures() -> impl Iterator<Item = &'static ProcedureEntry> {
    store::procedures()
}

/// Looks up a procedure by exact id.
pub fn get_procedure(id: &str) -> Option<&'static ProcedureEntry> {
    store::procedures().find(|entry| entry.id == id)
}

/// All procedures in the given category.
pub fn procedures_by_category(category: ProcedureCategory) -> Vec<&'static ProcedureEntry> {
    store::procedures()
        .filter(|entry| entry.category == category)
        .collect()
}

/// All procedures at the given complexity level.
pub fn procedures_by_complexity(complexity: ComplexityLevel) -> Vec<&'static ProcedureEntry> {
    store::procedures()
        .filter(|entry| entry.complexity == complexity)
        .collect()
}

/// All procedures listing the given specialty (case-insensitive).
pub fn procedures_by_specialty(specialty: &str) -> Vec<&'static ProcedureEntry> {
    store::procedures()
        .filter(|entry| entry.has_specialty(specialty))
        .collect()
}

/// All procedures touching the given body region (case-insensitive).
pub fn procedures_by_body_region(region: &str) -> Vec<&'static ProcedureEntry> {
    store::procedures()
        .filter(|entry| entry.has_body_region(region))
        .collect()
}

/// Case-insensitive substring search across id, names, and education
/// text. An empty keyword matches every record.
pub fn search_procedures(keyword: &str) -> Vec<&'static ProcedureEntry> {
    let keyword = keyword.to_lowercase();
    store::procedures()
        .filter(|entry| entry.matches_keyword(&keyword))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_procedure_by_exact_id() {
        let entry = get_procedure("lab-cbc").unwrap();
        assert_eq!(entry.name, "Complete Blood Count (CBC)");
        assert_eq!(entry.spanish_name, "Hemograma completo");
    }

    #[test]
    fn get_procedure_miss_is_none() {
        assert!(get_procedure("lab-unknown").is_none());
        assert!(get_procedure("LAB-CBC").is_none(), "id lookup is exact");
    }

    #[test]
    fn category_filter_is_exact_subset() {
        let surgical = procedures_by_category(ProcedureCategory::Surgical);
        assert!(!surgical.is_empty());
        assert!(
            surgical
                .iter()
                .all(|e| e.category == ProcedureCategory::Surgical)
        );
    }

    #[test]
    fn complexity_filter_matches_rank() {
        let very_high = procedures_by_complexity(ComplexityLevel::VeryHigh);
        assert!(very_high.iter().any(|e| e.id == "surg-cabg"));
        assert!(
            very_high
                .iter()
                .all(|e| e.complexity == ComplexityLevel::VeryHigh)
        );
    }

    #[test]
    fn specialty_filter_ignores_case() {
        let lower = procedures_by_specialty("cardiology");
        let upper = procedures_by_specialty("CARDIOLOGY");
        assert!(!lower.is_empty());
        assert_eq!(lower, upper);
    }

    #[test]
    fn body_region_filter_ignores_case() {
        let lower = procedures_by_body_region("heart");
        let upper = procedures_by_body_region("HEART");
        assert!(!lower.is_empty());
        assert_eq!(lower, upper);
        assert!(lower.iter().all(|e| e.has_body_region("heart")));
    }

    #[test]
    fn search_ignores_case_and_empty_matches_all() {
        assert_eq!(search_procedures("colon"), search_procedures("COLON"));
        assert_eq!(search_procedures("").len(), all_procedures().count());
    }
}
