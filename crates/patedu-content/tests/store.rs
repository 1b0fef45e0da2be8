use std::collections::BTreeSet;

use patedu_content::bedside_screening::{
    all_bedside_screening, bedside_screening_by_body_region, get_bedside_screening,
    search_bedside_screening,
};
use patedu_content::procedures::{
    all_procedures, get_procedure, procedures_by_body_region, procedures_by_category,
    procedures_by_complexity, procedures_by_specialty, search_procedures,
};
use patedu_content::registry;
use patedu_model::{CareSetting, ComplexityLevel, Language, ProcedureCategory};

#[test]
fn ids_are_unique_within_each_store() {
    let mut seen = BTreeSet::new();
    for entry in all_procedures() {
        assert!(seen.insert(entry.id), "duplicate procedure id {}", entry.id);
    }

    let mut seen = BTreeSet::new();
    for entry in all_bedside_screening() {
        assert!(
            seen.insert(entry.id),
            "duplicate bedside/screening id {}",
            entry.id
        );
    }
}

#[test]
fn every_id_round_trips_through_lookup() {
    for entry in all_procedures() {
        let found = get_procedure(entry.id).expect("shipped id must resolve");
        assert_eq!(found.id, entry.id);
    }
    for entry in all_bedside_screening() {
        let found = get_bedside_screening(entry.id).expect("shipped id must resolve");
        assert_eq!(found.id, entry.id);
    }
}

#[test]
fn absent_ids_resolve_to_none() {
    assert!(get_procedure("no-such-procedure").is_none());
    assert!(get_procedure("").is_none());
    assert!(get_bedside_screening("no-such-record").is_none());
}

#[test]
fn category_filters_partition_the_procedure_store() {
    let total: usize = ProcedureCategory::ALL
        .iter()
        .map(|c| procedures_by_category(*c).len())
        .sum();
    assert_eq!(total, all_procedures().count());
}

#[test]
fn every_complexity_level_is_represented() {
    for complexity in [
        ComplexityLevel::Minimal,
        ComplexityLevel::Low,
        ComplexityLevel::Moderate,
        ComplexityLevel::High,
        ComplexityLevel::VeryHigh,
    ] {
        assert!(
            !procedures_by_complexity(complexity).is_empty(),
            "no procedure at complexity {complexity}"
        );
    }
}

#[test]
fn specialty_filter_is_case_insensitive_exact_match() {
    let hits = procedures_by_specialty("Primary-Care");
    assert!(!hits.is_empty());
    assert_eq!(hits, procedures_by_specialty("primary-care"));
    // Substrings of a specialty code do not match.
    assert!(procedures_by_specialty("primary").is_empty());
}

#[test]
fn body_region_filter_is_case_insensitive_exact_match() {
    let hits = procedures_by_body_region("Chest");
    assert!(hits.iter().any(|e| e.id == "emerg-chest-tube"));
    assert_eq!(hits, procedures_by_body_region("chest"));
    // Substrings of a region tag do not match.
    assert!(procedures_by_body_region("che").is_empty());

    let bedside_hits = bedside_screening_by_body_region("chest");
    assert!(bedside_hits.iter().any(|e| e.id == "bed-central-line-care"));
}

#[test]
fn emergency_section_backs_its_specialty_and_setting() {
    let hits = procedures_by_specialty("emergency-medicine");
    assert!(hits.iter().any(|e| e.id == "emerg-cpr"));
    assert!(hits.iter().any(|e| e.id == "emerg-intubation"));
    let cpr = get_procedure("emerg-cpr").unwrap();
    assert!(cpr.settings.contains(&CareSetting::EmergencyDepartment));
}

#[test]
fn interventional_radiology_section_backs_its_specialty_and_setting() {
    let hits = procedures_by_specialty("interventional-radiology");
    assert!(hits.iter().any(|e| e.id == "ir-picc-line"));
    assert!(hits.iter().any(|e| e.id == "ir-image-guided-biopsy"));
    let picc = get_procedure("ir-picc-line").unwrap();
    assert!(picc.settings.contains(&CareSetting::InterventionalRadiology));
}

#[test]
fn search_is_case_insensitive_and_idempotent() {
    let lower = search_procedures("biopsy");
    let upper = search_procedures("BIOPSY");
    assert!(!lower.is_empty());
    assert_eq!(lower, upper);
    assert_eq!(lower, search_procedures("biopsy"));
}

#[test]
fn empty_keyword_returns_the_full_store() {
    assert_eq!(search_procedures("").len(), all_procedures().count());
    assert_eq!(
        search_bedside_screening("").len(),
        all_bedside_screening().count()
    );
}

#[test]
fn search_reaches_spanish_names() {
    let hits = search_procedures("hemograma");
    assert!(hits.iter().any(|e| e.id == "lab-cbc"));

    let hits = search_bedside_screening("venopunción");
    assert!(hits.iter().any(|e| e.id == "bed-venipuncture"));
}

#[test]
fn unmatched_keyword_is_an_empty_result() {
    assert!(search_procedures("zzz-no-match").is_empty());
    assert!(search_bedside_screening("zzz-no-match").is_empty());
}

#[test]
fn localized_names_fall_back_sensibly() {
    let entry = get_procedure("img-echo").unwrap();
    assert_eq!(
        entry.localized_name(Language::Spanish),
        "Ecocardiograma transtorácico"
    );
    assert_eq!(
        entry.localized_name(Language::English),
        "Echocardiogram (Transthoracic)"
    );
}

#[test]
fn registry_verify_counts_match_accessors() {
    let summary = registry().verify().expect("shipped store must verify");
    assert_eq!(summary.procedure_count, all_procedures().count());
    assert_eq!(
        summary.bedside_screening_count,
        all_bedside_screening().count()
    );
    for category in ProcedureCategory::ALL {
        assert_eq!(
            summary.procedure_counts_by_category[category.as_str()],
            procedures_by_category(*category).len()
        );
    }
}
