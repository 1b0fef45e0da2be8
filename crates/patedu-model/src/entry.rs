//! Record types for the two content stores.
//!
//! Records are flat structs over `&'static str` so the stores can be
//! declared as `const` arrays and embedded in the binary. Nothing is
//! allocated or mutated at runtime; the accessor layer hands out
//! `&'static` references into the arrays.

use serde::Serialize;

use crate::enums::{
    AnesthesiaKind, BedsideCategory, CareSetting, ComplexityLevel, ProcedureCategory,
};
use crate::language::Language;

/// One entry in the general procedure store.
///
/// Covers labs, imaging, endoscopy, biopsies, cardiac, neurologic and
/// pulmonary procedures, and common surgeries. The name is bilingual;
/// the education text is English only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcedureEntry {
    /// Unique id within the procedure store, e.g. `lab-cbc`.
    pub id: &'static str,
    pub name: &'static str,
    pub spanish_name: &'static str,
    pub category: ProcedureCategory,
    /// Clinician-facing one-sentence description.
    pub description: &'static str,
    /// Kebab-case specialty tags, e.g. `primary-care`, `cardiology`.
    pub specialties: &'static [&'static str],
    pub body_regions: &'static [&'static str],
    pub complexity: ComplexityLevel,
    pub settings: &'static [CareSetting],
    pub anesthesia: &'static [AnesthesiaKind],
    /// What the patient will experience, in plain English.
    pub what_to_expect: &'static str,
    pub patient_explanation: &'static str,
}

impl ProcedureEntry {
    /// Name in the requested language.
    pub fn localized_name(&self, lang: Language) -> &'static str {
        match lang {
            Language::English => self.name,
            Language::Spanish => self.spanish_name,
        }
    }

    /// True if the lowercased keyword occurs in any searchable field.
    ///
    /// The caller lowercases once; records compare against their own
    /// lowercased text. Searchable fields: id, both names, description,
    /// patient explanation. An empty keyword matches every record.
    pub fn matches_keyword(&self, keyword_lowercase: &str) -> bool {
        self.id.to_lowercase().contains(keyword_lowercase)
            || self.name.to_lowercase().contains(keyword_lowercase)
            || self.spanish_name.to_lowercase().contains(keyword_lowercase)
            || self.description.to_lowercase().contains(keyword_lowercase)
            || self
                .patient_explanation
                .to_lowercase()
                .contains(keyword_lowercase)
    }

    /// Case-insensitive exact match against the specialty tags.
    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialties
            .iter()
            .any(|s| s.eq_ignore_ascii_case(specialty))
    }

    /// Case-insensitive exact match against the body region tags.
    pub fn has_body_region(&self, region: &str) -> bool {
        self.body_regions
            .iter()
            .any(|r| r.eq_ignore_ascii_case(region))
    }
}

/// One entry in the bedside-and-screening store.
///
/// These records are fully bilingual: every patient education field
/// (description, explanation, preparation, expectations, risks,
/// follow-up) has a Spanish twin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BedsideScreeningEntry {
    /// Unique id within the bedside/screening store, e.g. `bed-wound-care`.
    pub id: &'static str,
    pub name: &'static str,
    pub spanish_name: &'static str,
    pub category: BedsideCategory,
    pub description: &'static str,
    pub spanish_description: &'static str,
    pub specialties: &'static [&'static str],
    pub body_regions: &'static [&'static str],
    pub complexity: ComplexityLevel,
    pub settings: &'static [CareSetting],
    pub anesthesia: &'static [AnesthesiaKind],
    pub patient_explanation: &'static str,
    pub spanish_patient_explanation: &'static str,
    pub preparation: &'static str,
    pub spanish_preparation: &'static str,
    pub what_to_expect: &'static str,
    pub spanish_what_to_expect: &'static str,
    pub risks: &'static str,
    pub spanish_risks: &'static str,
    pub follow_up: &'static str,
    pub spanish_follow_up: &'static str,
}

impl BedsideScreeningEntry {
    pub fn localized_name(&self, lang: Language) -> &'static str {
        match lang {
            Language::English => self.name,
            Language::Spanish => self.spanish_name,
        }
    }

    pub fn localized_description(&self, lang: Language) -> &'static str {
        match lang {
            Language::English => self.description,
            Language::Spanish => self.spanish_description,
        }
    }

    pub fn localized_patient_explanation(&self, lang: Language) -> &'static str {
        match lang {
            Language::English => self.patient_explanation,
            Language::Spanish => self.spanish_patient_explanation,
        }
    }

    pub fn localized_preparation(&self, lang: Language) -> &'static str {
        match lang {
            Language::English => self.preparation,
            Language::Spanish => self.spanish_preparation,
        }
    }

    pub fn localized_what_to_expect(&self, lang: Language) -> &'static str {
        match lang {
            Language::English => self.what_to_expect,
            Language::Spanish => self.spanish_what_to_expect,
        }
    }

    pub fn localized_risks(&self, lang: Language) -> &'static str {
        match lang {
            Language::English => self.risks,
            Language::Spanish => self.spanish_risks,
        }
    }

    pub fn localized_follow_up(&self, lang: Language) -> &'static str {
        match lang {
            Language::English => self.follow_up,
            Language::Spanish => self.spanish_follow_up,
        }
    }

    /// True if the lowercased keyword occurs in any searchable field.
    ///
    /// Searchable fields: id, both names, both descriptions. The long
    /// education fields stay out of search to keep results on topic.
    pub fn matches_keyword(&self, keyword_lowercase: &str) -> bool {
        self.id.to_lowercase().contains(keyword_lowercase)
            || self.name.to_lowercase().contains(keyword_lowercase)
            || self.spanish_name.to_lowercase().contains(keyword_lowercase)
            || self.description.to_lowercase().contains(keyword_lowercase)
            || self
                .spanish_description
                .to_lowercase()
                .contains(keyword_lowercase)
    }

    /// Case-insensitive exact match against the specialty tags.
    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialties
            .iter()
            .any(|s| s.eq_ignore_ascii_case(specialty))
    }

    /// Case-insensitive exact match against the body region tags.
    pub fn has_body_region(&self, region: &str) -> bool {
        self.body_regions
            .iter()
            .any(|r| r.eq_ignore_ascii_case(region))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: ProcedureEntry = ProcedureEntry {
        id: "lab-cbc",
        name: "Complete Blood Count (CBC)",
        spanish_name: "Hemograma completo",
        category: ProcedureCategory::Diagnostic,
        description: "Measures red cells, white cells, hemoglobin, hematocrit, and platelets.",
        specialties: &["primary-care", "hematology"],
        body_regions: &["blood"],
        complexity: ComplexityLevel::Minimal,
        settings: &[CareSetting::OutpatientClinic, CareSetting::Laboratory],
        anesthesia: &[AnesthesiaKind::None],
        what_to_expect: "A quick blood draw from your arm vein.",
        patient_explanation: "A CBC checks the different types of cells in your blood.",
    };

    #[test]
    fn test_matches_keyword_across_fields() {
        assert!(ENTRY.matches_keyword("hemograma"));
        assert!(ENTRY.matches_keyword("platelets"));
        assert!(ENTRY.matches_keyword("lab-cbc"));
        assert!(!ENTRY.matches_keyword("colonoscopy"));
    }

    #[test]
    fn test_empty_keyword_matches() {
        assert!(ENTRY.matches_keyword(""));
    }

    #[test]
    fn test_has_specialty_case_insensitive() {
        assert!(ENTRY.has_specialty("Hematology"));
        assert!(ENTRY.has_specialty("PRIMARY-CARE"));
        assert!(!ENTRY.has_specialty("cardiology"));
    }

    #[test]
    fn test_has_body_region_case_insensitive() {
        assert!(ENTRY.has_body_region("Blood"));
        assert!(!ENTRY.has_body_region("chest"));
        // Substrings of a region tag do not match.
        assert!(!ENTRY.has_body_region("blo"));
    }

    #[test]
    fn test_localized_name() {
        assert_eq!(ENTRY.localized_name(Language::Spanish), "Hemograma completo");
        assert_eq!(
            ENTRY.localized_name(Language::English),
            "Complete Blood Count (CBC)"
        );
    }

    #[test]
    fn test_entry_serializes() {
        let json = serde_json::to_value(ENTRY).expect("serialize entry");
        assert_eq!(json["id"], "lab-cbc");
        assert_eq!(json["category"], "diagnostic");
        assert_eq!(json["complexity"], "minimal");
        assert_eq!(json["settings"][1], "laboratory");
    }
}
