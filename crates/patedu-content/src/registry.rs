use std::collections::BTreeMap;
use std::sync::LazyLock;

use patedu_model::{BedsideScreeningEntry, ProcedureCategory, ProcedureEntry};

use crate::error::ContentError;
use crate::store;

static REGISTRY: LazyLock<ContentRegistry> = LazyLock::new(ContentRegistry::build);

/// Process-wide registry over the compiled-in stores.
pub fn registry() -> &'static ContentRegistry {
    &REGISTRY
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct VerifySummary {
    pub procedure_count: usize,
    pub bedside_screening_count: usize,
    pub procedure_counts_by_category: BTreeMap<&'static str, usize>,
    pub bedside_count: usize,
    pub screening_count: usize,
}

/// Id indexes over both stores, built once on first access.
#[derive(Debug)]
pub struct ContentRegistry {
    pub procedures_by_id: BTreeMap<&'static str, &'static ProcedureEntry>,
    pub bedside_screening_by_id: BTreeMap<&'static str, &'static BedsideScreeningEntry>,
}

impl ContentRegistry {
    fn build() -> Self {
        let mut procedures_by_id = BTreeMap::new();
        for entry in store::procedures() {
            procedures_by_id.insert(entry.id, entry);
        }

        let mut bedside_screening_by_id = BTreeMap::new();
        for entry in store::bedside_screening() {
            bedside_screening_by_id.insert(entry.id, entry);
        }

        Self {
            procedures_by_id,
            bedside_screening_by_id,
        }
    }

    /// Checks id integrity of both stores and reports record counts.
    ///
    /// The stores are compiled in, so a failure here means the source
    /// arrays themselves are malformed.
    pub fn verify(&self) -> Result<VerifySummary, ContentError> {
        check_ids("procedures", store::procedures().map(|e| (e.id, e.name)))?;
        check_ids(
            "bedside-screening",
            store::bedside_screening().map(|e| (e.id, e.name)),
        )?;

        let mut procedure_counts_by_category: BTreeMap<&'static str, usize> = BTreeMap::new();
        for category in ProcedureCategory::ALL {
            procedure_counts_by_category.insert(category.as_str(), 0);
        }
        for entry in store::procedures() {
            *procedure_counts_by_category
                .entry(entry.category.as_str())
                .or_insert(0) += 1;
        }

        let bedside_count = store::bedside_screening()
            .filter(|e| e.category == patedu_model::BedsideCategory::Bedside)
            .count();
        let screening_count = store::bedside_screening()
            .filter(|e| e.category == patedu_model::BedsideCategory::Screening)
            .count();

        Ok(VerifySummary {
            procedure_count: store::procedures().count(),
            bedside_screening_count: store::bedside_screening().count(),
            procedure_counts_by_category,
            bedside_count,
            screening_count,
        })
    }
}

fn check_ids<'a>(
    store_name: &'static str,
    entries: impl Iterator<Item = (&'a str, &'a str)>,
) -> Result<(), ContentError> {
    let mut seen: BTreeMap<&str, ()> = BTreeMap::new();
    for (id, name) in entries {
        if id.is_empty() {
            return Err(ContentError::EmptyId {
                store: store_name,
                name: name.to_string(),
            });
        }
        if seen.insert(id, ()).is_some() {
            return Err(ContentError::DuplicateId {
                store: store_name,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_cover_every_record() {
        let reg = registry();
        assert_eq!(reg.procedures_by_id.len(), store::procedures().count());
        assert_eq!(
            reg.bedside_screening_by_id.len(),
            store::bedside_screening().count()
        );
        assert!(reg.procedures_by_id.contains_key("lab-cbc"));
        assert!(reg.bedside_screening_by_id.contains_key("scr-colonoscopy"));
    }

    #[test]
    fn shipped_store_verifies() {
        let summary = registry().verify().unwrap();
        assert_eq!(
            summary.procedure_count,
            summary.procedure_counts_by_category.values().sum::<usize>()
        );
        assert_eq!(
            summary.bedside_screening_count,
            summary.bedside_count + summary.screening_count
        );
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let err = check_ids("procedures", [("a", "A"), ("a", "A again")].into_iter()).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateId { id, .. } if id == "a"));
    }

    #[test]
    fn empty_id_is_rejected() {
        let err = check_ids("procedures", [("", "Nameless")].into_iter()).unwrap_err();
        assert!(matches!(err, ContentError::EmptyId { name, .. } if name == "Nameless"));
    }
}
