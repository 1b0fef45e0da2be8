//! Compiled-in record arrays, grouped by clinical section.
//!
//! Sections are concatenated in declaration order and the accessors
//! preserve that order, so iteration is deterministic across runs.

mod bedside;
mod biopsy;
mod cardiology;
mod emergency;
mod endoscopy;
mod imaging;
mod interventional_radiology;
mod laboratory;
mod neurology;
mod prevention;
mod pulmonary;
mod screening;
mod surgery;

use patedu_model::{BedsideScreeningEntry, ProcedureEntry};

pub(crate) const PROCEDURE_SECTIONS: &[&[ProcedureEntry]] = &[
    laboratory::ENTRIES,
    imaging::ENTRIES,
    endoscopy::ENTRIES,
    biopsy::ENTRIES,
    cardiology::ENTRIES,
    neurology::ENTRIES,
    pulmonary::ENTRIES,
    surgery::ENTRIES,
    emergency::ENTRIES,
    interventional_radiology::ENTRIES,
    prevention::ENTRIES,
];

pub(crate) const BEDSIDE_SCREENING_SECTIONS: &[&[BedsideScreeningEntry]] =
    &[bedside::ENTRIES, screening::ENTRIES];

pub(crate) fn procedures() -> impl Iterator<Item = &'static ProcedureEntry> {
    PROCEDURE_SECTIONS.iter().flat_map(|section| section.iter())
}

pub(crate) fn bedside_screening() -> impl Iterator<Item = &'static BedsideScreeningEntry> {
    BEDSIDE_SCREENING_SECTIONS
        .iter()
        .flat_map(|section| section.iter())
}
