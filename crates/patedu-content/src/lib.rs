#![deny(unsafe_code)]

//! Embedded bilingual (English/Spanish) patient education content.
//!
//! Two stores ship with the crate: the general procedure store
//! (labs, imaging, endoscopy, biopsies, cardiac, neurologic and
//! pulmonary procedures, surgeries, prevention) and the
//! bedside-and-screening store, whose records carry fully bilingual
//! preparation/expectation/risk/follow-up text.
//!
//! All data is `const` and lives in the binary; the accessor layer is
//! pure linear scans returning `&'static` references. An empty result
//! is a normal outcome, never an error.

pub mod bedside_screening;
pub mod error;
pub mod procedures;
pub mod registry;
mod store;

pub use crate::error::ContentError;
pub use crate::registry::{ContentRegistry, VerifySummary, registry};
