pub mod entry;
pub mod enums;
pub mod language;

pub use entry::{BedsideScreeningEntry, ProcedureEntry};
pub use enums::{
    AnesthesiaKind, BedsideCategory, CareSetting, ComplexityLevel, ProcedureCategory,
};
pub use language::Language;
