/// Integrity errors surfaced by [`crate::registry::ContentRegistry::verify`].
///
/// Lookup misses are not errors; accessors return `Option`/empty `Vec`.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("duplicate id in {store} store: {id}")]
    DuplicateId { store: &'static str, id: String },

    #[error("empty id in {store} store on record named {name:?}")]
    EmptyId { store: &'static str, name: String },
}
