use uuid::Uuid;

/// Identifies entities that expose a stable unique identifier.
///
/// The stores' by-id list edits are written against this trait.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}
