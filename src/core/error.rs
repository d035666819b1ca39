use thiserror::Error;

/// Validation failures raised by [`EntryDraft::validate`](super::EntryDraft::validate).
///
/// These are local, user-facing failures: the form stays open and surfaces
/// the message as a blocking warning. Nothing in this crate escalates
/// beyond them — malformed optional numeric input coerces to `None`/zero
/// instead of failing, and unmapped codes degrade to displaying the raw
/// code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EntryError {
    /// The resolved amount is zero or not a positive number.
    #[error("amount (importe) must be greater than zero")]
    InvalidAmount,

    /// The tax type requires a jurisdiction and none is selected.
    #[error("a jurisdiction is required for this tax type")]
    MissingJurisdiction,

    /// A jurisdiction is selected for a tax type that takes none.
    #[error("this tax type does not take a jurisdiction")]
    UnexpectedJurisdiction,
}
