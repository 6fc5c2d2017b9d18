use thiserror::Error;

/// Failures surfaced by the in-memory store.
///
/// Absence of a record is not an error; lookups signal it with `Ok(None)`.
/// The only way a store operation fails is a poisoned collection lock, which
/// means a previous caller panicked mid-mutation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0} collection lock poisoned")]
    Poisoned(&'static str),
}
