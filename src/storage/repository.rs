//! Generic load/save contract and its JSON file implementation

use std::marker::PhantomData;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use tracing::info;

use super::file_io::{read_json_or_default, write_json_atomic};
use crate::error::CashResult;

/// A durable store for one record type
///
/// `load` is best-effort and always yields a value; `save` reports failures.
pub trait StateStore<T> {
    /// Load the stored record, or a default record if none can be read
    fn load(&self) -> T;

    /// Persist the record, replacing whatever was stored before
    fn save(&self, data: &T) -> CashResult<()>;
}

/// Stores one record as a pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonRepository<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonRepository<T> {
    /// Create a repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _record: PhantomData,
        }
    }
}

impl<T> StateStore<T> for JsonRepository<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    fn load(&self) -> T {
        read_json_or_default(&self.path)
    }

    fn save(&self, data: &T) -> CashResult<()> {
        write_json_atomic(&self.path, data)?;
        info!(path = %self.path.display(), "state saved");
        Ok(())
    }
}
