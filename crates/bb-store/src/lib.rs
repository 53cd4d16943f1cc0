pub mod models;
pub mod repositories;

mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    #[error("Store lock poisoned by a panicking writer")]
    Poisoned,
}
