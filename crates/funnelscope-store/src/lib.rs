//! Append-only persistence for saved analyses, personas and API keys.
//!
//! Each [`Category`] is stored as one JSON document, loaded wholesale and
//! overwritten wholesale on every save. Callers talk to the [`Store`] trait;
//! [`JsonFileStore`] keeps one file per category in a data directory and
//! [`MemoryStore`] keeps everything in process.

pub mod error;
pub mod file;
pub mod memory;
pub mod personas;
pub mod records;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use personas::{add_personas, delete_persona, load_personas};
pub use records::{append, load_api_keys, load_list, save_api_keys, Category, Store};
