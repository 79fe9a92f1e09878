pub mod collection;
pub mod config;
pub mod error;
pub mod photo;
pub mod records;
pub mod repository;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStore;

pub use collection::Collection;
pub use config::SiteConfig;
pub use error::StoreError;
pub use photo::PhotoRef;
pub use records::{Event, EventPatch, Member, MemberPatch, Record};
pub use repository::{KeyValueStore, Repository};
