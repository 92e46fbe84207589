// crates/vidcat-core/src/lib.rs - Video catalog core library
//
// Everything that knows about records, positions and the backing file lives
// here. The CLI crate only adds prompting and rendering on top.
//
// LAYERING:
// - record:   the data unit (name, duration) and its on-disk field names
// - position: 1-based user positions and their 0-based storage index
// - catalog:  the ordered in-memory sequence, no I/O
// - store:    load/save plus the persisting add/update/delete operations
// - config:   where the backing file lives and how it is formatted
// - error:    the error taxonomy shared by all of the above

pub mod catalog;
pub mod config;
pub mod error;
pub mod position;
pub mod record;
pub mod store;

pub use catalog::Catalog;
pub use config::{CatalogConfig, ConfigError};
pub use error::{CatalogError, CatalogResult};
pub use position::Position;
pub use record::Record;
pub use store::CatalogStore;
