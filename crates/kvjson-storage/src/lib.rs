//! Text-only key-value storage for kvjson.
//!
//! Provides the [`KeyValueStore`] trait defining the contract every backend
//! implements, plus [`InMemoryStore`] and [`SqliteStore`] as first-class
//! backends. With the `web` feature, [`BrowserStore`] adapts the host
//! browser's `localStorage`.
//!
//! Stores only ever see strings. Turning structured values into text and
//! back is the job of `kvjson-core`.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all backend failure modes
//! - [`traits`]: KeyValueStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`schema`]: SQL migrations and connection setup
//! - [`sqlite`]: SqliteStore implementation
//! - `browser`: BrowserStore implementation (feature `web`)

#[cfg(feature = "web")]
pub mod browser;
pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;

// Re-export key types for ergonomic use.
#[cfg(feature = "web")]
pub use browser::BrowserStore;
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use traits::KeyValueStore;
