//! Data core of the StepUp fitness tracker: typed persistence for
//! workouts, weekly goals, custom types, rest days and the user record,
//! plus the pure aggregation engines behind the dashboard and progress
//! screens. The presentation layer lives elsewhere; this crate's public
//! surface is the repository and the engine functions.

pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use database::repository::ActivityRepository;
pub use database::store::{BlobStore, BucketKeys, MemoryStore, SqliteStore};
pub use error::{StorageError, ValidationError};
