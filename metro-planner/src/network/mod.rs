//! The indexed network model.
//!
//! A network is assembled once with [`NetworkBuilder`] (usually via the
//! JSON [`loader`]) and frozen into a [`NetworkIndex`] that answers station,
//! line and transfer lookups for the rest of the process lifetime.

mod builder;
mod error;
mod index;
pub mod loader;

pub use builder::NetworkBuilder;
pub use error::{LoadError, NetworkError};
pub use index::NetworkIndex;
pub use loader::{NetworkData, load_from_path, load_from_str};
