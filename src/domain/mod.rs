//! Domain layer: buildings, the skyline tree and the building parser
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod building;
pub mod error;
pub mod factory;
pub mod skyline;

pub use building::Building;
pub use error::{DomainError, DomainResult};
pub use factory::parse_building;
pub use skyline::{InOrderIterator, Skyline, SkylineNode};
