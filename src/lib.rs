//! Skyline: the outline a set of axis-aligned buildings casts against the sky.
//!
//! Buildings are inserted one at a time into a [`Skyline`], a binary tree of
//! non-overlapping segments where taller buildings overwrite lower ones.
//! [`Skyline::flatten`] yields the left-to-right outline with touching
//! equal-height segments merged, ready to be drawn with a
//! [`application::drawing::SkylineDrawer`].
//!
//! Layers:
//! - `domain`: buildings, the skyline tree and the building parser
//! - `application`: drawing, building input and services
//! - `infrastructure`: I/O traits and service wiring
//! - `cli`: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod tree_traits;
pub mod util;

pub use domain::{parse_building, Building, DomainError, Skyline};
