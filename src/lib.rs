//! Packs a directory of logo images into one grid-aligned sprite sheet and
//! generates a TypeScript table of each logo's grid cell.

pub mod error;
pub mod hash;
pub mod logging;
pub mod sprite_sheet;

pub use error::{Error, ItemError, Result};
