//! # LaserScene Core
//!
//! Leaf types and pure functions shared by every other LaserScene crate:
//!
//! - **Types**: integer grid points and RGB triples
//! - **Color**: lossy quantisation of any RGB triple onto one of three primaries
//! - **Geometry**: grid clamping and circle rasterisation
//!
//! Nothing in this crate touches the file system or owns mutable state.

pub mod color;
pub mod error;
pub mod geometry;
pub mod types;

pub use color::{code_to_rgb, rgb_to_code, ColorCode};
pub use error::{CoreError, CoreResult};
pub use geometry::{
    circle_to_points, clamp_grid_size, clamp_to_grid, radius_between, DEFAULT_GRID_SIZE,
    MAX_GRID_SIZE, MIN_GRID_SIZE,
};
pub use types::{GridPoint, Rgb};
