//! Shared types and utilities for the e2d asset pipeline
//!
//! This crate provides the pieces shared between:
//! - `e2d-export` (asset pipeline)
//! - engine-side consumers of the `.e2d_shape` format
//!
//! # Modules
//!
//! - [`packing`] - Color packing (f32 RGBA → packed u32)
//! - [`shape`] - The canonical shape model and its validation rules
//! - [`formats`] - e2d binary asset formats

pub mod formats;
pub mod packing;
pub mod shape;

// Re-export commonly used format items
pub use formats::{
    write_shape, ShapeHeader, ShapeStats, SHAPE_EXT, SHAPE_SIGNATURE, SHAPE_VERSION,
};

// Re-export commonly used packing items
pub use packing::{pack_color, pack_color_component};

// Re-export the shape model
pub use shape::{validate_shape, Shape, ShapeError};
