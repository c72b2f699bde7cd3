//! e2d binary asset formats.
//!
//! The only format today is the `.e2d_shape` mesh shape format; see
//! [`shape`] for the layout.

pub mod shape;

pub use shape::*;
