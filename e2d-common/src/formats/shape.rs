//! The `.e2d_shape` binary format.
//!
//! All integers little-endian, no padding.
//!
//! # Layout
//! ```text
//! 0x00: signature  [u8; 9]  ASCII "e2d_shape", not null-terminated
//! 0x09: version    u32      currently 1
//! 0x0D: vertex_count        u32
//! 0x11: index_count         u32
//! 0x15: uv_channel_count    u32
//! 0x19: color_channel_count u32
//! 0x1D: vertices   vertex_count × (f32 x, f32 y)
//! var:  indices    index_count × u32
//! var:  uv channels, each vertex_count × (f32 x, f32 y), concatenated
//! var:  color channels, each vertex_count × u32, concatenated
//! ```
//!
//! Channels carry no per-channel markers; each one is implicitly sized by
//! `vertex_count`.

use std::io::{self, Write};

use crate::shape::Shape;

/// File signature, written raw at offset 0.
pub const SHAPE_SIGNATURE: [u8; 9] = *b"e2d_shape";

/// Current format version.
pub const SHAPE_VERSION: u32 = 1;

/// Canonical file extension (without leading dot).
pub const SHAPE_EXT: &str = "e2d_shape";

/// Shape file header (29 bytes including signature and version).
#[derive(Debug, Clone, Copy)]
pub struct ShapeHeader {
    pub vertex_count: u32,
    pub index_count: u32,
    pub uv_channel_count: u32,
    pub color_channel_count: u32,
}

impl ShapeHeader {
    pub const SIZE: usize = 29;

    pub fn new(
        vertex_count: u32,
        index_count: u32,
        uv_channel_count: u32,
        color_channel_count: u32,
    ) -> Self {
        Self {
            vertex_count,
            index_count,
            uv_channel_count,
            color_channel_count,
        }
    }

    /// Header describing an existing shape.
    pub fn for_shape(shape: &Shape) -> Self {
        Self::new(
            shape.vertices.len() as u32,
            shape.indices.len() as u32,
            shape.uv_channels.len() as u32,
            shape.color_channels.len() as u32,
        )
    }

    /// Write header to bytes.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..9].copy_from_slice(&SHAPE_SIGNATURE);
        bytes[9..13].copy_from_slice(&SHAPE_VERSION.to_le_bytes());
        bytes[13..17].copy_from_slice(&self.vertex_count.to_le_bytes());
        bytes[17..21].copy_from_slice(&self.index_count.to_le_bytes());
        bytes[21..25].copy_from_slice(&self.uv_channel_count.to_le_bytes());
        bytes[25..29].copy_from_slice(&self.color_channel_count.to_le_bytes());
        bytes
    }

    /// Read header from bytes.
    ///
    /// Returns `None` on short input, a wrong signature, or a version this
    /// build does not understand.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        if bytes[0..9] != SHAPE_SIGNATURE {
            return None;
        }
        let version = u32::from_le_bytes([bytes[9], bytes[10], bytes[11], bytes[12]]);
        if version != SHAPE_VERSION {
            return None;
        }
        Some(Self {
            vertex_count: u32::from_le_bytes([bytes[13], bytes[14], bytes[15], bytes[16]]),
            index_count: u32::from_le_bytes([bytes[17], bytes[18], bytes[19], bytes[20]]),
            uv_channel_count: u32::from_le_bytes([bytes[21], bytes[22], bytes[23], bytes[24]]),
            color_channel_count: u32::from_le_bytes([bytes[25], bytes[26], bytes[27], bytes[28]]),
        })
    }
}

/// Byte counts written for each array group, for diagnostics only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeStats {
    pub vertices_bytes: usize,
    pub indices_bytes: usize,
    pub uvs_bytes: usize,
    pub colors_bytes: usize,
}

fn write_vertex_array<W: Write>(w: &mut W, vertices: &[[f32; 2]]) -> io::Result<usize> {
    for v in vertices {
        w.write_all(&v[0].to_le_bytes())?;
        w.write_all(&v[1].to_le_bytes())?;
    }
    Ok(vertices.len() * 8)
}

/// Write a complete shape file.
///
/// The shape is expected to already satisfy the invariants checked by
/// [`crate::shape::validate_shape`]; only sink I/O errors are reported
/// here.
pub fn write_shape<W: Write>(w: &mut W, shape: &Shape) -> io::Result<ShapeStats> {
    let header = ShapeHeader::for_shape(shape);
    w.write_all(&header.to_bytes())?;

    let vertices_bytes = write_vertex_array(w, &shape.vertices)?;

    for i in &shape.indices {
        w.write_all(&i.to_le_bytes())?;
    }
    let indices_bytes = shape.indices.len() * 4;

    let mut uvs_bytes = 0;
    for uvs in &shape.uv_channels {
        uvs_bytes += write_vertex_array(w, uvs)?;
    }

    let mut colors_bytes = 0;
    for colors in &shape.color_channels {
        for c in colors {
            w.write_all(&c.to_le_bytes())?;
        }
        colors_bytes += colors.len() * 4;
    }

    Ok(ShapeStats {
        vertices_bytes,
        indices_bytes,
        uvs_bytes,
        colors_bytes,
    })
}
