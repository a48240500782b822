//! The packed binary point cloud format ("bytes files").
//!
//! The layout is fixed and everything is little-endian with no padding:
//!
//! ```text
//! u32                   point count
//! [record; point count] one record per point, in cloud order
//! ```
//!
//! A record is either 12 bytes (three `f32` position components) or 15
//! bytes (the same three `f32`s followed by three `u8` color channels).
//! There is no flag announcing which of the two it is; the reader infers
//! the record size once from the length of the stream (see
//! [`Reader::read`]).
//!
//! Positions on the wire use the Y-up convention of the consuming engine,
//! while [`PointCloud`][crate::cloud::PointCloud] positions are Z-up, so
//! writing applies [`zup_to_yup`] and reading applies its inverse.

use cgmath::Point3;

mod read;
mod write;


pub use self::read::Reader;
pub use self::write::Writer;


/// Size of a record carrying only a position.
pub const RECORD_SIZE: usize = 3 * 4;

/// Size of a record carrying a position and a color.
pub const RECORD_SIZE_COLORED: usize = RECORD_SIZE + 3;

/// Size of the count field at the start of the stream.
pub(crate) const COUNT_SIZE: usize = 4;


/// Remaps a Z-up position into the Y-up wire frame.
///
/// This is a fixed relabeling of axes, not a general rotation, so it is
/// exact: no arithmetic is performed on `x` and `z`, and `y` is only
/// negated. Composed with [`yup_to_zup`] it reproduces the input bit for
/// bit.
pub fn zup_to_yup(p: Point3<f32>) -> [f32; 3] {
    [p.x, p.z, -p.y]
}

/// Remaps a Y-up wire position back into the Z-up convention. Inverse of
/// [`zup_to_yup`].
pub fn yup_to_zup([x, y, z]: [f32; 3]) -> Point3<f32> {
    Point3::new(x, -z, y)
}
