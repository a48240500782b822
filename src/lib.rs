//! Converting point clouds between the PLY interchange format and a compact
//! binary representation.
//!
//! Point clouds come in from (and go back out to) PLY files, which are
//! parsed and written by the `ply-rs` crate. The other side is a fixed
//! layout binary stream (a "bytes file"): a little-endian `u32` point count
//! followed by one fixed-size record per point. See [`io::bytes`] for the
//! exact layout.
//!
//! The two formats don't agree on which axis points up: PLY data is stored
//! Z-up, the binary consumer expects Y-up. Both directions of the conversion
//! apply the axis remap, so a full round trip reproduces the original
//! positions bit for bit.

pub mod cloud;
pub mod io;

pub use crate::cloud::PointCloud;

// So users don't have to add `cgmath` themselves just to name `Point3`.
pub use cgmath;
