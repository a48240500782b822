//! Reading and writing the two supported point cloud formats.
//!
//! Each format lives in its own submodule: [`ply`] for the interchange
//! format (backed by the `ply-rs` crate) and [`bytes`] for the packed
//! binary format. All of them speak [`PointCloud`][crate::cloud::PointCloud]
//! and return the shared [`Error`] type.
//!
//! None of the readers and writers here open, close or otherwise manage
//! files. They operate on `io::Read`/`io::Write` instances that are owned
//! by the caller, which keeps the actual conversion logic free of any file
//! system concerns.

use std::io;

use failure::Fail;


pub mod bytes;
pub mod ply;


/// The error type used by everything in this module.
///
/// Errors are always returned to the caller; nothing in this module retries,
/// logs or prints. All conditions other than `Io` are deterministic
/// properties of the input, so retrying can never help.
#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "IO error: {}", _0)]
    Io(io::Error),

    /// The stream ended before the declared number of records was read.
    #[fail(
        display = "unexpected end of stream: needed at least {} more bytes, found {}",
        needed, found
    )]
    TruncatedStream { needed: u64, found: u64 },

    /// The stream length matches neither plain nor colored records for the
    /// declared point count.
    #[fail(
        display = "corrupt stream: {} bytes after the header fit neither plain nor \
            colored records for {} points",
        remaining, count
    )]
    CorruptStream { remaining: u64, count: u32 },

    /// A vertex in the source file does not have a property that the file's
    /// header declares for all vertices.
    #[fail(display = "vertex {} is missing the declared property '{}'", index, property)]
    MalformedCloud { index: usize, property: &'static str },

    /// A color channel value does not fit into the 8 bit wire field.
    #[fail(display = "color channel value {} does not fit into 8 bits", value)]
    ColorOutOfRange { value: i64 },

    /// The cloud has more points than the 32 bit count field can express.
    #[fail(display = "cloud has {} points, which overflows the 32 bit count field", len)]
    OversizedCloud { len: usize },

    /// The source is not a PLY file this tool can work with (missing vertex
    /// element, unsupported property types, parse failures, ...).
    #[fail(display = "invalid PLY file: {}", _0)]
    InvalidPly(String),
}

impl From<io::Error> for Error {
    fn from(src: io::Error) -> Self {
        Error::Io(src)
    }
}
