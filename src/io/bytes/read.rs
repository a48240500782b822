use std::io;

use byteorder::{ByteOrder, LittleEndian};

use crate::{
    cloud::PointCloud,
    io::Error,
};
use super::{yup_to_zup, COUNT_SIZE, RECORD_SIZE, RECORD_SIZE_COLORED};


/// A reader able to read bytes files.
#[derive(Debug)]
pub struct Reader<R: io::Read> {
    reader: R,
}

impl<R: io::Read> Reader<R> {
    /// Creates a new reader which will read from the given `io::Read`
    /// instance.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Reads the whole stream into a point cloud.
    ///
    /// Since the stream does not announce whether its records carry colors,
    /// the record size is inferred once, before any record is decoded: with
    /// `n` points declared in the count field, a remaining length of `n *
    /// 12` means plain records and `n * 15` means colored records. For any
    /// `n > 0` at most one of the two can hold, so the inference is
    /// unambiguous for well-formed streams. A stream with zero points has
    /// no record to infer anything from and decodes as uncolored.
    ///
    /// Streams shorter than the count demands fail with
    /// [`Error::TruncatedStream`]; any other length mismatch (including
    /// trailing data after the declared records) fails with
    /// [`Error::CorruptStream`]. A short cloud is never silently returned.
    pub fn read(self) -> Result<PointCloud, Error> {
        let mut r = self.reader;

        // The inference above needs the total remaining length, so slurp
        // the stream. These files are bounded by their 32 bit count; there
        // is no streaming mode.
        let mut data = Vec::new();
        r.read_to_end(&mut data)?;

        if data.len() < COUNT_SIZE {
            return Err(Error::TruncatedStream {
                needed: (COUNT_SIZE - data.len()) as u64,
                found: data.len() as u64,
            });
        }
        let count = LittleEndian::read_u32(&data[..COUNT_SIZE]);
        let body = &data[COUNT_SIZE..];

        let remaining = body.len() as u64;
        let plain_len = u64::from(count) * RECORD_SIZE as u64;
        let colored_len = u64::from(count) * RECORD_SIZE_COLORED as u64;

        if remaining == plain_len {
            let mut points = Vec::with_capacity(count as usize);
            for record in body.chunks_exact(RECORD_SIZE) {
                points.push(yup_to_zup(read_position(record)));
            }

            Ok(PointCloud::Uncolored(points))
        } else if remaining == colored_len {
            let mut points = Vec::with_capacity(count as usize);
            for record in body.chunks_exact(RECORD_SIZE_COLORED) {
                let position = yup_to_zup(read_position(record));
                let color = [record[12], record[13], record[14]];
                points.push((position, color));
            }

            Ok(PointCloud::Colored(points))
        } else if remaining < plain_len {
            Err(Error::TruncatedStream {
                needed: plain_len - remaining,
                found: remaining,
            })
        } else {
            Err(Error::CorruptStream { remaining, count })
        }
    }
}

/// Reads the three position floats at the start of a record.
fn read_position(record: &[u8]) -> [f32; 3] {
    [
        LittleEndian::read_f32(&record[0..4]),
        LittleEndian::read_f32(&record[4..8]),
        LittleEndian::read_f32(&record[8..12]),
    ]
}
