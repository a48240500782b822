use std::{
    convert::TryFrom,
    io,
};

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

use crate::{
    cloud::PointCloud,
    io::Error,
};
use super::{zup_to_yup, RECORD_SIZE, RECORD_SIZE_COLORED};


/// A writer able to write bytes files.
///
/// The writer does not own the underlying stream in any file system sense:
/// it never opens, closes or flushes anything on its own. Give it a
/// `BufWriter` if you are writing to a file.
#[derive(Debug)]
pub struct Writer<W: io::Write> {
    writer: W,
}

impl<W: io::Write> Writer<W> {
    /// Creates a new writer which will write to the given `io::Write`
    /// instance.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes the given cloud as a bytes stream.
    ///
    /// Emits the point count followed by one record per point in cloud
    /// order. Whether the records carry the three color bytes is decided by
    /// the cloud's variant; this is not recorded in the stream itself.
    pub fn write(self, cloud: &PointCloud) -> Result<(), Error> {
        let mut w = self.writer;

        let count = u32::try_from(cloud.len())
            .map_err(|_| Error::OversizedCloud { len: cloud.len() })?;
        w.write_u32::<LittleEndian>(count)?;

        match cloud {
            PointCloud::Uncolored(points) => {
                let mut buf = [0; RECORD_SIZE];
                for &p in points {
                    let [x, y, z] = zup_to_yup(p);
                    LittleEndian::write_f32(&mut buf[0..4], x);
                    LittleEndian::write_f32(&mut buf[4..8], y);
                    LittleEndian::write_f32(&mut buf[8..12], z);

                    w.write_all(&buf)?;
                }
            }
            PointCloud::Colored(points) => {
                let mut buf = [0; RECORD_SIZE_COLORED];
                for &(p, [r, g, b]) in points {
                    let [x, y, z] = zup_to_yup(p);
                    LittleEndian::write_f32(&mut buf[0..4], x);
                    LittleEndian::write_f32(&mut buf[4..8], y);
                    LittleEndian::write_f32(&mut buf[8..12], z);
                    buf[12] = r;
                    buf[13] = g;
                    buf[14] = b;

                    w.write_all(&buf)?;
                }
            }
        }

        Ok(())
    }
}
