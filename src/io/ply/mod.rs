//! Reading and writing point clouds as PLY files.
//!
//! The PLY format itself (header grammar, ASCII and binary sub-variants,
//! arbitrary elements and properties) is handled entirely by the `ply-rs`
//! crate. This module is only the bridge between `ply-rs`'s generic
//! element/property model and [`PointCloud`]: it picks the `vertex` element
//! out of a parsed file and builds one back up for writing.
//!
//! Only the `vertex` element is looked at. Anything else a file might
//! contain (faces, edges, custom elements) is parsed by `ply-rs` and then
//! ignored, since the bytes format has no place for it anyway.

use std::io;

use cgmath::Point3;
use ply_rs::{
    parser::Parser,
    ply::{
        Addable, DefaultElement, ElementDef, Encoding, Ply, Property, PropertyDef,
        PropertyType, ScalarType,
    },
    writer::Writer as PlyWriter,
};

use crate::{
    cloud::PointCloud,
    io::Error,
};

#[cfg(test)]
mod tests;


/// The per-vertex property names this tool understands.
const POSITION_CHANNELS: [&str; 3] = ["x", "y", "z"];
const COLOR_CHANNELS: [&str; 3] = ["red", "green", "blue"];


/// Reads a PLY file into a point cloud.
///
/// The file must declare a `vertex` element with `x`, `y` and `z`
/// properties. The cloud is colored iff the element additionally declares
/// *all* of `red`, `green` and `blue`; a file declaring only some of them
/// is read as uncolored and the partial channels are ignored. Which of the
/// PLY encodings the file uses is `ply-rs`'s business, not ours.
pub fn read(reader: &mut impl io::BufRead) -> Result<PointCloud, Error> {
    let parser = Parser::<DefaultElement>::new();

    let header = parser.read_header(reader)
        .map_err(|e| Error::InvalidPly(format!("failed to parse header: {}", e)))?;

    let vertex_def = header.elements.get("vertex")
        .ok_or_else(|| Error::InvalidPly("file has no 'vertex' element".into()))?;

    // Color is a property of the element declaration and thereby uniform
    // across all vertices of the file.
    let has_colors = COLOR_CHANNELS.iter().all(|c| vertex_def.properties.contains_key(*c));

    let payload = parser.read_payload(reader, &header)
        .map_err(|e| Error::InvalidPly(format!("failed to read payload: {}", e)))?;

    // A zero-count element may come back without a payload entry.
    let empty = Vec::new();
    let vertices = payload.get("vertex").unwrap_or(&empty);

    if has_colors {
        let mut points = Vec::with_capacity(vertices.len());
        for (index, vertex) in vertices.iter().enumerate() {
            let position = read_position(vertex, index)?;
            let color = [
                channel_prop(vertex, COLOR_CHANNELS[0], index)?,
                channel_prop(vertex, COLOR_CHANNELS[1], index)?,
                channel_prop(vertex, COLOR_CHANNELS[2], index)?,
            ];
            points.push((position, color));
        }

        Ok(PointCloud::Colored(points))
    } else {
        let mut points = Vec::with_capacity(vertices.len());
        for (index, vertex) in vertices.iter().enumerate() {
            points.push(read_position(vertex, index)?);
        }

        Ok(PointCloud::Uncolored(points))
    }
}

/// Writes the cloud as an ASCII PLY file.
///
/// Positions are written as `float` properties, colors (if the cloud has
/// them) as `uchar`. ASCII keeps the output inspectable with a text editor,
/// which is the main reason to convert a bytes file back at all.
pub fn write(writer: &mut impl io::Write, cloud: &PointCloud) -> Result<(), Error> {
    let mut ply = Ply::<DefaultElement>::new();
    ply.header.encoding = Encoding::Ascii;

    let mut vertex_def = ElementDef::new("vertex".to_string());
    for name in &POSITION_CHANNELS {
        vertex_def.properties.add(PropertyDef::new(
            (*name).to_string(),
            PropertyType::Scalar(ScalarType::Float),
        ));
    }
    if cloud.has_colors() {
        for name in &COLOR_CHANNELS {
            vertex_def.properties.add(PropertyDef::new(
                (*name).to_string(),
                PropertyType::Scalar(ScalarType::UChar),
            ));
        }
    }
    vertex_def.count = cloud.len();
    ply.header.elements.add(vertex_def);

    let elements = match cloud {
        PointCloud::Uncolored(points) => {
            points.iter().map(|p| position_element(*p)).collect()
        }
        PointCloud::Colored(points) => {
            points.iter().map(|&(p, [r, g, b])| {
                let mut element = position_element(p);
                element.insert("red".to_string(), Property::UChar(r));
                element.insert("green".to_string(), Property::UChar(g));
                element.insert("blue".to_string(), Property::UChar(b));
                element
            }).collect()
        }
    };
    ply.payload.insert("vertex".to_string(), elements);

    PlyWriter::new().write_ply(writer, &mut ply)?;

    Ok(())
}


// ===============================================================================================
// ===== Helper functions
// ===============================================================================================

fn read_position(vertex: &DefaultElement, index: usize) -> Result<Point3<f32>, Error> {
    Ok(Point3::new(
        float_prop(vertex, POSITION_CHANNELS[0], index)?,
        float_prop(vertex, POSITION_CHANNELS[1], index)?,
        float_prop(vertex, POSITION_CHANNELS[2], index)?,
    ))
}

fn position_element(p: Point3<f32>) -> DefaultElement {
    let mut element = DefaultElement::new();
    element.insert("x".to_string(), Property::Float(p.x));
    element.insert("y".to_string(), Property::Float(p.y));
    element.insert("z".to_string(), Property::Float(p.z));
    element
}

/// Extracts a position component. `double` properties are narrowed to
/// `f32`, since that's all the bytes format can hold.
fn float_prop(
    vertex: &DefaultElement,
    property: &'static str,
    index: usize,
) -> Result<f32, Error> {
    match vertex.get(property) {
        Some(Property::Float(v)) => Ok(*v),
        Some(Property::Double(v)) => Ok(*v as f32),
        Some(_) => Err(Error::InvalidPly(
            format!("property '{}' is not a float type", property),
        )),
        None => Err(Error::MalformedCloud { index, property }),
    }
}

/// Extracts a color channel. `uchar` is the conventional channel type and
/// passes through unchanged; wider integer types are accepted as long as
/// the actual value fits into 8 bits.
fn channel_prop(
    vertex: &DefaultElement,
    property: &'static str,
    index: usize,
) -> Result<u8, Error> {
    fn narrow(value: i64) -> Result<u8, Error> {
        if value >= 0 && value <= 255 {
            Ok(value as u8)
        } else {
            Err(Error::ColorOutOfRange { value })
        }
    }

    match vertex.get(property) {
        Some(Property::UChar(v)) => Ok(*v),
        Some(Property::Char(v)) => narrow(i64::from(*v)),
        Some(Property::UShort(v)) => narrow(i64::from(*v)),
        Some(Property::Short(v)) => narrow(i64::from(*v)),
        Some(Property::UInt(v)) => narrow(i64::from(*v)),
        Some(Property::Int(v)) => narrow(i64::from(*v)),
        Some(_) => Err(Error::InvalidPly(
            format!("color property '{}' is not an integer type", property),
        )),
        None => Err(Error::MalformedCloud { index, property }),
    }
}
