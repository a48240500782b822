use cgmath::Point3;
use failure::Error as FailureError;

use crate::{
    cloud::PointCloud,
    io::Error,
};


fn read_str(data: &str) -> Result<PointCloud, Error> {
    super::read(&mut data.as_bytes())
}

fn write_to_string(cloud: &PointCloud) -> Result<String, FailureError> {
    let mut out = Vec::new();
    super::write(&mut out, cloud)?;
    Ok(String::from_utf8(out)?)
}


// ===========================================================================
// ===== Reading
// ===========================================================================

#[test]
fn read_positions_only() -> Result<(), FailureError> {
    let cloud = read_str("\
        ply\n\
        format ascii 1.0\n\
        element vertex 2\n\
        property float x\n\
        property float y\n\
        property float z\n\
        end_header\n\
        1 2 3\n\
        -0.5 0.25 8\n\
    ")?;

    assert_eq!(cloud, PointCloud::Uncolored(vec![
        Point3::new(1.0, 2.0, 3.0),
        Point3::new(-0.5, 0.25, 8.0),
    ]));

    Ok(())
}

#[test]
fn read_colored_vertices() -> Result<(), FailureError> {
    let cloud = read_str("\
        ply\n\
        format ascii 1.0\n\
        element vertex 1\n\
        property float x\n\
        property float y\n\
        property float z\n\
        property uchar red\n\
        property uchar green\n\
        property uchar blue\n\
        end_header\n\
        0 0 0 255 0 128\n\
    ")?;

    assert_eq!(cloud, PointCloud::Colored(vec![
        (Point3::new(0.0, 0.0, 0.0), [255, 0, 128]),
    ]));

    Ok(())
}

#[test]
fn read_double_positions() -> Result<(), FailureError> {
    // `double` properties are narrowed to f32.
    let cloud = read_str("\
        ply\n\
        format ascii 1.0\n\
        element vertex 1\n\
        property double x\n\
        property double y\n\
        property double z\n\
        end_header\n\
        1.5 -2.5 3.5\n\
    ")?;

    assert_eq!(cloud, PointCloud::Uncolored(vec![Point3::new(1.5, -2.5, 3.5)]));

    Ok(())
}

#[test]
fn read_partial_color_declaration() -> Result<(), FailureError> {
    // Only some of red/green/blue declared: the cloud is uncolored and the
    // partial channels are dropped.
    let cloud = read_str("\
        ply\n\
        format ascii 1.0\n\
        element vertex 1\n\
        property float x\n\
        property float y\n\
        property float z\n\
        property uchar red\n\
        property uchar green\n\
        end_header\n\
        1 2 3 10 20\n\
    ")?;

    assert_eq!(cloud, PointCloud::Uncolored(vec![Point3::new(1.0, 2.0, 3.0)]));

    Ok(())
}

#[test]
fn read_wide_color_channels() -> Result<(), FailureError> {
    // Unconventional but valid: colors declared as `ushort`, with values
    // that still fit into 8 bits.
    let cloud = read_str("\
        ply\n\
        format ascii 1.0\n\
        element vertex 1\n\
        property float x\n\
        property float y\n\
        property float z\n\
        property ushort red\n\
        property ushort green\n\
        property ushort blue\n\
        end_header\n\
        0 0 0 255 0 128\n\
    ")?;

    assert_eq!(cloud, PointCloud::Colored(vec![
        (Point3::new(0.0, 0.0, 0.0), [255, 0, 128]),
    ]));

    Ok(())
}

#[test]
fn read_color_out_of_range() {
    let res = read_str("\
        ply\n\
        format ascii 1.0\n\
        element vertex 1\n\
        property float x\n\
        property float y\n\
        property float z\n\
        property ushort red\n\
        property ushort green\n\
        property ushort blue\n\
        end_header\n\
        0 0 0 300 0 0\n\
    ");

    match res {
        Err(Error::ColorOutOfRange { value: 300 }) => {}
        other => panic!("expected color out of range error, got {:?}", other),
    }
}

#[test]
fn read_missing_vertex_element() {
    let res = read_str("\
        ply\n\
        format ascii 1.0\n\
        element face 0\n\
        property list uchar int vertex_indices\n\
        end_header\n\
    ");

    match res {
        Err(Error::InvalidPly(_)) => {}
        other => panic!("expected invalid PLY error, got {:?}", other),
    }
}


// ===========================================================================
// ===== Writing
// ===========================================================================

#[test]
fn write_header_declares_colors() -> Result<(), FailureError> {
    let out = write_to_string(&PointCloud::Colored(vec![
        (Point3::new(1.0, 2.0, 3.0), [255, 0, 128]),
    ]))?;

    // Don't assume a specific line terminator, only the declarations.
    assert!(out.starts_with("ply"));
    assert!(out.contains("format ascii 1.0"));
    assert!(out.contains("element vertex 1"));
    assert!(out.contains("property uchar red"));
    assert!(out.contains("property uchar green"));
    assert!(out.contains("property uchar blue"));

    Ok(())
}

#[test]
fn written_file_reads_back() -> Result<(), FailureError> {
    let cloud = PointCloud::Colored(vec![
        (Point3::new(1.0, 2.0, 3.0), [255, 0, 128]),
        (Point3::new(-0.5, 0.25, 8.0), [0, 255, 1]),
    ]);

    let out = write_to_string(&cloud)?;
    assert_eq!(read_str(&out)?, cloud);

    Ok(())
}
