//! The in-memory point cloud representation.

use cgmath::Point3;


/// An ordered collection of points, optionally with one RGB color per point.
///
/// Color is a property of the whole cloud, not of single points: either
/// every point carries a color or none does. This is encoded in the variants
/// so that a cloud with mixed per-point shapes cannot even be constructed.
/// Point order is significant and preserved by all readers and writers.
#[derive(Debug, Clone, PartialEq)]
pub enum PointCloud {
    /// Positions only.
    Uncolored(Vec<Point3<f32>>),

    /// Positions, each with an 8 bit `[r, g, b]` color.
    Colored(Vec<(Point3<f32>, [u8; 3])>),
}

impl PointCloud {
    /// Returns the number of points in this cloud.
    pub fn len(&self) -> usize {
        match self {
            PointCloud::Uncolored(points) => points.len(),
            PointCloud::Colored(points) => points.len(),
        }
    }

    /// Returns `true` if this cloud contains no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the points of this cloud carry colors.
    ///
    /// Note that this is a property of the cloud, not of its points: an
    /// empty `Colored` cloud still returns `true`.
    pub fn has_colors(&self) -> bool {
        match self {
            PointCloud::Uncolored(_) => false,
            PointCloud::Colored(_) => true,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_colors() {
        let plain = PointCloud::Uncolored(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 3.0),
        ]);
        assert_eq!(plain.len(), 2);
        assert!(!plain.is_empty());
        assert!(!plain.has_colors());

        let colored = PointCloud::Colored(vec![
            (Point3::new(0.0, 0.0, 0.0), [255, 0, 128]),
        ]);
        assert_eq!(colored.len(), 1);
        assert!(colored.has_colors());

        let empty = PointCloud::Uncolored(vec![]);
        assert!(empty.is_empty());
    }
}
