//! planar vector operations on projected coordinates. all inputs are assumed
//! to be in a metric, cartesian coordinate reference system.
use super::GeometryError;
use geo::{Coord, Line};
use wkt::ToWkt;

/// vectors shorter than this are treated as having no direction.
pub const MIN_VECTOR_LENGTH: f64 = 1e-12;

/// the vector from `a` to `b`.
pub fn direction(a: Coord<f64>, b: Coord<f64>) -> Coord<f64> {
    b - a
}

/// direction vector of a segment, from its start to its end.
pub fn line_direction(line: &Line<f64>) -> Coord<f64> {
    direction(line.start, line.end)
}

pub fn midpoint(a: Coord<f64>, b: Coord<f64>) -> Coord<f64> {
    Coord {
        x: (a.x + b.x) / 2.0,
        y: (a.y + b.y) / 2.0,
    }
}

pub fn norm(v: Coord<f64>) -> f64 {
    v.x.hypot(v.y)
}

/// cosine of the angle between two vectors, in [-1, 1].
///
/// # Errors
///
/// [`GeometryError::DegenerateGeometry`] if either vector has zero length.
/// callers skip the pair rather than score it.
pub fn normalized_similarity(v1: Coord<f64>, v2: Coord<f64>) -> Result<f64, GeometryError> {
    let n1 = norm(v1);
    let n2 = norm(v2);
    if n1 < MIN_VECTOR_LENGTH || n2 < MIN_VECTOR_LENGTH {
        return Err(GeometryError::DegenerateGeometry(format!(
            "{} and {}",
            geo::Point(v1).to_wkt(),
            geo::Point(v2).to_wkt()
        )));
    }
    let dot = (v1.x / n1) * (v2.x / n2) + (v1.y / n1) * (v2.y / n2);
    Ok(dot.clamp(-1.0, 1.0))
}

/// unsigned angle between the lines carrying two vectors, in degrees within
/// [0, 90]. opposite vectors are parallel and have angle 0.
pub fn angle_between_degrees(v1: Coord<f64>, v2: Coord<f64>) -> Result<f64, GeometryError> {
    let similarity = normalized_similarity(v1, v2)?;
    Ok(similarity.abs().acos().to_degrees())
}

/// distance from a point to the closest point on a segment. a segment with
/// coincident endpoints degrades to the point-to-point distance.
pub fn perpendicular_distance(point: Coord<f64>, segment: &Line<f64>) -> f64 {
    distance_2(point, segment).sqrt()
}

/// squared form of [`perpendicular_distance`], as used by the spatial index.
pub fn distance_2(point: Coord<f64>, segment: &Line<f64>) -> f64 {
    let ab = line_direction(segment);
    let ap = point - segment.start;
    let ab_ab = ab.x * ab.x + ab.y * ab.y;
    let closest = if ab_ab == 0.0 {
        segment.start
    } else {
        let t = ((ab.x * ap.x + ab.y * ap.y) / ab_ab).clamp(0.0, 1.0);
        segment.start + ab * t
    };
    let d = point - closest;
    d.x * d.x + d.y * d.y
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn c(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[test]
    fn test_similarity_of_identical_opposite_and_perpendicular_vectors() {
        let v = c(3.0, 4.0);
        let same = normalized_similarity(v, c(6.0, 8.0)).unwrap();
        let opposite = normalized_similarity(v, c(-3.0, -4.0)).unwrap();
        let perpendicular = normalized_similarity(v, c(-4.0, 3.0)).unwrap();
        assert!((same - 1.0).abs() < TOLERANCE);
        assert!((opposite + 1.0).abs() < TOLERANCE);
        assert!(perpendicular.abs() < TOLERANCE);
    }

    #[test]
    fn test_similarity_of_zero_vector_is_degenerate() {
        let result = normalized_similarity(c(0.0, 0.0), c(1.0, 0.0));
        assert!(matches!(result, Err(GeometryError::DegenerateGeometry(_))));
    }

    #[test]
    fn test_angle_is_symmetric() {
        let pairs = [
            (c(1.0, 0.0), c(1.0, 1.0)),
            (c(2.0, -1.0), c(-0.5, 3.0)),
            (c(10.0, 0.1), c(-10.0, 0.0)),
        ];
        for (a, b) in pairs {
            let ab = angle_between_degrees(a, b).unwrap();
            let ba = angle_between_degrees(b, a).unwrap();
            assert!((ab - ba).abs() < TOLERANCE, "{ab} != {ba}");
        }
        let forty_five = angle_between_degrees(c(1.0, 0.0), c(1.0, 1.0)).unwrap();
        assert!((forty_five - 45.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_perpendicular_distance_clamps_to_segment() {
        let segment = Line::new(c(0.0, 0.0), c(10.0, 0.0));
        assert!((perpendicular_distance(c(5.0, 3.0), &segment) - 3.0).abs() < TOLERANCE);
        assert!((perpendicular_distance(c(13.0, 4.0), &segment) - 5.0).abs() < TOLERANCE);
        assert!(perpendicular_distance(c(2.0, 0.0), &segment) < TOLERANCE);
    }
}
