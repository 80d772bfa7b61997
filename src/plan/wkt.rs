//! Minimal well-known-text reader for plan geometry.
//!
//! Supports `POLYGON` with a single ring, `LINESTRING` and `POINT`, each with
//! 2D or 3D coordinates. Missing z coordinates are zero.

use crate::error::PlanError;
use crate::math::Point3;

/// A parsed WKT geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Ring vertices without the repeated closing vertex.
    Polygon(Vec<Point3>),
    LineString(Vec<Point3>),
    Point(Point3),
}

/// Parses one WKT geometry.
///
/// # Errors
///
/// Returns [`PlanError::Wkt`] for unsupported geometry types, unbalanced
/// parentheses, polygons with interior rings and malformed coordinates.
pub fn parse(wkt: &str) -> Result<Geometry, PlanError> {
    let fail = |reason: &str| PlanError::Wkt {
        wkt: wkt.to_owned(),
        reason: reason.to_owned(),
    };

    let text = wkt.trim();
    let open = text.find('(').ok_or_else(|| fail("missing '('"))?;
    let tag = text[..open].trim().to_ascii_uppercase();
    let body = text[open..]
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| fail("unbalanced parentheses"))?
        .trim();

    match tag.as_str() {
        "POLYGON" => {
            let ring = body
                .strip_prefix('(')
                .and_then(|rest| rest.strip_suffix(')'))
                .ok_or_else(|| fail("polygon ring must be parenthesized"))?;
            if ring.contains('(') || ring.contains(')') {
                return Err(fail("polygons with interior rings are not supported"));
            }
            let mut points = coordinates(ring).map_err(|reason| fail(&reason))?;
            if points.len() > 1 && points.first() == points.last() {
                points.pop();
            }
            if points.len() < 3 {
                return Err(fail("polygon ring needs at least three distinct vertices"));
            }
            Ok(Geometry::Polygon(points))
        }
        "LINESTRING" => {
            let points = coordinates(body).map_err(|reason| fail(&reason))?;
            if points.len() < 2 {
                return Err(fail("linestring needs at least two vertices"));
            }
            Ok(Geometry::LineString(points))
        }
        "POINT" => coordinate(body)
            .map(Geometry::Point)
            .map_err(|reason| fail(&reason)),
        _ => Err(fail("unsupported geometry type")),
    }
}

fn coordinates(list: &str) -> Result<Vec<Point3>, String> {
    list.split(',').map(coordinate).collect()
}

fn coordinate(text: &str) -> Result<Point3, String> {
    let numbers = text
        .split_whitespace()
        .map(|n| n.parse::<f64>().map_err(|_| format!("'{n}' is not a number")))
        .collect::<Result<Vec<_>, _>>()?;
    if numbers.iter().any(|n| !n.is_finite()) {
        return Err(format!("non-finite coordinate in '{}'", text.trim()));
    }
    match numbers[..] {
        [x, y] => Ok(Point3::new(x, y, 0.0)),
        [x, y, z] => Ok(Point3::new(x, y, z)),
        _ => Err(format!(
            "expected 2 or 3 numbers per coordinate, got {} in '{}'",
            numbers.len(),
            text.trim()
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn polygon_drops_closing_vertex() {
        let geometry = parse("POLYGON ((0 0, 4 0, 4 3, 0 3, 0 0))").unwrap();
        let Geometry::Polygon(points) = geometry else {
            panic!("expected polygon, got {geometry:?}");
        };
        assert_eq!(points.len(), 4);
        assert_eq!(points[2], Point3::new(4.0, 3.0, 0.0));
    }

    #[test]
    fn polygon_without_closing_vertex_is_kept() {
        let Geometry::Polygon(points) = parse("POLYGON((0 0,4 0,4 3))").unwrap() else {
            panic!("expected polygon");
        };
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn linestring_with_elevation() {
        let geometry = parse("LINESTRING (1 2 3, 4 5 6)").unwrap();
        assert_eq!(
            geometry,
            Geometry::LineString(vec![Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 5.0, 6.0)])
        );
    }

    #[test]
    fn point_and_lowercase_tag() {
        assert_eq!(
            parse("point (1.5 -2)").unwrap(),
            Geometry::Point(Point3::new(1.5, -2.0, 0.0))
        );
    }

    #[test]
    fn malformed_input_is_rejected() {
        for wkt in [
            "MULTIPOLYGON (((0 0, 1 0, 1 1, 0 0)))",
            "POLYGON ((0 0, 1 0, 1 1, 0 0), (0.2 0.2, 0.4 0.2, 0.4 0.4, 0.2 0.2))",
            "POLYGON ((0 0, 1 0, 0 0))",
            "LINESTRING (0 0)",
            "LINESTRING (0 0, 1)",
            "LINESTRING (0 0, 1 1 1 1)",
            "LINESTRING (0 0, a 1)",
            "LINESTRING (0 0, 1 1",
            "POINT EMPTY",
        ] {
            assert!(
                matches!(parse(wkt), Err(PlanError::Wkt { .. })),
                "accepted {wkt}"
            );
        }
    }
}
