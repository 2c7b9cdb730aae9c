//! Spherical Mercator projection of country outlines into SVG path data.

use geojson::{Geometry, Value};
use serde::Serialize;
use std::f64::consts::FRAC_PI_4;
use std::fmt::Write;

/// Latitude at which Mercator maps the square world; poles are clipped here.
const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Mercator projection with a pixel scale and translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Mercator {
    pub scale: f64,
    pub translate: (f64, f64),
}

impl Mercator {
    pub fn new(scale: f64, translate: (f64, f64)) -> Self {
        Self { scale, translate }
    }

    /// Project `(longitude, latitude)` in degrees to pixels.
    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let lambda = lon.to_radians();
        let phi = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = self.translate.0 + self.scale * lambda;
        let y = self.translate.1 - self.scale * (FRAC_PI_4 + phi / 2.0).tan().ln();
        (x, y)
    }

    /// SVG path data for a geometry. Polygons and multipolygons produce one
    /// closed subpath per ring; points and lines produce nothing.
    pub fn path(&self, geometry: &Geometry) -> String {
        let mut d = String::new();
        self.append_value(&geometry.value, &mut d);
        d
    }

    fn append_value(&self, value: &Value, d: &mut String) {
        match value {
            Value::Polygon(rings) => self.append_rings(rings, d),
            Value::MultiPolygon(polygons) => {
                for rings in polygons {
                    self.append_rings(rings, d);
                }
            }
            Value::GeometryCollection(geometries) => {
                for geometry in geometries {
                    self.append_value(&geometry.value, d);
                }
            }
            _ => {}
        }
    }

    fn append_rings(&self, rings: &[Vec<Vec<f64>>], d: &mut String) {
        for ring in rings {
            let mut points = ring
                .iter()
                .filter_map(|p| Some((*p.first()?, *p.get(1)?)))
                .map(|(lon, lat)| self.project(lon, lat));
            let Some((x, y)) = points.next() else {
                continue;
            };
            let _ = write!(d, "M{x:.2},{y:.2}");
            for (x, y) in points {
                let _ = write!(d, "L{x:.2},{y:.2}");
            }
            d.push('Z');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> Mercator {
        Mercator::new(150.0, (375.0, 323.5))
    }

    #[test]
    fn origin_maps_to_translate() {
        let (x, y) = world().project(0.0, 0.0);
        assert!((x - 375.0).abs() < 1e-9);
        assert!((y - 323.5).abs() < 1e-9);
    }

    #[test]
    fn north_is_up_east_is_right() {
        let (x, y) = world().project(10.0, 60.0);
        assert!(x > 375.0);
        assert!(y < 323.5);
    }

    #[test]
    fn poles_are_clipped() {
        let (_, y) = world().project(0.0, 90.0);
        assert!(y.is_finite());
        let (_, y_max) = world().project(0.0, MAX_LATITUDE);
        assert!((y - y_max).abs() < 1e-9);
    }

    #[test]
    fn polygon_path_has_one_subpath_per_ring() {
        let geometry = Geometry::new(Value::MultiPolygon(vec![
            vec![vec![vec![0.0, 0.0], vec![10.0, 0.0], vec![10.0, 10.0], vec![0.0, 0.0]]],
            vec![vec![vec![20.0, 0.0], vec![30.0, 0.0], vec![30.0, 10.0], vec![20.0, 0.0]]],
        ]));
        let d = world().path(&geometry);
        assert_eq!(d.matches('M').count(), 2);
        assert_eq!(d.matches('Z').count(), 2);
        assert!(d.starts_with("M375.00,323.50L"));
    }

    #[test]
    fn non_area_geometry_has_empty_path() {
        let geometry = Geometry::new(Value::Point(vec![1.0, 2.0]));
        assert!(world().path(&geometry).is_empty());
    }
}
