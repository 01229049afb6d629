use std::sync::LazyLock;

use geojson::{Feature, FeatureCollection, Value};
use pumproute::{Coordinate, Geolocated};

/// Water pumps around the KNUST campus.
///
/// ```text
///   F -- E                      (0.44 km)
///
///   D
///   |
///   C
///   | \
///   |  G                        (0.78 km to B and C)
///   | /
///   B
///   |
///   A                           (0.56 km between A, B, C, D)
/// ```
pub static PUMPS: LazyLock<Vec<Pump>> =
    LazyLock::new(|| parse_geojson(include_str!("pumps.geojson")));

#[derive(Debug, Clone, PartialEq)]
pub struct Pump {
    pub name: String,
    pub coordinate: Coordinate,
}

impl Geolocated for Pump {
    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

/// Gets the fixture pump with the given name, e.g. "A" for "Pump A".
pub fn pump(name: &str) -> &'static Pump {
    PUMPS
        .iter()
        .find(|p| p.name.strip_prefix("Pump ") == Some(name))
        .unwrap_or_else(|| panic!("Unknown pump {name}"))
}

fn parse_geojson(geojson: &str) -> Vec<Pump> {
    let FeatureCollection { features, .. } = geojson.parse().unwrap();

    features
        .iter()
        .map(
            |Feature {
                 geometry,
                 properties,
                 ..
             }| {
                let geometry = geometry.as_ref().unwrap();
                let properties = properties.as_ref().unwrap();

                let Value::Point(point) = &geometry.value else {
                    panic!("Pumps must be points: {geometry:?}");
                };

                Pump {
                    name: properties["name"].as_str().unwrap().to_string(),
                    coordinate: Coordinate {
                        lat: point[1],
                        lon: point[0],
                    },
                }
            },
        )
        .collect()
}
