use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use ordered_float::OrderedFloat;

/// Great-circle distance, measured in kilometers.
/// Unreachable targets are represented by an infinite length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Length(OrderedFloat<f64>);

impl Length {
    pub const ZERO: Self = Self(OrderedFloat(0.0));
    pub const INFINITY: Self = Self(OrderedFloat(f64::INFINITY));

    pub const fn from_kilometers(kilometers: f64) -> Self {
        Self(OrderedFloat(kilometers))
    }

    pub const fn kilometers(&self) -> f64 {
        self.0.0
    }

    pub fn meters(&self) -> f64 {
        self.0.0 * 1000.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Returns true if the length can be used as an edge weight: finite and non-negative.
    pub fn is_valid_weight(&self) -> bool {
        self.is_finite() && self.0.0 >= 0.0
    }
}

impl Add for Length {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Length {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, length| acc + length)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.0)
    }
}

/// WGS84 latitude (lat) and longitude (lon) pair, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns true only if both values are finite and within the WGS84 ranges:
    /// latitude in [-90, 90] and longitude in [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

#[cfg(feature = "geo")]
impl From<geo::Point<f64>> for Coordinate {
    fn from(point: geo::Point<f64>) -> Self {
        Self {
            lat: point.y(),
            lon: point.x(),
        }
    }
}

/// Identifies the graph node of a geolocated point.
/// Two points share the same node only if their coordinates are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    lat: OrderedFloat<f64>,
    lon: OrderedFloat<f64>,
}

impl NodeId {
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.lat.0,
            lon: self.lon.0,
        }
    }
}

impl From<Coordinate> for NodeId {
    fn from(Coordinate { lat, lon }: Coordinate) -> Self {
        Self {
            lat: OrderedFloat(lat),
            lon: OrderedFloat(lon),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// A point of interest owned by the caller (e.g. a water pump shown on the map).
/// The router only reads its coordinate, any other field is ignored.
pub trait Geolocated {
    fn coordinate(&self) -> Coordinate;

    fn node_id(&self) -> NodeId {
        NodeId::from(self.coordinate())
    }
}

impl Geolocated for Coordinate {
    fn coordinate(&self) -> Coordinate {
        *self
    }
}

impl<T: Geolocated> Geolocated for &T {
    fn coordinate(&self) -> Coordinate {
        (*self).coordinate()
    }
}

#[cfg(feature = "geo")]
impl Geolocated for geo::Point<f64> {
    fn coordinate(&self) -> Coordinate {
        Coordinate::from(*self)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn length_ordering_001() {
        assert!(Length::ZERO < Length::from_kilometers(0.5));
        assert!(Length::from_kilometers(1e9) < Length::INFINITY);
        assert!(!Length::INFINITY.is_finite());
        assert_eq!(Length::from_kilometers(1.5).meters(), 1500.0);
    }

    #[test]
    fn length_sum_001() {
        let lengths = [0.25, 0.5, 0.25].map(Length::from_kilometers);
        assert_eq!(lengths.into_iter().sum::<Length>(), Length::from_kilometers(1.0));
        assert_eq!(
            [Length::ZERO, Length::INFINITY].into_iter().sum::<Length>(),
            Length::INFINITY
        );
    }

    #[test]
    fn length_valid_weight_001() {
        assert!(Length::ZERO.is_valid_weight());
        assert!(Length::from_kilometers(0.7).is_valid_weight());
        assert!(!Length::from_kilometers(-0.1).is_valid_weight());
        assert!(!Length::INFINITY.is_valid_weight());
        assert!(!Length::from_kilometers(f64::NAN).is_valid_weight());
    }

    #[test]
    fn coordinate_is_valid_001() {
        assert!(Coordinate::new(6.6745, -1.5716).is_valid());
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());

        assert!(!Coordinate::new(90.5, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.5).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn node_id_001() {
        let c1 = Coordinate::new(6.6745, -1.5716);
        let c2 = Coordinate::new(6.6745, -1.5717);

        assert_eq!(NodeId::from(c1), c1.node_id());
        assert_ne!(NodeId::from(c1), NodeId::from(c2));
        assert_eq!(NodeId::from(c1).coordinate(), c1);
        assert_eq!(NodeId::from(Coordinate::from((6.6745, -1.5716))), NodeId::from(c1));
    }

    #[test]
    fn node_id_distinct_precision_001() {
        // values that would collide once printed with few decimals
        let c1 = Coordinate::new(0.1 + 0.2, 0.0);
        let c2 = Coordinate::new(0.3, 0.0);
        assert_ne!(NodeId::from(c1), NodeId::from(c2));
    }
}
