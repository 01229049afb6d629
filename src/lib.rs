#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod router;
mod routing;

pub use error::{GraphError, RouterError};
pub use graph::UndirectedGraph;
pub use graph::weighted::WeightedGraph;
pub use model::{Coordinate, Geolocated, Length, NodeId};
pub use router::{EARTH_RADIUS, ProximityRouter, RouterConfig, haversine_distance};
pub use routing::{Route, shortest_path};
