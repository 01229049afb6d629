use thiserror::Error;

use crate::{Coordinate, Length, NodeId};

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum GraphError<VertexId> {
    #[error("Edge weight is not valid, expected finite and non-negative: {0}")]
    InvalidWeight(Length),
    #[error("Edge cannot connect vertex {0:?} to itself")]
    SelfLoop(VertexId),
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum RouterError {
    #[error(transparent)]
    GraphError(#[from] GraphError<NodeId>),
    #[error("Coordinate is not valid: {0:?}")]
    InvalidCoordinate(Coordinate),
    #[error("Maximum edge length is not valid, expected finite and non-negative: {0}")]
    InvalidConfig(Length),
}
