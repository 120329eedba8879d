use serde::{Deserialize, Serialize};

use crate::error::GraphResult;

/// what [`crate::Graph::add_edge`] does with an endpoint beyond the current vertex count
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum OutOfRangePolicy {
    /// resize the adjacency table to fit the largest endpoint
    #[default]
    Grow,
    /// fail with [`crate::GraphError::OutOfRange`] and leave the graph as is
    Reject,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    pub out_of_range: OutOfRangePolicy,
}

impl GraphOptions {
    pub fn rejecting() -> Self {
        Self { out_of_range: OutOfRangePolicy::Reject }
    }

    pub fn from_ron_str(s: &str) -> GraphResult<Self> {
        Ok(ron::from_str(s).map_err(|e| e.code)?)
    }
}
