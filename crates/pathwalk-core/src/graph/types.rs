use serde::{Deserialize, Serialize};

/// Direction for edge traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    /// Follow edges away from the current vertex (forward search)
    Out,
    /// Follow edges into the current vertex (reverse search)
    In,
}

impl Direction {
    /// The endpoint of `edge` reached when traversing it in this direction
    pub fn neighbor<V, E: super::GraphEdge<V>>(self, edge: &E) -> V {
        match self {
            Direction::Out => edge.to(),
            Direction::In => edge.from(),
        }
    }

    /// The endpoint of `edge` that the traversal arrived from
    pub fn origin<V, E: super::GraphEdge<V>>(self, edge: &E) -> V {
        match self {
            Direction::Out => edge.from(),
            Direction::In => edge.to(),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "out" => Ok(Direction::Out),
            "in" => Ok(Direction::In),
            other => Err(format!("unknown direction '{}' (expected: out, in)", other)),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Out => write!(f, "out"),
            Direction::In => write!(f, "in"),
        }
    }
}

/// Traversal status of a vertex. Unvisited vertices have no status at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    /// Queued with a tentative cost that may still improve
    Reached,
    /// Cost is final for this traversal
    Settled,
}

/// Per-vertex transient traversal state
#[derive(Debug, Clone, PartialEq)]
pub struct NodeState<E> {
    pub status: NodeStatus,
    /// Best known cumulative cost from the source
    pub cost: f64,
    /// Edge that produced `cost`; `None` for the source
    pub incoming_edge: Option<E>,
}

impl<E> NodeState<E> {
    pub fn is_settled(&self) -> bool {
        self.status == NodeStatus::Settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_str() {
        assert_eq!("out".parse::<Direction>(), Ok(Direction::Out));
        assert_eq!("IN".parse::<Direction>(), Ok(Direction::In));
        assert!("both".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_default_is_out() {
        assert_eq!(Direction::default(), Direction::Out);
        assert_eq!(Direction::In.to_string(), "in");
    }

    #[test]
    fn test_direction_endpoints() {
        struct Pair(u8, u8);
        impl crate::graph::GraphEdge<u8> for Pair {
            fn from(&self) -> u8 {
                self.0
            }
            fn to(&self) -> u8 {
                self.1
            }
        }

        let edge = Pair(1, 2);
        assert_eq!(Direction::Out.neighbor(&edge), 2);
        assert_eq!(Direction::Out.origin(&edge), 1);
        assert_eq!(Direction::In.neighbor(&edge), 1);
        assert_eq!(Direction::In.origin(&edge), 2);
    }
}
