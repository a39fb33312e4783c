//! Word dice solving
//!
//! Builds a unit-capacity flow network per word (source → dice → letters →
//! sink), runs Edmonds–Karp on it, and reads the verdict from the residual
//! graph.

mod engine;
pub mod interpret;
pub mod max_flow;
pub mod network;

pub use engine::Speller;
pub use interpret::interpret;
pub use max_flow::max_flow;
pub use network::{Edge, FlowNetwork, NetworkBuilder, NodeId};
