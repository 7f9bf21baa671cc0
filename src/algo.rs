pub mod connected_components;
pub mod routing;
pub mod shortest_paths;
pub mod spanning_tree;

pub use connected_components::connected_components;
pub use routing::Routes;
pub use shortest_paths::{find_path, ShortestPaths};
pub use spanning_tree::SpanningTree;
