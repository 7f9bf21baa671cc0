pub mod edge;
pub mod error;
pub mod id;
pub mod neighbors;
pub mod observe;
pub mod point;
pub mod weight;

pub use edge::Edge;
pub use neighbors::Neighbors;
pub use observe::{Observer, Silent};
pub use point::{Cell, Layout, Point, Role, Site};
pub use weight::Weight;
