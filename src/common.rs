pub mod disjoint_set;
pub mod visit_set;

pub use disjoint_set::DisjointSet;
pub use visit_set::VisitSet;
