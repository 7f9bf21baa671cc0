//! Plan closed tours for vehicles that start from depots and visit targets.
//!
//! The planner connects all sites by a complete graph where the distance
//! between two depots is zero and any other pair is separated by the
//! Euclidean distance of their cell centers. A minimum spanning tree of this
//! graph is computed, and the zero-weight edges between depots are removed
//! again. What remains is a forest; every depot then walks the tree of its
//! component.
//!
//! The default walk is a *double tree*: each tree edge is traversed twice,
//! once away from the depot ([`Direction::Outbound`]) and once back
//! ([`Direction::Return`]). This is an Eulerian circuit of the tree with all
//! edges doubled, not a minimum-cost tour.
//!
//! The zero-weight edges between depots are accepted first, so normally every
//! component ends up with at most one depot. With a zero cell size, targets
//! are at zero distance too and several depots can share a component. Each of
//! them then covers the whole component, including the other depots. The
//! component is not split among them. Such depots are listed by
//! [`Routes::depots_sharing_component`].
//!
//! # Examples
//!
//! ```
//! use tourgrid::{
//!     algo::{routing::Direction, Routes},
//!     core::Site,
//! };
//!
//! let sites = [
//!     Site::depot(0, 0),
//!     Site::target(0, 1),
//!     Site::target(0, 2),
//! ];
//!
//! let routes = Routes::on(&sites).run();
//! let tour = &routes.tours()[0];
//!
//! assert_eq!(tour.len(), 4);
//! assert_eq!(tour.legs()[0].direction, Direction::Outbound);
//! assert_eq!(tour.walk().last(), Some(&sites[0].point));
//! ```

use rustc_hash::FxHashMap;

use crate::core::{Edge, Layout, Point, Site};

mod builder;
mod double_tree;
mod planner;
mod shortcut;

pub use builder::RoutesBuilder;

/// Whether a leg leads away from the depot or back towards it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Outbound,
    Return,
}

/// A single directed move between two sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    pub from: Point,
    pub to: Point,
    pub direction: Direction,
}

impl Leg {
    pub fn new(from: Point, to: Point, direction: Direction) -> Self {
        Self {
            from,
            to,
            direction,
        }
    }
}

/// Closed walk of one vehicle, starting and ending at its depot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    depot: Point,
    legs: Vec<Leg>,
}

impl Tour {
    pub fn depot(&self) -> &Point {
        &self.depot
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Number of legs.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Returns `true` if the depot has nothing to visit.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Sequence of visited points, starting with the depot.
    pub fn walk(&self) -> Vec<Point> {
        std::iter::once(self.depot)
            .chain(self.legs.iter().map(|leg| leg.to))
            .collect()
    }

    /// Total Euclidean length of the legs.
    pub fn length(&self, layout: &Layout) -> f64 {
        self.legs
            .iter()
            .map(|leg| layout.distance(&leg.from, &leg.to))
            .sum()
    }
}

/// The way a depot walks the tree of its component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algo {
    /// Every tree edge is traversed twice, once in each direction.
    #[default]
    DoubleTree,
    /// Sites are visited once in depth-first preorder, jumping directly to
    /// the next site, and the walk returns straight to the depot at the end.
    /// A leg is [`Direction::Return`] if its destination was visited
    /// already.
    Shortcut,
}

/// A step of the planning, reported to the [observer](crate::core::Observer).
#[derive(Debug, Clone, PartialEq)]
pub enum RouteEvent {
    /// The edge was accepted into the spanning tree.
    Accepted(Edge<Point, f64>),
    /// The edge between two depots was removed from the tree.
    Pruned(Edge<Point, f64>),
    /// The leg was appended to the tour of the depot.
    Leg { depot: Point, leg: Leg },
}

/// Tours of all depots together with the tree they walk.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct Routes {
    sites: Vec<Site>,
    tree: Vec<Edge<Point, f64>>,
    components: Vec<Vec<Point>>,
    tours: Vec<Tour>,
}

impl Routes {
    /// Sites that were planned for, with repeated points removed.
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// One tour per depot, in the order the depots were given.
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    pub fn into_tours(self) -> Vec<Tour> {
        self.tours
    }

    /// The tour starting at the depot.
    pub fn tour(&self, depot: &Point) -> Option<&Tour> {
        self.tours.iter().find(|tour| &tour.depot == depot)
    }

    /// Edges of the spanning forest after removing the depot-depot edges. Every
    /// edge has at least one endpoint that is a target.
    pub fn tree(&self) -> &[Edge<Point, f64>] {
        &self.tree
    }

    /// Groups of sites connected by the [tree](Routes::tree).
    pub fn components(&self) -> &[Vec<Point>] {
        &self.components
    }

    /// Depots whose component contains another depot, so that their tours
    /// overlap.
    pub fn depots_sharing_component(&self) -> Vec<Point> {
        let roles = self
            .sites
            .iter()
            .map(|site| (site.point, site.role))
            .collect::<FxHashMap<_, _>>();

        self.components
            .iter()
            .filter_map(|component| {
                let depots = component
                    .iter()
                    .filter(|point| roles.get(*point).is_some_and(|role| role.is_depot()))
                    .copied()
                    .collect::<Vec<_>>();

                (depots.len() > 1).then_some(depots)
            })
            .flatten()
            .collect()
    }
}
