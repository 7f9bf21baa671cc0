use crate::core::{Layout, Observer, Silent, Site};

use super::{planner::plan, Algo, RouteEvent, Routes};

pub struct RoutesBuilder<'a, O> {
    sites: &'a [Site],
    layout: Layout,
    algo: Algo,
    observer: O,
}

impl Routes {
    /// Starts planning tours for the depots among the sites.
    pub fn on(sites: &[Site]) -> RoutesBuilder<'_, Silent> {
        RoutesBuilder {
            sites,
            layout: Layout::default(),
            algo: Algo::default(),
            observer: Silent,
        }
    }
}

impl<'a, O> RoutesBuilder<'a, O> {
    /// Geometry used for measuring distances between sites.
    pub fn layout(self, layout: Layout) -> Self {
        Self { layout, ..self }
    }

    pub fn double_tree(self) -> Self {
        self.using(Algo::DoubleTree)
    }

    pub fn shortcut(self) -> Self {
        self.using(Algo::Shortcut)
    }

    pub fn using(self, algo: Algo) -> Self {
        Self { algo, ..self }
    }

    /// Reports accepted and pruned tree edges and every leg to the observer.
    pub fn observe<O2>(self, observer: O2) -> RoutesBuilder<'a, O2> {
        RoutesBuilder {
            sites: self.sites,
            layout: self.layout,
            algo: self.algo,
            observer,
        }
    }

    pub fn run(self) -> Routes
    where
        O: Observer<RouteEvent>,
    {
        plan(self.sites, &self.layout, self.algo, self.observer)
    }
}
