use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::{
    algo::{
        connected_components,
        spanning_tree::{SpanningEvent, SpanningTree},
    },
    core::{Edge, Layout, Observer, Site},
    storage::{AdjList, EdgeList},
};

use super::{double_tree::double_tree, shortcut::shortcut, Algo, Leg, RouteEvent, Routes, Tour};

pub fn plan<O>(sites: &[Site], layout: &Layout, algo: Algo, mut observer: O) -> Routes
where
    O: Observer<RouteEvent>,
{
    let sites = distinct(sites);
    let points = sites.iter().map(|site| site.point).collect::<Vec<_>>();
    let n = sites.len();

    let graph = EdgeList::complete(0..n, |&u, &v| {
        if sites[u].is_depot() && sites[v].is_depot() {
            0.0
        } else {
            layout.distance(&points[u], &points[v])
        }
    });

    let spanning = SpanningTree::on(&graph)
        .observe(|event: SpanningEvent<usize, f64>| {
            if let SpanningEvent::Accepted(edge) = event {
                observer.notify(RouteEvent::Accepted(edge.map(|i| points[i])));
            }
        })
        .run();

    // Sites are added first so that dense indices of the adjacency list are
    // the indices of the sites.
    let mut adjacency = AdjList::new();
    for index in 0..n {
        adjacency.add_vertex(index);
    }

    let mut tree = Vec::with_capacity(spanning.len());

    for edge in spanning {
        let Edge { from, to, .. } = edge;
        let point_edge = edge.map(|i| points[i]);

        if sites[from].is_depot() && sites[to].is_depot() {
            trace!("pruned {} - {}", point_edge.from, point_edge.to);
            observer.notify(RouteEvent::Pruned(point_edge));
        } else {
            adjacency.add_edge(from, to);
            tree.push(point_edge);
        }
    }

    let components = connected_components(&adjacency)
        .into_iter()
        .map(|component| component.into_iter().map(|i| points[i]).collect())
        .collect();

    let mut tours = Vec::new();

    for depot in (0..n).filter(|&i| sites[i].is_depot()) {
        let steps = match algo {
            Algo::DoubleTree => double_tree(&adjacency, depot),
            Algo::Shortcut => shortcut(&adjacency, depot),
        };

        let legs = steps
            .into_iter()
            .map(|(from, to, direction)| Leg::new(points[from], points[to], direction))
            .collect::<Vec<_>>();

        for leg in &legs {
            observer.notify(RouteEvent::Leg {
                depot: points[depot],
                leg: *leg,
            });
        }

        tours.push(Tour {
            depot: points[depot],
            legs,
        });
    }

    debug!(
        "planned {} tours over {} sites and {} tree edges",
        tours.len(),
        n,
        tree.len()
    );

    Routes {
        sites,
        tree,
        components,
        tours,
    }
}

/// Keeps the first site of each point.
fn distinct(sites: &[Site]) -> Vec<Site> {
    let mut seen = FxHashSet::default();
    sites
        .iter()
        .filter(|site| seen.insert(site.point))
        .copied()
        .collect()
}
