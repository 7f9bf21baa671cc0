use tourgrid::{
    algo::{
        routing::{Algo, Direction},
        Routes,
    },
    core::{Layout, Site},
};

fn main() {
    let layout = Layout::default();
    let sites = [
        Site::depot(5, 5),
        Site::target(8, 3),
        Site::target(2, 9),
        Site::target(12, 6),
        Site::depot(40, 40),
        Site::target(43, 38),
        Site::target(37, 45),
    ];

    for algo in [Algo::DoubleTree, Algo::Shortcut] {
        let routes = Routes::on(&sites).layout(layout).using(algo).run();

        println!("{algo:?}");
        for tour in routes.tours() {
            println!(
                "  depot {} ({} legs, length {:.1})",
                tour.depot(),
                tour.len(),
                tour.length(&layout)
            );

            for leg in tour.legs() {
                let arrow = match leg.direction {
                    Direction::Outbound => "->",
                    Direction::Return => "<-",
                };
                println!("    {} {arrow} {}", leg.from, leg.to);
            }
        }
    }
}
