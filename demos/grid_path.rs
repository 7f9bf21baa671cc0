use tourgrid::{
    algo::{shortest_paths::SearchEvent, ShortestPaths},
    core::Point,
    storage::grid::GridMap,
};

const MAP: &str = "
S.........
.######...
......#...
.####.#.##
....#.#...
###.#.###.
....#...#.
.####.#.#.
......#..E
..........
";

fn main() {
    let map: GridMap = MAP.parse().expect("valid map");
    let start = map.start.expect("start marker");
    let end = map.end.expect("end marker");

    let mut closed = 0;
    let result = ShortestPaths::on(&map.grid)
        .goal(end)
        .observe(|event: SearchEvent<Point, u32>| {
            if let SearchEvent::Closed { .. } = event {
                closed += 1;
            }
        })
        .run(start);

    match result {
        Ok(paths) => {
            let path = paths.path_to(&end).unwrap_or_default();
            println!("{}", map.grid.render_path(&start, &end, &path));
            println!();
            println!("path of {} steps, {closed} cells closed", path.len());
        }
        Err(error) => println!("{error}"),
    }
}
