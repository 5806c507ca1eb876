//! Runs the bundled scenarios and prints each path over its map.
//!
//! Run: cargo run --bin walk [eight-way|platformer]
//! Set RUST_LOG=debug to see search logs.

use gridwalk_demos::{SCENARIOS, render};
use gridwalk_paths::Movement;

fn main() {
    env_logger::init();

    let only: Option<Movement> = match std::env::args().nth(1).map(|a| a.parse::<Movement>()) {
        None => None,
        Some(Ok(m)) => Some(m),
        Some(Err(e)) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    for scenario in SCENARIOS {
        if only.is_some_and(|m| m != scenario.movement) {
            continue;
        }
        let (grid, result) = match scenario.run() {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Error: {}: {e}", scenario.name);
                std::process::exit(1);
            }
        };
        println!(
            "{} ({}): {} -> {}",
            scenario.name, scenario.movement, scenario.start, scenario.end
        );
        match result {
            Ok(path) => {
                println!("{}", render(&grid, &path.cells));
                println!(
                    "cost {}, {} cells, {} expanded\n",
                    path.cost,
                    path.cells.len(),
                    path.expanded
                );
            }
            Err(reason) => println!("{grid}\n{reason}\n"),
        }
    }
}
