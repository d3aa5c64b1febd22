//! Game of Life CLI - encode animated GIFs from JSON configuration.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use torus_life::{
    schema::{Pattern, SimulationConfig},
    sim::{SparseGrid, ascii_grid, coordinate_pairs},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [output.gif]", args[0]);
        eprintln!();
        eprintln!("Encode a Game of Life run as an animated GIF.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to run configuration file");
        eprintln!("  output.gif   Output path (default: config name with .gif)");
        eprintln!();
        eprintln!("A seed pattern is read from <config>.seed.json if present,");
        eprintln!("otherwise the century example pattern is used.");
        eprintln!();
        eprintln!("Modes:");
        eprintln!("  --example        Print example config and seed JSON");
        eprintln!("  --ascii [steps]  Read 'row col' pairs from stdin, print");
        eprintln!("                   ASCII generations (default 10 steps)");
        eprintln!("  --coords         Read 'row col' pairs from stdin, print");
        eprintln!("                   the next generation's live pairs");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "--example" => print_example_config(),
        "--ascii" => {
            let steps: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(10);
            run_ascii(steps);
        }
        "--coords" => run_coords(),
        _ => run_gif(&args),
    }
}

fn run_gif(args: &[String]) {
    let config_path = PathBuf::from(&args[1]);
    let output_path = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| config_path.with_extension("gif"));

    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: SimulationConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    let seed_path = config_path.with_extension("seed.json");
    let pattern: Pattern = if seed_path.exists() {
        let seed_str = fs::read_to_string(&seed_path).unwrap_or_else(|e| {
            eprintln!("Error reading seed file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str(&seed_str).unwrap_or_else(|e| {
            eprintln!("Error parsing seed: {}", e);
            std::process::exit(1);
        })
    } else {
        Pattern::default()
    };

    let grid = pattern.centered(&config).unwrap_or_else(|e| {
        eprintln!("Error placing seed pattern: {}", e);
        std::process::exit(1);
    });

    println!("Game of Life");
    println!("============");
    println!("Grid: {}x{} (toroidal)", config.rows, config.cols);
    println!("Generations: {}", config.generations);
    println!(
        "Frame: {}x{} px, {} cs/frame",
        config.frame_width(),
        config.frame_height(),
        config.delay_cs
    );
    println!("Initial live cells: {}", grid.live_count());
    println!();

    let start = Instant::now();
    let stats = torus_life::encode_gif(grid, &config, &output_path).unwrap_or_else(|e| {
        eprintln!("Error encoding animation: {}", e);
        std::process::exit(1);
    });

    println!(
        "Wrote {} to {} in {:.2}s",
        stats,
        output_path.display(),
        start.elapsed().as_secs_f32()
    );
}

fn run_ascii(steps: u32) {
    let mut grid = read_stdin_grid();
    println!("{}", ascii_grid(&grid));
    for _ in 0..steps {
        grid = grid.step();
        println!("{}", ascii_grid(&grid));
    }
}

fn run_coords() {
    let grid = read_stdin_grid();
    print!("{}", coordinate_pairs(&grid.step()));
}

/// Read whitespace-separated "row col" pairs from stdin; the grid extent
/// is inferred from the maximum coordinates.
fn read_stdin_grid() -> SparseGrid {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input).unwrap_or_else(|e| {
        eprintln!("Error reading stdin: {}", e);
        std::process::exit(1);
    });

    let numbers: Vec<usize> = input
        .split_whitespace()
        .map(|t| {
            t.parse().unwrap_or_else(|_| {
                eprintln!("Error: invalid coordinate '{}'", t);
                std::process::exit(1);
            })
        })
        .collect();

    if numbers.len() % 2 != 0 {
        eprintln!("Error: expected an even number of coordinates");
        std::process::exit(1);
    }

    let cells: Vec<(usize, usize)> = numbers.chunks(2).map(|p| (p[0], p[1])).collect();
    SparseGrid::from_coords(&cells).unwrap_or_else(|e| {
        eprintln!("Error building grid: {}", e);
        std::process::exit(1);
    })
}

fn print_example_config() {
    let config = SimulationConfig::default();
    let pattern = Pattern::default();

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
    println!();
    println!("Example seed (config.seed.json):");
    println!("{}", serde_json::to_string_pretty(&pattern).unwrap());
}
