//! Find a path through a maze and print the node table and a picture of it.
//!
//! Run: cargo run --bin maze -- [--maze FILE | --random WxH] [--start x,y] [--goal x,y]

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use wayfind_core::{Cell, Grid, Point};
use wayfind_demos::{original_maze, parse_size, random_maze};
use wayfind_paths::{Path, SearchOutcome, astar_path};
use wayfind_term::{Palette, write_report};

#[derive(Parser, Debug)]
#[command(name = "maze", version, about = "Find a path through a maze with A*")]
struct Args {
    /// Maze file: one line per row, `0`/`.` open, `1`/`#` wall.
    /// Defaults to the built-in 10x10 maze.
    #[arg(long, short, conflicts_with = "random")]
    maze: Option<PathBuf>,

    /// Generate a random maze of this size instead, e.g. `20x12`.
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    random: Option<(i32, i32)>,

    /// Probability that a random maze cell is a wall.
    #[arg(long, default_value_t = 0.3, requires = "random")]
    density: f64,

    /// Seed for the random maze.
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Start cell as `column,row` (default: top-left corner).
    #[arg(long)]
    start: Option<Point>,

    /// Goal cell as `column,row` (default: bottom-right corner).
    #[arg(long)]
    goal: Option<Point>,

    /// Disable coloured output.
    #[arg(long)]
    no_color: bool,

    /// Print the result as JSON instead of tables.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    start: Point,
    goal: Point,
    found: bool,
    cost: Option<f64>,
    expanded: usize,
    path: Option<&'a Path>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_grid(args: &Args) -> Result<Grid> {
    if let Some(file) = &args.maze {
        let text = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read maze {}", file.display()))?;
        return Grid::parse(&text).with_context(|| format!("failed to parse maze {}", file.display()));
    }
    if let Some((w, h)) = args.random {
        let grid = match args.seed {
            Some(seed) => random_maze(w, h, args.density, &mut StdRng::seed_from_u64(seed)),
            None => random_maze(w, h, args.density, &mut rand::rng()),
        };
        return grid.with_context(|| format!("cannot generate a {w}x{h} maze"));
    }
    Ok(original_maze()?)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut grid = load_grid(&args)?;
    let start = args.start.unwrap_or(Point::ZERO);
    let goal = args
        .goal
        .unwrap_or(Point::new(grid.width() - 1, grid.height() - 1));
    if args.random.is_some() {
        grid.set(start, Cell::Open);
        grid.set(goal, Cell::Open);
    }
    info!(
        "maze {}x{} with {} walls, start {start}, goal {goal}",
        grid.width(),
        grid.height(),
        grid.count(Cell::Blocked)
    );

    let outcome = astar_path(&grid, start, goal).context("cannot start the search")?;
    let stats = outcome.stats();
    info!(
        "expanded {} nodes, generated {}, suppressed {}, frontier peak {}",
        stats.expanded, stats.generated, stats.suppressed, stats.frontier_peak
    );

    if args.json {
        let report = JsonReport {
            start,
            goal,
            found: outcome.is_found(),
            cost: outcome.path().map(Path::cost),
            expanded: stats.expanded,
            path: outcome.path(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let palette = if args.no_color {
        Palette::PLAIN
    } else {
        Palette::detect()
    };
    match &outcome {
        SearchOutcome::Found { path, .. } => {
            write_report(&mut io::stdout().lock(), &grid, path, palette)?;
            println!("Found a path to the destination, cost {:.4}.", path.cost());
        }
        SearchOutcome::NoPath { .. } => {
            println!("Couldn't find a path to the destination!");
        }
    }
    Ok(())
}
