//! Path command - find the cheapest route between two tiles
//!
//! The map comes from a JSON file when `--map` is given, otherwise a fresh
//! one is generated from the global seed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use hexmarch_core::{generate, path_cost, Coord, HexGrid, MapConfig, MapFile};

#[derive(Args)]
pub struct PathArgs {
    /// Map JSON file; a map is generated from the seed when omitted
    #[arg(long, value_name = "FILE")]
    pub map: Option<PathBuf>,

    /// Width of the generated map (ignored with --map)
    #[arg(long, default_value = "8")]
    pub width: i32,

    /// Length of the generated map (ignored with --map)
    #[arg(long, default_value = "8")]
    pub length: i32,

    /// Start tile as x,z
    #[arg(long, value_parser = parse_coord)]
    pub from: Coord,

    /// Goal tile as x,z
    #[arg(long, value_parser = parse_coord)]
    pub to: Coord,

    /// Output the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Query result for JSON output
#[derive(Serialize)]
struct PathReport {
    from: Coord,
    to: Coord,
    reachable: bool,
    cost: Option<f32>,
    path: Vec<Coord>,
}

pub fn run(args: PathArgs, seed: Option<u64>) -> Result<()> {
    let grid = load_grid(&args, seed)?;

    tracing::info!("Searching {} -> {}", args.from, args.to);

    let report = match grid.find_path(args.from, args.to)? {
        Some(path) => PathReport {
            from: args.from,
            to: args.to,
            reachable: true,
            cost: Some(path_cost(&grid, &path)),
            path,
        },
        None => {
            tracing::warn!("No path from {} to {}", args.from, args.to);
            PathReport {
                from: args.from,
                to: args.to,
                reachable: false,
                cost: None,
                path: Vec::new(),
            }
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn load_grid(args: &PathArgs, seed: Option<u64>) -> Result<HexGrid> {
    match &args.map {
        Some(path) => {
            MapFile::load(path).with_context(|| format!("failed to load map: {}", path.display()))
        }
        None => {
            let config = MapConfig {
                width: args.width,
                length: args.length,
                seed: seed.unwrap_or(0),
            };
            Ok(generate(&config)?)
        }
    }
}

fn print_report(report: &PathReport) {
    if !report.reachable {
        println!("unreachable");
        return;
    }
    let route: Vec<String> = report.path.iter().map(|c| c.to_string()).collect();
    println!("{}", route.join(" -> "));
    if let Some(cost) = report.cost {
        println!("total cost: {cost}");
    }
}

/// Parse "x,z" into a coordinate
pub fn parse_coord(s: &str) -> Result<Coord, String> {
    let (x, z) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,z but got '{s}'"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x: {e}"))?;
    let z = z.trim().parse::<i32>().map_err(|e| format!("bad z: {e}"))?;
    Ok(Coord::new(x, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("3,4"), Ok(Coord::new(3, 4)));
        assert_eq!(parse_coord(" 0 , 7 "), Ok(Coord::new(0, 7)));
        assert!(parse_coord("3").is_err());
        assert!(parse_coord("a,b").is_err());
    }
}
