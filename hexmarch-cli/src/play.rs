//! Play command - interactive two-pick selection loop
//!
//! Reads picks from stdin, one per line: `x,z` selects a tile, `clear`
//! drops the pending selection (the right-click of the original game),
//! `quit` exits. When a second tile lands, the path is searched and printed.

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexmarch_core::{generate, path_cost, Coord, HexGrid, MapConfig, MapFile, Pick, Selection};

use crate::generate::render_preview;
use crate::path_cmd::parse_coord;

#[derive(Args)]
pub struct PlayArgs {
    /// Map JSON file; a map is generated from the seed when omitted
    #[arg(long, value_name = "FILE")]
    pub map: Option<PathBuf>,

    /// Width of the generated map (ignored with --map)
    #[arg(long, default_value = "8")]
    pub width: i32,

    /// Length of the generated map (ignored with --map)
    #[arg(long, default_value = "8")]
    pub length: i32,
}

pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let grid = match &args.map {
        Some(path) => {
            MapFile::load(path).with_context(|| format!("failed to load map: {}", path.display()))?
        }
        None => generate(&MapConfig {
            width: args.width,
            length: args.length,
            seed: seed.unwrap_or(0),
        })?,
    };

    print!("{}", render_preview(&grid));
    println!("pick two tiles (x,z per line), 'clear' to reset, 'quit' to exit");

    let stdin = std::io::stdin();
    let mut selection = Selection::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        match input {
            "" => continue,
            "quit" | "q" => break,
            "clear" => {
                selection.clear();
                println!("selection cleared");
            }
            _ => match parse_coord(input) {
                Ok(coord) => handle_pick(&grid, &mut selection, coord),
                Err(e) => println!("{e}"),
            },
        }
    }

    Ok(())
}

fn handle_pick(grid: &HexGrid, selection: &mut Selection, coord: Coord) {
    match selection.click(grid, coord) {
        Pick::Rejected(c) => println!("cannot select {c}: out of bounds or water"),
        Pick::Start(c) => println!("start {c}; pick a goal"),
        Pick::Pair { start, goal } => match grid.find_path(start, goal) {
            Ok(Some(path)) => {
                let route: Vec<String> = path.iter().map(|c| c.to_string()).collect();
                println!("{}", route.join(" -> "));
                println!("total cost: {}", path_cost(grid, &path));
            }
            Ok(None) => println!("unreachable"),
            // Endpoints were screened by the selection machine, but the
            // search still reports its own contract violations.
            Err(e) => println!("error: {e}"),
        },
    }
}
