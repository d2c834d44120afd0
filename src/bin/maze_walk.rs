use std::{
    io::{self, BufRead, Write},
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use maze_walk::{
    console::{ConsoleRenderer, Pace},
    CLIArgs, Grid, Outcome, PaceMode, PathFinder, Preset,
};

const EXIT_MENU_ID: i32 = -1;

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().filter_or("MAZE_WALK_LOG", "warn"));
    let args = CLIArgs::parse();
    let pace = match args.pace {
        PaceMode::Prompt => Pace::Prompt,
        PaceMode::Delay => Pace::Delay(Duration::from_millis(args.delay_ms)),
        PaceMode::None => Pace::None,
    };

    if let Some(input_path) = &args.input_path {
        let grid = maze_walk::read_grid(input_path).with_context(|| {
            format!(
                "Failed to read maze from given file({}).",
                input_path.display()
            )
        })?;
        walk(&grid, pace, args.clear)
    } else if let Some(preset) = args.preset {
        let grid = preset
            .grid()
            .with_context(|| format!("Failed to build built-in maze({}).", preset))?;
        walk(&grid, pace, args.clear)
    } else {
        run_menu(pace, args.clear)
    }
}

fn walk(grid: &Grid, pace: Pace, clear: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut renderer = ConsoleRenderer::new(io::stdout(), stdin.lock(), pace, clear);
    match PathFinder::new(grid).solve(&mut renderer) {
        Ok(Outcome::Reached {
            path,
            visited,
            final_frame,
        }) => {
            renderer
                .show(&final_frame)
                .context("Failed to show the final maze.")?;
            println!(
                "Reached the end in {} step(s) after visiting {} cell(s).",
                path.len().saturating_sub(1),
                visited
            );
        }
        Ok(Outcome::Unreachable { visited }) => {
            info!("Gave up after visiting {} cell(s).", visited);
            println!("Destination cannot be reached.");
        }
        Err(e) if e.is_invalid_input() => {
            println!("Invalid Input");
            eprintln!("{}", e);
        }
        Err(e) => return Err(e).context("Failed to walk through the maze."),
    }

    Ok(())
}

fn run_menu(pace: Pace, clear: bool) -> Result<()> {
    loop {
        println!("Choose a maze:");
        for preset in Preset::all_presets() {
            println!("{}. {}", preset.menu_id(), preset);
        }
        println!("{}. Exit", EXIT_MENU_ID);

        let Some(preset) = read_menu_choice()? else {
            return Ok(());
        };
        println!();
        let grid = preset
            .grid()
            .with_context(|| format!("Failed to build built-in maze({}).", preset))?;
        walk(&grid, pace, clear)?;
        println!();
    }
}

/// Prompt until a listed id is given. `None` on exit or end of input.
fn read_menu_choice() -> Result<Option<Preset>> {
    let stdin = io::stdin();
    loop {
        print!(">> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read menu choice.")?
            == 0
        {
            return Ok(None);
        }

        match line.trim().parse::<i32>() {
            Ok(EXIT_MENU_ID) => return Ok(None),
            Ok(id) => {
                if let Some(preset) = Preset::from_menu_id(id) {
                    return Ok(Some(preset));
                }
                warn!("No maze listed under id {}.", id);
            }
            Err(_) => warn!("Menu choice({}) isn't a number.", line.trim()),
        }
    }
}
