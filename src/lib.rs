// Copyright 2025 the Pathwright Authors
// SPDX-License-Identifier: Apache-2.0

//! Pathwright: an interactive 2D vector path authoring engine
//!
//! Paths are lists of move, line, curve and arc nodes edited on a canvas
//! with the pointer, stored by name, and exported as shape-construction
//! code.

use anyhow::{Context, Result, bail};
use kurbo::Size;
use std::path::PathBuf;

pub mod data;
pub mod editing;
pub mod error;
pub mod export;
pub mod geometry;
pub mod path;
pub mod render;
pub mod settings;
pub mod theme;
pub mod tools;

use data::{Editor, FileStore};

const USAGE: &str = "Usage: pathwright <store-dir> [list | export [name [ghost...]] | render [name] <width> <height>]";

/// What the command line asked for
#[derive(Debug, Clone, PartialEq)]
enum Command {
    List,
    Export {
        name: Option<String>,
        ghosts: Vec<String>,
    },
    Render {
        name: Option<String>,
        size: Size,
    },
}

/// Entry point for the Pathwright command line
pub fn run() -> Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pathwright=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((store_dir, rest)) = args.split_first() else {
        bail!("{USAGE}");
    };
    let command = parse_command(rest)?;

    let store_dir = PathBuf::from(store_dir);
    let store = FileStore::open(&store_dir)
        .with_context(|| format!("Failed to open store at {}", store_dir.display()))?;
    let canvas = match &command {
        Command::Render { size, .. } => *size,
        _ => settings::canvas::SIZE,
    };
    let mut editor = Editor::open(store, canvas);

    match command {
        Command::List => {
            let active = editor.store.active_name();
            for name in editor.store.document_names() {
                let marker = if active.as_deref() == Some(name.as_str()) { "*" } else { " " };
                println!("{marker} {name}");
            }
        }
        Command::Export { name, ghosts } => {
            if let Some(name) = name {
                editor.open_document(&name)?;
            }
            for ghost in &ghosts {
                editor.set_ghost_enabled(ghost, true)?;
            }
            print!(
                "{}",
                export::export_document(&editor.session.document(), &editor.ghosts)
            );
        }
        Command::Render { name, size } => {
            if let Some(name) = name {
                editor.open_document(&name)?;
            }
            let mut surface = render::SvgSurface::new(size);
            render::render_scene(&mut surface, &editor.session, &editor.ghosts);
            print!("{}", surface.finish());
        }
    }
    Ok(())
}

fn parse_dimension(text: &str) -> Result<f64> {
    let value: f64 = text
        .parse()
        .with_context(|| format!("Invalid canvas dimension \"{text}\""))?;
    if value.is_nan() || value <= 0.0 {
        bail!("Canvas dimension must be positive, got {value}");
    }
    Ok(value)
}

fn parse_command(args: &[String]) -> Result<Command> {
    let Some((verb, rest)) = args.split_first() else {
        return Ok(Command::List);
    };
    match (verb.as_str(), rest) {
        ("list", []) => Ok(Command::List),
        ("export", []) => Ok(Command::Export {
            name: None,
            ghosts: Vec::new(),
        }),
        ("export", [name, ghosts @ ..]) => Ok(Command::Export {
            name: Some(name.clone()),
            ghosts: ghosts.to_vec(),
        }),
        ("render", [width, height]) => Ok(Command::Render {
            name: None,
            size: Size::new(parse_dimension(width)?, parse_dimension(height)?),
        }),
        ("render", [name, width, height]) => Ok(Command::Render {
            name: Some(name.clone()),
            size: Size::new(parse_dimension(width)?, parse_dimension(height)?),
        }),
        _ => bail!("{USAGE}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command(&[]).unwrap(), Command::List);
        assert_eq!(parse_command(&args("list")).unwrap(), Command::List);
        assert_eq!(
            parse_command(&args("export plate hole")).unwrap(),
            Command::Export {
                name: Some("plate".into()),
                ghosts: vec!["hole".into()],
            }
        );
        assert_eq!(
            parse_command(&args("render 640 480")).unwrap(),
            Command::Render {
                name: None,
                size: Size::new(640.0, 480.0),
            }
        );
        assert_eq!(
            parse_command(&args("render plate 640 480")).unwrap(),
            Command::Render {
                name: Some("plate".into()),
                size: Size::new(640.0, 480.0),
            }
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_command(&args("render 640")).is_err());
        assert!(parse_command(&args("render 0 480")).is_err());
        assert!(parse_command(&args("render wide 480")).is_err());
        assert!(parse_command(&args("list extra")).is_err());
        assert!(parse_command(&args("frobnicate")).is_err());
    }
}
