mod view;

use anyhow::{Context, Result};
use markview_config::Config;
use markview_engine::{
    Highlighter, parse_document, parsing::blocks::BlockKind, render, render_document,
};
use std::{
    env,
    io::{Write, stdout},
    path::{Path, PathBuf},
    process,
};

const USAGE: &str = "\
Usage:
  markview-cli render <file> [--standalone]
  markview-cli highlight <file>
  markview-cli blocks <file>
  markview-cli view <file>";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Render { path: PathBuf, standalone: bool },
    Highlight { path: PathBuf },
    Blocks { path: PathBuf },
    View { path: PathBuf },
}

impl Command {
    fn parse(args: &[String]) -> Option<Self> {
        let (cmd, rest) = args.split_first()?;
        match (cmd.as_str(), rest) {
            ("render", [path]) => Some(Command::Render {
                path: PathBuf::from(path),
                standalone: false,
            }),
            ("render", [path, flag]) | ("render", [flag, path]) if flag == "--standalone" => {
                Some(Command::Render {
                    path: PathBuf::from(path),
                    standalone: true,
                })
            }
            ("highlight", [path]) => Some(Command::Highlight {
                path: PathBuf::from(path),
            }),
            ("blocks", [path]) => Some(Command::Blocks {
                path: PathBuf::from(path),
            }),
            ("view", [path]) => Some(Command::View {
                path: PathBuf::from(path),
            }),
            _ => None,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(command) = Command::parse(&args[1.min(args.len())..]) else {
        eprintln!("{USAGE}");
        process::exit(1);
    };
    log::debug!("running {command:?}");

    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", Config::config_path().display());
            process::exit(1);
        }
    };

    match command {
        Command::Render { path, standalone } => {
            let markdown = read_source(&path)?;
            let html = if standalone {
                render_document(&markdown, &config.preview)
            } else {
                render(&markdown)
            };
            let mut out = stdout().lock();
            writeln!(out, "{html}")?;
        }
        Command::Highlight { path } => {
            let markdown = read_source(&path)?;
            let highlighter = Highlighter::new();
            let mut out = stdout().lock();
            for (i, line) in markdown.lines().enumerate() {
                for span in highlighter.highlight(line) {
                    writeln!(
                        out,
                        "{}:{}..{}\t{}\t{}",
                        i + 1,
                        span.start,
                        span.end(),
                        span.style,
                        &line[span.start..span.end()]
                    )?;
                }
            }
        }
        Command::Blocks { path } => {
            let markdown = read_source(&path)?;
            let mut out = stdout().lock();
            for block in parse_document(&markdown).blocks {
                writeln!(
                    out,
                    "{}..{}\t{}\t{:?}",
                    block.lines.start + 1,
                    block.lines.end,
                    describe(block.kind),
                    block.content
                )?;
            }
        }
        Command::View { path } => {
            let markdown = read_source(&path)?;
            view::run(&path, &markdown, &config.editor)?;
        }
    }

    Ok(())
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Short label for a block kind, used by `blocks` and the viewer outline.
pub(crate) fn describe(kind: BlockKind<'_>) -> String {
    match kind {
        BlockKind::Heading { level } => format!("h{level}"),
        BlockKind::Paragraph => "paragraph".to_string(),
        BlockKind::HorizontalRule => "rule".to_string(),
        BlockKind::Blockquote => "quote".to_string(),
        BlockKind::CodeBlock { language: Some(lang) } => format!("code ({lang})"),
        BlockKind::CodeBlock { language: None } => "code".to_string(),
        BlockKind::ListItem { ordered: true } => "ordered item".to_string(),
        BlockKind::ListItem { ordered: false } => "item".to_string(),
        BlockKind::TableRow { is_header: true } => "table header".to_string(),
        BlockKind::TableRow { is_header: false } => "table row".to_string(),
    }
}
