//! piece-query - ask how a single chess piece may move or capture.

use anyhow::Context;
use chess_pieces::{Color, Coordinate, PieceKind};
use clap::{Parser, Subcommand};
use piece_query::batch::BatchFile;
use piece_query::query::{parse_color, parse_kind, parse_square, PieceSpec, Question};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "piece-query")]
#[command(about = "Movement and capture rules for a single chess piece")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Can the piece move to a square?
    CanMove {
        #[arg(value_parser = parse_kind)]
        kind: PieceKind,
        #[arg(value_parser = parse_color)]
        color: Color,
        /// Square the piece stands on (e.g. d1)
        #[arg(value_parser = parse_square)]
        from: Coordinate,
        /// Target square
        #[arg(value_parser = parse_square)]
        to: Coordinate,
    },
    /// Can the piece capture another piece?
    CanKill {
        #[arg(value_parser = parse_kind)]
        kind: PieceKind,
        #[arg(value_parser = parse_color)]
        color: Color,
        #[arg(value_parser = parse_square)]
        from: Coordinate,
        /// Kind of the piece being captured
        #[arg(value_parser = parse_kind)]
        other_kind: PieceKind,
        /// Color of the piece being captured
        #[arg(value_parser = parse_color)]
        other_color: Color,
        /// Square of the piece being captured
        #[arg(value_parser = parse_square)]
        at: Coordinate,
    },
    /// List every square the piece could move to
    Targets {
        #[arg(value_parser = parse_kind)]
        kind: PieceKind,
        #[arg(value_parser = parse_color)]
        color: Color,
        #[arg(value_parser = parse_square)]
        from: Coordinate,
    },
    /// Answer every question in a TOML batch file
    Batch {
        /// Path to the batch file
        file: PathBuf,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let question = match cli.command {
        Commands::CanMove {
            kind,
            color,
            from,
            to,
        } => Question::CanMove {
            piece: PieceSpec {
                kind,
                color,
                at: from,
            },
            to,
        },
        Commands::CanKill {
            kind,
            color,
            from,
            other_kind,
            other_color,
            at,
        } => Question::CanKill {
            piece: PieceSpec {
                kind,
                color,
                at: from,
            },
            other: PieceSpec {
                kind: other_kind,
                color: other_color,
                at,
            },
        },
        Commands::Targets { kind, color, from } => Question::Targets {
            piece: PieceSpec {
                kind,
                color,
                at: from,
            },
        },
        Commands::Batch { file, json } => return run_batch(file, json),
    };

    tracing::debug!("{}", question);
    let answer = question.answer()?;
    println!("{answer}");
    Ok(())
}

fn run_batch(file: PathBuf, json: bool) -> anyhow::Result<()> {
    let batch = BatchFile::load(&file)
        .with_context(|| format!("loading batch file {}", file.display()))?;
    tracing::info!("Running {} queries from {:?}", batch.queries.len(), file);

    let outcomes = batch.run();
    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        for outcome in &outcomes {
            match (&outcome.answer, &outcome.error) {
                (Some(answer), _) => println!("{}. {} {}", outcome.index, outcome.question, answer),
                (None, Some(error)) => {
                    println!("{}. {} error: {}", outcome.index, outcome.question, error)
                }
                (None, None) => {}
            }
        }
    }

    let failed = outcomes.iter().filter(|o| o.error.is_some()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} queries failed", outcomes.len());
    }
    Ok(())
}
