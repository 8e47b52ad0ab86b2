use clap::{Parser, Subcommand};
use coordinate::{Coordinate, Direction};
use log::{debug, error, LevelFilter};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Inspect 2D grid coordinates written as \"x,y\" literals")]
struct Cli {
    /// Log at debug level (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode each literal and print its description
    Parse {
        #[arg(required = true, allow_hyphen_values = true)]
        literals: Vec<String>,
    },
    /// Print the Manhattan distance between two coordinates
    Distance {
        #[arg(allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(allow_hyphen_values = true)]
        to: Coordinate,
    },
    /// Print the coordinates adjacent to a coordinate
    Neighbors {
        #[arg(allow_hyphen_values = true)]
        at: Coordinate,
        /// Include the four diagonal neighbors
        #[arg(short, long)]
        diagonal: bool,
    },
    /// Move a coordinate some number of steps in a direction
    Step {
        #[arg(allow_hyphen_values = true)]
        at: Coordinate,
        direction: Direction,
        #[arg(short, long, default_value_t = 1, allow_hyphen_values = true)]
        times: i64,
    },
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(command: Command) -> Result<(), coordinate::ParseCoordinateError> {
    match command {
        Command::Parse { literals } => {
            for literal in literals {
                let c = Coordinate::from_literal(&literal)?;
                debug!("{literal:?} -> {c:?}");
                println!("{c}");
            }
        }
        Command::Distance { from, to } => {
            println!("{}", from.distance(to));
        }
        Command::Neighbors { at, diagonal } => {
            let neighbors = at.neighbors(diagonal);
            debug!("{} neighbors of {at}", neighbors.len());
            for n in neighbors {
                println!("{n}");
            }
        }
        Command::Step {
            at,
            direction,
            times,
        } => {
            debug!("{at} + {direction} ({}) * {times}", direction.offset());
            println!("{}", at + direction.offset() * times);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[test]
fn test_parse_stops_at_first_malformed_literal() {
    let ret = run(Command::Parse {
        literals: vec!["1,2".into(), "x".into(), "3,4".into()],
    });
    assert!(matches!(
        ret,
        Err(coordinate::ParseCoordinateError::InvalidComponent { index: 0, .. })
    ));
    assert!(run(Command::Parse {
        literals: vec!["1,2".into(), " -3 , 4 ".into()],
    })
    .is_ok());
}

#[test]
fn test_step_and_neighbors() {
    assert!(run(Command::Step {
        at: Coordinate::new(1, 1),
        direction: Direction::NorthWest,
        times: 3,
    })
    .is_ok());
    assert!(run(Command::Neighbors {
        at: Coordinate::ZERO,
        diagonal: true,
    })
    .is_ok());
    assert!(run(Command::Distance {
        from: Coordinate::ZERO,
        to: Coordinate::new(-2, 5),
    })
    .is_ok());
}

#[test]
fn test_cli_arguments() {
    let cli = Cli::try_parse_from(["coordinate", "step", "-1,2", "north-east", "--times", "2"])
        .unwrap();
    match cli.command {
        Command::Step {
            at,
            direction,
            times,
        } => {
            assert_eq!(at, Coordinate::new(-1, 2));
            assert_eq!(direction, Direction::NorthEast);
            assert_eq!(times, 2);
        }
        c => panic!("unexpected {c:?}"),
    }
    assert!(Cli::try_parse_from(["coordinate", "distance", "1,2", "nope"]).is_err());
    assert!(Cli::try_parse_from(["coordinate", "step", "0,0", "sideways"]).is_err());
}
