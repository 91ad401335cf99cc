use clap::Parser;
use std::path::PathBuf;

use super::args::{CliArgs, Command};

#[test]
fn config_defaults_to_current_directory() {
    let args = CliArgs::try_parse_from(["tstools", "config"]).expect("config should parse");

    assert_eq!(args.pretty, None);
    assert_eq!(
        args.command,
        Command::Config {
            project: PathBuf::from("."),
            json: false,
        }
    );
}

#[test]
fn parses_subcommand_flags() {
    let args = CliArgs::try_parse_from(["tstools", "classify", "program.json", "--json", "--all"])
        .expect("classify should parse");
    assert_eq!(
        args.command,
        Command::Classify {
            snapshot: PathBuf::from("program.json"),
            json: true,
            all: true,
        }
    );

    let args = CliArgs::try_parse_from(["tstools", "heritage", "program.json", "--pretty", "false"])
        .expect("heritage should parse");
    assert_eq!(args.pretty, Some(false));
    assert_eq!(
        args.command,
        Command::Heritage {
            snapshot: PathBuf::from("program.json"),
            json: false,
        }
    );
}

#[test]
fn snapshot_path_is_required() {
    assert!(CliArgs::try_parse_from(["tstools", "classify"]).is_err());
    assert!(CliArgs::try_parse_from(["tstools", "heritage"]).is_err());
    assert!(CliArgs::try_parse_from(["tstools"]).is_err());
}
