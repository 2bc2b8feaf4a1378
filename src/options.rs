//! Parsing Options.
//! `--seed {n}` or `-s` fixes the priority generator, and an optional positional path replaces
//! standard input.

use clap::{value_parser, Arg, Command};
use std::ffi::OsString;
use std::path::PathBuf;

fn make_options_parser() -> Command {
    Command::new("rank-treap")
        .no_binary_name(true)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prints the descending rank of inserted keys and removes keys by rank")
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .help("Seed for the priority generator; random when omitted")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .help("File to read commands from; standard input when omitted")
                .value_parser(value_parser!(PathBuf)),
        )
}

#[derive(Debug, Default, Eq, PartialEq)]
pub struct Options {
    pub seed: Option<u32>,
    pub input: Option<PathBuf>,
}

impl Options {
    /// Parses flags, excluding the binary name.
    pub fn parse_from_args<I, S>(flags: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(flags)?;
        Ok(Options {
            seed: matches.get_one::<u32>("seed").copied(),
            input: matches.get_one::<PathBuf>("input").cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let options = Options::parse_from_args(Vec::<String>::new()).unwrap();
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_parse_seed_and_input() {
        let options = Options::parse_from_args(vec!["-s", "7", "commands.txt"]).unwrap();
        assert_eq!(options.seed, Some(7));
        assert_eq!(options.input, Some(PathBuf::from("commands.txt")));

        let options = Options::parse_from_args(vec!["--seed", "9"]).unwrap();
        assert_eq!(options.seed, Some(9));
        assert_eq!(options.input, None);
    }

    #[test]
    fn test_parse_err() {
        assert!(Options::parse_from_args(vec!["--seed", "-1"]).is_err());
        assert!(Options::parse_from_args(vec!["--seed", "x"]).is_err());
        assert!(Options::parse_from_args(vec!["a", "b"]).is_err());
        assert!(Options::parse_from_args(vec!["--unknown"]).is_err());
    }
}
