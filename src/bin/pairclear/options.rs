use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;
use pairclear::solve::{SolveOptions, DEFAULT_TIME_LIMIT};

#[derive(Clone)]
pub(crate) struct Options {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    seed: Option<u64>,
    time_limit: Duration,
    shuffle: bool,
    max_passes: Option<u32>,
    preprocess: bool,
    verify: bool,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        Ok(Self {
            input: matches.value_of("input").map(PathBuf::from),
            output: matches.value_of("output").map(PathBuf::from),
            seed: matches
                .value_of("seed")
                .map(|s| s.parse::<u64>().context("invalid seed"))
                .transpose()?,
            time_limit: matches
                .value_of("time_limit")
                .map(|s| s.parse::<u64>().context("invalid time limit"))
                .transpose()?
                .map_or(DEFAULT_TIME_LIMIT, Duration::from_millis),
            shuffle: !matches.is_present("no_shuffle"),
            max_passes: matches
                .value_of("passes")
                .map(|s| s.parse::<u32>().context("invalid number of passes"))
                .transpose()?,
            preprocess: !matches.is_present("no_preprocess"),
            verify: matches.is_present("verify"),
        })
    }

    /// `None` means stdin
    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    /// `None` means stdout
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn verify(&self) -> bool {
        self.verify
    }

    pub fn solve_options(&self, seed: u64) -> SolveOptions {
        let defaults = SolveOptions::default();
        SolveOptions {
            time_limit: self.time_limit,
            seed,
            shuffle: self.shuffle,
            max_passes: self.max_passes,
            preprocess: if self.preprocess {
                defaults.preprocess
            } else {
                None
            },
            ..defaults
        }
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, Arg};

    App::new("pairclear")
        .author("Cameron Steffen <cam.steffen94@gmail.com>")
        .about("Remove pairs of same-colored tiles from a board")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .value_name("PATH")
                .help("read the board from a file instead of stdin"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("PATH")
                .help("write the moves to a file instead of stdout"),
        )
        .arg(
            Arg::with_name("time_limit")
                .short("t")
                .long("time-limit")
                .takes_value(true)
                .value_name("MS")
                .help("time budget of the search in milliseconds"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .value_name("SEED")
                .help("seed of the scan order shuffles (random if absent)"),
        )
        .arg(
            Arg::with_name("no_shuffle")
                .long("no-shuffle")
                .help("run one pass in board order"),
        )
        .arg(
            Arg::with_name("passes")
                .long("passes")
                .takes_value(true)
                .value_name("COUNT")
                .help("stop after this many passes"),
        )
        .arg(
            Arg::with_name("no_preprocess")
                .long("no-preprocess")
                .help("never shrink large boards before searching"),
        )
        .arg(
            Arg::with_name("verify")
                .long("verify")
                .help("replay the moves and fail if any is invalid"),
        )
}
