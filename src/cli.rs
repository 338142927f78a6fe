// src/cli.rs
use std::{env, path::PathBuf};

use thiserror::Error;

use crate::config::consts::DEFAULT_FILTER;
use crate::s;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("unknown arg: {0}")]
    UnknownArg(String),
}

pub struct Params {
    pub filter: String,         // listing category
    pub out: Option<PathBuf>,   // final artifact override
}

impl Params {
    pub fn new() -> Self {
        Self { filter: s!(DEFAULT_FILTER), out: None }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse() -> Result<Params, CliError> {
    parse_args(env::args().skip(1))
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Params, CliError> {
    let mut params = Params::new();

    while let Some(a) = args.next() {
        match a.as_str() {
            "-f" | "--filter" => {
                params.filter = args.next().ok_or(CliError::MissingValue("--filter"))?;
            }
            "-o" | "--out" => {
                let path = args.next().ok_or(CliError::MissingValue("--out"))?;
                params.out = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            flag if flag.starts_with('-') => {
                return Err(CliError::UnknownArg(a));
            }
            // bare positional is the filter
            _ => params.filter = a,
        }
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|a| a.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn no_args_means_default_filter() {
        let p = parse_args(args(&[])).unwrap();
        assert_eq!(p.filter, DEFAULT_FILTER);
        assert!(p.out.is_none());
    }

    #[test]
    fn positional_and_flag_forms_set_the_filter() {
        let p = parse_args(args(&["pokemon"])).unwrap();
        assert_eq!(p.filter, "pokemon");

        let p = parse_args(args(&["-f", "plates", "-o", "out/mine.csv"])).unwrap();
        assert_eq!(p.filter, "plates");
        assert_eq!(p.out.as_deref(), Some(Path::new("out/mine.csv")));
    }

    #[test]
    fn missing_value_and_unknown_flag_fail() {
        assert!(matches!(parse_args(args(&["--out"])), Err(CliError::MissingValue("--out"))));
        assert!(matches!(parse_args(args(&["--bogus"])), Err(CliError::UnknownArg(_))));
    }

    #[test]
    fn cli_error_bubbles_through_the_binary_reporter() {
        // main() bubbles CliError with `?` into an eyre report; that
        // conversion needs the full std error bundle.
        fn assert_reportable<E: std::error::Error + Send + Sync + 'static>() {}
        assert_reportable::<CliError>();

        let report = color_eyre::eyre::Report::from(CliError::MissingValue("--filter"));
        assert!(report.to_string().contains("--filter"));
    }
}
