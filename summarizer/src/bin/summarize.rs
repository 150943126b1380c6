// Copyright 2023 Xayn AG
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Summarizes a text from a file or stdin.

use std::{
    fs,
    io::{read_to_string, stdin},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{info, instrument};
use xayn_text_summarizer::{load_config::load_config, logging, summarize, Config};

/// Extracts the most relevant sentences of a text.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// File to summarize, the text is read from stdin if omitted.
    input: Option<PathBuf>,

    /// Proportion of sentences to keep, within 0.1 and 0.9.
    ///
    /// Invalid values are reported and the configured ratio is kept.
    #[arg(short, long)]
    ratio: Option<String>,

    /// Factor by which the proportion is scaled, within 0.1 and 3.0.
    ///
    /// Invalid values are reported and the configured factor is kept.
    #[arg(short, long)]
    threshold: Option<String>,

    /// Use given configuration file.
    ///
    /// Instead of a path "inline" toml configuration file can also be
    /// passed in by prefixing it with `inline:`.
    #[arg(short, long)]
    config: Option<String>,

    /// File to log to additionally to logging to stderr.
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Print the config and exit instead of summarizing.
    #[arg(long)]
    print_config: bool,

    /// Print the summary together with its statistics as json.
    #[arg(long)]
    json: bool,
}

impl Args {
    fn to_config_overrides(&self) -> impl Serialize {
        let mut map = Map::new();
        if let Some(log_file) = &self.log_file {
            map.insert(String::from("logging"), json!({ "file": log_file }));
        }

        Value::Object(map)
    }

    fn read_input(&self) -> Result<String, anyhow::Error> {
        if let Some(input) = &self.input {
            fs::read_to_string(input)
                .with_context(|| format!("failed to read '{}'", input.display()))
        } else {
            read_to_string(stdin()).context("failed to read stdin")
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
struct CliConfig {
    logging: logging::Config,
    summarizer: Config,
}

#[instrument(err)]
fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    let config: CliConfig = load_config(args.config.as_deref(), args.to_config_overrides())?;
    logging::initialize_global(&config.logging)?;

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let configured = config.summarizer.sanitized().configure(
        args.ratio.as_deref().map(Into::into),
        args.threshold.as_deref().map(Into::into),
    );
    for error in &configured.rejected {
        eprintln!("Warning: {error}");
    }

    let text = args.read_input()?;
    let summary = summarize(&text, &configured.config)?;
    info!(stats = ?summary.stats, "summarized text");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary.text);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_args() {
        let args = Args::parse_from([
            "summarize",
            "-r",
            "0.5",
            "--threshold",
            "x",
            "--json",
            "a.txt",
        ]);
        assert_eq!(args.input, Some(PathBuf::from("a.txt")));
        assert_eq!(args.ratio.as_deref(), Some("0.5"));
        assert_eq!(args.threshold.as_deref(), Some("x"));
        assert!(args.json);
        assert!(!args.print_config);
    }

    #[test]
    fn test_config_overrides() {
        let args = Args::parse_from(["summarize", "--log-file", "summarize.log"]);
        assert_eq!(
            serde_json::to_value(args.to_config_overrides()).unwrap(),
            json!({ "logging": { "file": "summarize.log" } }),
        );
    }
}
