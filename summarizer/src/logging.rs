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

//! Setup tracing for the command line front end.

use std::{
    fs::OpenOptions,
    io::stderr,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{error, Dispatch};
use tracing_subscriber::{
    filter::LevelFilter,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    Layer,
};

mod serde_level_filter {
    use serde::{
        de::{Deserialize, Deserializer, Error},
        ser::{Serialize, Serializer},
    };
    use tracing_subscriber::filter::LevelFilter;

    #[allow(clippy::trivially_copy_pass_by_ref)] // required by serde
    pub(super) fn serialize<S>(level: &LevelFilter, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        level.to_string().serialize(serializer)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<LevelFilter, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).and_then(|level| {
            level
                .parse::<LevelFilter>()
                .map_err(|error| D::Error::custom(error.to_string()))
        })
    }
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File to log to additionally to logging to stderr.
    pub file: Option<PathBuf>,
    #[serde(with = "serde_level_filter")]
    pub level: LevelFilter,
    /// Log json instead of human readable lines to stderr.
    pub json: bool,
    pub install_panic_hook: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: None,
            level: LevelFilter::WARN,
            json: false,
            install_panic_hook: true,
        }
    }
}

/// Initializes the logging.
///
/// Even though this returns an error if logging was already initialized you
/// should only call this function when you expect it to succeed.
pub fn initialize_global(config: &Config) -> Result<(), TryInitError> {
    let dispatch = create_trace_dispatch(config.level, config.json, config.file.as_deref());
    dispatch.try_init()?;
    if config.install_panic_hook {
        init_panic_logging();
    }
    Ok(())
}

fn create_trace_dispatch(level: LevelFilter, json: bool, file: Option<&Path>) -> Dispatch {
    let subscriber = tracing_subscriber::registry();

    let stderr_log = tracing_subscriber::fmt::layer().with_writer(stderr);
    let stderr_log = if json {
        stderr_log
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .boxed()
    } else {
        stderr_log.boxed()
    };

    let file_log = file
        .map(|file| {
            OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(file)
                .map(|writer| {
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false)
                        .json()
                })
        })
        .transpose()
        .map_err(|error| {
            eprintln!("Setup file logging failed: {error}");
        })
        .ok()
        .flatten();

    subscriber
        .with(stderr_log)
        .with(file_log)
        .with(level)
        .into()
}

fn init_panic_logging() {
    std::panic::set_hook(Box::new(|panic| {
        if let Some(location) = panic.location() {
            error!(
                message = %panic,
                panic.file = location.file(),
                panic.line = location.line(),
                panic.column = location.column(),
            );
        } else {
            error!(message = %panic);
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_config() {
        let config =
            serde_json::from_str::<Config>(r#"{ "level": "debug", "json": true }"#).unwrap();
        assert_eq!(
            config,
            Config {
                level: LevelFilter::DEBUG,
                json: true,
                ..Config::default()
            },
        );
    }

    #[test]
    fn test_deserialize_invalid_level() {
        assert!(serde_json::from_str::<Config>(r#"{ "level": "loud" }"#).is_err());
    }

    #[test]
    fn test_serialize_level() {
        let value = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(value["level"], "warn");
    }
}
