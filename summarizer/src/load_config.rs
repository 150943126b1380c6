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

//! Layered configuration loading for the command line front end.

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{de::DeserializeOwned, Serialize};

/// The prefix of environment variables considered by [`load_config()`].
pub const ENV_PREFIX: &str = "XAYN_SUMMARIZER__";

/// Load the configuration into given type.
///
/// # Load order/priority
///
/// This will by ascending priority load:
///
/// 1. `./config.toml` or the specified toml config
/// 2. `./.env`
/// 3. `./.env.local`
/// 4. process environment
/// 5. options passed through `update_with`
///
/// Config values loaded from higher priority sources override such from lower
/// priority sources.
///
/// Instead of a path an "inline" toml config can be passed in by prefixing it with `inline:`.
///
/// # Env and .env
///
/// Environment variables from `.env` and `.env.local` will be loaded into the process
/// environment if they don't already exist there.
///
/// Only environment variables with the `XAYN_SUMMARIZER__` prefix will be considered and the
/// prefix is stripped. They are split at `__`, i.e. `XAYN_SUMMARIZER__LOGGING__LEVEL=debug` is
/// treated like the json `{ "logging": { "level": "debug" } }`.
pub fn load_config<C, U>(config: Option<&str>, update_with: U) -> Result<C, figment::Error>
where
    C: DeserializeOwned,
    U: Serialize,
{
    load_dotenv(".env.local")?;
    load_dotenv(".env")?;

    build_figment(config, update_with).extract()
}

// the order must be from highest to lowest priority
fn build_figment(config: Option<&str>, update_with: impl Serialize) -> Figment {
    let mut figment = Figment::new()
        .join(Serialized::defaults(update_with))
        .join(Env::prefixed(ENV_PREFIX).split("__"));

    let provider = config
        .map(|content_or_path| {
            if let Some(content) = content_or_path.strip_prefix("inline:") {
                Toml::string(content)
            } else {
                Toml::file(content_or_path)
            }
        })
        .or_else(|| {
            let default_file = Path::new("config.toml");
            default_file.exists().then(|| Toml::file(default_file))
        });

    if let Some(provider) = provider {
        figment = figment.join(provider);
    }

    figment
}

fn load_dotenv(file_name: &str) -> Result<(), figment::Error> {
    match dotenvy::from_filename(file_name) {
        Err(error) if !error.not_found() => {
            Err(figment::Error::from(error.to_string()).with_path(file_name))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use xayn_test_utils::assert_approx_eq;

    use figment::Jail;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::{logging, Config};

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(default)]
    struct TestConfig {
        logging: logging::Config,
        summarizer: Config,
    }

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_| {
            let config = load_config::<TestConfig, _>(None, json!({}))?;
            assert_eq!(config.summarizer, Config::default());
            assert_eq!(config.logging, logging::Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_priorities() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [summarizer]
                summary_ratio = 0.5
                threshold_factor = 2.0

                [logging]
                level = "info"
                "#,
            )?;
            jail.set_env("XAYN_SUMMARIZER__SUMMARIZER__THRESHOLD_FACTOR", "1.5");
            jail.set_env("XAYN_SUMMARIZER__LOGGING__LEVEL", "debug");

            let config = load_config::<TestConfig, _>(
                None,
                json!({ "logging": { "level": "trace" } }),
            )?;
            assert_approx_eq!(f64, config.summarizer.summary_ratio(), 0.5);
            assert_approx_eq!(f64, config.summarizer.threshold_factor(), 1.5);
            assert_eq!(config.logging.level.to_string(), "trace");
            Ok(())
        });
    }

    #[test]
    fn test_inline() {
        Jail::expect_with(|_| {
            let config = load_config::<TestConfig, _>(
                Some("inline:summarizer.summary_ratio = 0.7"),
                json!({}),
            )?;
            assert_approx_eq!(f64, config.summarizer.summary_ratio(), 0.7);
            assert_approx_eq!(f64, config.summarizer.threshold_factor(), 1.2);
            Ok(())
        });
    }
}
