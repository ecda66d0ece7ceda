//! Handles settings for the application.
//!
//! Sources, later ones winning:
//! - `settings.toml` (or the file given with `--config`), optional;
//! - `TABSPLIT_*` environment variables, e.g. `TABSPLIT_SERVER__PORT=8080`;
//! - command line flags.
use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "settings";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}

#[derive(Debug, Parser)]
#[command(name = "tabsplit", about = "Split the bill of a night out")]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the listen address.
    #[arg(long)]
    bind: Option<String>,
    /// Override the listen port.
    #[arg(long)]
    port: Option<u16>,
    /// Override the log level (trace, debug, info, warn, error).
    #[arg(long)]
    level: Option<String>,
}

pub fn load() -> Result<Settings> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(config_path).required(false))
        .add_source(
            config::Environment::with_prefix("TABSPLIT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    if let Some(bind) = args.bind {
        settings.server.bind = bind;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(level) = args.level {
        settings.app.level = level;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_localhost() {
        let settings = Settings::default();
        assert_eq!(settings.address(), "127.0.0.1:3000");
        assert_eq!(settings.app.level, "info");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let settings: Settings = config::Config::builder()
            .add_source(config::File::from_str(
                "[server]\nport = 8080\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.address(), "127.0.0.1:8080");
        assert_eq!(settings.app.level, "info");
    }
}
