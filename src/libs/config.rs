//! Application configuration management.
//!
//! Configuration is stored as pretty-printed JSON in the application data
//! directory. The only configurable module is the optional remote task
//! store; when it is absent or still carries placeholder credentials the
//! application runs against local storage.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Placeholder credential shipped in documentation snippets. Treated the
/// same as an absent remote section.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

const DEFAULT_POLL_INTERVAL_SECS: u64 = 2;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteConfig {
    pub api_url: String,
    pub api_key: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

fn default_poll_interval() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

impl RemoteConfig {
    /// A remote section is usable only with real credentials.
    pub fn is_configured(&self) -> bool {
        !self.api_url.trim().is_empty() && !self.api_key.trim().is_empty() && self.api_key != PLACEHOLDER_API_KEY
    }
}

impl Config {
    /// Reads the configuration file, falling back to defaults when absent.
    pub fn read() -> Result<Self> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }
        let file = File::open(config_file_path)?;
        let config = serde_json::from_reader(BufReader::new(file)).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Existing values are offered as defaults so re-running the wizard only
    /// changes what the user edits.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let configure_remote = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptConfigureRemote.to_string())
            .default(config.remote.is_some())
            .interact()?;

        if configure_remote {
            let default = config.remote.clone().unwrap_or(RemoteConfig {
                api_url: "".to_string(),
                api_key: "".to_string(),
                poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            });
            msg_print!(Message::ConfigModuleRemote);
            config.remote = Some(RemoteConfig {
                api_url: Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptRemoteApiUrl.to_string())
                    .default(default.api_url)
                    .interact_text()?,
                api_key: Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptRemoteApiKey.to_string())
                    .default(default.api_key)
                    .interact_text()?,
                poll_interval_secs: Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptRemotePollInterval.to_string())
                    .default(default.poll_interval_secs)
                    .interact_text()?,
            });
        } else {
            config.remote = None;
        }

        Ok(config)
    }
}
