//! Bot configuration: JSON file defaults merged with command-line overrides.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use lb_client::{ClientConfig, DEFAULT_API_URL, RetryPolicy, SessionParams};
use lb_core::Building;
use lb_policy::PolicyKind;

/// Everything one run needs, in file form.
///
/// Every field is optional in the file; missing fields take the defaults
/// below.  Unknown fields are rejected so typos do not go unnoticed.
///
/// ```json
/// { "policy": "updown", "building": "big_clustered", "sandbox": false }
/// ```
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BotConfig {
    pub policy:       String,
    pub event:        String,
    pub building:     String,
    /// Defaults to `<policy>-rust-bot` when unset.
    pub bot:          Option<String>,
    pub email:        String,
    pub sandbox:      bool,
    pub api_url:      String,
    pub timeout_secs: u64,
    pub retries:      u32,
    pub seed:         Option<u64>,
    pub max_turns:    Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            policy:       PolicyKind::default().as_str().to_owned(),
            event:        "secondspace2025".to_owned(),
            building:     Building::default().as_str().to_owned(),
            bot:          None,
            email:        "bob@mail.com".to_owned(),
            sandbox:      true,
            api_url:      DEFAULT_API_URL.to_owned(),
            timeout_secs: 30,
            retries:      RetryPolicy::default().max_retries,
            seed:         None,
            max_turns:    None,
        }
    }
}

impl BotConfig {
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn policy_kind(&self) -> Result<PolicyKind> {
        Ok(self.policy.parse::<PolicyKind>()?)
    }

    pub fn session_params(&self) -> Result<SessionParams> {
        let kind = self.policy_kind()?;
        let building: Building = match self.building.parse() {
            Ok(b) => b,
            Err(never) => match never {},
        };
        if let Building::Custom(name) = &building {
            tracing::warn!(building = %name, "building not in the known catalog, sending as-is");
        }
        Ok(SessionParams {
            event:    self.event.clone(),
            building,
            bot:      self.bot.clone().unwrap_or_else(|| format!("{kind}-rust-bot")),
            email:    self.email.clone(),
            sandbox:  self.sandbox,
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            retry:   RetryPolicy { max_retries: self.retries, ..RetryPolicy::default() },
        }
    }
}

#[cfg(test)]
mod config_tests {
    use std::io::Write;

    use super::*;

    fn write_config(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(json.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn empty_file_gives_defaults() {
        let file = write_config("{}");
        let config = BotConfig::load_from(file.path()).unwrap();
        assert_eq!(config, BotConfig::default());
    }

    #[test]
    fn partial_file_overrides_named_fields() {
        let file = write_config(r#"{ "policy": "updown", "sandbox": false, "seed": 9 }"#);
        let config = BotConfig::load_from(file.path()).unwrap();
        assert_eq!(config.policy_kind().unwrap(), PolicyKind::UpDown);
        assert!(!config.sandbox);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.event, "secondspace2025");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let file = write_config(r#"{ "polcy": "updown" }"#);
        assert!(BotConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = BotConfig::load_from(Path::new("/nonexistent/liftbot.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/liftbot.json"));
    }

    #[test]
    fn bot_name_follows_policy() {
        let config = BotConfig { policy: "UpDown".into(), ..BotConfig::default() };
        assert_eq!(config.session_params().unwrap().bot, "updown-rust-bot");

        let named = BotConfig { bot: Some("mine".into()), ..config };
        assert_eq!(named.session_params().unwrap().bot, "mine");
    }

    #[test]
    fn unknown_policy_fails() {
        let config = BotConfig { policy: "sideways".into(), ..BotConfig::default() };
        assert!(config.session_params().is_err());
    }

    #[test]
    fn catalog_building_is_parsed() {
        let config = BotConfig { building: "85_sky_tower".into(), ..BotConfig::default() };
        assert_eq!(config.session_params().unwrap().building, Building::SkyTower);
    }

    #[test]
    fn client_config_carries_timeout_and_retries() {
        let config = BotConfig { timeout_secs: 5, retries: 0, ..BotConfig::default() };
        let client = config.client_config();
        assert_eq!(client.timeout, Duration::from_secs(5));
        assert_eq!(client.retry.max_retries, 0);
        assert_eq!(client.api_url, DEFAULT_API_URL);
    }
}
