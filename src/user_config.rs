use crate::maps::DEFAULT_ZOOM;
use serde::{Deserialize, Serialize};
use std::env;

const APP_NAME: &str = "iplocate";
const FILE_NAME: Option<&str> = None;
const TOKEN_ENV: &str = "IPINFO_TOKEN";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UserConfig {
  /// ipinfo.io access token; anonymous requests work with a lower quota.
  pub token: Option<String>,
  /// Google Maps zoom level for the exact-location link.
  pub zoom: u8,
  /// Play the startup animation and banner.
  pub intro: bool,
}

impl Default for UserConfig {
  fn default() -> Self {
    Self {
      token: None,
      zoom: DEFAULT_ZOOM,
      intro: true,
    }
  }
}

impl UserConfig {
  /// Lets a non-empty `IPINFO_TOKEN` value win over the file.
  #[must_use]
  pub fn with_env_token(mut self, env_token: Option<String>) -> Self {
    if let Some(token) = env_token.filter(|t| !t.is_empty()) {
      self.token = Some(token);
    }
    self
  }
}

/// Read ~/.config/iplocate/default-config.toml (or OS equivalent) when it
/// exists, then apply the environment override. Nothing is written.
pub fn load() -> UserConfig {
  let file = match confy::get_configuration_file_path(APP_NAME, FILE_NAME) {
    Ok(path) if path.exists() => {
      log::debug!("reading config from {}", path.display());
      confy::load_path(&path).unwrap_or_else(|e| {
        log::warn!("ignoring unreadable config file: {e}");
        UserConfig::default()
      })
    }
    Ok(_) => UserConfig::default(),
    Err(e) => {
      log::debug!("no config directory available: {e}");
      UserConfig::default()
    }
  };
  file.with_env_token(env::var(TOKEN_ENV).ok())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let cfg = UserConfig::default();
    assert_eq!(cfg.zoom, 12);
    assert!(cfg.intro);
    assert!(cfg.token.is_none());
  }

  #[test]
  fn test_partial_file_keeps_defaults() {
    let cfg: UserConfig =
      serde_json::from_str(r#"{"zoom": 15}"#).expect("Should parse");
    assert_eq!(cfg.zoom, 15);
    assert!(cfg.intro);
  }

  #[test]
  fn test_env_token_overrides_file() {
    let file = UserConfig {
      token: Some("from-file".into()),
      ..Default::default()
    };
    let cfg = file.clone().with_env_token(Some("from-env".into()));
    assert_eq!(cfg.token.as_deref(), Some("from-env"));

    let unchanged = file.clone().with_env_token(Some(String::new()));
    assert_eq!(unchanged, file);
    assert_eq!(file.clone().with_env_token(None), file);
  }
}
