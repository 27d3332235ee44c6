use shared_types::{AppConfig, BrandingConfig};
use std::path::{Path, PathBuf};

use crate::prefs::{
    self, PreferenceError, PreferenceStore, KEY_ACCENT_COLOR, KEY_BRAND_NAME, KEY_LOGO_URL,
    KEY_WEBHOOK_URL,
};

/// Default path of the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "config.toml";

/// Default path of the preference file, relative to the working directory.
pub const PREFS_PATH: &str = "condo-messenger-prefs.json";

/// Config path, overridable with `CONDO_MESSENGER_CONFIG`.
pub fn config_path() -> PathBuf {
    std::env::var("CONDO_MESSENGER_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(CONFIG_PATH))
}

/// Preference file path, overridable with `CONDO_MESSENGER_PREFS`.
pub fn prefs_path() -> PathBuf {
    std::env::var("CONDO_MESSENGER_PREFS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(PREFS_PATH))
}

/// Read and parse the config file.
///
/// If the file is missing or unparseable, every setting takes its default.
pub fn load_app_config(path: &Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to parse config, using defaults");
            AppConfig::default()
        }),
        Err(e) => {
            tracing::info!(path = %path.display(), error = %e, "No config file, using defaults");
            AppConfig::default()
        }
    }
}

/// Replace the configured webhook when an override is present and non-blank.
pub fn apply_webhook_override(config: &mut AppConfig, webhook: Option<String>) {
    if let Some(url) = webhook.filter(|u| !u.trim().is_empty()) {
        config.branding.webhook_url = Some(url);
    }
}

/// Load `.env`, the config file and environment overrides.
///
/// The result is the branding baseline that stored preferences sit on.
pub fn load_defaults() -> AppConfig {
    let _ = dotenvy::dotenv();
    let mut config = load_app_config(&config_path());
    apply_webhook_override(&mut config, std::env::var("CONDO_MESSENGER_WEBHOOK_URL").ok());
    tracing::info!(
        brand = %config.branding.brand_name,
        webhook_configured = config.branding.webhook().is_some(),
        "Loaded configuration"
    );
    config
}

/// Effective branding: stored preference where present, else `defaults`.
pub fn load_branding<S: PreferenceStore + ?Sized>(store: &S, defaults: &BrandingConfig) -> BrandingConfig {
    BrandingConfig {
        brand_name: prefs::load(store, KEY_BRAND_NAME, defaults.brand_name.clone()),
        logo_url: prefs::load(store, KEY_LOGO_URL, defaults.logo_url.clone()),
        accent_color: prefs::load(store, KEY_ACCENT_COLOR, defaults.accent_color.clone()),
        webhook_url: prefs::load(store, KEY_WEBHOOK_URL, defaults.webhook_url.clone()),
    }
}

/// Persist all four branding preferences in one write.
pub fn save_branding<S: PreferenceStore + ?Sized>(
    store: &S,
    branding: &BrandingConfig,
) -> Result<(), PreferenceError> {
    let entries = vec![
        (KEY_BRAND_NAME.to_string(), prefs::encode(KEY_BRAND_NAME, &branding.brand_name)?),
        (KEY_LOGO_URL.to_string(), prefs::encode(KEY_LOGO_URL, &branding.logo_url)?),
        (KEY_ACCENT_COLOR.to_string(), prefs::encode(KEY_ACCENT_COLOR, &branding.accent_color)?),
        (KEY_WEBHOOK_URL.to_string(), prefs::encode(KEY_WEBHOOK_URL, &branding.webhook_url)?),
    ];
    store.set_many(entries)?;
    tracing::info!(brand = %branding.brand_name, "Saved branding preferences");
    Ok(())
}
