use serde::{Deserialize, Serialize};

pub const DEFAULT_BRAND_NAME: &str = "Studio CAI";
pub const DEFAULT_ACCENT_COLOR: &str = "#0e7490";

/// Branding and delivery settings for one office.
///
/// Built once at startup (config file defaults, then stored preferences on
/// top) and passed explicitly to whoever needs it. Every field has a
/// default so a missing or partial `config.toml` still yields a usable
/// widget in demo mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandingConfig {
    #[serde(default = "default_brand_name")]
    pub brand_name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
    #[serde(default)]
    pub webhook_url: Option<String>,
}

fn default_brand_name() -> String {
    DEFAULT_BRAND_NAME.to_string()
}

fn default_accent_color() -> String {
    DEFAULT_ACCENT_COLOR.to_string()
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            brand_name: default_brand_name(),
            logo_url: None,
            accent_color: default_accent_color(),
            webhook_url: None,
        }
    }
}

impl BrandingConfig {
    /// The webhook to post to, if one is configured.
    ///
    /// Blank values count as unset, which puts the widget in demo mode.
    pub fn webhook(&self) -> Option<&str> {
        self.webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// The logo to show, if one is configured.
    pub fn logo(&self) -> Option<&str> {
        self.logo_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub branding: BrandingConfig,
}
