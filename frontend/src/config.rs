//! Site content configuration.
//!
//! Every piece of page copy and the logo path live here instead of inside
//! the components. The built-in defaults below are what the page shows
//! when `index.html` carries no content document; a document embedded as
//! `<script type="application/json" id="site-config">` overrides any
//! subset of fields without rebuilding the wasm bundle.

use serde::Deserialize;

use crate::types::{AppError, AppResult, DisplayLabel};

/// Id of the `<script type="application/json">` element holding the
/// content document.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Document title.
pub const SITE_TITLE: &str = "ShareXpress";

/// Logo image path, served next to `index.html`.
pub const LOGO_SRC: &str = "/assets/logo.png";

/// Logo alternative text.
pub const LOGO_ALT: &str = "sharexpress logo";

/// Navigation labels shown in the header, in order.
pub const NAV_LINKS: [&str; 2] = ["How it Works", "Pricing"];

/// Target used for navigation links that don't name one.
pub const DEFAULT_HREF: &str = "#";

/// Plain sign-in label in the header.
pub const SIGN_IN_LABEL: &str = "Sign in";

/// Header call to action.
pub const NAVBAR_CTA: &str = "Get Started";

/// Hero headings, one `<h1>` each.
pub const HERO_HEADINGS: [&str; 2] = ["Secure file transfers", "Built for distributed systems."];

/// Hero taglines, one paragraph each.
pub const HERO_TAGLINES: [&str; 2] = [
    "Session-bound architecture. Permission-aware transfers.",
    "Built for scale.",
];

/// Hero call to action.
pub const HERO_CTA: &str = "Share your first file securely";

// =============================================================================
// Configuration Types
// =============================================================================

/// All content of the landing page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document title
    pub title: String,
    /// Header content
    pub navbar: NavbarConfig,
    /// Hero banner content
    pub hero: HeroConfig,
}

/// Header content.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub logo: LogoConfig,
    pub links: Vec<NavLink>,
    pub sign_in: DisplayLabel,
    pub cta: DisplayLabel,
}

/// Logo image reference.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    pub src: String,
    pub alt: String,
}

/// One navigation entry of the header.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavLink {
    pub label: DisplayLabel,
    #[serde(default = "default_href")]
    pub href: String,
}

/// Hero banner content.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub headings: Vec<String>,
    pub taglines: Vec<String>,
    pub cta: DisplayLabel,
}

fn default_href() -> String {
    DEFAULT_HREF.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: SITE_TITLE.to_string(),
            navbar: NavbarConfig::default(),
            hero: HeroConfig::default(),
        }
    }
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            logo: LogoConfig::default(),
            links: NAV_LINKS
                .into_iter()
                .map(|label| NavLink {
                    label: DisplayLabel::from_static(label),
                    href: default_href(),
                })
                .collect(),
            sign_in: DisplayLabel::from_static(SIGN_IN_LABEL),
            cta: DisplayLabel::from_static(NAVBAR_CTA),
        }
    }
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            src: LOGO_SRC.to_string(),
            alt: LOGO_ALT.to_string(),
        }
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            headings: HERO_HEADINGS.into_iter().map(String::from).collect(),
            taglines: HERO_TAGLINES.into_iter().map(String::from).collect(),
            cta: DisplayLabel::from_static(HERO_CTA),
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

impl SiteConfig {
    /// Parse a (possibly partial) content document.
    ///
    /// Fields the document omits keep their built-in values.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the content rules serde can't express.
    pub fn validate(&self) -> AppResult<()> {
        if self.navbar.logo.src.trim().is_empty() {
            return Err(AppError::Validation("navbar.logo.src is empty".into()));
        }
        if self.navbar.links.is_empty() {
            return Err(AppError::Validation("navbar.links is empty".into()));
        }
        if let Some(link) = self.navbar.links.iter().find(|l| l.href.trim().is_empty()) {
            return Err(AppError::Validation(format!(
                "navbar link '{}' has an empty href",
                link.label
            )));
        }
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title is blank".into()));
        }
        if self.hero.headings.is_empty() {
            return Err(AppError::Validation("hero.headings is empty".into()));
        }
        if let Some(i) = self.hero.headings.iter().position(|h| h.trim().is_empty()) {
            return Err(AppError::Validation(format!("hero.headings[{}] is blank", i)));
        }
        if let Some(i) = self.hero.taglines.iter().position(|t| t.trim().is_empty()) {
            return Err(AppError::Validation(format!("hero.taglines[{}] is blank", i)));
        }
        Ok(())
    }

    /// Load the content embedded in the host page.
    ///
    /// Never fails: a missing or broken document falls back to the
    /// built-in content so the page always renders.
    pub fn load() -> Self {
        let Some(json) = embedded_document() else {
            log::debug!("No #{} element, using built-in content", CONFIG_ELEMENT_ID);
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(config) => {
                log::info!(
                    "Loaded site content: {} nav links, hero CTA '{}'",
                    config.navbar.links.len(),
                    config.hero.cta
                );
                config
            }
            Err(e) => {
                log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}

/// Text of the embedded content element, if the page has one.
fn embedded_document() -> Option<String> {
    gloo_utils::document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_document_overrides_only_named_fields() {
        let json = r#"{
            "navbar": {
                "links": [
                    {"label": "How it Works"},
                    {"label": "Pricing", "href": "/pricing"},
                    {"label": "Docs", "href": "/docs"},
                    {"label": "Privacy", "href": "/privacy"}
                ]
            },
            "hero": { "cta": "Try it now" }
        }"#;

        let config = SiteConfig::from_json(json).unwrap();
        let defaults = SiteConfig::default();

        let labels: Vec<&str> = config.navbar.links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["How it Works", "Pricing", "Docs", "Privacy"]);
        assert_eq!(config.navbar.links[0].href, DEFAULT_HREF);
        assert_eq!(config.navbar.links[1].href, "/pricing");
        assert_eq!(config.hero.cta.as_str(), "Try it now");

        assert_eq!(config.title, defaults.title);
        assert_eq!(config.navbar.logo, defaults.navbar.logo);
        assert_eq!(config.navbar.cta, defaults.navbar.cta);
        assert_eq!(config.hero.headings, defaults.hero.headings);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let result = SiteConfig::from_json(r#"{"title": "#);
        assert!(matches!(result, Err(AppError::Config(_))));

        let wrong_shape = SiteConfig::from_json(r#"{"navbar": {"links": "Pricing"}}"#);
        assert!(matches!(wrong_shape, Err(AppError::Config(_))));
    }

    #[test]
    fn test_blank_label_is_rejected() {
        let result = SiteConfig::from_json(r#"{"hero": {"cta": "  "}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_content_rules() {
        let no_links = SiteConfig::from_json(r#"{"navbar": {"links": []}}"#);
        assert!(matches!(no_links, Err(AppError::Validation(_))));

        let no_logo = SiteConfig::from_json(r#"{"navbar": {"logo": {"src": ""}}}"#);
        assert!(matches!(no_logo, Err(AppError::Validation(_))));

        let no_headings = SiteConfig::from_json(r#"{"hero": {"headings": []}}"#);
        assert!(matches!(no_headings, Err(AppError::Validation(_))));

        let blank_heading = SiteConfig::from_json(r#"{"hero": {"headings": ["", "x"]}}"#);
        assert_eq!(
            blank_heading,
            Err(AppError::Validation("hero.headings[0] is blank".into()))
        );

        let blank_tagline = SiteConfig::from_json(r#"{"hero": {"taglines": ["ok", "  "]}}"#);
        assert_eq!(
            blank_tagline,
            Err(AppError::Validation("hero.taglines[1] is blank".into()))
        );

        let blank_title = SiteConfig::from_json(r#"{"title": ""}"#);
        assert!(matches!(blank_title, Err(AppError::Validation(_))));

        let no_taglines = SiteConfig::from_json(r#"{"hero": {"taglines": []}}"#);
        assert!(no_taglines.is_ok());

        let empty_href =
            SiteConfig::from_json(r#"{"navbar": {"links": [{"label": "Docs", "href": " "}]}}"#);
        assert!(matches!(empty_href, Err(AppError::Validation(_))));
    }
}
