//! Category color themes for the detail panels

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// Semantic color names defined by the host page stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKey {
    Teal,
    Orange,
    Purple,
    Green,
    Blue,
    Pink,
    Neutral,
}

impl ColorKey {
    pub const ALL: [ColorKey; 7] = [
        ColorKey::Teal,
        ColorKey::Orange,
        ColorKey::Purple,
        ColorKey::Green,
        ColorKey::Blue,
        ColorKey::Pink,
        ColorKey::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorKey::Teal => "teal",
            ColorKey::Orange => "orange",
            ColorKey::Purple => "purple",
            ColorKey::Green => "green",
            ColorKey::Blue => "blue",
            ColorKey::Pink => "pink",
            ColorKey::Neutral => "neutral",
        }
    }

    pub fn theme(self) -> ColorTheme {
        let key = self.as_str();
        ColorTheme {
            base: format!("var(--color-{key})"),
            deep: format!("var(--color-{key}-deep)"),
            transparent: format!("var(--color-{key}-transparent)"),
            text: format!("var(--color-{key}-text)"),
        }
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ColorKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownColorKey(s.to_string()))
    }
}

/// The four variants of one color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTheme {
    /// Borders and pills
    pub base: String,
    /// Backgrounds
    pub deep: String,
    /// Accents and tinted fills
    pub transparent: String,
    /// Foreground text on `deep`
    pub text: String,
}

/// Category name to color key, matched case-insensitively.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeRegistry {
    keys: HashMap<String, ColorKey>,
    fallback: ColorKey,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::empty()
            .with_category("Direct Care Solutions", ColorKey::Teal)
            .with_category("Employer Solutions", ColorKey::Orange)
            .with_category("Facility Solutions", ColorKey::Purple)
            .with_category("Family Solutions", ColorKey::Green)
            .with_category("Policy Solutions", ColorKey::Blue)
            .with_category("Workforce Solutions", ColorKey::Pink)
    }
}

impl ThemeRegistry {
    /// A registry where every category falls back to neutral.
    pub fn empty() -> Self {
        Self {
            keys: HashMap::new(),
            fallback: ColorKey::Neutral,
        }
    }

    pub fn with_category(mut self, category: &str, key: ColorKey) -> Self {
        self.keys.insert(category.trim().to_lowercase(), key);
        self
    }

    pub fn with_fallback(mut self, key: ColorKey) -> Self {
        self.fallback = key;
        self
    }

    pub fn key_for(&self, category: &str) -> Option<ColorKey> {
        self.keys.get(&category.trim().to_lowercase()).copied()
    }

    /// Theme for `category`; unknown categories get the fallback theme.
    pub fn resolve(&self, category: &str) -> ColorTheme {
        match self.key_for(category) {
            Some(key) => key.theme(),
            None => {
                crate::log::warn!(category, fallback = %self.fallback, "no color for category");
                self.fallback.theme()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let themes = ThemeRegistry::default();
        assert_eq!(themes.key_for("direct care SOLUTIONS"), Some(ColorKey::Teal));
        assert_eq!(themes.resolve("Direct Care Solutions").base, "var(--color-teal)");
    }

    #[test]
    fn unknown_category_falls_back() {
        let theme = ThemeRegistry::default().resolve("Something Else");
        assert_eq!(
            theme,
            ColorTheme {
                base: "var(--color-neutral)".into(),
                deep: "var(--color-neutral-deep)".into(),
                transparent: "var(--color-neutral-transparent)".into(),
                text: "var(--color-neutral-text)".into(),
            }
        );
    }

    #[test]
    fn registry_is_extensible() {
        let themes = ThemeRegistry::empty()
            .with_category("Local", ColorKey::Green)
            .with_fallback(ColorKey::Blue);
        assert_eq!(themes.resolve("LOCAL").deep, "var(--color-green-deep)");
        assert_eq!(themes.resolve("Remote").text, "var(--color-blue-text)");
    }

    #[test]
    fn color_key_parses() {
        assert_eq!("Purple".parse::<ColorKey>().unwrap(), ColorKey::Purple);
        assert!(matches!(
            "mauve".parse::<ColorKey>(),
            Err(ConfigError::UnknownColorKey(name)) if name == "mauve"
        ));
    }
}
