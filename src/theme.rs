//! Court colors, resolved once from the host's style source

use serde::{Deserialize, Serialize};

/// Anything that can answer a named style lookup (CSS custom properties on the web)
pub trait StyleSource {
    /// Raw value for `name`, or `None` if the host has nothing
    fn property(&self, name: &str) -> Option<String>;
}

/// A style source with no values; every color falls back
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStyle;

impl StyleSource for NoStyle {
    fn property(&self, _name: &str) -> Option<String> {
        None
    }
}

/// Colors used to paint a frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub background: String,
    pub foreground: String,
    pub accent: String,
    pub line: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::resolve(&NoStyle)
    }
}

impl ThemeColors {
    pub const BACKGROUND_VAR: &'static str = "--surface";
    pub const FOREGROUND_VAR: &'static str = "--foreground";
    pub const ACCENT_VAR: &'static str = "--link";
    pub const LINE_VAR: &'static str = "--surface-border";

    /// Look up each color, trimming whitespace; empty or missing values use the fallback
    pub fn resolve<S: StyleSource + ?Sized>(style: &S) -> Self {
        let pick = |name: &str, fallback: &str| {
            style
                .property(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };

        Self {
            background: pick(Self::BACKGROUND_VAR, "#12161f"),
            foreground: pick(Self::FOREGROUND_VAR, "#ededed"),
            accent: pick(Self::ACCENT_VAR, "#7ab7ff"),
            line: pick(Self::LINE_VAR, "#2a3444"),
        }
    }
}
