// Theme colors used by the inline component styles
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub surface: String,
    pub foreground: String,
    pub muted: String,
    pub border: String,
    pub button: String,
    pub focus_ring: String,
}

impl ThemePalette {
    pub fn default_light() -> Self {
        Self {
            background: "#f3f4f6".to_string(),
            surface: "#ffffff".to_string(),
            foreground: "#111827".to_string(),
            muted: "#6b7280".to_string(),
            border: "#e5e7eb".to_string(),
            button: "#f3f4f6".to_string(),
            focus_ring: "#a5b4fc".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            surface: "#252526".to_string(),
            foreground: "#d1d4dc".to_string(),
            muted: "#9ca3af".to_string(),
            border: "#3c3c3c".to_string(),
            button: "#333333".to_string(),
            focus_ring: "#007acc".to_string(),
        }
    }

    /// Unknown names fall back to the light palette.
    pub fn for_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("dark") {
            Self::default_dark()
        } else {
            Self::default_light()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_name() {
        assert_eq!(ThemePalette::for_name("Dark"), ThemePalette::default_dark());
        assert_eq!(ThemePalette::for_name("light"), ThemePalette::default_light());
        assert_eq!(ThemePalette::for_name("solarized"), ThemePalette::default_light());
    }
}
