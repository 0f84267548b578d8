//! Color tokens for the light and dark themes.
//!
//! DESIGN
//! ======
//! Tokens are exposed as CSS custom properties on the theme root so
//! stylesheets reference `var(--bg-wash)` etc. instead of hard-coded colors.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub bg_default: &'static str,
    pub bg_wash: &'static str,
    pub text_default: &'static str,
    pub text_alt: &'static str,
    pub brand: &'static str,
    pub border: &'static str,
    pub warn: &'static str,
}

pub const LIGHT: Theme = Theme {
    bg_default: "#ffffff",
    bg_wash: "#fafbfc",
    text_default: "#24292e",
    text_alt: "#67717a",
    brand: "#4400cc",
    border: "#ebecf0",
    warn: "#e22f2f",
};

pub const DARK: Theme = Theme {
    bg_default: "#16171a",
    bg_wash: "#0f1012",
    text_default: "#f1f2f4",
    text_alt: "#a3abb3",
    brand: "#7b16ff",
    border: "#2a2c31",
    warn: "#ff5c5c",
};

impl Theme {
    #[must_use]
    pub fn for_mode(dark: bool) -> Self {
        if dark { DARK } else { LIGHT }
    }

    /// Inline `style` declaring every token as a custom property.
    #[must_use]
    pub fn css_vars(&self) -> String {
        format!(
            "--bg-default: {}; --bg-wash: {}; --text-default: {}; --text-alt: {}; --brand: {}; --border: {}; --warn: {};",
            self.bg_default, self.bg_wash, self.text_default, self.text_alt, self.brand, self.border, self.warn
        )
    }
}
