//! Dashboard sections reachable from the navigation links

use std::fmt;

/// Title shown when no known section is active
pub const DEFAULT_TITLE: &str = "DataAnalytics SAAS";

/// A navigation section, keyed by the link's `data-section` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Agreement management (`acordo`)
    Acordo,
    /// Daily report (`diario`)
    Diario,
    /// General report (`geral`)
    Geral,
    /// Any other key
    Home,
}

impl Section {
    /// Resolve a `data-section` key; unknown keys map to `Home`
    pub fn from_key(key: &str) -> Self {
        match key {
            "acordo" => Section::Acordo,
            "diario" => Section::Diario,
            "geral" => Section::Geral,
            _ => Section::Home,
        }
    }

    /// Document title for this section
    pub fn title(&self) -> &'static str {
        match self {
            Section::Acordo => "Gestão de Acordos - DataAnalytics SAAS",
            Section::Diario => "Relatório Diário - DataAnalytics SAAS",
            Section::Geral => "Relatório Geral - DataAnalytics SAAS",
            Section::Home => DEFAULT_TITLE,
        }
    }

    /// The `data-section` key, if this is a named section
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Section::Acordo => Some("acordo"),
            Section::Diario => Some("diario"),
            Section::Geral => Some("geral"),
            Section::Home => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key().unwrap_or("home"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_titles() {
        assert_eq!(
            Section::from_key("acordo").title(),
            "Gestão de Acordos - DataAnalytics SAAS"
        );
        assert_eq!(
            Section::from_key("diario").title(),
            "Relatório Diário - DataAnalytics SAAS"
        );
        assert_eq!(
            Section::from_key("geral").title(),
            "Relatório Geral - DataAnalytics SAAS"
        );
    }

    #[test]
    fn test_unknown_key_falls_back() {
        assert_eq!(Section::from_key("unknown"), Section::Home);
        assert_eq!(Section::from_key("unknown").title(), "DataAnalytics SAAS");
        assert_eq!(Section::from_key("").title(), DEFAULT_TITLE);
        // keys are case sensitive
        assert_eq!(Section::from_key("Geral"), Section::Home);
    }

    #[test]
    fn test_key_round_trip() {
        for section in [Section::Acordo, Section::Diario, Section::Geral] {
            assert_eq!(Section::from_key(section.key().unwrap()), section);
        }
    }
}
