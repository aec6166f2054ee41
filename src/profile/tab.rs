use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The three mutually exclusive views of the profile form.
///
/// The `as_str()` value is used in config files, CLI flags and submission
/// payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    #[default]
    Personal,
    Medical,
    Preferences,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tab '{0}' (expected personal, medical or preferences)")]
pub struct UnknownTab(pub String);

impl ActiveTab {
    /// All tabs in display order.
    pub const ALL: [ActiveTab; 3] = [Self::Personal, Self::Medical, Self::Preferences];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Medical => "medical",
            Self::Preferences => "preferences",
        }
    }

    /// Capitalized section name used in acknowledgments.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Medical => "Medical",
            Self::Preferences => "Preferences",
        }
    }

    /// Label shown in the tab bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Personal => "Dados Pessoais",
            Self::Medical => "Histórico Médico",
            Self::Preferences => "Preferências",
        }
    }

    /// Heading of the section body.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Personal => "Dados Pessoais",
            Self::Medical => "Histórico Médico",
            Self::Preferences => "Preferências de Atendimento",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Personal => "Editar Informações Pessoais",
            Self::Medical => "Editar Informações Médicas",
            Self::Preferences => "Editar Preferências",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Personal => 0,
            Self::Medical => 1,
            Self::Preferences => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActiveTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "personal" => Ok(Self::Personal),
            "medical" => Ok(Self::Medical),
            "preferences" => Ok(Self::Preferences),
            _ => Err(UnknownTab(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn personal_is_default() {
        assert_eq!(ActiveTab::default(), ActiveTab::Personal);
    }

    #[test]
    fn next_and_previous_wrap() {
        assert_eq!(ActiveTab::Preferences.next(), ActiveTab::Personal);
        assert_eq!(ActiveTab::Personal.previous(), ActiveTab::Preferences);
        assert_eq!(ActiveTab::Personal.next(), ActiveTab::Medical);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Medical".parse::<ActiveTab>(), Ok(ActiveTab::Medical));
        assert_eq!(" preferences ".parse::<ActiveTab>(), Ok(ActiveTab::Preferences));
        assert!("settings".parse::<ActiveTab>().is_err());
    }

    #[test]
    fn index_matches_all_order() {
        for (idx, tab) in ActiveTab::ALL.iter().enumerate() {
            assert_eq!(tab.index(), idx);
        }
    }
}
