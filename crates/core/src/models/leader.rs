use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SlotError;

/// The closed set of leaders whose calendars the service manages. The
/// business rules (overlap scoping, support equivalence) compare leader
/// identity exactly, so the roster is a sum type rather than free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Leader {
    #[serde(rename = "Camilo Martinez")]
    CamiloMartinez,
    #[serde(rename = "Willmer Chisco")]
    WillmerChisco,
    #[serde(rename = "Jhon Botton")]
    JhonBotton,
    #[serde(rename = "Diana Acosta")]
    DianaAcosta,
    #[serde(rename = "Andrea Acosta")]
    AndreaAcosta,
    #[serde(rename = "Mayerly Carrero")]
    MayerlyCarrero,
}

impl Leader {
    pub const ALL: [Leader; 6] = [
        Leader::CamiloMartinez,
        Leader::WillmerChisco,
        Leader::JhonBotton,
        Leader::DianaAcosta,
        Leader::AndreaAcosta,
        Leader::MayerlyCarrero,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Leader::CamiloMartinez => "Camilo Martinez",
            Leader::WillmerChisco => "Willmer Chisco",
            Leader::JhonBotton => "Jhon Botton",
            Leader::DianaAcosta => "Diana Acosta",
            Leader::AndreaAcosta => "Andrea Acosta",
            Leader::MayerlyCarrero => "Mayerly Carrero",
        }
    }
}

impl fmt::Display for Leader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Leader {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Leader::ALL
            .into_iter()
            .find(|leader| leader.display_name() == s.trim())
            .ok_or_else(|| SlotError::Validation(format!("Unknown leader: {s}")))
    }
}
