use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A flag label recognized by the mapper, ordered from most to least severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Critical,
    Red,
    Amber,
    Green,
}

impl Label {
    pub const ALL: [Label; 4] = [Label::Critical, Label::Red, Label::Amber, Label::Green];

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Critical => "critical",
            Label::Red => "red",
            Label::Amber => "amber",
            Label::Green => "green",
        }
    }

    /// Exact, case-sensitive match. `"Red"` and `" red"` are not labels.
    pub fn from_str_exact(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.as_str() == text)
    }

    /// Only JSON strings can be labels.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Self::from_str_exact(text),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
