use serde::{Deserialize, Serialize};

/// The fixed set of expense categories a budget tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Rent,
    Food,
    Transportation,
    Utilities,
    Entertainment,
    Savings,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rent => "rent",
            Self::Food => "food",
            Self::Transportation => "transportation",
            Self::Utilities => "utilities",
            Self::Entertainment => "entertainment",
            Self::Savings => "savings",
            Self::Other => "other",
        }
    }

    /// Human-readable name: wire name with underscores shown as spaces.
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Title-cased name as it appears in an analysis breakdown, e.g. "Entertainment".
    pub fn title(&self) -> String {
        self.label()
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Rent,
            Self::Food,
            Self::Transportation,
            Self::Utilities,
            Self::Entertainment,
            Self::Savings,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
