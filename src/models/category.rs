use serde::{Deserialize, Serialize};

/// The fixed category set. Transactions always carry one of these, and the
/// budget table is keyed by them. Not user-extensible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Category {
    Food,
    Transport,
    Shopping,
    Bills,
    Others,
}

impl Category {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Others => "Others",
        }
    }

    /// Parse a category name (case-insensitive). Returns `None` for anything
    /// outside the fixed set; unknown names are never coerced to `Others`.
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Self::Food),
            "transport" => Some(Self::Transport),
            "shopping" => Some(Self::Shopping),
            "bills" => Some(Self::Bills),
            "others" => Some(Self::Others),
            _ => None,
        }
    }

    /// All categories in presentation order. Derived views emit one entry
    /// per category in exactly this order.
    pub(crate) fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Transport,
            Self::Shopping,
            Self::Bills,
            Self::Others,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
