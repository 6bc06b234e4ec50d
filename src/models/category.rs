//! Transaction categories
//!
//! A closed set of ten labels classifying a transaction's purpose. Categories
//! carry no numeric identity, only a display label. `Salary` is reserved for
//! income entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Regular income (salary, wages) — income entries only
    Salary,
    Food,
    Transport,
    Bills,
    Entertainment,
    Health,
    Education,
    Shopping,
    Investment,
    Other,
}

impl Category {
    /// All categories, in display order
    pub fn all() -> [Category; 10] {
        [
            Self::Salary,
            Self::Food,
            Self::Transport,
            Self::Bills,
            Self::Entertainment,
            Self::Health,
            Self::Education,
            Self::Shopping,
            Self::Investment,
            Self::Other,
        ]
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Shopping => "Shopping",
            Self::Investment => "Investment",
            Self::Other => "Other",
        }
    }

    /// Whether this category is reserved for income entries
    pub fn is_income_only(&self) -> bool {
        matches!(self, Self::Salary)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "salary" => Ok(Self::Salary),
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "bills" => Ok(Self::Bills),
            "entertainment" => Ok(Self::Entertainment),
            "health" => Ok(Self::Health),
            "education" => Ok(Self::Education),
            "shopping" => Ok(Self::Shopping),
            "investment" => Ok(Self::Investment),
            "other" => Ok(Self::Other),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}
