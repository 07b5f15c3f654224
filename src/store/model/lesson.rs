use derive_more::Display;
use serde::Deserialize;
use std::str::FromStr;

/// A bookable class offering as served by the backend. `seats` is the
/// remaining capacity and is decremented locally while the lesson sits
/// in the cart.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Lesson {
    #[serde(rename = "_id")]
    pub id: String,
    pub subject: String,
    pub location: String,
    /// currency-prefixed display string, e.g. "AED 100"
    pub price: String,
    pub seats: u32,
    /// free-text feature tags
    #[serde(default)]
    pub features: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Attribute the catalog view sorts on.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortKey {
    Subject,
    Location,
    Price,
    Seats,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "subject" => Ok(Self::Subject),
            "location" => Ok(Self::Location),
            "price" => Ok(Self::Price),
            "seats" => Ok(Self::Seats),
            s => Err(format!("Invalid sort key: {s}")),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}
