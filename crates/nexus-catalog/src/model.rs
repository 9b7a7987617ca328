//! Product record model for the catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fixed product category set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Ebook,
    Template,
    Marketing,
    #[serde(rename = "AI Pack")]
    AiPack,
    Software,
    Creative,
    Course,
}

impl Category {
    /// All categories, in marketplace filter order.
    pub const ALL: [Category; 7] = [
        Category::Software,
        Category::Template,
        Category::Marketing,
        Category::AiPack,
        Category::Ebook,
        Category::Creative,
        Category::Course,
    ];

    /// Return the category as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ebook => "Ebook",
            Category::Template => "Template",
            Category::Marketing => "Marketing",
            Category::AiPack => "AI Pack",
            Category::Software => "Software",
            Category::Creative => "Creative",
            Category::Course => "Course",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| ParseCategoryError(value.to_string()))
    }
}

/// A marketplace product record. Immutable once generated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Stable identifier within the catalog.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Display price string, e.g. `"$49.00"`.
    pub price: String,
    /// Product category.
    pub category: Category,
    /// Decorative gradient token for the card background.
    pub gradient: String,
    /// External purchase link.
    pub buy_url: String,
}

impl Product {
    /// Numeric value of the display price.
    pub fn price_value(&self) -> f64 {
        price_value(&self.price)
    }
}

/// Parse a formatted currency string to a numeric value by stripping every
/// character that is not a digit or decimal point.
pub fn price_value(price: &str) -> f64 {
    let digits: String = price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::{Category, ParseCategoryError, price_value};
    use pretty_assertions::assert_eq;

    #[test]
    fn category_parses_and_formats() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert_eq!("ai pack".parse::<Category>(), Ok(Category::AiPack));
        assert_eq!(
            "Gadgets".parse::<Category>(),
            Err(ParseCategoryError("Gadgets".to_string()))
        );
    }

    #[test]
    fn category_serde_uses_display_names() {
        let encoded = serde_json::to_string(&Category::AiPack).expect("serialize");
        assert_eq!(encoded, "\"AI Pack\"");
    }

    #[test]
    fn price_value_ignores_currency_formatting() {
        assert_eq!(price_value("$49.00"), 49.0);
        assert_eq!(price_value("$1,249.50"), 1249.5);
        assert_eq!(price_value("USD 9"), 9.0);
        assert_eq!(price_value("free"), 0.0);
    }
}
