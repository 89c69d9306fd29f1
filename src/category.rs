//! Extraction categories and category sets.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One content kind an extractor targets.
///
/// Variant order is the display order used for exported tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Titles,
    Descriptions,
    Images,
    Links,
    Tables,
    Contact,
    Prices,
    Videos,
    Forms,
    Meta,
}

impl Category {
    /// Every concrete category, in display order.
    pub const ALL: [Category; 10] = [
        Category::Titles,
        Category::Descriptions,
        Category::Images,
        Category::Links,
        Category::Tables,
        Category::Contact,
        Category::Prices,
        Category::Videos,
        Category::Forms,
        Category::Meta,
    ];

    /// Identifier used in requests and JSON keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Titles => "titles",
            Category::Descriptions => "descriptions",
            Category::Images => "images",
            Category::Links => "links",
            Category::Tables => "tables",
            Category::Contact => "contact",
            Category::Prices => "prices",
            Category::Videos => "videos",
            Category::Forms => "forms",
            Category::Meta => "meta",
        }
    }

    /// Numeric prefix of the category's exported table names.
    ///
    /// `1` is reserved for the page metadata table.
    #[must_use]
    pub const fn sort_key(self) -> u32 {
        match self {
            Category::Titles => 2,
            Category::Descriptions => 3,
            Category::Images => 4,
            Category::Links => 5,
            Category::Tables => 6,
            Category::Contact => 7,
            Category::Prices => 8,
            Category::Videos => 9,
            Category::Forms => 10,
            Category::Meta => 11,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// Set of categories selected for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySet(BTreeSet<Category>);

impl CategorySet {
    /// The wildcard set: every category.
    #[must_use]
    pub fn all() -> Self {
        Self(Category::ALL.into_iter().collect())
    }

    /// An empty set.
    #[must_use]
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Parse request identifiers; `all` expands to every category.
    ///
    /// An empty list means "everything", matching an unfiltered request.
    pub fn parse<I, S>(names: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        for name in names {
            let name = name.as_ref();
            if name.trim().eq_ignore_ascii_case("all") {
                return Ok(Self::all());
            }
            set.insert(name.parse()?);
        }
        if set.is_empty() {
            return Ok(Self::all());
        }
        Ok(set)
    }

    pub fn insert(&mut self, category: Category) {
        self.0.insert(category);
    }

    #[must_use]
    pub fn contains(&self, category: Category) -> bool {
        self.0.contains(&category)
    }

    /// Whether every category is selected.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.0.len() == Category::ALL.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Categories in display order.
    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<T: IntoIterator<Item = Category>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all() {
            return f.write_str("all");
        }
        let names: Vec<_> = self.iter().map(Category::as_str).collect();
        f.write_str(&names.join(","))
    }
}
