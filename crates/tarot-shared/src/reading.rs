//! Reading domain types: categories, orientation, stored readings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Concern category chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Love,
    Career,
    Relationship,
    Finance,
    Etc,
}

/// Display metadata for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub value: Category,
    pub label: &'static str,
    pub description: &'static str,
}

pub const CATEGORIES: [CategoryInfo; 5] = [
    CategoryInfo {
        value: Category::Love,
        label: "연애",
        description: "사랑과 연애에 관한 고민",
    },
    CategoryInfo {
        value: Category::Career,
        label: "취업/이직",
        description: "직업과 커리어에 관한 고민",
    },
    CategoryInfo {
        value: Category::Relationship,
        label: "인간관계",
        description: "대인관계에 관한 고민",
    },
    CategoryInfo {
        value: Category::Finance,
        label: "재정",
        description: "금전과 재정에 관한 고민",
    },
    CategoryInfo {
        value: Category::Etc,
        label: "기타",
        description: "그 외 일상의 고민",
    },
];

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Love,
        Category::Career,
        Category::Relationship,
        Category::Finance,
        Category::Etc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Love => "love",
            Category::Career => "career",
            Category::Relationship => "relationship",
            Category::Finance => "finance",
            Category::Etc => "etc",
        }
    }

    /// Exact, case-sensitive match against the wire value
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    pub fn info(&self) -> &'static CategoryInfo {
        // CATEGORIES is ordered like ALL
        &CATEGORIES[*self as usize]
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }

    /// Label used inside the interpretation prompt. "etc" reads as everyday life there.
    pub fn prompt_label(&self) -> &'static str {
        match self {
            Category::Etc => "일상",
            other => other.label(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Upright,
    Reversed,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Upright => "upright",
            Orientation::Reversed => "reversed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "upright" => Some(Orientation::Upright),
            "reversed" => Some(Orientation::Reversed),
            _ => None,
        }
    }

    /// Korean label (정방향 / 역방향)
    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Upright => "정방향",
            Orientation::Reversed => "역방향",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields written by the pipeline for a new reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReading {
    pub category: Category,
    pub concern: String,
    pub card_id: String,
    pub orientation: Orientation,
    pub interpretation: String,
}

/// A persisted reading, as returned by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub id: String,
    pub category: Category,
    pub concern: String,
    pub card_id: String,
    pub orientation: Orientation,
    pub interpretation: String,
    pub created_at: DateTime<Utc>,
}

impl Reading {
    pub fn from_new(id: String, created_at: DateTime<Utc>, new: NewReading) -> Self {
        Self {
            id,
            category: new.category,
            concern: new.concern,
            card_id: new.card_id,
            orientation: new.orientation,
            interpretation: new.interpretation,
            created_at,
        }
    }
}
