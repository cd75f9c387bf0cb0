// Database model structs

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    pub label: String,
}

/// Which questions a quiz draw may come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(i32),
}

impl CategoryFilter {
    pub fn matches(self, question: &Question) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => question.category == id,
        }
    }

    pub fn category_id(self) -> Option<i32> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(id) => Some(id),
        }
    }
}

impl From<i32> for CategoryFilter {
    fn from(id: i32) -> Self {
        if id == crate::names::ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(id)
        }
    }
}
