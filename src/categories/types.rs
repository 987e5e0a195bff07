//! Types for the categories resource

use serde::{Deserialize, Serialize};

/// Which side of the ledger a category applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
    Both,
}

impl CategoryKind {
    /// Wire representation, as the API expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Income => "income",
            CategoryKind::Expense => "expense",
            CategoryKind::Both => "both",
        }
    }
}

/// Reference to a parent category. The backend sends either a bare id or
/// the embedded parent record depending on the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParentCategory {
    Id(String),
    Record {
        #[serde(rename = "_id")]
        id: String,
    },
}

impl ParentCategory {
    /// The parent category's id, whichever form it arrived in
    pub fn id(&self) -> &str {
        match self {
            ParentCategory::Id(id) => id,
            ParentCategory::Record { id } => id,
        }
    }
}

/// A category as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "type")]
    pub kind: CategoryKind,

    /// Display color as a hex string
    #[serde(default)]
    pub color: Option<String>,

    /// Display icon name
    #[serde(default)]
    pub icon: Option<String>,

    #[serde(rename = "parentCategory", default)]
    pub parent_category: Option<ParentCategory>,

    /// Monthly budget for the category, 0 when unset
    #[serde(rename = "budgetLimit", default)]
    pub budget_limit: f64,

    /// Archived categories have `is_active` false
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,

    /// Whether this is one of the built-in default categories
    #[serde(rename = "isDefault", default)]
    pub is_default: bool,

    #[serde(rename = "usageCount", default)]
    pub usage_count: u64,

    /// Owning user, absent on defaults
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Payload for creating a category
#[derive(Debug, Clone, Serialize)]
pub struct NewCategory {
    pub name: String,

    pub description: String,

    #[serde(rename = "type")]
    pub kind: CategoryKind,

    pub color: String,

    pub icon: String,

    #[serde(rename = "parentCategory", skip_serializing_if = "Option::is_none")]
    pub parent_category: Option<String>,

    #[serde(rename = "budgetLimit")]
    pub budget_limit: f64,
}

impl NewCategory {
    /// Create a payload with the required fields and the UI's defaults for
    /// the rest
    pub fn new(name: &str, kind: CategoryKind) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            kind,
            color: "#1976d2".to_string(),
            icon: "category".to_string(),
            parent_category: None,
            budget_limit: 0.0,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Set the display color
    pub fn with_color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    /// Set the display icon
    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = icon.to_string();
        self
    }

    /// Nest under a parent category
    pub fn with_parent(mut self, parent_id: &str) -> Self {
        self.parent_category = Some(parent_id.to_string());
        self
    }

    /// Set the budget limit
    pub fn with_budget_limit(mut self, limit: f64) -> Self {
        self.budget_limit = limit;
        self
    }
}

/// Partial update for an existing category; unset fields are left alone
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<CategoryKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(rename = "parentCategory", skip_serializing_if = "Option::is_none")]
    pub parent_category: Option<String>,

    #[serde(rename = "budgetLimit", skip_serializing_if = "Option::is_none")]
    pub budget_limit: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatedCategory {
    pub category: Category,
}
