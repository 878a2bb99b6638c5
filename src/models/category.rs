//! Category and CategoryGroup models
//!
//! Categories reference their group by ID. The per-month snapshot of a
//! category carries that month's budgeted and activity figures.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryGroupId, CategoryId};
use super::money::Milliunits;

/// A group of related categories (e.g., "Housing", "Everyday Expenses")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// Unique identifier
    pub id: CategoryGroupId,

    /// Group name
    pub name: String,

    /// Whether this group is hidden in the budget view
    #[serde(default)]
    pub hidden: bool,

    /// Whether this group has been deleted
    #[serde(default)]
    pub deleted: bool,
}

impl CategoryGroup {
    /// Create a visible, non-deleted group
    pub fn new(id: CategoryGroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hidden: false,
            deleted: false,
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A category as it stood in one budget month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// The group this category belongs to
    pub category_group_id: CategoryGroupId,

    /// Category name
    pub name: String,

    /// Amount assigned this month
    #[serde(default)]
    pub budgeted: Milliunits,

    /// Net spending or inflow this month
    #[serde(default)]
    pub activity: Milliunits,

    /// Whether this category is hidden
    #[serde(default)]
    pub hidden: bool,

    /// Whether this category has been deleted
    #[serde(default)]
    pub deleted: bool,
}

impl Category {
    /// Create a visible, non-deleted category with the given activity
    pub fn new(
        id: CategoryId,
        category_group_id: CategoryGroupId,
        name: impl Into<String>,
        activity: Milliunits,
    ) -> Self {
        Self {
            id,
            category_group_id,
            name: name.into(),
            budgeted: Milliunits::zero(),
            activity,
            hidden: false,
            deleted: false,
        }
    }

    /// Whether the category belongs in a report
    pub fn is_visible(&self) -> bool {
        !self.deleted && !self.hidden
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn group_id() -> CategoryGroupId {
        CategoryGroupId::from_uuid(Uuid::from_u128(1))
    }

    fn category_id() -> CategoryId {
        CategoryId::from_uuid(Uuid::from_u128(2))
    }

    #[test]
    fn test_visibility() {
        let mut category = Category::new(category_id(), group_id(), "Rent", Milliunits::new(-1));
        assert!(category.is_visible());

        category.hidden = true;
        assert!(!category.is_visible());

        category.hidden = false;
        category.deleted = true;
        assert!(!category.is_visible());
    }

    #[test]
    fn test_deserialize_api_category() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000002",
            "category_group_id": "00000000-0000-0000-0000-000000000001",
            "category_group_name": "Housing",
            "name": "Rent",
            "hidden": false,
            "original_category_group_id": null,
            "note": null,
            "budgeted": 1500000,
            "activity": -1450000,
            "balance": 50000,
            "goal_type": null,
            "deleted": false
        }"#;

        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, category_id());
        assert_eq!(category.category_group_id, group_id());
        assert_eq!(category.name, "Rent");
        assert_eq!(category.budgeted.milliunits(), 1_500_000);
        assert_eq!(category.activity.milliunits(), -1_450_000);
        assert!(category.is_visible());
    }

    #[test]
    fn test_group_flags_default_to_false() {
        let json = r#"{"id": "00000000-0000-0000-0000-000000000001", "name": "Housing"}"#;
        let group: CategoryGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group, CategoryGroup::new(group_id(), "Housing"));
        assert_eq!(group.to_string(), "Housing");
    }
}
