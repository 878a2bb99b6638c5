//! Shared budget fixture for report tests

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{
    Budget, BudgetMonth, Category, CategoryGroup, CategoryGroupId, CategoryId, Milliunits,
};

pub const HOUSING: &str = "Housing";
pub const FOOD: &str = "Food";

fn group_id(n: u128) -> CategoryGroupId {
    CategoryGroupId::from_uuid(Uuid::from_u128(n))
}

fn category(n: u128, group: u128, name: &str, activity: i64) -> Category {
    Category::new(
        CategoryId::from_uuid(Uuid::from_u128(n)),
        group_id(group),
        name,
        Milliunits::new(activity),
    )
}

pub fn month(year: i32, month: u32, income: i64, budgeted: i64, activity: i64) -> BudgetMonth {
    let mut m = BudgetMonth::new(NaiveDate::from_ymd_opt(year, month, 1).unwrap());
    m.income = Milliunits::new(income);
    m.budgeted = Milliunits::new(budgeted);
    m.activity = Milliunits::new(activity);
    m
}

/// Four months spanning 2023-12 to 2025-01 with two groups.
///
/// 2024 holds four visible category rows plus one deleted and one hidden
/// category that must never be reported.
pub fn fixture_budget() -> Budget {
    let mut dec = month(2023, 12, 5_000_000, 4_000_000, -3_800_000);
    dec.categories = vec![
        category(10, 1, "Rent", -1_500_000),
        category(20, 2, "Groceries", -400_000),
    ];

    let mut jan = month(2024, 1, 5_200_000, 4_100_000, -1_912_350);
    let mut old_gym = category(30, 2, "Old Gym", -50_000);
    old_gym.deleted = true;
    let mut hobby = category(40, 2, "Hidden Hobby", -20_000);
    hobby.hidden = true;
    jan.categories = vec![
        category(10, 1, "Rent", -1_500_000),
        category(20, 2, "Groceries", -412_350),
        old_gym.clone(),
        hobby,
    ];

    let mut feb = month(2024, 2, 4_800_000, 4_500_000, -1_630_000);
    let mut old_gym_feb = old_gym;
    old_gym_feb.activity = Milliunits::zero();
    feb.categories = vec![
        category(10, 1, "Rent", -1_500_000),
        category(20, 2, "Groceries", -130_000),
        old_gym_feb,
    ];

    let mut next_jan = month(2025, 1, 1_000, 0, 0);
    next_jan.categories = vec![category(10, 1, "Rent", -1_600_000)];

    Budget {
        id: "6c1b1f0e-0000-0000-0000-000000000000".into(),
        name: "Household".into(),
        category_groups: vec![
            CategoryGroup::new(group_id(1), HOUSING),
            CategoryGroup::new(group_id(2), FOOD),
        ],
        months: vec![dec, jan, feb, next_jan],
    }
}
