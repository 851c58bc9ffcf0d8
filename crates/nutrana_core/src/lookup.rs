//! Meal display lookup tables.
//!
//! Total over every input: known meal types map to fixed values, anything
//! else maps to the fallback pair.

use crate::model::meal::{MealKind, MealType};

/// Glyph shown for meal keys outside `MealType`.
pub const FALLBACK_MEAL_ICON: &str = "🍴";
/// Display name shown for meal keys outside `MealType`.
pub const FALLBACK_MEAL_NAME: &str = "Refeição";

pub fn icon_for(meal_type: MealType) -> &'static str {
    match meal_type {
        MealType::Breakfast => "🥑",
        MealType::Lunch => "🍲",
        MealType::Dinner => "🍽️",
        MealType::Snack => "🍓",
    }
}

pub fn name_for(meal_type: MealType) -> &'static str {
    match meal_type {
        MealType::Breakfast => "Café da Manhã",
        MealType::Lunch => "Almoço",
        MealType::Dinner => "Jantar",
        MealType::Snack => "Lanche",
    }
}

pub fn icon_for_kind(kind: &MealKind) -> &'static str {
    kind.meal_type().map_or(FALLBACK_MEAL_ICON, icon_for)
}

pub fn name_for_kind(kind: &MealKind) -> &'static str {
    kind.meal_type().map_or(FALLBACK_MEAL_NAME, name_for)
}

/// Icon for a raw key. Never fails.
pub fn icon_for_key(key: &str) -> &'static str {
    MealType::from_key(key).map_or(FALLBACK_MEAL_ICON, icon_for)
}

/// Display name for a raw key. Never fails.
pub fn name_for_key(key: &str) -> &'static str {
    MealType::from_key(key).map_or(FALLBACK_MEAL_NAME, name_for)
}
