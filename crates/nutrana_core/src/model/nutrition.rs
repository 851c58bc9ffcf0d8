//! Daily nutrition and dashboard records.
//!
//! # Responsibility
//! - Define the point-in-time snapshot consumed by the progress summarizer.
//! - Define the surrounding dashboard records (meals, achievements, challenge).
//!
//! # Invariants
//! - Goals must be strictly positive; this is checked at summarization time.
//! - Consumed values may exceed goals.

use crate::model::meal::MealKind;
use serde::{Deserialize, Serialize};

/// Macronutrient totals in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fats_grams: f64,
}

/// Next meal hint shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextMeal {
    pub name: String,
    /// Free-form display time, e.g. `12:30`.
    pub time_of_day: String,
    pub meal_type: MealKind,
}

/// One user's daily nutrition state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionSnapshot {
    pub calories_consumed: f64,
    pub calories_goal: f64,
    pub water_consumed_liters: f64,
    pub water_goal_liters: f64,
    pub macros: Macros,
    pub next_meal: NextMeal,
    pub burned_calories: f64,
}

/// Weekly challenge progress. `goal` must be positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyChallenge {
    pub title: String,
    pub progress: u32,
    pub goal: u32,
    pub days_left: u32,
}

/// One row in the "meals today" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMeal {
    pub meal_type: MealKind,
    pub name: String,
    pub calories: u32,
    pub registered: bool,
}

impl DailyMeal {
    /// `"{calories} kcal"` once registered, `"--"` before.
    pub fn calories_label(&self) -> String {
        if self.registered {
            format!("{} kcal", self.calories)
        } else {
            "--".to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub earned: bool,
}

/// Everything the dashboard needs for one authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub nutrition: NutritionSnapshot,
    #[serde(default)]
    pub meals: Vec<DailyMeal>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    pub weekly_challenge: WeeklyChallenge,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl DashboardSnapshot {
    pub fn earned_achievements(&self) -> impl Iterator<Item = &Achievement> {
        self.achievements.iter().filter(|achievement| achievement.earned)
    }
}
