//! Snapshot provider contracts and the built-in mock data source.
//!
//! # Responsibility
//! - Decouple summarization from where dashboard data comes from.
//! - Ship the demo dataset used by the dashboard and meal-plan screens.

use crate::model::meal::{MealKind, MealPlan, MealTime, MealType, PlannedMeal};
use crate::model::nutrition::{
    Achievement, DailyMeal, DashboardSnapshot, Macros, NextMeal, NutritionSnapshot,
    WeeklyChallenge,
};
use crate::session::auth::Principal;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// No snapshot exists for this principal.
    NotFound(String),
    /// Backing source could not answer.
    Unavailable(String),
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(uid) => write!(f, "no dashboard snapshot for principal: {uid}"),
            Self::Unavailable(message) => write!(f, "snapshot source unavailable: {message}"),
        }
    }
}

impl Error for ProviderError {}

/// Source of per-principal dashboard snapshots.
pub trait SnapshotProvider {
    fn fetch_snapshot(&self, principal: &Principal) -> Result<DashboardSnapshot, ProviderError>;
}

impl<P: SnapshotProvider + ?Sized> SnapshotProvider for &P {
    fn fetch_snapshot(&self, principal: &Principal) -> Result<DashboardSnapshot, ProviderError> {
        (**self).fetch_snapshot(principal)
    }
}

impl<P: SnapshotProvider + ?Sized> SnapshotProvider for Rc<P> {
    fn fetch_snapshot(&self, principal: &Principal) -> Result<DashboardSnapshot, ProviderError> {
        (**self).fetch_snapshot(principal)
    }
}

/// Returns the same demo snapshot for every principal.
#[derive(Debug, Clone, Default)]
pub struct MockSnapshotProvider;

impl SnapshotProvider for MockSnapshotProvider {
    fn fetch_snapshot(&self, _principal: &Principal) -> Result<DashboardSnapshot, ProviderError> {
        Ok(demo_dashboard())
    }
}

/// Serves one fixed snapshot, e.g. loaded from a JSON file.
#[derive(Debug, Clone)]
pub struct StaticSnapshotProvider {
    snapshot: DashboardSnapshot,
}

impl StaticSnapshotProvider {
    pub fn new(snapshot: DashboardSnapshot) -> Self {
        Self { snapshot }
    }
}

impl SnapshotProvider for StaticSnapshotProvider {
    fn fetch_snapshot(&self, _principal: &Principal) -> Result<DashboardSnapshot, ProviderError> {
        Ok(self.snapshot.clone())
    }
}

/// Dashboard demo data.
pub fn demo_dashboard() -> DashboardSnapshot {
    DashboardSnapshot {
        nutrition: NutritionSnapshot {
            calories_consumed: 1200.0,
            calories_goal: 1500.0,
            water_consumed_liters: 1.5,
            water_goal_liters: 2.0,
            macros: Macros {
                protein_grams: 80.0,
                carbs_grams: 150.0,
                fats_grams: 40.0,
            },
            next_meal: NextMeal {
                name: "Almoço".to_string(),
                time_of_day: "12:30".to_string(),
                meal_type: MealKind::from_key("main"),
            },
            burned_calories: 300.0,
        },
        meals: vec![
            daily_meal(MealType::Breakfast, "Vitamina de Banana", 320, true),
            daily_meal(MealType::Lunch, "A registrar", 0, false),
            daily_meal(MealType::Snack, "Iogurte Natural", 150, true),
            daily_meal(MealType::Dinner, "A registrar", 0, false),
        ],
        achievements: vec![
            achievement(1, "Mestre das Saladas", true),
            achievement(2, "3 dias saudáveis", true),
            achievement(3, "Meta de Água", false),
        ],
        weekly_challenge: WeeklyChallenge {
            title: "5 porções de vegetais".to_string(),
            progress: 3,
            goal: 5,
            days_left: 3,
        },
        tips: vec![
            "Beba água antes das refeições para melhor digestão".to_string(),
            "Inclua proteínas em todas as refeições".to_string(),
        ],
    }
}

/// Meal-plan demo data.
pub fn demo_meal_plan() -> MealPlan {
    MealPlan {
        today: vec![
            planned_meal(
                1,
                MealType::Breakfast,
                "Vitamina de Banana com Aveia",
                (8, 30),
                320,
                true,
                &["Banana", "Aveia", "Leite", "Mel"],
            ),
            planned_meal(
                2,
                MealType::Lunch,
                "Salada de Quinoa com Frango Grelhado",
                (12, 30),
                450,
                false,
                &["Quinoa", "Frango", "Tomate", "Pepino", "Abacate"],
            ),
            planned_meal(
                3,
                MealType::Snack,
                "Iogurte Natural com Granola",
                (16, 0),
                180,
                true,
                &["Iogurte natural", "Granola", "Mel"],
            ),
            planned_meal(
                4,
                MealType::Dinner,
                "Sopa de Legumes com Gengibre",
                (20, 0),
                280,
                false,
                &["Abóbora", "Cenoura", "Batata", "Gengibre", "Coentro"],
            ),
        ],
        upcoming: vec![planned_meal(
            5,
            MealType::Breakfast,
            "Omelete de Espinafre com Queijo Feta",
            (8, 0),
            290,
            false,
            &["Ovos", "Espinafre", "Queijo Feta", "Tomate Cereja"],
        )],
    }
}

fn daily_meal(meal_type: MealType, name: &str, calories: u32, registered: bool) -> DailyMeal {
    DailyMeal {
        meal_type: meal_type.into(),
        name: name.to_string(),
        calories,
        registered,
    }
}

fn achievement(id: u32, title: &str, earned: bool) -> Achievement {
    Achievement {
        id,
        title: title.to_string(),
        earned,
    }
}

fn planned_meal(
    id: u32,
    meal_type: MealType,
    name: &str,
    (hour, minute): (u8, u8),
    calories: u32,
    registered: bool,
    ingredients: &[&str],
) -> PlannedMeal {
    PlannedMeal {
        id,
        meal_type: meal_type.into(),
        name: name.to_string(),
        // Demo times are literals in range.
        time: MealTime::new(hour, minute).unwrap_or(MealTime::MIDNIGHT),
        calories,
        registered,
        ingredients: ingredients.iter().map(|value| value.to_string()).collect(),
    }
}
