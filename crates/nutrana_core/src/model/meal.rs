//! Meal domain model.
//!
//! # Responsibility
//! - Define the closed `MealType` set and the open `MealKind` key wrapper.
//! - Define planned meals and the meal plan with its registration flow.
//!
//! # Invariants
//! - `MealKind` always round-trips the raw key it was built from.
//! - `MealTime` only holds valid 24-hour `HH:MM` values.
//! - Registration is one-way: a registered meal cannot be registered again.

use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};

static MEAL_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").expect("valid meal time regex"));

/// Number of ingredients shown on a meal card before the `+N` badge.
pub const DEFAULT_INGREDIENT_PREVIEW: usize = 3;

/// Closed set of meal slots known to the lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// All meal types in daily order.
    pub const ALL: [MealType; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Stable lowercase key used in payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    /// Parses an exact lowercase key. Returns `None` for anything else.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "breakfast" => Some(Self::Breakfast),
            "lunch" => Some(Self::Lunch),
            "dinner" => Some(Self::Dinner),
            "snack" => Some(Self::Snack),
            _ => None,
        }
    }
}

/// Meal type as carried by records: either a known type or the raw key.
///
/// Upstream data is loosely typed (the mock dashboard uses `"main"`), so
/// unknown keys are preserved instead of rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MealKind {
    Known(MealType),
    Unrecognized(String),
}

impl MealKind {
    /// Builds a kind from a raw key without failing.
    pub fn from_key(key: &str) -> Self {
        match MealType::from_key(key) {
            Some(meal_type) => Self::Known(meal_type),
            None => Self::Unrecognized(key.to_string()),
        }
    }

    /// Returns the raw key.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(meal_type) => meal_type.as_str(),
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }

    pub fn meal_type(&self) -> Option<MealType> {
        match self {
            Self::Known(meal_type) => Some(*meal_type),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<MealType> for MealKind {
    fn from(value: MealType) -> Self {
        Self::Known(value)
    }
}

impl Display for MealKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MealKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MealKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_key(raw.as_str()))
    }
}

/// Validated 24-hour wall-clock time (`HH:MM`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MealTime {
    hour: u8,
    minute: u8,
}

impl MealTime {
    pub const MIDNIGHT: MealTime = MealTime { hour: 0, minute: 0 };

    pub fn new(hour: u8, minute: u8) -> Result<Self, MealTimeError> {
        if hour > 23 || minute > 59 {
            return Err(MealTimeError::OutOfRange { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// Parses `HH:MM` with zero-padded fields.
    pub fn parse(value: &str) -> Result<Self, MealTimeError> {
        let trimmed = value.trim();
        let captures = MEAL_TIME_RE
            .captures(trimmed)
            .ok_or_else(|| MealTimeError::InvalidFormat(trimmed.to_string()))?;
        let hour = captures[1]
            .parse::<u8>()
            .map_err(|_| MealTimeError::InvalidFormat(trimmed.to_string()))?;
        let minute = captures[2]
            .parse::<u8>()
            .map_err(|_| MealTimeError::InvalidFormat(trimmed.to_string()))?;
        Self::new(hour, minute)
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }
}

impl Display for MealTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for MealTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MealTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw.as_str()).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealTimeError {
    InvalidFormat(String),
    OutOfRange { hour: u8, minute: u8 },
}

impl Display for MealTimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(value) => {
                write!(f, "meal time must be HH:MM (24h), got `{value}`")
            }
            Self::OutOfRange { hour, minute } => {
                write!(f, "meal time out of range: {hour}:{minute}")
            }
        }
    }
}

impl Error for MealTimeError {}

/// First ingredients of a meal card plus how many were left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientPreview<'a> {
    pub shown: &'a [String],
    pub overflow: usize,
}

/// One meal on the meal-plan screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedMeal {
    pub id: u32,
    pub meal_type: MealKind,
    pub name: String,
    pub time: MealTime,
    pub calories: u32,
    pub registered: bool,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl PlannedMeal {
    /// Splits ingredients into the first `limit` entries and the overflow count.
    pub fn ingredient_preview(&self, limit: usize) -> IngredientPreview<'_> {
        let shown_len = self.ingredients.len().min(limit);
        IngredientPreview {
            shown: &self.ingredients[..shown_len],
            overflow: self.ingredients.len() - shown_len,
        }
    }
}

/// Today's and upcoming planned meals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    pub today: Vec<PlannedMeal>,
    #[serde(default)]
    pub upcoming: Vec<PlannedMeal>,
}

impl MealPlan {
    /// Marks one of today's meals as registered.
    ///
    /// # Errors
    /// - `MealNotFound` when `id` is not among today's meals.
    /// - `AlreadyRegistered` when the meal was registered before.
    pub fn register(&mut self, id: u32) -> Result<&PlannedMeal, MealPlanError> {
        let meal = self
            .today
            .iter_mut()
            .find(|meal| meal.id == id)
            .ok_or(MealPlanError::MealNotFound(id))?;
        if meal.registered {
            return Err(MealPlanError::AlreadyRegistered(id));
        }
        meal.registered = true;
        info!(
            "event=meal_registered module=meal_plan status=ok meal_id={} calories={}",
            id, meal.calories
        );
        Ok(meal)
    }

    pub fn find(&self, id: u32) -> Option<&PlannedMeal> {
        self.today
            .iter()
            .chain(self.upcoming.iter())
            .find(|meal| meal.id == id)
    }

    /// Sum of calories for today's registered meals.
    pub fn registered_calories(&self) -> u32 {
        self.today
            .iter()
            .filter(|meal| meal.registered)
            .map(|meal| meal.calories)
            .sum()
    }

    /// Sum of calories for all of today's meals.
    pub fn planned_calories(&self) -> u32 {
        self.today.iter().map(|meal| meal.calories).sum()
    }

    /// Whether the upcoming section has anything to show.
    pub fn has_upcoming(&self) -> bool {
        !self.upcoming.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealPlanError {
    MealNotFound(u32),
    AlreadyRegistered(u32),
}

impl Display for MealPlanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MealNotFound(id) => write!(f, "meal not found in today's plan: {id}"),
            Self::AlreadyRegistered(id) => write!(f, "meal already registered: {id}"),
        }
    }
}

impl Error for MealPlanError {}
