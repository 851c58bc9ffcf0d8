//! Daily progress summarizer.
//!
//! # Responsibility
//! - Turn a nutrition snapshot and weekly challenge into display percentages.
//! - Select the motivational message tier from calorie progress.
//!
//! # Invariants
//! - Calorie and water percentages are clamped to `0..=100`.
//! - Challenge percentage is not clamped; it may exceed 100.
//! - Non-positive or non-finite goals are rejected before any division.
//! - Non-finite consumed values are rejected the same way.
//! - Output depends only on input; nothing is cached.

use crate::model::nutrition::{DashboardSnapshot, NutritionSnapshot, WeeklyChallenge};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lower bound (inclusive) of the "almost there" tier.
pub const ALMOST_THERE_THRESHOLD: u32 = 90;
/// Lower bound (inclusive) of the "good job" tier.
pub const GOOD_JOB_THRESHOLD: u32 = 70;

const ALMOST_THERE_MESSAGE: &str = "Excelente! Você está quase lá!";
const GOOD_JOB_MESSAGE: &str = "Bom trabalho! Continue assim!";

/// Goal-bearing metric, used to label `InvalidGoal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Calories,
    Water,
    Challenge,
}

impl Metric {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Water => "water",
            Self::Challenge => "challenge",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryError {
    InvalidGoal { metric: Metric, value: f64 },
    InvalidValue { metric: Metric, value: f64 },
}

impl Display for SummaryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidGoal { metric, value } => write!(
                f,
                "{} goal must be a positive number, got {value}",
                metric.as_str()
            ),
            Self::InvalidValue { metric, value } => write!(
                f,
                "{} value must be a finite number, got {value}",
                metric.as_str()
            ),
        }
    }
}

impl Error for SummaryError {}

/// Motivational message tier selected from calorie progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tier", rename_all = "snake_case")]
pub enum MessageTier {
    AlmostThere,
    GoodJob,
    KeepGoing { remaining_calories: f64 },
}

impl MessageTier {
    pub fn select(calories_percent: u32, calories_goal: f64, calories_consumed: f64) -> Self {
        if calories_percent >= ALMOST_THERE_THRESHOLD {
            Self::AlmostThere
        } else if calories_percent >= GOOD_JOB_THRESHOLD {
            Self::GoodJob
        } else {
            Self::KeepGoing {
                remaining_calories: calories_goal - calories_consumed,
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::AlmostThere => ALMOST_THERE_MESSAGE.to_string(),
            Self::GoodJob => GOOD_JOB_MESSAGE.to_string(),
            Self::KeepGoing { remaining_calories } => format!(
                "Você consegue! Faltam apenas {remaining_calories} kcal para sua meta!"
            ),
        }
    }
}

/// Derived dashboard metrics. Recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub calories_percent: u32,
    pub water_percent: u32,
    pub challenge_percent: u32,
    pub tier: MessageTier,
    pub motivational_message: String,
}

/// Summarizes one snapshot against its weekly challenge.
///
/// # Errors
/// - `InvalidGoal` when the calorie, water or challenge goal is not positive.
/// - `InvalidValue` when consumed calories or water is NaN or infinite.
pub fn summarize(
    nutrition: &NutritionSnapshot,
    challenge: &WeeklyChallenge,
) -> Result<ProgressReport, SummaryError> {
    let calories_percent = clamped_percent(
        Metric::Calories,
        nutrition.calories_consumed,
        nutrition.calories_goal,
    )?;
    let water_percent = clamped_percent(
        Metric::Water,
        nutrition.water_consumed_liters,
        nutrition.water_goal_liters,
    )?;
    let challenge_percent = challenge_percent(challenge)?;

    let tier = MessageTier::select(
        calories_percent,
        nutrition.calories_goal,
        nutrition.calories_consumed,
    );
    let motivational_message = tier.message();

    Ok(ProgressReport {
        calories_percent,
        water_percent,
        challenge_percent,
        tier,
        motivational_message,
    })
}

/// Convenience wrapper over `summarize` for a full dashboard snapshot.
pub fn summarize_dashboard(snapshot: &DashboardSnapshot) -> Result<ProgressReport, SummaryError> {
    summarize(&snapshot.nutrition, &snapshot.weekly_challenge)
}

/// Unclamped challenge completion percentage.
pub fn challenge_percent(challenge: &WeeklyChallenge) -> Result<u32, SummaryError> {
    let goal = f64::from(challenge.goal);
    let ratio = ratio_percent(Metric::Challenge, f64::from(challenge.progress), goal)?;
    Ok(saturating_u32(ratio))
}

fn clamped_percent(metric: Metric, consumed: f64, goal: f64) -> Result<u32, SummaryError> {
    let ratio = ratio_percent(metric, consumed, goal)?;
    Ok(saturating_u32(ratio.min(100.0)))
}

fn ratio_percent(metric: Metric, value: f64, goal: f64) -> Result<f64, SummaryError> {
    if !(goal.is_finite() && goal > 0.0) {
        return Err(SummaryError::InvalidGoal {
            metric,
            value: goal,
        });
    }
    if !value.is_finite() {
        return Err(SummaryError::InvalidValue { metric, value });
    }
    Ok((value / goal * 100.0).round())
}

// Negative consumption is not validated upstream; it floors at zero here.
fn saturating_u32(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        value as u32
    }
}
