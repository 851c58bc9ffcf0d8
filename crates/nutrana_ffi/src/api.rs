//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose dashboard, meal-plan and lookup use-cases to Dart via FRB.
//! - Fold core errors into plain envelopes the UI can render.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Summaries are recomputed per call; nothing is cached here.

use nutrana_core::{
    core_version as core_version_inner, demo_dashboard, demo_meal_plan, icon_for_key,
    icon_for_kind, init_logging as init_logging_inner, main_menu, name_for_key, name_for_kind,
    ping as ping_inner, summarize_dashboard, DashboardService, DashboardSnapshot, DisplayDefaults,
    MockSnapshotProvider, PlannedMeal, Principal, ProgressReport, SessionIdentity,
    DEFAULT_INGREDIENT_PREVIEW,
};
use log::warn;
use std::sync::Mutex;

static MEAL_PLAN: Mutex<Option<nutrana_core::MealPlan>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rotated logs are written.
///
/// # FFI contract
/// - Sync call; may create the log directory.
/// - Idempotent for the same `level + log_dir`.
/// - Reconfiguration with a different level or directory returns an error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Dashboard payload for one signed-in user.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummaryResponse {
    pub ok: bool,
    pub display_name: String,
    pub avatar_url: String,
    pub calories_percent: u32,
    pub water_percent: u32,
    pub challenge_percent: u32,
    pub motivational_message: String,
    pub meals: Vec<DashboardMealItem>,
    /// Error text when `ok == false`.
    pub message: String,
}

impl DashboardSummaryResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            display_name: String::new(),
            avatar_url: String::new(),
            calories_percent: 0,
            water_percent: 0,
            challenge_percent: 0,
            motivational_message: String::new(),
            meals: Vec::new(),
            message: message.into(),
        }
    }

    fn success(
        identity: SessionIdentity,
        snapshot: &DashboardSnapshot,
        report: ProgressReport,
    ) -> Self {
        Self {
            ok: true,
            display_name: identity.display_name,
            avatar_url: identity.avatar_url,
            calories_percent: report.calories_percent,
            water_percent: report.water_percent,
            challenge_percent: report.challenge_percent,
            motivational_message: report.motivational_message,
            meals: snapshot
                .meals
                .iter()
                .map(|meal| DashboardMealItem {
                    icon: icon_for_kind(&meal.meal_type).to_string(),
                    type_name: name_for_kind(&meal.meal_type).to_string(),
                    name: meal.name.clone(),
                    calories_label: meal.calories_label(),
                })
                .collect(),
            message: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardMealItem {
    pub icon: String,
    pub type_name: String,
    pub name: String,
    pub calories_label: String,
}

/// Meal-plan card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealCardItem {
    pub id: u32,
    pub icon: String,
    pub type_name: String,
    pub name: String,
    pub time: String,
    pub calories: u32,
    pub registered: bool,
    pub ingredients: Vec<String>,
    /// Count for the `+N` badge; zero hides it.
    pub hidden_ingredients: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealPlanResponse {
    pub today: Vec<MealCardItem>,
    pub upcoming: Vec<MealCardItem>,
    pub registered_calories: u32,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub path: String,
    pub label: String,
}

/// Summarizes the demo dashboard for the signed-in principal.
///
/// Blank `display_name`/`avatar_url` fall back to the configured defaults.
///
/// # FFI contract
/// - Sync call, in-memory computation.
/// - Never panics.
/// - `ok == false` with `message` set for blank `uid` or load failures.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_summary(
    uid: String,
    display_name: Option<String>,
    avatar_url: Option<String>,
) -> DashboardSummaryResponse {
    let uid = uid.trim().to_string();
    if uid.is_empty() {
        return DashboardSummaryResponse::failure("dashboard_summary failed: uid is required");
    }
    let principal = Principal {
        uid,
        display_name,
        avatar_url,
    };
    let identity = SessionIdentity::resolve(&principal, &DisplayDefaults::from_env());
    match DashboardService::new(MockSnapshotProvider).load(&principal) {
        Ok(loaded) => DashboardSummaryResponse::success(identity, &loaded.snapshot, loaded.report),
        Err(err) => DashboardSummaryResponse::failure(format!("dashboard_summary failed: {err}")),
    }
}

/// Summarizes a caller-supplied dashboard snapshot given as JSON.
///
/// # FFI contract
/// - Sync call, in-memory computation.
/// - Never panics.
/// - Malformed JSON, invalid goals and non-finite values yield `ok == false`.
#[flutter_rust_bridge::frb(sync)]
pub fn summarize_snapshot_json(snapshot_json: String) -> DashboardSummaryResponse {
    let snapshot = match serde_json::from_str::<DashboardSnapshot>(snapshot_json.as_str()) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            return DashboardSummaryResponse::failure(format!(
                "summarize_snapshot_json failed: invalid snapshot: {err}"
            ))
        }
    };
    let defaults = DisplayDefaults::from_env();
    let identity = SessionIdentity {
        uid: String::new(),
        display_name: defaults.display_name,
        avatar_url: defaults.avatar_url,
    };
    match summarize_dashboard(&snapshot) {
        Ok(report) => DashboardSummaryResponse::success(identity, &snapshot, report),
        Err(err) => {
            DashboardSummaryResponse::failure(format!("summarize_snapshot_json failed: {err}"))
        }
    }
}

/// Returns the meal plan for the current process session.
///
/// # FFI contract
/// - Sync call; takes the process-wide meal-plan lock briefly.
/// - Never panics; a poisoned lock is recovered.
/// - Cards show at most three ingredients plus `hidden_ingredients`.
#[flutter_rust_bridge::frb(sync)]
pub fn meal_plan() -> MealPlanResponse {
    with_meal_plan(|plan| MealPlanResponse {
        today: plan.today.iter().map(to_meal_card).collect(),
        upcoming: plan.upcoming.iter().map(to_meal_card).collect(),
        registered_calories: plan.registered_calories(),
    })
}

/// Registers one of today's meals.
///
/// # FFI contract
/// - Sync call; takes the process-wide meal-plan lock briefly.
/// - Never panics.
/// - `ok == false` for unknown or already-registered meal ids.
#[flutter_rust_bridge::frb(sync)]
pub fn register_meal(meal_id: u32) -> ActionResponse {
    with_meal_plan(|plan| match plan.register(meal_id) {
        Ok(meal) => ActionResponse {
            ok: true,
            message: format!("Meal {} registered.", meal.id),
        },
        Err(err) => ActionResponse {
            ok: false,
            message: format!("register_meal failed: {err}"),
        },
    })
}

/// Icon glyph for a raw meal type key.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; unknown keys return the fallback glyph.
#[flutter_rust_bridge::frb(sync)]
pub fn meal_icon(meal_type: String) -> String {
    icon_for_key(meal_type.as_str()).to_string()
}

/// Display name for a raw meal type key.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; unknown keys return the fallback name.
#[flutter_rust_bridge::frb(sync)]
pub fn meal_type_name(meal_type: String) -> String {
    name_for_key(meal_type.as_str()).to_string()
}

/// Dashboard menu entries in display order.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; always returns the six menu entries.
#[flutter_rust_bridge::frb(sync)]
pub fn menu_entries() -> Vec<MenuEntry> {
    main_menu()
        .iter()
        .map(|item| MenuEntry {
            path: item.route.path(),
            label: item.label.to_string(),
        })
        .collect()
}

/// Tips shown on the dashboard.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn daily_tips() -> Vec<String> {
    demo_dashboard().tips
}

fn with_meal_plan<T>(f: impl FnOnce(&mut nutrana_core::MealPlan) -> T) -> T {
    // A poisoned lock still holds a structurally valid plan.
    let mut guard = match MEAL_PLAN.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("event=meal_plan_lock module=ffi status=recovered");
            poisoned.into_inner()
        }
    };
    let plan = guard.get_or_insert_with(demo_meal_plan);
    f(plan)
}

fn to_meal_card(meal: &PlannedMeal) -> MealCardItem {
    let preview = meal.ingredient_preview(DEFAULT_INGREDIENT_PREVIEW);
    MealCardItem {
        id: meal.id,
        icon: icon_for_kind(&meal.meal_type).to_string(),
        type_name: name_for_kind(&meal.meal_type).to_string(),
        name: meal.name.clone(),
        time: meal.time.to_string(),
        calories: meal.calories,
        registered: meal.registered,
        ingredients: preview.shown.to_vec(),
        hidden_ingredients: u32::try_from(preview.overflow).unwrap_or(u32::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, dashboard_summary, init_logging, meal_icon, meal_plan, meal_type_name,
        menu_entries, ping, register_meal, summarize_snapshot_json,
    };
    use nutrana_core::demo_dashboard;

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
    }

    #[test]
    fn dashboard_summary_reports_demo_percentages() {
        let response = dashboard_summary("u-1".to_string(), Some("Ana".to_string()), None);
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.display_name, "Ana");
        assert!(!response.avatar_url.is_empty());
        assert_eq!(response.calories_percent, 80);
        assert_eq!(response.water_percent, 75);
        assert_eq!(response.challenge_percent, 60);
        assert_eq!(response.meals.len(), 4);
        assert_eq!(response.meals[1].calories_label, "--");
    }

    #[test]
    fn dashboard_summary_requires_uid() {
        let response = dashboard_summary("  ".to_string(), None, None);
        assert!(!response.ok);
        assert!(response.message.contains("uid"));
    }

    #[test]
    fn summarize_snapshot_json_rejects_malformed_input() {
        let response = summarize_snapshot_json("{not json".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("invalid snapshot"));
    }

    #[test]
    fn summarize_snapshot_json_reports_invalid_goal() {
        let mut snapshot = demo_dashboard();
        snapshot.nutrition.water_goal_liters = 0.0;
        let json = serde_json::to_string(&snapshot).expect("serialize snapshot");
        let response = summarize_snapshot_json(json);
        assert!(!response.ok);
        assert!(response.message.contains("water goal"));
    }

    #[test]
    fn register_meal_updates_shared_plan() {
        let before = meal_plan();
        let target = before
            .today
            .iter()
            .find(|meal| meal.id == 4)
            .expect("dinner card");
        assert!(!target.registered);
        assert_eq!(target.hidden_ingredients, 2);

        let response = register_meal(4);
        assert!(response.ok, "{}", response.message);
        let after = meal_plan();
        assert!(after.today.iter().any(|meal| meal.id == 4 && meal.registered));
        assert_eq!(after.registered_calories, before.registered_calories + 280);

        let repeated = register_meal(4);
        assert!(!repeated.ok);
    }

    #[test]
    fn lookups_fall_back_for_unknown_keys() {
        assert_eq!(meal_icon("lunch".to_string()), "🍲");
        assert_eq!(meal_icon("brunch".to_string()), "🍴");
        assert_eq!(meal_type_name("brunch".to_string()), "Refeição");
    }

    #[test]
    fn menu_entries_expose_paths() {
        let entries = menu_entries();
        assert_eq!(entries[0].path, "/dashboard");
        assert_eq!(entries[1].label, "Refeições");
    }
}
