//! Core domain logic for Nutrana.
//! Dashboard progress, meal lookups and session gating live here; rendering
//! and authentication providers stay outside.

pub mod config;
pub mod logging;
pub mod lookup;
pub mod model;
pub mod navigation;
pub mod provider;
pub mod service;
pub mod session;
pub mod summary;

pub use config::DisplayDefaults;
pub use logging::{default_log_level, init_logging, logging_status};
pub use lookup::{
    icon_for, icon_for_key, icon_for_kind, name_for, name_for_key, name_for_kind,
    FALLBACK_MEAL_ICON, FALLBACK_MEAL_NAME,
};
pub use model::meal::{
    IngredientPreview, MealKind, MealPlan, MealPlanError, MealTime, MealTimeError, MealType,
    PlannedMeal, DEFAULT_INGREDIENT_PREVIEW,
};
pub use model::nutrition::{
    Achievement, DailyMeal, DashboardSnapshot, Macros, NextMeal, NutritionSnapshot,
    WeeklyChallenge,
};
pub use navigation::{main_menu, LogNavigator, MenuItem, Navigator, Route};
pub use provider::{
    demo_dashboard, demo_meal_plan, MockSnapshotProvider, ProviderError, SnapshotProvider,
    StaticSnapshotProvider,
};
pub use service::dashboard_service::{DashboardError, DashboardService, LoadedDashboard};
pub use session::auth::{
    AuthChannel, AuthEvent, AuthListener, AuthStateSource, Principal, Subscription,
    SubscriptionId,
};
pub use session::gate::{
    DashboardSession, DashboardView, GateOutcome, GateState, SessionGate, SessionIdentity,
};
pub use summary::{
    challenge_percent, summarize, summarize_dashboard, MessageTier, Metric, ProgressReport,
    SummaryError,
};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
