//! Dashboard use-case service.
//!
//! # Responsibility
//! - Fetch one principal's snapshot and summarize it.
//! - Keep the session gate independent of the data source.
//!
//! # Invariants
//! - The summarizer only runs on a snapshot fetched for a present principal.

use crate::model::nutrition::DashboardSnapshot;
use crate::provider::{ProviderError, SnapshotProvider};
use crate::session::auth::Principal;
use crate::summary::{summarize_dashboard, ProgressReport, SummaryError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for dashboard loading.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardError {
    Provider(ProviderError),
    Summary(SummaryError),
}

impl Display for DashboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Provider(err) => write!(f, "{err}"),
            Self::Summary(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DashboardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Provider(err) => Some(err),
            Self::Summary(err) => Some(err),
        }
    }
}

impl From<ProviderError> for DashboardError {
    fn from(value: ProviderError) -> Self {
        Self::Provider(value)
    }
}

impl From<SummaryError> for DashboardError {
    fn from(value: SummaryError) -> Self {
        Self::Summary(value)
    }
}

/// Snapshot plus its derived report.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDashboard {
    pub snapshot: DashboardSnapshot,
    pub report: ProgressReport,
}

/// Use-case service wrapper over a snapshot provider.
pub struct DashboardService<P: SnapshotProvider> {
    provider: P,
}

impl<P: SnapshotProvider> DashboardService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Fetches and summarizes the dashboard for `principal`.
    ///
    /// Provider and summarizer errors are returned unchanged, wrapped in
    /// `DashboardError`.
    pub fn load(&self, principal: &Principal) -> Result<LoadedDashboard, DashboardError> {
        let snapshot = self.provider.fetch_snapshot(principal).map_err(|err| {
            error!("event=dashboard_load module=service status=error stage=fetch error={err}");
            err
        })?;
        let report = summarize_dashboard(&snapshot).map_err(|err| {
            error!("event=dashboard_load module=service status=error stage=summarize error={err}");
            err
        })?;
        info!(
            "event=dashboard_load module=service status=ok calories_percent={} water_percent={} challenge_percent={}",
            report.calories_percent, report.water_percent, report.challenge_percent
        );
        Ok(LoadedDashboard { snapshot, report })
    }
}
