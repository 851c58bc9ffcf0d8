//! Session gate: authentication-driven dashboard state machine.
//!
//! # Responsibility
//! - Hold the `Unauthenticated <-> Authenticated` state for one view.
//! - Redirect to the entry route on sign-out; load the dashboard on sign-in.
//!
//! # Invariants
//! - The dashboard service is never called without a principal.
//! - Each sign-out notification issues exactly one navigation request.
//! - A published view always belongs to the current authenticated identity.
//! - After teardown no further events reach the gate.

use crate::config::{non_blank, DisplayDefaults};
use crate::model::nutrition::DashboardSnapshot;
use crate::navigation::{Navigator, Route};
use crate::provider::SnapshotProvider;
use crate::service::dashboard_service::{DashboardError, DashboardService, LoadedDashboard};
use crate::session::auth::{AuthEvent, AuthStateSource, Principal, Subscription};
use crate::summary::ProgressReport;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Principal identity with display defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub uid: String,
    pub display_name: String,
    pub avatar_url: String,
}

impl SessionIdentity {
    pub fn resolve(principal: &Principal, defaults: &DisplayDefaults) -> Self {
        Self {
            uid: principal.uid.clone(),
            display_name: non_blank(principal.display_name.clone())
                .unwrap_or_else(|| defaults.display_name.clone()),
            avatar_url: non_blank(principal.avatar_url.clone())
                .unwrap_or_else(|| defaults.avatar_url.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    Unauthenticated,
    Authenticated(SessionIdentity),
}

/// Everything the dashboard screen renders for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub identity: SessionIdentity,
    pub snapshot: DashboardSnapshot,
    pub report: ProgressReport,
}

/// Result of handling one auth event.
#[derive(Debug, Clone, PartialEq)]
pub enum GateOutcome {
    /// Signed out; entry-route navigation was requested.
    Redirected,
    /// Signed in; a fresh view was published.
    Ready,
    /// Signed in, but the dashboard could not be loaded.
    Failed(DashboardError),
}

pub struct SessionGate<P: SnapshotProvider, N: Navigator> {
    service: DashboardService<P>,
    navigator: N,
    defaults: DisplayDefaults,
    state: GateState,
    view: Option<DashboardView>,
    last_outcome: Option<GateOutcome>,
}

impl<P: SnapshotProvider, N: Navigator> SessionGate<P, N> {
    pub fn new(provider: P, navigator: N, defaults: DisplayDefaults) -> Self {
        Self {
            service: DashboardService::new(provider),
            navigator,
            defaults,
            state: GateState::Unauthenticated,
            view: None,
            last_outcome: None,
        }
    }

    /// Applies one authentication-state notification.
    pub fn handle(&mut self, event: &AuthEvent) -> GateOutcome {
        let outcome = match event {
            AuthEvent::SignedOut => self.sign_out(),
            AuthEvent::SignedIn(principal) => self.sign_in(principal),
        };
        self.last_outcome = Some(outcome.clone());
        outcome
    }

    fn sign_out(&mut self) -> GateOutcome {
        self.state = GateState::Unauthenticated;
        self.view = None;
        info!("event=auth_state module=session status=ok state=unauthenticated");
        self.navigator.navigate(&Route::Home);
        GateOutcome::Redirected
    }

    fn sign_in(&mut self, principal: &Principal) -> GateOutcome {
        let identity = SessionIdentity::resolve(principal, &self.defaults);
        self.state = GateState::Authenticated(identity.clone());
        info!("event=auth_state module=session status=ok state=authenticated");

        match self.service.load(principal) {
            Ok(LoadedDashboard { snapshot, report }) => {
                self.view = Some(DashboardView {
                    identity,
                    snapshot,
                    report,
                });
                GateOutcome::Ready
            }
            Err(err) => {
                self.view = None;
                warn!("event=dashboard_view module=session status=error error={err}");
                GateOutcome::Failed(err)
            }
        }
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, GateState::Authenticated(_))
    }

    pub fn view(&self) -> Option<&DashboardView> {
        self.view.as_ref()
    }

    pub fn last_outcome(&self) -> Option<&GateOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }
}

/// A session gate bound to an auth source for the lifetime of one view.
///
/// Dropping the session (or calling `teardown`) releases the subscription
/// before the gate itself.
pub struct DashboardSession<P: SnapshotProvider + 'static, N: Navigator + 'static> {
    subscription: Option<Subscription>,
    gate: Rc<RefCell<SessionGate<P, N>>>,
}

impl<P: SnapshotProvider + 'static, N: Navigator + 'static> DashboardSession<P, N> {
    /// Subscribes `gate` to `source`. The current state is applied immediately.
    pub fn start(gate: SessionGate<P, N>, source: &impl AuthStateSource) -> Self {
        let gate = Rc::new(RefCell::new(gate));
        let weak = Rc::downgrade(&gate);
        let subscription = source.subscribe(Box::new(move |event: &AuthEvent| {
            let Some(gate) = weak.upgrade() else {
                return;
            };
            match gate.try_borrow_mut() {
                Ok(mut gate) => {
                    gate.handle(event);
                }
                Err(_) => {
                    warn!("event=auth_state module=session status=skipped reason=gate_busy")
                }
            };
        }));
        Self {
            subscription: Some(subscription),
            gate,
        }
    }

    pub fn state(&self) -> GateState {
        self.gate.borrow().state().clone()
    }

    pub fn view(&self) -> Option<DashboardView> {
        self.gate.borrow().view().cloned()
    }

    pub fn last_outcome(&self) -> Option<GateOutcome> {
        self.gate.borrow().last_outcome().cloned()
    }

    /// Runs `f` against the gate, e.g. to inspect the navigator.
    pub fn with_gate<T>(&self, f: impl FnOnce(&SessionGate<P, N>) -> T) -> T {
        f(&self.gate.borrow())
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Stops event delivery while keeping the last state readable.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            info!("event=session_detach module=session status=ok");
            subscription.unsubscribe();
        }
    }

    pub fn teardown(mut self) {
        self.detach();
    }
}
