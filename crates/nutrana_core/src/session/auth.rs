//! Authentication-state notification channel.
//!
//! # Responsibility
//! - Define the event shape delivered by the authentication collaborator.
//! - Provide an in-process, single-threaded channel with scoped subscriptions.
//!
//! # Invariants
//! - A new subscriber immediately receives the current state.
//! - Dropping a `Subscription` stops delivery to its listener.
//! - A listener may unsubscribe itself (or others) while an event is delivered.
//! - Events published from inside a callback are queued; every listener sees
//!   every event in publish order, one callback at a time.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use uuid::Uuid;

/// Authenticated identity as delivered by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub uid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Principal {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            display_name: None,
            avatar_url: None,
        }
    }
}

/// One authentication-state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AuthEvent {
    SignedIn(Principal),
    SignedOut,
}

impl AuthEvent {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }

    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Self::SignedIn(principal) => Some(principal),
            Self::SignedOut => None,
        }
    }
}

pub type SubscriptionId = Uuid;

/// Callback invoked for each delivered event.
pub type AuthListener = Box<dyn FnMut(&AuthEvent)>;

/// Push-based source of authentication state.
pub trait AuthStateSource {
    /// Registers `listener` and replays the current state to it.
    fn subscribe(&self, listener: AuthListener) -> Subscription;
}

/// Scoped subscription handle. Unsubscribes on drop.
pub struct Subscription {
    id: SubscriptionId,
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(id: SubscriptionId, cancel: impl FnOnce() + 'static) -> Self {
        Self {
            id,
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Explicit teardown; same effect as dropping the handle.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

type SharedListener = Rc<RefCell<AuthListener>>;

struct ChannelState {
    current: AuthEvent,
    listeners: Vec<(SubscriptionId, SharedListener)>,
    pending: VecDeque<AuthEvent>,
    delivering: bool,
}

impl ChannelState {
    fn contains(&self, id: SubscriptionId) -> bool {
        self.listeners.iter().any(|(entry_id, _)| *entry_id == id)
    }
}

/// In-process auth channel. Starts signed out.
pub struct AuthChannel {
    state: Rc<RefCell<ChannelState>>,
}

impl Default for AuthChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthChannel {
    pub fn new() -> Self {
        Self::with_state(AuthEvent::SignedOut)
    }

    pub fn with_state(current: AuthEvent) -> Self {
        Self {
            state: Rc::new(RefCell::new(ChannelState {
                current,
                listeners: Vec::new(),
                pending: VecDeque::new(),
                delivering: false,
            })),
        }
    }

    /// Records `event` as current and delivers it to every subscriber.
    ///
    /// Called from inside a callback, the event is queued and delivered by
    /// the outermost call once the running round completes.
    pub fn publish(&self, event: AuthEvent) {
        {
            let mut state = self.state.borrow_mut();
            state.current = event.clone();
            state.pending.push_back(event);
            if state.delivering {
                debug!(
                    "event=auth_publish module=session status=queued pending={}",
                    state.pending.len()
                );
                return;
            }
            state.delivering = true;
        }
        self.drain();
    }

    /// Delivers queued events in FIFO order until the queue is empty.
    fn drain(&self) {
        loop {
            let (event, targets) = {
                let mut state = self.state.borrow_mut();
                match state.pending.pop_front() {
                    Some(event) => (event, state.listeners.clone()),
                    None => {
                        state.delivering = false;
                        return;
                    }
                }
            };
            debug!(
                "event=auth_publish module=session status=ok authenticated={} listeners={}",
                event.is_authenticated(),
                targets.len()
            );

            for (id, listener) in targets {
                // Skip listeners dropped by an earlier callback in this round.
                if !self.state.borrow().contains(id) {
                    continue;
                }
                deliver(id, &listener, &event);
            }
        }
    }

    pub fn current(&self) -> AuthEvent {
        self.state.borrow().current.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

impl AuthStateSource for AuthChannel {
    fn subscribe(&self, listener: AuthListener) -> Subscription {
        let id = Uuid::new_v4();
        let listener: SharedListener = Rc::new(RefCell::new(listener));
        let (current, outermost) = {
            let mut state = self.state.borrow_mut();
            state.listeners.push((id, Rc::clone(&listener)));
            let outermost = !state.delivering;
            state.delivering = true;
            (state.current.clone(), outermost)
        };
        deliver(id, &listener, &current);
        // Events published by the replay callback are queued behind it.
        if outermost {
            self.drain();
        }

        let weak: Weak<RefCell<ChannelState>> = Rc::downgrade(&self.state);
        Subscription::new(id, move || {
            if let Some(state) = weak.upgrade() {
                state
                    .borrow_mut()
                    .listeners
                    .retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }
}

fn deliver(id: SubscriptionId, listener: &SharedListener, event: &AuthEvent) {
    match listener.try_borrow_mut() {
        Ok(mut callback) => (&mut **callback)(event),
        Err(_) => warn!(
            "event=auth_deliver module=session status=skipped reason=reentrant subscription={id}"
        ),
    }
}
