//! Carries out the actions a puzzle session returns.
//!
//! The session never touches the clock or the page. Every input returns a
//! list of [`Action`]s, and this module hands timer requests to a host that
//! can schedule them and celebration requests to the confetti layer. The
//! remaining actions are informational and only logged.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use leptos::prelude::*;
use log::{debug, info};
use puzzle::action::{Action, TimerRequest};

use crate::state::game::GameSession;
use crate::state::ui::UiState;

/// Side effects a session can ask for.
pub trait ActionHost {
    fn schedule(&self, request: TimerRequest);
    fn celebrate(&self, duration_ms: u32);
}

/// Route each action to `host` in order.
pub fn dispatch<H: ActionHost + ?Sized>(host: &H, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::Schedule(request) => host.schedule(request),
            Action::Celebrate { duration_ms } => host.celebrate(duration_ms),
            Action::BoardReset { generation } => debug!("puzzle: board reset (generation {})", generation.0),
            Action::Scrambled { attempts } => debug!("puzzle: scrambled after {attempts} attempt(s)"),
            Action::TileMoved { slide, moves } => {
                debug!("puzzle: tile {} -> {} (moves={moves})", slide.from, slide.to);
            }
            Action::HintAvailable => info!("puzzle: hint unlocked"),
            Action::PreviewStarted => debug!("puzzle: preview started"),
            Action::PreviewEnded => debug!("puzzle: preview ended"),
            Action::Solved { moves, assisted } => info!("puzzle: solved in {moves} moves (assisted={assisted})"),
        }
    }
}

/// Host backed by the page's reactive signals and browser timers.
#[derive(Clone, Copy)]
pub struct BrowserHost {
    pub session: RwSignal<GameSession>,
    pub ui: RwSignal<UiState>,
}

impl BrowserHost {
    /// Build from the signals the app provides as context.
    #[must_use]
    pub fn from_context() -> Self {
        Self { session: expect_context::<RwSignal<GameSession>>(), ui: expect_context::<RwSignal<UiState>>() }
    }

    /// Apply one session input and dispatch what it returns.
    pub fn run(&self, input: impl FnOnce(&mut GameSession) -> Vec<Action>) {
        let actions = self.session.try_update(input).unwrap_or_default();
        dispatch(self, actions);
    }
}

impl ActionHost for BrowserHost {
    fn schedule(&self, request: TimerRequest) {
        #[cfg(feature = "csr")]
        {
            let host = *self;
            gloo_timers::callback::Timeout::new(request.after_ms, move || {
                host.run(|session| session.on_timer(request.token, request.kind));
            })
            .forget();
        }
        #[cfg(not(feature = "csr"))]
        debug!("puzzle: no timer backend, dropping {:?}", request.kind);
    }

    fn celebrate(&self, duration_ms: u32) {
        self.ui.update(|ui| ui.start_celebration(duration_ms));
    }
}
