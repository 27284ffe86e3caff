//! Root application module.
//!
//! Contains the main App component and the AppContext shared with the
//! components below it.

use leptos::prelude::*;
use tracing::info;

use crate::components::Terminal;
use crate::components::terminal::{Timers, new_timers};
use crate::config::APP_NAME;
use crate::core::TerminalSession;

/// Global application context provided to all components.
///
/// This struct is `Copy` because both fields are arena handles, which are
/// cheap to copy.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The one terminal session of this page.
    pub session: RwSignal<TerminalSession>,

    /// Timer handles of the running demos.
    pub timers: Timers,
}

impl AppContext {
    /// Creates a context around a freshly greeted session.
    pub fn new() -> Self {
        let mut session = TerminalSession::new();
        session.greet();
        Self {
            session: RwSignal::new(session),
            timers: new_timers(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    info!("{} started", APP_NAME);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    padding: 2rem;
                    background: #000;
                    color: #ff5555;
                    font-family: 'Courier New', monospace;
                ">
                    <h1>"Something went wrong"</h1>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <Terminal />
        </ErrorBoundary>
    }
}
