//! Root application module.
//!
//! Holds the [`AppContext`] shared by every component and the [`App`] root
//! with its error boundary.

use leptos::prelude::*;
use webterm_core::models::ViewMode;
use webterm_core::{Session, ShellConfig};

use crate::components::Shell;
use crate::config::MAX_COMMAND_HISTORY;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// The [`Session`] is the single source of truth for the filesystem, the
/// working directory, the editor and the output log. The terminal and the
/// desktop both read and mutate it through this signal.
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: RwSignal<Session>,
    /// Submitted lines for up/down navigation.
    pub command_history: RwSignal<Vec<String>>,
    /// Current position in `command_history` while navigating.
    pub history_index: RwSignal<Option<usize>>,
}

impl AppContext {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            session: RwSignal::new(Session::new(config)),
            command_history: RwSignal::new(Vec::new()),
            history_index: RwSignal::new(None),
        }
    }

    /// Prompt without the trailing `$ `.
    pub fn prompt(&self) -> String {
        self.session.with(|s| s.prompt())
    }

    pub fn view_mode(&self) -> ViewMode {
        self.session.with(|s| s.view_mode())
    }

    pub fn set_view_mode(&self, view: ViewMode) {
        self.session.update(|s| s.set_view_mode(view));
    }

    pub fn is_editing(&self) -> bool {
        self.session.with(|s| s.is_editing())
    }

    /// Run one command line against the session.
    pub fn submit(&self, input: &str) {
        self.add_to_command_history(input);
        self.session.update(|s| {
            s.submit(input);
        });
    }

    fn add_to_command_history(&self, cmd: &str) {
        let cmd = cmd.trim();
        if !cmd.is_empty() {
            self.command_history.update(|h| {
                if h.last().map(|s| s.as_str()) != Some(cmd) {
                    h.push(cmd.to_string());
                    if h.len() > MAX_COMMAND_HISTORY {
                        h.remove(0);
                    }
                }
            });
        }
        self.history_index.set(None);
    }

    /// Step through submitted lines. Negative is older, positive is newer.
    pub fn navigate_history(&self, direction: i32) -> Option<String> {
        let history = self.command_history.get();
        if history.is_empty() {
            return None;
        }

        let current_index = self.history_index.get();
        let new_index = match current_index {
            None if direction < 0 => Some(history.len() - 1),
            Some(i) if direction < 0 && i > 0 => Some(i - 1),
            Some(i) if direction > 0 && i < history.len() - 1 => Some(i + 1),
            Some(_) if direction > 0 => None,
            _ => current_index,
        };

        self.history_index.set(new_index);
        new_index.map(|i| history[i].clone())
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::default();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    background: #0a0e27;
                    color: #e0e0e0;
                    font-family: 'Courier New', monospace;
                ">
                    <h1 style="color: #ff6b6b;">"Something went wrong"</h1>
                    <ul style="color: #ff6b6b; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Shell />
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn with_ctx(f: impl FnOnce(AppContext)) {
        let owner = Owner::new();
        owner.with(|| f(AppContext::default()));
    }

    #[test]
    fn test_submit_records_history() {
        with_ctx(|ctx| {
            ctx.submit("cd home");
            ctx.submit("cd home");
            ctx.submit("  ");
            ctx.submit("pwd");
            assert_eq!(ctx.command_history.get(), vec!["cd home", "pwd"]);
            assert_eq!(ctx.session.with(|s| s.current_dir().to_string()), "/home/");
        });
    }

    #[test]
    fn test_navigate_history() {
        with_ctx(|ctx| {
            assert_eq!(ctx.navigate_history(-1), None);
            ctx.submit("ls");
            ctx.submit("pwd");
            assert_eq!(ctx.navigate_history(-1).as_deref(), Some("pwd"));
            assert_eq!(ctx.navigate_history(-1).as_deref(), Some("ls"));
            assert_eq!(ctx.navigate_history(-1).as_deref(), Some("ls"));
            assert_eq!(ctx.navigate_history(1).as_deref(), Some("pwd"));
            assert_eq!(ctx.navigate_history(1), None);
        });
    }

    #[test]
    fn test_startx_switches_view() {
        with_ctx(|ctx| {
            assert_eq!(ctx.view_mode(), ViewMode::Terminal);
            ctx.submit("startx");
            assert_eq!(ctx.view_mode(), ViewMode::Desktop);
            ctx.set_view_mode(ViewMode::Terminal);
            assert_eq!(ctx.view_mode(), ViewMode::Terminal);
        });
    }
}
