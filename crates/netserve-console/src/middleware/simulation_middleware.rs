//! Simulation Middleware
//!
//! Stands in for the backend the console would talk to:
//! - Login: checks credentials against the configured operator list after
//!   `login_delay_ms`, then switches between the login and dashboard views
//! - Reports: "generates" a BI report after `report_delay_ms`
//!
//! Both run as fire-once tasks on a tokio runtime owned by this middleware
//! and report back through the dispatcher. A task that panics is caught at
//! the spawn site and reported as a generic failure.

use std::future::Future;
use std::time::Duration;

use anyhow::Context;
use tokio::runtime::{Builder, Runtime};

use crate::actions::{Action, GlobalAction, LoginAction, ReportAction, StatusBarAction};
use crate::auth::{self, AuthError, GENERIC_FAILURE};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::views::{DashboardView, LoginView};

const LOGIN_SOURCE: &str = "Login";
const REPORT_SOURCE: &str = "Analytics";

pub struct SimulationMiddleware {
    runtime: Runtime,
}

impl SimulationMiddleware {
    pub fn new() -> anyhow::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("netserve-sim")
            .enable_time()
            .build()
            .context("Failed to create tokio runtime")?;
        Ok(Self { runtime })
    }

    /// Run `work` after `delay` and dispatch `on_done` with its outcome
    ///
    /// The work runs in its own task so that a panic surfaces as a
    /// `JoinError` here instead of silently dropping the reply.
    fn spawn_delayed<T, W, F>(&self, delay: Duration, dispatcher: &Dispatcher, work: W, on_done: F)
    where
        T: Send + 'static,
        W: Future<Output = T> + Send + 'static,
        F: FnOnce(Result<T, String>) -> Action + Send + 'static,
    {
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let outcome = tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                work.await
            })
            .await
            .map_err(|e| {
                log::error!("Simulated operation failed: {}", e);
                GENERIC_FAILURE.to_string()
            });
            dispatcher.dispatch(on_done(outcome));
        });
    }

    fn submit_login(&self, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if state.login.submitting {
            log::debug!("Login already in flight, ignoring submit");
            return false;
        }

        if !state.login.is_complete() {
            dispatcher.dispatch(Action::Login(LoginAction::Failed(
                AuthError::MissingCredentials.to_string(),
            )));
            return false;
        }

        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
            "Authenticating...",
            LOGIN_SOURCE,
        )));

        let accounts = state.config.operators.clone();
        let username = state.login.username.clone();
        let password = state.login.password.clone();
        log::info!("Authenticating operator '{}'", username.trim());

        self.spawn_delayed(
            Duration::from_millis(state.config.login_delay_ms),
            dispatcher,
            async move { auth::authenticate(&accounts, &username, &password) },
            |outcome| {
                let login = match outcome {
                    Ok(Ok(operator)) => LoginAction::Succeeded(operator),
                    Ok(Err(e)) => LoginAction::Failed(e.to_string()),
                    Err(message) => LoginAction::Failed(message),
                };
                Action::Login(login)
            },
        );

        true
    }

    fn generate_report(&self, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if state.session.is_none() {
            return false;
        }
        if state.report.generating {
            log::debug!("Report already being generated, ignoring request");
            return false;
        }

        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
            "Generating BI report...",
            REPORT_SOURCE,
        )));

        self.spawn_delayed(
            Duration::from_millis(state.config.report_delay_ms),
            dispatcher,
            async { report_file_name(chrono::Local::now()) },
            |outcome| {
                Action::Report(match outcome {
                    Ok(name) => ReportAction::Ready(name),
                    Err(message) => ReportAction::Failed(message),
                })
            },
        );

        true
    }
}

/// File name of a report generated at `at`
pub fn report_file_name(at: chrono::DateTime<chrono::Local>) -> String {
    format!("netserve-report-{}.pdf", at.format("%Y%m%d-%H%M%S"))
}

impl Middleware for SimulationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Login(LoginAction::Submit) => self.submit_login(state, dispatcher),

            Action::Login(LoginAction::Succeeded(operator)) => {
                log::info!("Operator '{}' signed in", operator.username);
                dispatcher.dispatch(Action::Global(GlobalAction::ReplaceView(Box::new(
                    DashboardView::new(),
                ))));
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                    format!("Welcome back, {}", operator.display_name),
                    LOGIN_SOURCE,
                )));
                true
            }

            Action::Login(LoginAction::Failed(message)) => {
                log::warn!("Login failed: {}", message);
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                    message.clone(),
                    LOGIN_SOURCE,
                )));
                true
            }

            Action::Login(LoginAction::Logout) => {
                if state.session.is_none() {
                    return false;
                }
                dispatcher.dispatch(Action::Global(GlobalAction::ReplaceView(Box::new(
                    LoginView::new(),
                ))));
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                    "Signed out",
                    LOGIN_SOURCE,
                )));
                true
            }

            Action::Report(ReportAction::Generate) => self.generate_report(state, dispatcher),

            Action::Report(ReportAction::Ready(name)) => {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                    format!("Report ready: {}", name),
                    REPORT_SOURCE,
                )));
                true
            }

            Action::Report(ReportAction::Failed(message)) => {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                    message.clone(),
                    REPORT_SOURCE,
                )));
                true
            }

            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::{
        keyboard_middleware::KeyboardMiddleware, translation_middleware::TranslationMiddleware,
    };
    use crate::state::StatusKind;
    use crate::store::Store;
    use crate::views::ViewId;
    use chrono::TimeZone;
    use netserve_config::AppConfig;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn store_with_delays(login_delay_ms: u64, report_delay_ms: u64) -> Store {
        let config = AppConfig {
            login_delay_ms,
            report_delay_ms,
            ..AppConfig::default()
        };
        let mut store = Store::new(AppState::new(config));
        store.add_middleware(Box::new(KeyboardMiddleware::new()));
        store.add_middleware(Box::new(TranslationMiddleware::new()));
        store.add_middleware(Box::new(SimulationMiddleware::new().unwrap()));
        store
    }

    /// Drain the action channel until `done` holds or a second has passed
    fn wait_for(store: &mut Store, done: impl Fn(&AppState) -> bool) {
        for _ in 0..100 {
            store.process_pending();
            if done(store.state()) {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("condition not reached, state: {:?}", store.state());
    }

    fn type_text(store: &mut Store, text: &str) {
        for c in text.chars() {
            store.dispatch(Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::NONE,
            ))));
        }
    }

    fn press(store: &mut Store, code: KeyCode) {
        store.dispatch(Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
            code,
            KeyModifiers::NONE,
        ))));
    }

    fn sign_in(store: &mut Store, username: &str, password: &str) {
        type_text(store, username);
        press(store, KeyCode::Tab);
        type_text(store, password);
        press(store, KeyCode::Enter);
    }

    #[test]
    fn test_successful_login_opens_dashboard() {
        let mut store = store_with_delays(0, 0);
        sign_in(&mut store, "admin", "netserve");
        assert!(store
            .state()
            .status_bar
            .messages
            .iter()
            .any(|m| m.kind == StatusKind::Running && m.message == "Authenticating..."));

        wait_for(&mut store, |s| s.session.is_some());
        store.process_pending();

        assert_eq!(store.state().active_view().view_id(), ViewId::Dashboard);
        assert_eq!(store.state().view_stack.len(), 1);
        let latest = store.state().status_bar.latest().unwrap();
        assert_eq!(latest.kind, StatusKind::Success);
        assert_eq!(latest.message, "Welcome back, NOC Administrator");
    }

    #[test]
    fn test_wrong_password_reports_error() {
        let mut store = store_with_delays(0, 0);
        sign_in(&mut store, "admin", "nope");

        wait_for(&mut store, |s| !s.login.submitting);

        assert!(store.state().session.is_none());
        assert_eq!(store.state().active_view().view_id(), ViewId::Login);
        let latest = store.state().status_bar.latest().unwrap();
        assert_eq!(latest.kind, StatusKind::Error);
        assert_eq!(latest.message, "Invalid username or password");
    }

    #[test]
    fn test_empty_form_fails_immediately() {
        let mut store = store_with_delays(0, 0);
        press(&mut store, KeyCode::Enter);

        assert!(!store.state().login.submitting);
        assert_eq!(
            store.state().login.last_error.as_deref(),
            Some("Username and password are required")
        );
    }

    #[test]
    fn test_report_generation_and_duplicate_request() {
        let mut store = store_with_delays(0, 200);
        sign_in(&mut store, "admin", "netserve");
        wait_for(&mut store, |s| s.session.is_some());
        store.process_pending();

        store.dispatch(Action::Report(ReportAction::Generate));
        assert!(store.state().report.generating);
        // Ignored while the first one is pending
        store.dispatch(Action::Report(ReportAction::Generate));

        wait_for(&mut store, |s| s.report.last_report.is_some());
        store.process_pending();

        assert!(!store.state().report.generating);
        let name = store.state().report.last_report.clone().unwrap();
        assert!(name.starts_with("netserve-report-") && name.ends_with(".pdf"));

        let reports_ready = store
            .state()
            .status_bar
            .messages
            .iter()
            .filter(|m| m.message.starts_with("Report ready"))
            .count();
        assert_eq!(reports_ready, 1);
    }

    #[test]
    fn test_report_requires_session() {
        let mut store = store_with_delays(0, 0);
        store.dispatch(Action::Report(ReportAction::Generate));
        assert!(!store.state().report.generating);
    }

    #[test]
    fn test_logout_returns_to_login() {
        let mut store = store_with_delays(0, 0);
        sign_in(&mut store, "admin", "netserve");
        wait_for(&mut store, |s| s.session.is_some());
        store.process_pending();

        store.dispatch(Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
            KeyCode::Char('l'),
            KeyModifiers::CONTROL,
        ))));

        assert!(store.state().session.is_none());
        assert_eq!(store.state().active_view().view_id(), ViewId::Login);
        assert_eq!(store.state().status_bar.latest().unwrap().message, "Signed out");
    }

    #[test]
    fn test_report_file_name_format() {
        let at = chrono::Local
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .single()
            .unwrap();
        assert_eq!(report_file_name(at), "netserve-report-20240309-140507.pdf");
    }
}
