mod config;
mod display;
mod form;

use std::sync::{Arc, RwLock};

use flume::Sender;

use crate::actions::AppAction;
use crate::routes;
use crate::state::{AppState, NavTab, ProfileFormState, ProfileParams, ProfileViewState, Screen};
use crate::updates::{AppUpdate, CoreMsg, InternalEvent};

pub(crate) use config::default_app_config_json;

pub struct AppCore {
    pub state: AppState,
    rev: u64,

    update_sender: Sender<AppUpdate>,
    core_sender: Sender<CoreMsg>,
    shared_state: Arc<RwLock<AppState>>,

    config: config::AppConfig,
    runtime: tokio::runtime::Runtime,

    // Actor-internal bookkeeping.
    toast_token: u64,
    last_active_screen: Screen,
}

impl AppCore {
    pub fn new(
        update_sender: Sender<AppUpdate>,
        core_sender: Sender<CoreMsg>,
        data_dir: String,
        shared_state: Arc<RwLock<AppState>>,
    ) -> Self {
        let config = config::load_app_config(&data_dir);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .expect("tokio runtime");

        let mut this = Self {
            state: AppState::empty(),
            rev: 0,
            update_sender,
            core_sender,
            shared_state,
            config,
            runtime,
            toast_token: 0,
            last_active_screen: Screen::Home,
        };
        this.state.form = ProfileFormState::fresh(&this.hobby_catalog(), None);

        // Ensure FfiApp.state() has an immediately-available snapshot.
        let snapshot = this.state.clone();
        this.commit_state_snapshot(&snapshot);
        this
    }

    fn next_rev(&mut self) -> u64 {
        self.rev += 1;
        self.state.rev = self.rev;
        self.rev
    }

    fn commit_state_snapshot(&self, snapshot: &AppState) {
        match self.shared_state.write() {
            Ok(mut g) => *g = snapshot.clone(),
            Err(poison) => *poison.into_inner() = snapshot.clone(),
        }
    }

    fn emit_state(&mut self) {
        self.next_rev();
        let snapshot = self.state.clone();
        self.commit_state_snapshot(&snapshot);
        let _ = self.update_sender.send(AppUpdate::FullState(snapshot));
    }

    fn emit_router(&mut self) {
        self.emit_state();
    }

    fn emit_form(&mut self) {
        // Form state is part of AppState; emit a full snapshot like
        // everything else.
        self.emit_state();
    }

    fn emit_profile_view(&mut self) {
        self.emit_state();
    }

    fn emit_toast(&mut self) {
        self.emit_state();
    }

    fn toast(&mut self, msg: impl Into<String>) {
        // Keep the toast in state until the UI clears it or the dismiss
        // timer fires. This makes the UX robust to rev-gap resyncs (state()
        // snapshot still contains the toast).
        self.state.toast = Some(msg.into());
        self.emit_toast();
        self.arm_toast_timer();
    }

    fn arm_toast_timer(&mut self) {
        self.toast_token += 1;
        if !self.toast_autodismiss_enabled() {
            return;
        }
        let token = self.toast_token;
        let duration = self.toast_duration();
        let tx = self.core_sender.clone();
        // Fire-and-forget; nothing awaits the dismissal.
        self.runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            let _ = tx.send(CoreMsg::Internal(InternalEvent::ToastExpired { token }));
        });
    }

    fn active_screen(&self) -> Screen {
        self.state
            .router
            .screen_stack
            .last()
            .cloned()
            .unwrap_or_else(|| self.state.router.default_screen.clone())
    }

    fn navigate_to_path(&mut self, path: &str) {
        match routes::parse_route_path(path) {
            Ok(screen) => self.navigate_to_screen(screen),
            Err(err) => {
                tracing::warn!(%err, path, "navigation to unroutable path dropped");
            }
        }
    }

    fn navigate_to_screen(&mut self, screen: Screen) {
        let stack = &mut self.state.router.screen_stack;
        let is_root = stack.is_empty() && screen == self.state.router.default_screen;
        // Single-top: never stack a duplicate of the active screen.
        if !is_root && stack.last() != Some(&screen) {
            stack.push(screen);
        }
        self.after_router_change();
    }

    fn select_tab(&mut self, tab: NavTab) {
        // Tapping the already-selected tab is a no-op; otherwise pop to the
        // home root and land on the tab's screen, single-top.
        if crate::route_projection::project_mobile(&self.state).selected_tab == tab {
            return;
        }
        let destination = match tab {
            NavTab::Home => routes::ROUTE_HOME.to_string(),
            NavTab::Profile => routes::ROUTE_PROFILE_FORM.to_string(),
            // The Display tab arrives with five literal placeholders.
            NavTab::Display => routes::route_path(&Screen::ProfileDisplay {
                params: ProfileParams::placeholder(),
            }),
        };
        self.state.router.screen_stack.clear();
        self.navigate_to_path(&destination);
    }

    fn after_router_change(&mut self) {
        self.sync_screen_state_to_router();
        self.emit_router();
    }

    /// Screen-lifetime state follows the active screen: entering the form
    /// mounts fresh form state (prefilled when arriving from "edit");
    /// entering the display screen mounts fresh view flags; leaving the
    /// display screen discards them. Nothing survives a screen exit.
    fn sync_screen_state_to_router(&mut self) {
        let active = self.active_screen();
        if active == self.last_active_screen {
            return;
        }
        match &active {
            Screen::Home => {
                self.state.profile_view = None;
            }
            Screen::ProfileForm { prefill } => {
                let catalog = self.hobby_catalog();
                self.state.form = ProfileFormState::fresh(&catalog, prefill.as_ref());
                self.state.profile_view = None;
            }
            Screen::ProfileDisplay { params } => {
                self.state.profile_view = Some(ProfileViewState::fresh(params.clone()));
            }
        }
        self.last_active_screen = active;
    }

    pub fn handle_message(&mut self, msg: CoreMsg) {
        match msg {
            CoreMsg::Action(ref action) => {
                // Never log `?action` directly: field values carry profile PII.
                tracing::info!(action = action.tag(), "dispatch");
                self.handle_action(action.clone());
            }
            CoreMsg::Internal(internal) => self.handle_internal(internal),
        }
    }

    fn handle_internal(&mut self, internal: InternalEvent) {
        match internal {
            InternalEvent::ToastExpired { token } => {
                // Ignore stale timers (toast replaced or cleared since arming).
                if token != self.toast_token {
                    return;
                }
                if self.state.toast.is_some() {
                    self.state.toast = None;
                    self.emit_toast();
                }
            }
        }
    }

    fn handle_action(&mut self, action: AppAction) {
        match action {
            // Navigation
            AppAction::SelectTab { tab } => self.select_tab(tab),
            AppAction::PushScreen { screen } => self.navigate_to_screen(screen),
            AppAction::UpdateScreenStack { stack } => {
                // Host back-stack sync (system back button, swipe-back).
                self.state.router.screen_stack = stack;
                self.after_router_change();
            }

            // Form
            AppAction::SetField { field, value } => self.set_field(field, value),
            AppAction::SelectGender { gender } => self.select_gender(gender),
            AppAction::ToggleHobby { label } => self.toggle_hobby(&label),
            AppAction::SetNotificationsEnabled { enabled } => {
                self.set_notifications_enabled(enabled)
            }
            AppAction::SubmitProfile => self.submit_profile(),

            // Display
            AppAction::ToggleFavorite => self.toggle_favorite(),
            AppAction::OpenProfileOptions => self.set_options_dialog(true),
            AppAction::DismissProfileOptions => self.set_options_dialog(false),
            AppAction::EditProfile => self.edit_profile(),
            AppAction::DeleteProfile => self.delete_profile(),

            // UI
            AppAction::ClearToast => {
                if self.state.toast.is_some() {
                    // Invalidate any pending dismiss timer.
                    self.toast_token += 1;
                    self.state.toast = None;
                    self.emit_toast();
                }
            }

            // Lifecycle
            AppAction::Foregrounded => {
                // Native sends lifecycle signals as actions; re-emit so a
                // returning host can resync. Rust owns all state changes.
                self.emit_state();
            }
        }
    }
}
