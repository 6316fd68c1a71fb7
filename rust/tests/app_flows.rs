use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use rolo_core::{
    project_mobile, AppAction, AppReconciler, AppUpdate, FfiApp, NavTab, ProfileField, Screen,
    NOT_PROVIDED,
};
use tempfile::{tempdir, TempDir};

const TIMEOUT: Duration = Duration::from_secs(5);

fn write_config(dir: &TempDir, config: serde_json::Value) {
    let path = dir.path().join("rolo_config.json");
    std::fs::write(path, serde_json::to_vec(&config).unwrap()).unwrap();
}

fn app_with_config(config: serde_json::Value) -> (Arc<FfiApp>, TempDir) {
    let dir = tempdir().unwrap();
    write_config(&dir, config);
    let app = FfiApp::new(dir.path().to_string_lossy().into_owned());
    (app, dir)
}

fn test_app() -> (Arc<FfiApp>, TempDir) {
    app_with_config(serde_json::json!({ "disable_toast_autodismiss": true }))
}

fn wait_until(what: &str, timeout: Duration, mut f: impl FnMut() -> bool) {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if f() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    panic!("{what}: condition not met within {timeout:?}");
}

struct TestReconciler {
    updates: Arc<Mutex<Vec<AppUpdate>>>,
}

impl TestReconciler {
    fn new() -> (Self, Arc<Mutex<Vec<AppUpdate>>>) {
        let updates = Arc::new(Mutex::new(vec![]));
        (
            Self {
                updates: updates.clone(),
            },
            updates,
        )
    }
}

impl AppReconciler for TestReconciler {
    fn reconcile(&self, update: AppUpdate) {
        self.updates.lock().unwrap().push(update);
    }
}

fn fill_form(app: &FfiApp, name: &str, email: &str, phone: &str, age: &str, gender: &str) {
    app.dispatch(AppAction::SelectTab {
        tab: NavTab::Profile,
    });
    app.dispatch(AppAction::SetField {
        field: ProfileField::Name,
        value: name.into(),
    });
    app.dispatch(AppAction::SetField {
        field: ProfileField::Email,
        value: email.into(),
    });
    app.dispatch(AppAction::SetField {
        field: ProfileField::Phone,
        value: phone.into(),
    });
    app.dispatch(AppAction::SetField {
        field: ProfileField::Age,
        value: age.into(),
    });
    app.dispatch(AppAction::SelectGender {
        gender: gender.into(),
    });
}

#[test]
fn submit_carries_fields_through_the_encoded_route() {
    let (app, _dir) = test_app();

    fill_form(&app, "Ann Lee", "a@b.com", "555-1234", "30", "Female");
    app.dispatch(AppAction::ToggleHobby {
        label: "Reading".into(),
    });
    app.dispatch(AppAction::SetNotificationsEnabled { enabled: true });
    app.dispatch(AppAction::SubmitProfile);

    wait_until("display screen mounted", TIMEOUT, || {
        app.state().profile_view.is_some()
    });

    let state = app.state();
    let view = state.profile_view.clone().unwrap();
    assert_eq!(view.profile.name, "Ann Lee");
    assert_eq!(view.profile.email, "a@b.com");
    assert_eq!(view.profile.phone, "555-1234");
    assert_eq!(view.profile.age, "30");
    assert_eq!(view.profile.gender, "Female");
    assert!(!view.is_favorite);
    assert!(!view.options_dialog_open);
    assert!(state.form.submitted);

    let route = project_mobile(&state);
    assert_eq!(
        route.active_path,
        "profile_display/Ann%20Lee/a%40b.com/555-1234/30/Female"
    );
    assert_eq!(route.selected_tab, NavTab::Display);
    // Five fields only: hobby selections and the notifications flag never
    // travel in the route.
    assert_eq!(route.active_path.split('/').count(), 6);
}

#[test]
fn reserved_characters_survive_the_route() {
    let (app, _dir) = test_app();

    let name = "a/b?c#d e%f";
    let email = "ünïcode@exämple.com";
    fill_form(&app, name, email, "+1 (555) 12/34", "30?", "Other");
    app.dispatch(AppAction::SubmitProfile);

    wait_until("display screen mounted", TIMEOUT, || {
        app.state().profile_view.is_some()
    });

    let view = app.state().profile_view.unwrap();
    assert_eq!(view.profile.name, name);
    assert_eq!(view.profile.email, email);
    assert_eq!(view.profile.phone, "+1 (555) 12/34");
    assert_eq!(view.profile.age, "30?");
}

#[test]
fn empty_submission_renders_empty_strings_not_placeholders() {
    let (app, _dir) = test_app();

    app.dispatch(AppAction::SelectTab {
        tab: NavTab::Profile,
    });
    app.dispatch(AppAction::SubmitProfile);

    wait_until("display screen mounted", TIMEOUT, || {
        app.state().profile_view.is_some()
    });

    let view = app.state().profile_view.unwrap();
    assert_eq!(view.profile.name, "");
    assert_eq!(view.profile.email, "");
    assert_eq!(view.profile.phone, "");
    assert_eq!(view.profile.age, "");
    // The gender radio always has a selection; a fresh form starts on the
    // first option.
    assert_eq!(view.profile.gender, "Male");
    assert_ne!(view.profile.name, NOT_PROVIDED);
}

#[test]
fn display_tab_arrives_with_placeholders() {
    let (app, _dir) = test_app();

    app.dispatch(AppAction::SelectTab {
        tab: NavTab::Display,
    });

    wait_until("display screen mounted", TIMEOUT, || {
        app.state().profile_view.is_some()
    });

    let view = app.state().profile_view.unwrap();
    assert_eq!(view.profile.name, NOT_PROVIDED);
    assert_eq!(view.profile.email, NOT_PROVIDED);
    assert_eq!(view.profile.phone, NOT_PROVIDED);
    assert_eq!(view.profile.age, NOT_PROVIDED);
    assert_eq!(view.profile.gender, NOT_PROVIDED);
}

#[test]
fn favorite_toggle_is_an_involution_with_one_toast_each() {
    let (app, _dir) = test_app();
    let (reconciler, updates) = TestReconciler::new();
    app.listen_for_updates(Box::new(reconciler));

    app.dispatch(AppAction::SelectTab {
        tab: NavTab::Display,
    });
    app.dispatch(AppAction::ToggleFavorite);
    wait_until("favorite set", TIMEOUT, || {
        let state = app.state();
        state
            .profile_view
            .as_ref()
            .is_some_and(|v| v.is_favorite)
            && state.toast.as_deref() == Some("Added to Favorites")
    });

    app.dispatch(AppAction::ClearToast);
    wait_until("toast cleared", TIMEOUT, || app.state().toast.is_none());

    app.dispatch(AppAction::ToggleFavorite);
    wait_until("favorite cleared", TIMEOUT, || {
        let state = app.state();
        state
            .profile_view
            .as_ref()
            .is_some_and(|v| !v.is_favorite)
            && state.toast.as_deref() == Some("Removed from Favorites")
    });

    // Exactly one feedback message per toggle.
    let updates = updates.lock().unwrap();
    let toasts_matching = |msg: &str| {
        updates
            .iter()
            .filter(|u| match u {
                AppUpdate::FullState(s) => s.toast.as_deref() == Some(msg),
                AppUpdate::ToastChanged { toast, .. } => toast.as_deref() == Some(msg),
                _ => false,
            })
            .count()
    };
    assert_eq!(toasts_matching("Added to Favorites"), 1);
    assert_eq!(toasts_matching("Removed from Favorites"), 1);
}

#[test]
fn options_dialog_edit_prefills_only_the_scalars() {
    let (app, _dir) = test_app();

    fill_form(&app, "Ann Lee", "a@b.com", "555-1234", "30", "Female");
    app.dispatch(AppAction::ToggleHobby {
        label: "Coding".into(),
    });
    app.dispatch(AppAction::SetNotificationsEnabled { enabled: true });
    app.dispatch(AppAction::SubmitProfile);
    wait_until("display screen mounted", TIMEOUT, || {
        app.state().profile_view.is_some()
    });

    app.dispatch(AppAction::OpenProfileOptions);
    wait_until("options dialog open", TIMEOUT, || {
        app.state()
            .profile_view
            .is_some_and(|v| v.options_dialog_open)
    });

    app.dispatch(AppAction::EditProfile);
    wait_until("form screen mounted with prefill", TIMEOUT, || {
        matches!(
            project_mobile(&app.state()).active_screen,
            Screen::ProfileForm { prefill: Some(_) }
        )
    });

    let state = app.state();
    // Display-screen state is scoped to the screen's active lifetime.
    assert!(state.profile_view.is_none());
    assert_eq!(state.form.name, "Ann Lee");
    assert_eq!(state.form.email, "a@b.com");
    assert_eq!(state.form.phone, "555-1234");
    assert_eq!(state.form.age, "30");
    assert_eq!(state.form.gender, "Female");
    // Hobbies and the notifications flag were never forwarded, so editing
    // cannot restore them.
    assert!(state.form.hobbies.iter().all(|h| !h.selected));
    assert!(!state.form.notifications_enabled);
    assert!(!state.form.submitted);
}

#[test]
fn delete_reports_success_and_removes_nothing() {
    let (app, _dir) = test_app();

    app.dispatch(AppAction::SelectTab {
        tab: NavTab::Display,
    });
    app.dispatch(AppAction::OpenProfileOptions);
    wait_until("options dialog open", TIMEOUT, || {
        app.state()
            .profile_view
            .is_some_and(|v| v.options_dialog_open)
    });

    app.dispatch(AppAction::DeleteProfile);
    wait_until("delete toast shown", TIMEOUT, || {
        app.state().toast.as_deref() == Some("Profile deleted successfully.")
    });

    let state = app.state();
    let view = state.profile_view.unwrap();
    // No record exists anywhere, so "delete" only closes the dialog and
    // reports success; the rendered profile is untouched.
    assert!(!view.options_dialog_open);
    assert_eq!(view.profile.name, NOT_PROVIDED);
}

#[test]
fn dialog_dismiss_returns_to_idle() {
    let (app, _dir) = test_app();

    app.dispatch(AppAction::SelectTab {
        tab: NavTab::Display,
    });
    app.dispatch(AppAction::OpenProfileOptions);
    wait_until("options dialog open", TIMEOUT, || {
        app.state()
            .profile_view
            .is_some_and(|v| v.options_dialog_open)
    });
    app.dispatch(AppAction::DismissProfileOptions);
    wait_until("options dialog closed", TIMEOUT, || {
        app.state()
            .profile_view
            .is_some_and(|v| !v.options_dialog_open)
    });
}

#[test]
fn toast_autodismiss_clears_after_the_configured_duration() {
    let (app, _dir) = app_with_config(serde_json::json!({
        "disable_toast_autodismiss": false,
        "toast_duration_ms": 200,
    }));

    app.dispatch(AppAction::SelectTab {
        tab: NavTab::Display,
    });
    app.dispatch(AppAction::ToggleFavorite);
    wait_until("toast shown", TIMEOUT, || app.state().toast.is_some());
    wait_until("toast auto-dismissed", TIMEOUT, || {
        app.state().toast.is_none()
    });

    // The next toast arms its own timer and dismisses on its own.
    app.dispatch(AppAction::ToggleFavorite);
    wait_until("second toast shown", TIMEOUT, || {
        app.state().toast.as_deref() == Some("Removed from Favorites")
    });
    wait_until("second toast auto-dismissed", TIMEOUT, || {
        app.state().toast.is_none()
    });
}

#[test]
fn tab_switch_pops_to_the_home_root() {
    let (app, _dir) = test_app();

    app.dispatch(AppAction::SelectTab {
        tab: NavTab::Profile,
    });
    app.dispatch(AppAction::SubmitProfile);
    wait_until("display screen mounted", TIMEOUT, || {
        app.state().profile_view.is_some()
    });

    app.dispatch(AppAction::SelectTab { tab: NavTab::Home });
    wait_until("back at the home root", TIMEOUT, || {
        let route = project_mobile(&app.state());
        route.active_screen == Screen::Home && !route.can_pop
    });
    assert!(app.state().profile_view.is_none());
}

#[test]
fn host_back_pop_remounts_a_fresh_form() {
    let (app, _dir) = test_app();

    fill_form(&app, "Ann Lee", "a@b.com", "555-1234", "30", "Female");
    app.dispatch(AppAction::SubmitProfile);
    wait_until("display screen mounted", TIMEOUT, || {
        app.state().profile_view.is_some()
    });

    // System back: the host pops the display entry off its stack.
    app.dispatch(AppAction::UpdateScreenStack {
        stack: vec![Screen::ProfileForm { prefill: None }],
    });
    wait_until("form remounted", TIMEOUT, || {
        let state = app.state();
        state.profile_view.is_none() && !state.form.submitted
    });
    // remember{} state does not survive leaving the screen.
    assert_eq!(app.state().form.name, "");
}

#[test]
fn update_stream_revs_are_strictly_increasing() {
    let (app, _dir) = test_app();
    let (reconciler, updates) = TestReconciler::new();
    app.listen_for_updates(Box::new(reconciler));

    fill_form(&app, "Ann Lee", "a@b.com", "555-1234", "30", "Female");
    app.dispatch(AppAction::SubmitProfile);
    wait_until("display screen mounted", TIMEOUT, || {
        app.state().profile_view.is_some()
    });
    wait_until("updates drained", TIMEOUT, || {
        updates.lock().unwrap().last().map(AppUpdate::rev) == Some(app.state().rev)
    });

    let updates = updates.lock().unwrap();
    assert!(!updates.is_empty());
    for pair in updates.windows(2) {
        assert!(pair[0].rev() < pair[1].rev());
    }
}

#[test]
fn hobby_catalog_is_configurable() {
    let (app, _dir) = app_with_config(serde_json::json!({
        "disable_toast_autodismiss": true,
        "hobby_catalog": ["Climbing", "Chess"],
    }));

    app.dispatch(AppAction::SelectTab {
        tab: NavTab::Profile,
    });
    app.dispatch(AppAction::ToggleHobby {
        label: "Chess".into(),
    });
    wait_until("configured hobby toggled", TIMEOUT, || {
        app.state()
            .form
            .hobbies
            .iter()
            .any(|h| h.label == "Chess" && h.selected)
    });
    assert_eq!(app.state().form.hobbies.len(), 2);
}
