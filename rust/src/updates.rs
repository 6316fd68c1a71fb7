use crate::state::{AppState, ProfileFormState, ProfileViewState, Router};
use crate::AppAction;

#[derive(uniffi::Enum, Clone, Debug)]
pub enum AppUpdate {
    FullState(AppState),
    RouterChanged {
        rev: u64,
        router: Router,
    },
    FormChanged {
        rev: u64,
        form: ProfileFormState,
    },
    ProfileViewChanged {
        rev: u64,
        profile_view: Option<ProfileViewState>,
    },
    ToastChanged {
        rev: u64,
        toast: Option<String>,
    },
}

impl AppUpdate {
    pub fn rev(&self) -> u64 {
        match self {
            AppUpdate::FullState(s) => s.rev,
            AppUpdate::RouterChanged { rev, .. } => *rev,
            AppUpdate::FormChanged { rev, .. } => *rev,
            AppUpdate::ProfileViewChanged { rev, .. } => *rev,
            AppUpdate::ToastChanged { rev, .. } => *rev,
        }
    }
}

#[derive(Debug)]
pub enum CoreMsg {
    Action(AppAction),
    Internal(InternalEvent),
}

#[derive(Debug)]
pub enum InternalEvent {
    /// A toast auto-dismiss timer fired. The token identifies which toast
    /// the timer was armed for; stale tokens are ignored.
    ToastExpired { token: u64 },
}
