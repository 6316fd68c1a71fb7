use crate::state::{NavTab, Screen};

/// The form's free-text fields.
#[derive(uniffi::Enum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Age,
}

#[derive(uniffi::Enum, Debug, Clone)]
pub enum AppAction {
    // Navigation
    SelectTab {
        tab: NavTab,
    },
    PushScreen {
        screen: Screen,
    },
    UpdateScreenStack {
        stack: Vec<Screen>,
    },

    // Form
    SetField {
        field: ProfileField,
        value: String,
    },
    SelectGender {
        gender: String,
    },
    ToggleHobby {
        label: String,
    },
    SetNotificationsEnabled {
        enabled: bool,
    },
    SubmitProfile,

    // Display
    ToggleFavorite,
    OpenProfileOptions,
    DismissProfileOptions,
    EditProfile,
    DeleteProfile,

    // UI
    ClearToast,

    // Lifecycle
    Foregrounded,
}

impl AppAction {
    /// Log-safe action tag (never includes field values, which carry
    /// profile PII).
    pub fn tag(&self) -> &'static str {
        match self {
            // Navigation
            AppAction::SelectTab { .. } => "SelectTab",
            AppAction::PushScreen { .. } => "PushScreen",
            AppAction::UpdateScreenStack { .. } => "UpdateScreenStack",

            // Form
            AppAction::SetField { .. } => "SetField",
            AppAction::SelectGender { .. } => "SelectGender",
            AppAction::ToggleHobby { .. } => "ToggleHobby",
            AppAction::SetNotificationsEnabled { .. } => "SetNotificationsEnabled",
            AppAction::SubmitProfile => "SubmitProfile",

            // Display
            AppAction::ToggleFavorite => "ToggleFavorite",
            AppAction::OpenProfileOptions => "OpenProfileOptions",
            AppAction::DismissProfileOptions => "DismissProfileOptions",
            AppAction::EditProfile => "EditProfile",
            AppAction::DeleteProfile => "DeleteProfile",

            // UI
            AppAction::ClearToast => "ClearToast",

            // Lifecycle
            AppAction::Foregrounded => "Foregrounded",
        }
    }
}
