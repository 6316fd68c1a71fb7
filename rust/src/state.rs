use crate::routes::NOT_PROVIDED;

/// Gender options offered by the form's radio group, in display order. The
/// first entry is the freshly mounted form's selection.
pub const GENDER_OPTIONS: &[&str] = &["Male", "Female", "Other"];

/// Hobby labels offered when `rolo_config.json` doesn't override them.
pub const DEFAULT_HOBBY_CATALOG: &[&str] = &["Reading", "Traveling", "Coding"];

#[derive(uniffi::Record, Clone, Debug)]
pub struct AppState {
    pub rev: u64,
    pub router: Router,
    pub form: ProfileFormState,
    pub profile_view: Option<ProfileViewState>,
    pub toast: Option<String>,
}

impl AppState {
    pub fn empty() -> Self {
        Self {
            rev: 0,
            router: Router {
                default_screen: Screen::Home,
                screen_stack: vec![],
            },
            form: ProfileFormState::fresh(DEFAULT_HOBBY_CATALOG, None),
            profile_view: None,
            toast: None,
        }
    }
}

#[derive(uniffi::Record, Clone, Debug)]
pub struct Router {
    pub default_screen: Screen,
    pub screen_stack: Vec<Screen>,
}

#[derive(uniffi::Enum, Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    ProfileForm { prefill: Option<ProfileParams> },
    ProfileDisplay { params: ProfileParams },
}

/// Bottom navigation bar destinations, in display order.
#[derive(uniffi::Enum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTab {
    Home,
    Profile,
    Display,
}

/// The five scalar route parameters. Always present as strings (possibly the
/// `"Not Provided"` placeholder, possibly empty); `age` is free text and
/// accepts non-numeric input.
#[derive(uniffi::Record, Clone, Debug, PartialEq, Eq)]
pub struct ProfileParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub gender: String,
}

impl ProfileParams {
    pub fn placeholder() -> Self {
        Self {
            name: NOT_PROVIDED.to_string(),
            email: NOT_PROVIDED.to_string(),
            phone: NOT_PROVIDED.to_string(),
            age: NOT_PROVIDED.to_string(),
            gender: NOT_PROVIDED.to_string(),
        }
    }
}

#[derive(uniffi::Record, Clone, Debug, PartialEq, Eq)]
pub struct HobbyToggle {
    pub label: String,
    pub selected: bool,
}

#[derive(uniffi::Record, Clone, Debug, PartialEq, Eq)]
pub struct ProfileFormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub gender: String,
    pub hobbies: Vec<HobbyToggle>,
    pub notifications_enabled: bool,
    pub submitted: bool,
}

impl ProfileFormState {
    /// State for a newly mounted form screen. A prefill (arriving from
    /// "edit") populates only the five scalar fields; hobby selections and
    /// the notifications flag never travel in the route, so they always
    /// start over.
    pub fn fresh<S: AsRef<str>>(catalog: &[S], prefill: Option<&ProfileParams>) -> Self {
        let (name, email, phone, age, gender) = match prefill {
            Some(p) => (
                p.name.clone(),
                p.email.clone(),
                p.phone.clone(),
                p.age.clone(),
                p.gender.clone(),
            ),
            None => (
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                GENDER_OPTIONS[0].to_string(),
            ),
        };
        Self {
            name,
            email,
            phone,
            age,
            gender,
            hobbies: catalog
                .iter()
                .map(|label| HobbyToggle {
                    label: label.as_ref().to_string(),
                    selected: false,
                })
                .collect(),
            notifications_enabled: false,
            submitted: false,
        }
    }

    /// The five scalar fields as route parameters, exactly as typed.
    pub fn params(&self) -> ProfileParams {
        ProfileParams {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            age: self.age.clone(),
            gender: self.gender.clone(),
        }
    }
}

/// The display screen's state: the decoded route parameters plus two
/// independent flags scoped to the screen's active lifetime. Created fresh on
/// every entry and discarded on exit; nothing is written back to any store.
#[derive(uniffi::Record, Clone, Debug, PartialEq, Eq)]
pub struct ProfileViewState {
    pub profile: ProfileParams,
    pub is_favorite: bool,
    pub options_dialog_open: bool,
}

impl ProfileViewState {
    pub fn fresh(profile: ProfileParams) -> Self {
        Self {
            profile,
            is_favorite: false,
            options_dialog_open: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_form_starts_empty_with_default_gender() {
        let form = ProfileFormState::fresh(DEFAULT_HOBBY_CATALOG, None);
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.phone, "");
        assert_eq!(form.age, "");
        assert_eq!(form.gender, "Male");
        assert!(form.hobbies.iter().all(|h| !h.selected));
        assert_eq!(form.hobbies.len(), 3);
        assert!(!form.notifications_enabled);
        assert!(!form.submitted);
    }

    #[test]
    fn prefill_populates_scalars_only() {
        let prefill = ProfileParams {
            name: "Ann Lee".into(),
            email: "a@b.com".into(),
            phone: "555-1234".into(),
            age: "30".into(),
            gender: "Female".into(),
        };
        let form = ProfileFormState::fresh(DEFAULT_HOBBY_CATALOG, Some(&prefill));
        assert_eq!(form.params(), prefill);
        assert!(form.hobbies.iter().all(|h| !h.selected));
        assert!(!form.notifications_enabled);
        assert!(!form.submitted);
    }

    #[test]
    fn placeholder_params_use_the_literal() {
        let p = ProfileParams::placeholder();
        assert_eq!(p.name, "Not Provided");
        assert_eq!(p.gender, "Not Provided");
    }

    #[test]
    fn fresh_view_flags_start_cleared() {
        let view = ProfileViewState::fresh(ProfileParams::placeholder());
        assert!(!view.is_favorite);
        assert!(!view.options_dialog_open);
    }
}
