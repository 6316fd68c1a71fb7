use crate::actions::ProfileField;
use crate::routes;
use crate::state::Screen;

use super::AppCore;

impl AppCore {
    pub(super) fn set_field(&mut self, field: ProfileField, value: String) {
        let form = &mut self.state.form;
        match field {
            ProfileField::Name => form.name = value,
            ProfileField::Email => form.email = value,
            ProfileField::Phone => form.phone = value,
            // Free text; non-numeric input is accepted without error.
            ProfileField::Age => form.age = value,
        }
        self.emit_form();
    }

    pub(super) fn select_gender(&mut self, gender: String) {
        self.state.form.gender = gender;
        self.emit_form();
    }

    pub(super) fn toggle_hobby(&mut self, label: &str) {
        let Some(hobby) = self
            .state
            .form
            .hobbies
            .iter_mut()
            .find(|h| h.label == label)
        else {
            tracing::warn!(label, "toggle for unknown hobby dropped");
            return;
        };
        hobby.selected = !hobby.selected;
        self.emit_form();
    }

    pub(super) fn set_notifications_enabled(&mut self, enabled: bool) {
        self.state.form.notifications_enabled = enabled;
        self.emit_form();
    }

    /// Submit accepts any input, including all-empty fields. Only the five
    /// scalar fields travel in the route; hobby selections and the
    /// notifications flag stay behind on the form.
    pub(super) fn submit_profile(&mut self) {
        self.state.form.submitted = true;
        self.emit_form();

        let path = routes::route_path(&Screen::ProfileDisplay {
            params: self.state.form.params(),
        });
        self.navigate_to_path(&path);
    }
}
