use crate::routes;
use crate::state::Screen;

use super::AppCore;

const TOAST_FAVORITE_ADDED: &str = "Added to Favorites";
const TOAST_FAVORITE_REMOVED: &str = "Removed from Favorites";
const TOAST_PROFILE_DELETED: &str = "Profile deleted successfully.";

impl AppCore {
    pub(super) fn toggle_favorite(&mut self) {
        let Some(view) = self.state.profile_view.as_mut() else {
            return;
        };
        view.is_favorite = !view.is_favorite;
        let msg = if view.is_favorite {
            TOAST_FAVORITE_ADDED
        } else {
            TOAST_FAVORITE_REMOVED
        };
        self.emit_profile_view();
        self.toast(msg);
    }

    pub(super) fn set_options_dialog(&mut self, open: bool) {
        let Some(view) = self.state.profile_view.as_mut() else {
            return;
        };
        if view.options_dialog_open != open {
            view.options_dialog_open = open;
            self.emit_profile_view();
        }
    }

    /// "Edit": back to the form with the current five fields re-encoded as
    /// initial values. Hobbies and the notifications flag were never
    /// forwarded to this screen, so the prefilled form cannot restore them.
    pub(super) fn edit_profile(&mut self) {
        let Some(view) = self.state.profile_view.as_mut() else {
            return;
        };
        view.options_dialog_open = false;
        let prefill = view.profile.clone();

        let path = routes::route_path(&Screen::ProfileForm {
            prefill: Some(prefill),
        });
        self.navigate_to_path(&path);
    }

    /// "Delete" only reports success; there is no stored record to remove.
    pub(super) fn delete_profile(&mut self) {
        let Some(view) = self.state.profile_view.as_mut() else {
            return;
        };
        if view.options_dialog_open {
            view.options_dialog_open = false;
            self.emit_profile_view();
        }
        self.toast(TOAST_PROFILE_DELETED);
    }
}
