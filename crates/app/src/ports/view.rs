//! Dashboard view port — the page the dashboard draws into.
//!
//! All methods are synchronous: drawing happens on the caller's task and
//! never waits on the network.

use stormwatch_domain::clip::ClipListItem;
use stormwatch_domain::settings::SettingsForm;

/// Everything the use-cases need from the page.
pub trait DashboardView: Send + Sync {
    /// Point the live image at a new source.
    fn set_live_source(&self, src: &str);

    fn show_loader(&self);

    fn hide_loader(&self);

    /// Remove every rendered clip.
    fn clear_clips(&self);

    /// Replace the clip list with `items`.
    fn render_clips(&self, items: Vec<ClipListItem>);

    /// Fill the settings inputs.
    fn populate_settings(&self, form: &SettingsForm);

    /// Read the settings inputs as currently typed.
    fn read_settings(&self) -> SettingsForm;
}

impl<T: DashboardView> DashboardView for std::sync::Arc<T> {
    fn set_live_source(&self, src: &str) {
        (**self).set_live_source(src);
    }

    fn show_loader(&self) {
        (**self).show_loader();
    }

    fn hide_loader(&self) {
        (**self).hide_loader();
    }

    fn clear_clips(&self) {
        (**self).clear_clips();
    }

    fn render_clips(&self, items: Vec<ClipListItem>) {
        (**self).render_clips(items);
    }

    fn populate_settings(&self, form: &SettingsForm) {
        (**self).populate_settings(form);
    }

    fn read_settings(&self) -> SettingsForm {
        (**self).read_settings()
    }
}
