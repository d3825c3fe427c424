//! Seams to the host scroll view and to the code that performs the refresh

use glam::Vec2;

/// The scrollable list the refresh overlay is attached to
///
/// Offsets follow the usual scroll-view convention: pulling down past the top
/// of the content makes `content_offset().y` negative.
pub trait ScrollContainer {
    fn content_offset(&self) -> Vec2;

    fn content_inset_top(&self) -> f32;

    fn set_content_inset_top(&mut self, inset: f32);

    /// Visible width; the overlay spans the full width
    fn width(&self) -> f32;
}

/// Notified once per refresh cycle when the user pulled far enough
pub trait RefreshDelegate {
    fn refresh_view_did_refresh(&mut self);
}

impl<F: FnMut()> RefreshDelegate for F {
    fn refresh_view_did_refresh(&mut self) {
        self()
    }
}
