//! Global UI chrome state (active modal, image gallery).
//!
//! DESIGN
//! ======
//! Keeps overlay concerns out of route views so any view can open a modal or
//! the gallery through context without owning the overlay markup.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Modals rendered by `ModalRoot`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    /// Shown to signed-in users who have not chosen a username yet.
    SetUsername,
    /// Shown when a signed-out visitor attempts a signed-in action.
    LoginPrompt,
}

/// Fullscreen image viewer state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryState {
    pub images: Vec<String>,
    pub index: usize,
}

impl GalleryState {
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// Advance to the next image, wrapping at the end.
    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    /// Step back to the previous image, wrapping at the start.
    pub fn prev(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + self.images.len() - 1) % self.images.len();
        }
    }
}

/// UI state for overlays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub modal: Option<ModalKind>,
    pub gallery: Option<GalleryState>,
}

impl UiState {
    pub fn open_modal(&mut self, kind: ModalKind) {
        self.modal = Some(kind);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Open the gallery at `index`. Empty image lists and out-of-range
    /// indexes are ignored / clamped.
    pub fn open_gallery(&mut self, images: Vec<String>, index: usize) {
        if images.is_empty() {
            return;
        }
        let index = index.min(images.len() - 1);
        self.gallery = Some(GalleryState { images, index });
    }

    pub fn close_gallery(&mut self) {
        self.gallery = None;
    }
}
