//! Standalone image-preview modal.
//!
//! With a live console, `preview_image` goes through the dashboard
//! controller. A page with no dashboard concept at all carries its own
//! modal markup instead, addressed by three well-known element ids; this
//! fallback fills them in and opens the dialog.

use tracing::debug;

use crate::page::Page;

pub const PREVIEW_IMAGE_ELEMENT: &str = "preview-image-element";
pub const PREVIEW_IMAGE_TITLE: &str = "preview-image-title";
pub const PREVIEW_IMAGE_DIALOG: &str = "preview-image-dialog";

/// Present the local preview modal for `src`.
///
/// Returns `false` when the page has no complete modal markup; nothing
/// is mutated in that case.
pub fn present_local_preview(page: &mut Page, src: &str, title: &str) -> bool {
    let complete = page.element(PREVIEW_IMAGE_ELEMENT).is_some()
        && page.element(PREVIEW_IMAGE_TITLE).is_some()
        && page.element(PREVIEW_IMAGE_DIALOG).is_some();
    if !complete {
        debug!("preview: page has no modal markup");
        return false;
    }

    if let Some(image) = page.element_mut(PREVIEW_IMAGE_ELEMENT) {
        image.set_attribute("src", src);
    }
    if let Some(caption) = page.element_mut(PREVIEW_IMAGE_TITLE) {
        caption.set_text(title);
    }
    if let Some(dialog) = page.element_mut(PREVIEW_IMAGE_DIALOG) {
        dialog.set_attribute("open", "true");
    }
    true
}
