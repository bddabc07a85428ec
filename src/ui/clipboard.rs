//! Clipboard sink backed by `arboard`.

use arboard::Clipboard;

use crate::core::ClipboardSink;
use crate::error::{EmomeError, EmomeResult};

/// System clipboard, opened on first copy.
///
/// The handle is kept for the life of the app: on X11 and Wayland the copied
/// text is served by this process and disappears when the handle is dropped.
#[derive(Default)]
pub struct ArboardClipboard {
    inner: Option<Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for ArboardClipboard {
    fn copy_text(&mut self, text: &str) -> EmomeResult<()> {
        let mut clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new()
                .map_err(|e| EmomeError::Clipboard(format!("Failed to access clipboard: {}", e)))?,
        };

        let result = clipboard
            .set_text(text)
            .map_err(|e| EmomeError::Clipboard(format!("Failed to copy to clipboard: {}", e)));
        self.inner = Some(clipboard);
        result
    }
}
