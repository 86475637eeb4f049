//! Text clipboard access for share links.

use thiserror::Error;

#[derive(Debug, Error)]
#[error("Clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Somewhere share links can be copied to.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<C: Clipboard + ?Sized> Clipboard for Box<C> {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).set_text(text)
    }
}

/// Clipboard that keeps the last copied text in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// The desktop clipboard.
#[cfg(feature = "native")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "native")]
impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "native")]
impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| ClipboardError(e.to_string()))
    }
}
