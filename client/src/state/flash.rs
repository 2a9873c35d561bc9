//! Single-slot flash message channel.
//!
//! DESIGN
//! ======
//! One pending message at most: `set` overwrites, `take` consumes. `App`
//! creates one slot and hands it to pages as a prop; a page publishes before
//! navigating and the next page's banner takes it on mount.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

/// How long a flash stays visible unless the publisher says otherwise.
pub const DEFAULT_FLASH_DURATION_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlashKind {
    #[default]
    Success,
    Error,
    Info,
}

impl FlashKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
            FlashKind::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashMessage {
    pub text: String,
    pub kind: FlashKind,
    pub duration_ms: u32,
}

impl FlashMessage {
    #[must_use]
    pub fn new(text: impl Into<String>, kind: FlashKind, duration_ms: u32) -> Self {
        Self { text: text.into(), kind, duration_ms }
    }

    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, FlashKind::Success, DEFAULT_FLASH_DURATION_MS)
    }

    /// CSS modifier class for the banner.
    #[must_use]
    pub fn css_class(&self) -> String {
        format!("flash flash--{}", self.kind.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlashSlot {
    pending: Option<FlashMessage>,
}

impl FlashSlot {
    /// Publish a message, replacing any that was not consumed yet.
    pub fn set(&mut self, message: FlashMessage) {
        self.pending = Some(message);
    }

    /// Consume the pending message.
    pub fn take(&mut self) -> Option<FlashMessage> {
        self.pending.take()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&FlashMessage> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}
