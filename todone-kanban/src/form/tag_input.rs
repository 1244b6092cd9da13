//! Tag entry with normalization and limits.
//!
//! Raw input is trimmed, lowercased, and stripped of commas before it is
//! checked. A rejected tag leaves both the tag list and the pending text as
//! they were.

use crate::defaults::{MAX_TAGS, MAX_TAG_LEN};
use crate::error::FormError;
use tracing::trace;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagInput {
    tags: Vec<String>,
    pending: String,
}

impl TagInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing tag list, e.g. when editing a task
    pub fn from_tags(tags: impl IntoIterator<Item = String>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
            pending: String::new(),
        }
    }

    /// Normalize raw text the way it will be stored
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase().replace(',', "")
    }

    /// Check a normalized tag against the current list
    fn check(&self, tag: &str) -> Result<(), FormError> {
        if tag.is_empty() {
            return Err(FormError::EmptyTag);
        }
        if tag.chars().count() > MAX_TAG_LEN {
            return Err(FormError::TagTooLong {
                tag: tag.to_string(),
                max: MAX_TAG_LEN,
            });
        }
        if self.tags.iter().any(|t| t == tag) {
            return Err(FormError::DuplicateTag {
                tag: tag.to_string(),
            });
        }
        if self.tags.len() >= MAX_TAGS {
            return Err(FormError::TooManyTags { max: MAX_TAGS });
        }
        Ok(())
    }

    /// Add a tag from raw text
    pub fn add(&mut self, raw: &str) -> Result<(), FormError> {
        let tag = Self::normalize(raw);
        self.check(&tag)?;
        trace!(%tag, "tag added");
        self.tags.push(tag);
        Ok(())
    }

    /// Replace the text being typed
    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Enter, comma, or blur: turn the pending text into a tag. The pending
    /// text is cleared only when the tag is accepted.
    pub fn commit_pending(&mut self) -> Result<(), FormError> {
        let pending = std::mem::take(&mut self.pending);
        match self.add(&pending) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.pending = pending;
                Err(e)
            }
        }
    }

    /// Backspace: with nothing typed, removes and returns the last tag
    pub fn backspace(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            self.tags.pop()
        } else {
            None
        }
    }

    /// Remove a tag by value
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn into_tags(self) -> Vec<String> {
        self.tags
    }

    /// No more tags can be added
    pub fn is_full(&self) -> bool {
        self.tags.len() >= MAX_TAGS
    }

    /// Validate a complete tag list as it would be stored on a task
    pub fn validate(tags: &[String]) -> Result<(), FormError> {
        if tags.len() > MAX_TAGS {
            return Err(FormError::TooManyTags { max: MAX_TAGS });
        }
        let mut seen = TagInput::new();
        for tag in tags {
            if !tag.is_empty() && Self::normalize(tag) != *tag {
                return Err(FormError::TagNotNormalized { tag: tag.clone() });
            }
            seen.check(tag)?;
            seen.tags.push(tag.clone());
        }
        Ok(())
    }
}
