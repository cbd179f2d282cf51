//! "Copied!" feedback for code sample copy buttons.
//!
//! At most one index shows feedback at a time. Each copy issues a token; the
//! expiry timer for that copy clears the feedback only if no later copy has
//! replaced it.

#[cfg(test)]
#[path = "copy_test.rs"]
mod copy_test;

/// How long a copy button shows "Copied!".
pub const COPY_FEEDBACK_MS: u64 = 2000;

/// Handle for one copy's feedback window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyToken(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied: Option<(usize, CopyToken)>,
    issued: u64,
}

impl CopyFeedback {
    /// Mark `index` as just copied, replacing any other index.
    pub fn mark_copied(&mut self, index: usize) -> CopyToken {
        self.issued += 1;
        let token = CopyToken(self.issued);
        self.copied = Some((index, token));
        token
    }

    /// End the feedback window for `token`; no-op if a later copy replaced it.
    pub fn expire(&mut self, token: CopyToken) -> bool {
        match self.copied {
            Some((_, current)) if current == token => {
                self.copied = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_copied(&self, index: usize) -> bool {
        self.copied.is_some_and(|(i, _)| i == index)
    }
}

/// Button label for a code sample.
pub fn copy_label(copied: bool) -> &'static str {
    if copied { "Copied!" } else { "Copy" }
}
