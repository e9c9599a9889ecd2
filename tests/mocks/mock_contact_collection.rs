use contact_form::models::ContactDraft;
use contact_form::repositories::ContactCollection;

/// Mock contact collection for testing.
///
/// Answers every `add_contact` call with a fixed decision and records the
/// drafts it was offered for verification.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct MockContactCollection {
    accept: bool,
    received: Vec<ContactDraft>,
}

#[allow(dead_code)]
impl MockContactCollection {
    /// A collection that accepts every draft.
    pub fn accepting() -> Self {
        Self {
            accept: true,
            received: Vec::new(),
        }
    }

    /// A collection that rejects every draft as a duplicate.
    pub fn rejecting() -> Self {
        Self {
            accept: false,
            received: Vec::new(),
        }
    }

    /// Change the decision for subsequent calls.
    pub fn set_accept(&mut self, accept: bool) {
        self.accept = accept;
    }

    /// Number of times `add_contact` was called.
    pub fn call_count(&self) -> usize {
        self.received.len()
    }

    /// Drafts passed to `add_contact`, in call order.
    pub fn received(&self) -> &[ContactDraft] {
        &self.received
    }
}

impl ContactCollection for MockContactCollection {
    fn add_contact(&mut self, draft: &ContactDraft) -> bool {
        self.received.push(draft.clone());
        self.accept
    }
}
