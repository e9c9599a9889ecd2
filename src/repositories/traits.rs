use crate::models::ContactDraft;

/// Parent collection that receives validated drafts.
///
/// Returns `true` when the draft was accepted and `false` when it was
/// rejected as a duplicate. The form only calls this after both fields have
/// passed validation.
pub trait ContactCollection {
    /// Attempt to add a contact built from `draft`.
    fn add_contact(&mut self, draft: &ContactDraft) -> bool;
}

impl<F> ContactCollection for F
where
    F: FnMut(&ContactDraft) -> bool,
{
    fn add_contact(&mut self, draft: &ContactDraft) -> bool {
        self(draft)
    }
}
