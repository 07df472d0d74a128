//! Session record - the accumulated state for one in-flight session.

use std::collections::BTreeMap;

use crate::domain::foundation::{SessionId, SessionStatus};

use super::event::Dimension;

/// Accumulated telemetry for one session.
///
/// # Invariants
///
/// - `session_id` and `website_url` come from the first event and never change
/// - `resize_from` and `resize_to` are either both set or both unset
/// - `copy_paste_by_form` only gains or updates entries
/// - `status` is `Completed` exactly when `form_completion_time_seconds` is set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    session_id: SessionId,
    website_url: String,
    resize_from: Option<Dimension>,
    resize_to: Option<Dimension>,
    copy_paste_by_form: Option<BTreeMap<String, bool>>,
    form_completion_time_seconds: Option<u64>,
    status: SessionStatus,
}

impl SessionRecord {
    /// Creates an empty, active record for a session.
    pub fn new(session_id: SessionId, website_url: impl Into<String>) -> Self {
        Self {
            session_id,
            website_url: website_url.into(),
            resize_from: None,
            resize_to: None,
            copy_paste_by_form: None,
            form_completion_time_seconds: None,
            status: SessionStatus::Active,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn website_url(&self) -> &str {
        &self.website_url
    }

    pub fn resize_from(&self) -> Option<&Dimension> {
        self.resize_from.as_ref()
    }

    pub fn resize_to(&self) -> Option<&Dimension> {
        self.resize_to.as_ref()
    }

    pub fn copy_paste_by_form(&self) -> Option<&BTreeMap<String, bool>> {
        self.copy_paste_by_form.as_ref()
    }

    /// Last observed paste flag for a form, if any event mentioned it.
    pub fn pasted_in(&self, form_id: &str) -> Option<bool> {
        self.copy_paste_by_form
            .as_ref()
            .and_then(|forms| forms.get(form_id).copied())
    }

    pub fn form_completion_time_seconds(&self) -> Option<u64> {
        self.form_completion_time_seconds
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    // ───────────────────────────────────────────────────────────────
    // Mutations (driven by the aggregator only)
    // ───────────────────────────────────────────────────────────────

    pub(super) fn set_origin(&mut self, session_id: &SessionId, website_url: &str) {
        if &self.session_id != session_id {
            self.session_id = session_id.clone();
        }
        if self.website_url != website_url {
            self.website_url = website_url.to_string();
        }
    }

    pub(super) fn record_copy_paste(&mut self, form_id: &str, pasted: bool) {
        self.copy_paste_by_form
            .get_or_insert_with(BTreeMap::new)
            .insert(form_id.to_string(), pasted);
    }

    pub(super) fn record_resize(&mut self, from: &Dimension, to: &Dimension) {
        self.resize_from = Some(from.clone());
        self.resize_to = Some(to.clone());
    }

    pub(super) fn complete(&mut self, time_taken_seconds: u64) {
        self.form_completion_time_seconds = Some(time_taken_seconds);
        self.status = SessionStatus::Completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_record() -> SessionRecord {
        SessionRecord::new(SessionId::new("s1").unwrap(), "https://example.com")
    }

    #[test]
    fn new_record_is_empty_and_active() {
        let record = test_record();
        assert_eq!(record.session_id().as_str(), "s1");
        assert_eq!(record.website_url(), "https://example.com");
        assert!(record.resize_from().is_none());
        assert!(record.resize_to().is_none());
        assert!(record.copy_paste_by_form().is_none());
        assert!(record.form_completion_time_seconds().is_none());
        assert_eq!(record.status(), SessionStatus::Active);
    }

    #[test]
    fn copy_paste_map_is_created_lazily() {
        let mut record = test_record();
        record.record_copy_paste("f1", true);
        assert_eq!(record.pasted_in("f1"), Some(true));
        assert_eq!(record.pasted_in("f2"), None);
    }

    #[test]
    fn copy_paste_overwrites_only_its_own_form() {
        let mut record = test_record();
        record.record_copy_paste("f1", true);
        record.record_copy_paste("f2", true);
        record.record_copy_paste("f1", false);

        assert_eq!(record.pasted_in("f1"), Some(false));
        assert_eq!(record.pasted_in("f2"), Some(true));
        assert_eq!(record.copy_paste_by_form().unwrap().len(), 2);
    }

    #[test]
    fn resize_sets_both_dimensions() {
        let mut record = test_record();
        record.record_resize(&Dimension::new("10", "10"), &Dimension::new("5", "5"));
        assert_eq!(record.resize_from(), Some(&Dimension::new("10", "10")));
        assert_eq!(record.resize_to(), Some(&Dimension::new("5", "5")));
    }

    #[test]
    fn complete_sets_time_and_status() {
        let mut record = test_record();
        record.complete(42);
        assert_eq!(record.form_completion_time_seconds(), Some(42));
        assert!(record.is_complete());
    }
}
