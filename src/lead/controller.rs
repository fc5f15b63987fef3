use serde::Serialize;

use crate::lead::rate_limit::{self, Gate};
use crate::lead::store::KeyValueStore;

pub const BOOKINGS_TABLE: &str = "schedule_bookings";
pub const LEAD_SOURCE: &str = "landing-form";
pub const UNKNOWN_DEVICE: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum VisaType {
    #[default]
    #[serde(rename = "Student Visa")]
    Student,
    #[serde(rename = "Work Visa")]
    Work,
    #[serde(rename = "Tourist Visa")]
    Tourist,
    #[serde(rename = "Seasonal Visa")]
    Seasonal,
}

impl VisaType {
    pub const ALL: [VisaType; 4] = [
        VisaType::Student,
        VisaType::Work,
        VisaType::Tourist,
        VisaType::Seasonal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VisaType::Student => "Student Visa",
            VisaType::Work => "Work Visa",
            VisaType::Tourist => "Tourist Visa",
            VisaType::Seasonal => "Seasonal Visa",
        }
    }

    pub fn from_label(label: &str) -> Option<VisaType> {
        VisaType::ALL.into_iter().find(|v| v.label() == label)
    }
}

/// What the visitor typed. Lives in the form component's state; required-field
/// checks (name, phone) are the form's job via its markup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeadForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub visa_type: VisaType,
}

/// The row written to the bookings table. Built fresh per attempt and never
/// mutated or retried afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadRecord {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub visa_type: VisaType,
    pub device_id: String,
    pub source: &'static str,
}

impl LeadRecord {
    pub fn new(form: &LeadForm, device_id: Option<&str>) -> Self {
        Self {
            name: form.name.clone(),
            phone: form.phone.clone(),
            email: form.email.clone(),
            visa_type: form.visa_type,
            device_id: device_id.unwrap_or(UNKNOWN_DEVICE).to_string(),
            source: LEAD_SOURCE,
        }
    }
}

/// Submission lifecycle as the form surfaces it. `Failed` and `Succeeded`
/// both return to `Idle` on the next user-initiated submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    RateLimited { retry_in_ms: i64 },
    NotConfigured,
    /// Transport or server-side failure. The detail is for the console, the
    /// visitor only sees the generic retry notice.
    Insert(String),
}

impl SubmitError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::RateLimited { .. } => {
                "You can submit once per day from this device. Please try again tomorrow."
            }
            SubmitError::NotConfigured => {
                "Booking is not configured. Set SUPABASE_URL and SUPABASE_ANON_KEY."
            }
            SubmitError::Insert(_) => "Could not submit right now. Please retry in a moment.",
        }
    }
}

/// Destination for finished lead records.
#[allow(async_fn_in_trait)]
pub trait LeadSink {
    async fn insert(&self, table: &str, record: &LeadRecord) -> Result<(), String>;
}

/// Drives one submission attempt end to end. Collaborators are injected so
/// the sequence can run against fakes; the sink is `None` when the build
/// carries no backend configuration.
pub struct LeadController<'a, S, K> {
    store: &'a S,
    sink: Option<&'a K>,
}

impl<'a, S: KeyValueStore, K: LeadSink> LeadController<'a, S, K> {
    pub fn new(store: &'a S, sink: Option<&'a K>) -> Self {
        Self { store, sink }
    }

    /// Gate, then insert, then mark. The marker is written only after a
    /// successful insert, so a failed attempt does not consume the daily
    /// allowance and the next submit re-runs the whole sequence.
    pub async fn submit(
        &self,
        form: &LeadForm,
        device_id: Option<&str>,
        now_ms: i64,
    ) -> Result<(), SubmitError> {
        if let Gate::Denied { retry_in_ms } = rate_limit::check(self.store, now_ms) {
            return Err(SubmitError::RateLimited { retry_in_ms });
        }
        let sink = self.sink.ok_or(SubmitError::NotConfigured)?;
        let record = LeadRecord::new(form, device_id);
        sink.insert(BOOKINGS_TABLE, &record)
            .await
            .map_err(SubmitError::Insert)?;
        rate_limit::record_submission(self.store, now_ms);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::rate_limit::{LAST_SUBMISSION_KEY, RESUBMIT_WINDOW_MS};
    use crate::lead::store::MemoryStore;
    use serde_json::json;
    use std::cell::RefCell;

    struct FakeSink {
        inserted: RefCell<Vec<LeadRecord>>,
        fail_with: Option<&'static str>,
    }

    impl FakeSink {
        fn accepting() -> Self {
            Self {
                inserted: RefCell::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(reason: &'static str) -> Self {
            Self {
                inserted: RefCell::new(Vec::new()),
                fail_with: Some(reason),
            }
        }
    }

    impl LeadSink for FakeSink {
        async fn insert(&self, table: &str, record: &LeadRecord) -> Result<(), String> {
            assert_eq!(table, BOOKINGS_TABLE);
            self.inserted.borrow_mut().push(record.clone());
            match self.fail_with {
                Some(reason) => Err(reason.to_string()),
                None => Ok(()),
            }
        }
    }

    fn work_visa_form() -> LeadForm {
        LeadForm {
            name: "Aarav".to_string(),
            phone: "9800000000".to_string(),
            email: String::new(),
            visa_type: VisaType::Work,
        }
    }

    #[tokio::test]
    async fn fresh_device_submission_inserts_and_marks() {
        let store = MemoryStore::new();
        let sink = FakeSink::accepting();
        let controller = LeadController::new(&store, Some(&sink));
        let now = 1_700_000_000_000;

        let outcome = controller
            .submit(&work_visa_form(), Some("dev-abc"), now)
            .await;

        assert_eq!(outcome, Ok(()));
        let inserted = sink.inserted.borrow();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].name, "Aarav");
        assert_eq!(inserted[0].phone, "9800000000");
        assert_eq!(inserted[0].email, "");
        assert_eq!(inserted[0].visa_type, VisaType::Work);
        assert_eq!(inserted[0].device_id, "dev-abc");
        assert_eq!(inserted[0].source, LEAD_SOURCE);
        assert_eq!(store.get(LAST_SUBMISSION_KEY).as_deref(), Some(now.to_string().as_str()));
    }

    #[tokio::test]
    async fn second_attempt_an_hour_later_short_circuits() {
        let store = MemoryStore::new();
        let sink = FakeSink::accepting();
        let controller = LeadController::new(&store, Some(&sink));
        let first_at = 1_700_000_000_000;
        let one_hour = 60 * 60 * 1000;

        controller
            .submit(&work_visa_form(), Some("dev-abc"), first_at)
            .await
            .unwrap();
        let outcome = controller
            .submit(&work_visa_form(), Some("dev-abc"), first_at + one_hour)
            .await;

        assert_eq!(
            outcome,
            Err(SubmitError::RateLimited {
                retry_in_ms: RESUBMIT_WINDOW_MS - one_hour
            })
        );
        // The denial happened before any network dispatch.
        assert_eq!(sink.inserted.borrow().len(), 1);
    }

    #[tokio::test]
    async fn window_reopens_exactly_24_hours_after_success() {
        let store = MemoryStore::new();
        let sink = FakeSink::accepting();
        let controller = LeadController::new(&store, Some(&sink));
        let first_at = 1_700_000_000_000;

        controller
            .submit(&work_visa_form(), Some("dev-abc"), first_at)
            .await
            .unwrap();
        let outcome = controller
            .submit(&work_visa_form(), Some("dev-abc"), first_at + RESUBMIT_WINDOW_MS)
            .await;

        assert_eq!(outcome, Ok(()));
        assert_eq!(sink.inserted.borrow().len(), 2);
    }

    #[tokio::test]
    async fn missing_sink_fails_fast_without_marking() {
        let store = MemoryStore::new();
        let controller: LeadController<'_, _, FakeSink> = LeadController::new(&store, None);

        let outcome = controller.submit(&work_visa_form(), None, 1_000).await;

        assert_eq!(outcome, Err(SubmitError::NotConfigured));
        assert_eq!(store.get(LAST_SUBMISSION_KEY), None);
    }

    #[tokio::test]
    async fn failed_insert_leaves_the_window_open() {
        let store = MemoryStore::new();
        let failing = FakeSink::failing("503 from upstream");
        let now = 1_700_000_000_000;

        let outcome = LeadController::new(&store, Some(&failing))
            .submit(&work_visa_form(), Some("dev-abc"), now)
            .await;
        assert_eq!(
            outcome,
            Err(SubmitError::Insert("503 from upstream".to_string()))
        );
        assert_eq!(store.get(LAST_SUBMISSION_KEY), None);

        // An immediate retry is judged against the prior marker only, so it
        // goes straight through once the sink recovers.
        let recovered = FakeSink::accepting();
        let retry = LeadController::new(&store, Some(&recovered))
            .submit(&work_visa_form(), Some("dev-abc"), now + 1)
            .await;
        assert_eq!(retry, Ok(()));
    }

    #[tokio::test]
    async fn absent_device_identity_falls_back_to_sentinel() {
        let store = MemoryStore::new();
        let sink = FakeSink::accepting();

        LeadController::new(&store, Some(&sink))
            .submit(&work_visa_form(), None, 1_000)
            .await
            .unwrap();

        assert_eq!(sink.inserted.borrow()[0].device_id, UNKNOWN_DEVICE);
    }

    #[test]
    fn record_serializes_with_the_table_column_names() {
        let record = LeadRecord::new(&work_visa_form(), Some("dev-abc"));
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "name": "Aarav",
                "phone": "9800000000",
                "email": "",
                "visa_type": "Work Visa",
                "device_id": "dev-abc",
                "source": "landing-form",
            })
        );
    }

    #[test]
    fn visa_labels_round_trip_from_the_select_element() {
        for visa in VisaType::ALL {
            assert_eq!(VisaType::from_label(visa.label()), Some(visa));
        }
        assert_eq!(VisaType::from_label("Business Visa"), None);
    }

    #[test]
    fn form_defaults_match_the_cleared_state() {
        let form = LeadForm::default();
        assert!(form.name.is_empty());
        assert!(form.phone.is_empty());
        assert!(form.email.is_empty());
        assert_eq!(form.visa_type, VisaType::Student);
    }
}
