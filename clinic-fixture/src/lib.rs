//! Appointment fixture decoding and page view derivation.
//!
//! The fixture is a JSON array of loosely shaped records with Russian field
//! names. Some canonical fields live under more than one key depending on the
//! record vintage, so every field is resolved through an ordered candidate-key
//! table before the shared pipeline in `clinic_core` runs.

use clinic_core::{
    ClinicError, DashboardConfig, FilterState, HomeView, NormalizedAppointment, PatientSearchView,
    PaymentStatus, VisitsView,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

mod views;

pub use views::{
    appointment_detail, build_home_view, build_patient_directory, build_patient_search_view,
    build_visits_view, filter_options, home_title, patient_history, search_patients,
};

/// One fixture entry exactly as served, keyed by localized field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAppointment(pub Map<String, Value>);

impl RawAppointment {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// First populated text value among the candidate keys of `field`.
    pub fn text(&self, field: CanonicalField) -> Option<String> {
        field
            .candidate_keys()
            .iter()
            .find_map(|key| self.get(key).and_then(value_as_text))
    }

    /// First populated numeric value among the candidate keys of `field`.
    /// A populated but unparseable value yields `0.0` rather than falling through.
    pub fn number(&self, field: CanonicalField) -> f64 {
        field
            .candidate_keys()
            .iter()
            .find_map(|key| self.get(key).filter(|value| is_populated(value)))
            .map(value_as_number)
            .unwrap_or(0.0)
    }
}

impl From<Map<String, Value>> for RawAppointment {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Canonical appointment fields recognised in the fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    Id,
    DoctorId,
    PatientId,
    ServiceId,
    ConclusionId,
    Timestamp,
    DateLabel,
    Status,
    Price,
    Note,
    Complaint,
    AdminComment,
    Cash,
    Cashless,
}

impl CanonicalField {
    /// Keys to probe, in priority order.
    pub fn candidate_keys(self) -> &'static [&'static str] {
        match self {
            CanonicalField::Id => &["ID"],
            CanonicalField::DoctorId => &["Доктор ID"],
            CanonicalField::PatientId => &["Пациент ID"],
            CanonicalField::ServiceId => &["Услуга ID"],
            CanonicalField::ConclusionId => &["Заключение ID"],
            CanonicalField::Timestamp => &["Дата и время"],
            // "н" is Cyrillic in the first spelling.
            CanonicalField::DateLabel => &["Дата n8н", "Дата n8n"],
            CanonicalField::Status => &["Статус"],
            CanonicalField::Price => &["Стоимость", "Итого, сом"],
            CanonicalField::Note => &["Комментарий администратора", "Жалобы при обращении"],
            CanonicalField::Complaint => &["Жалобы при обращении"],
            CanonicalField::AdminComment => &["Комментарий администратора"],
            CanonicalField::Cash => &["Наличные"],
            CanonicalField::Cashless => &["Безналичные"],
        }
    }
}

fn is_populated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.trim().is_empty(),
        _ => true,
    }
}

fn value_as_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn value_as_number(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|number| number.is_finite()).unwrap_or(0.0)
}

/// Canonicalises one raw record. Never fails: missing text becomes empty,
/// missing or unparseable numbers become zero.
pub fn normalize_record(raw: &RawAppointment, config: &DashboardConfig) -> NormalizedAppointment {
    let text = |field: CanonicalField| raw.text(field).unwrap_or_default();
    let status_label = text(CanonicalField::Status);

    NormalizedAppointment {
        id: text(CanonicalField::Id),
        doctor_id: text(CanonicalField::DoctorId),
        patient_id: text(CanonicalField::PatientId),
        service_id: text(CanonicalField::ServiceId),
        timestamp: text(CanonicalField::Timestamp),
        date_label: text(CanonicalField::DateLabel),
        status: PaymentStatus::from_label(&status_label, config),
        status_label,
        price: raw.number(CanonicalField::Price),
        note: text(CanonicalField::Note),
        complaint: text(CanonicalField::Complaint),
        admin_comment: text(CanonicalField::AdminComment),
        cash: raw.number(CanonicalField::Cash),
        cashless: raw.number(CanonicalField::Cashless),
        conclusion_id: text(CanonicalField::ConclusionId),
    }
}

/// Decode a fixture body from a JSON string.
pub fn parse_fixture_str(body: &str) -> Result<Vec<RawAppointment>, ClinicError> {
    let value: Value =
        serde_json::from_str(body).map_err(|err| ClinicError::Parse(err.to_string()))?;
    parse_fixture_value(value)
}

/// Decode a fixture body from an already parsed `serde_json::Value`.
pub fn parse_fixture_value(value: Value) -> Result<Vec<RawAppointment>, ClinicError> {
    let Value::Array(entries) = value else {
        return Err(ClinicError::NotAnArray(json_kind(&value).to_string()));
    };

    let total = entries.len();
    let records: Vec<RawAppointment> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry {
            Value::Object(map) => Some(RawAppointment(map)),
            other => {
                tracing::debug!(index, kind = json_kind(&other), "skipping non-object fixture entry");
                None
            }
        })
        .collect();

    tracing::debug!(total, kept = records.len(), "decoded appointment fixture");
    Ok(records)
}

/// Decode a fixture body, treating any failure as an empty dataset.
pub fn load_fixture_lenient(body: &str) -> Vec<RawAppointment> {
    match parse_fixture_str(body) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(error = %err, "failed to load appointments fixture");
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A loaded fixture with every record already normalised.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fixture {
    records: Vec<NormalizedAppointment>,
    config: DashboardConfig,
}

impl Fixture {
    pub fn new(raw: &[RawAppointment], config: DashboardConfig) -> Self {
        let records = raw
            .iter()
            .map(|record| normalize_record(record, &config))
            .collect();
        Self { records, config }
    }

    /// Strict load: rejects bodies that are not a JSON array.
    pub fn from_json_str(body: &str, config: DashboardConfig) -> Result<Self, ClinicError> {
        Ok(Self::new(&parse_fixture_str(body)?, config))
    }

    /// Lenient load: a broken body produces an empty fixture.
    pub fn from_json_str_lenient(body: &str, config: DashboardConfig) -> Self {
        Self::new(&load_fixture_lenient(body), config)
    }

    pub fn from_value(value: Value, config: DashboardConfig) -> Result<Self, ClinicError> {
        Ok(Self::new(&parse_fixture_value(value)?, config))
    }

    pub fn records(&self) -> &[NormalizedAppointment] {
        &self.records
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn home_view(&self, today: &str, filters: &FilterState) -> HomeView {
        build_home_view(&self.records, today, filters, &self.config)
    }

    pub fn visits_view(
        &self,
        today: &str,
        filters: &FilterState,
        selected_id: Option<&str>,
    ) -> VisitsView {
        build_visits_view(&self.records, today, filters, selected_id, &self.config)
    }

    pub fn patient_search(
        &self,
        query: &str,
        selected_patient: Option<&str>,
        selected_appointment: Option<&str>,
    ) -> PatientSearchView {
        build_patient_search_view(
            &self.records,
            query,
            selected_patient,
            selected_appointment,
            &self.config,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawAppointment {
        match value {
            Value::Object(map) => RawAppointment(map),
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn price_prefers_cost_then_total() {
        let config = DashboardConfig::default();
        let both = raw(json!({ "Стоимость": 500, "Итого, сом": 900 }));
        assert_eq!(normalize_record(&both, &config).price, 500.0);

        let total_only = raw(json!({ "Стоимость": null, "Итого, сом": "900" }));
        assert_eq!(normalize_record(&total_only, &config).price, 900.0);

        let garbage = raw(json!({ "Стоимость": "n/a", "Итого, сом": 900 }));
        assert_eq!(normalize_record(&garbage, &config).price, 0.0);
    }

    #[test]
    fn date_label_accepts_both_spellings() {
        let config = DashboardConfig::default();
        let cyrillic = raw(json!({ "Дата n8н": " 16.11.2025 " }));
        assert_eq!(normalize_record(&cyrillic, &config).date_label, "16.11.2025");

        let latin = raw(json!({ "Дата n8n": "15.11.2025", "Дата n8н": "" }));
        assert_eq!(normalize_record(&latin, &config).date_label, "15.11.2025");
    }

    #[test]
    fn note_prefers_admin_comment() {
        let config = DashboardConfig::default();
        let record = raw(json!({
            "Комментарий администратора": "  перезвонить ",
            "Жалобы при обращении": "кашель"
        }));
        let normalized = normalize_record(&record, &config);
        assert_eq!(normalized.note, "перезвонить");
        assert_eq!(normalized.complaint, "кашель");

        let complaint_only = raw(json!({ "Жалобы при обращении": "кашель" }));
        assert_eq!(normalize_record(&complaint_only, &config).note, "кашель");
    }

    #[test]
    fn empty_record_coerces_to_defaults() {
        let config = DashboardConfig::default();
        let normalized = normalize_record(&RawAppointment::default(), &config);
        assert_eq!(normalized, NormalizedAppointment::default());
    }

    #[test]
    fn numeric_identifiers_become_text() {
        let config = DashboardConfig::default();
        let record = raw(json!({ "ID": 17, "Доктор ID": "D-1", "Статус": "Оплачено" }));
        let normalized = normalize_record(&record, &config);
        assert_eq!(normalized.id, "17");
        assert_eq!(normalized.status, PaymentStatus::Paid);
        assert_eq!(normalized.status_label, "Оплачено");
    }

    #[test]
    fn non_array_fixture_is_rejected() {
        let err = parse_fixture_str(r#"{"items": []}"#).unwrap_err();
        assert!(matches!(err, ClinicError::NotAnArray(kind) if kind == "object"));
        assert!(matches!(
            parse_fixture_str("not json"),
            Err(ClinicError::Parse(_))
        ));
    }

    #[test]
    fn lenient_load_swallows_errors() {
        assert!(load_fixture_lenient("<html>").is_empty());
        assert!(Fixture::from_json_str_lenient("null", DashboardConfig::default()).is_empty());
    }

    #[test]
    fn non_object_entries_are_skipped() {
        let records = parse_fixture_str(r#"[1, {"ID": "a"}, "x", null]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text(CanonicalField::Id).as_deref(), Some("a"));
    }
}
