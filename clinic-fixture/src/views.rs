use std::collections::{hash_map::Entry, HashMap, HashSet};

use clinic_core::{
    doctor_name, filter_appointments, format_currency, format_time_of_day, group_by_doctor,
    patient_name, patient_phone, recency_cmp, resolve_effective_date, sort_chronologically,
    split_date_part, year_of_label, AppointmentDetail, AppointmentRow, DashboardConfig,
    DoctorGroup, FilterOptions, FilterState, HistoryRow, HomeView, NormalizedAppointment, Patient,
    PatientSearchView, VisitRow, VisitsView,
};

const PLACEHOLDER: &str = "—";

/// Distinct filter values present in the fixture.
pub fn filter_options(records: &[NormalizedAppointment]) -> FilterOptions {
    fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut seen = HashSet::new();
        values
            .map(str::trim)
            .filter(|value| !value.is_empty() && seen.insert(*value))
            .map(str::to_string)
            .collect()
    }

    let mut years: Vec<i32> = records
        .iter()
        .filter_map(|record| year_of_label(&record.date_label))
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    years.sort_unstable_by(|a, b| b.cmp(a));

    FilterOptions {
        doctors: distinct(records.iter().map(|r| r.doctor_id.as_str())),
        patients: distinct(records.iter().map(|r| r.patient_id.as_str())),
        services: distinct(records.iter().map(|r| r.service_id.as_str())),
        years,
    }
}

/// Heading above the appointment list.
pub fn home_title(filters: &FilterState, effective_date: &str, today: &str) -> String {
    if let Some(date) = filters.active_date() {
        format!("Приемы на {date}")
    } else if effective_date == today {
        format!("Приемы сегодня ({today})")
    } else {
        format!("Приемы на {effective_date}")
    }
}

fn select_day<'a>(
    records: &'a [NormalizedAppointment],
    today: &str,
    filters: &FilterState,
) -> (String, Vec<&'a NormalizedAppointment>) {
    let effective_date = resolve_effective_date(records, today);
    let mut hits = filter_appointments(records, filters, Some(effective_date.as_str()));
    sort_chronologically(&mut hits);
    tracing::debug!(
        today,
        effective_date = %effective_date,
        matched = hits.len(),
        "selected appointments for day"
    );
    (effective_date, hits)
}

/// Home page: the day's appointments as a flat chronological list.
pub fn build_home_view(
    records: &[NormalizedAppointment],
    today: &str,
    filters: &FilterState,
    config: &DashboardConfig,
) -> HomeView {
    let (effective_date, hits) = select_day(records, today, filters);

    let rows = hits
        .into_iter()
        .map(|record| AppointmentRow {
            id: record.id.clone(),
            time: format_time_of_day(&record.timestamp),
            patient: non_empty_or(&record.patient_id, PLACEHOLDER),
            note: record.note.clone(),
            price: record.price,
            price_label: format_currency(record.price, config),
            paid: record.status.is_paid(),
        })
        .collect();

    HomeView {
        today: today.to_string(),
        title: home_title(filters, &effective_date, today),
        effective_date,
        filters: filters.clone(),
        options: filter_options(records),
        rows,
    }
}

/// Visits page: the day's appointments partitioned by doctor.
///
/// `selected_id` picks the appointment shown in the detail card; when it is
/// absent or unknown the first appointment of the first group is used.
pub fn build_visits_view(
    records: &[NormalizedAppointment],
    today: &str,
    filters: &FilterState,
    selected_id: Option<&str>,
    config: &DashboardConfig,
) -> VisitsView {
    let (effective_date, hits) = select_day(records, today, filters);

    let selected_record = selected_id
        .and_then(|id| hits.iter().copied().find(|record| record.id == id))
        .or_else(|| hits.first().copied());

    let groups = group_by_doctor(&hits)
        .into_iter()
        .map(|(doctor_id, items)| DoctorGroup {
            display_name: doctor_name(&doctor_id),
            items: items
                .into_iter()
                .map(|record| VisitRow {
                    id: record.id.clone(),
                    time: format_time_of_day(&record.timestamp),
                    patient_name: patient_name(&record.patient_id),
                    price: record.price,
                    price_label: format_currency(record.price, config),
                    paid: record.status.is_paid(),
                })
                .collect(),
            doctor_id,
        })
        .collect();

    VisitsView {
        title: home_title(&FilterState::default(), &effective_date, today),
        effective_date,
        groups,
        selected_id: selected_record.map(|record| record.id.clone()),
        selected: selected_record.map(|record| appointment_detail(record, config)),
    }
}

/// Detail card for one appointment.
pub fn appointment_detail(
    record: &NormalizedAppointment,
    config: &DashboardConfig,
) -> AppointmentDetail {
    AppointmentDetail {
        id: record.id.clone(),
        date: split_date_part(&record.timestamp).to_string(),
        time: format_time_of_day(&record.timestamp),
        patient_id: record.patient_id.clone(),
        patient_name: patient_name(&record.patient_id),
        doctor_id: record.doctor_id.clone(),
        doctor_name: doctor_name(&record.doctor_id),
        service: format!("Услуга {}", record.service_id),
        status: record.status,
        status_label: record.status_label.clone(),
        total_label: format_currency(record.price, config),
        cash_label: format_currency(record.cash, config),
        cashless_label: format_currency(record.cashless, config),
        complaint: non_empty_or(&record.complaint, "нет."),
        admin_comment: non_empty_or(&record.admin_comment, PLACEHOLDER),
    }
}

/// Folds every record into one entry per patient, most recent visit first.
pub fn build_patient_directory(
    records: &[NormalizedAppointment],
    config: &DashboardConfig,
) -> Vec<Patient> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut patients: Vec<Patient> = Vec::new();

    for record in records {
        if record.patient_id.is_empty() {
            continue;
        }
        match index.entry(record.patient_id.as_str()) {
            Entry::Occupied(slot) => {
                let patient = &mut patients[*slot.get()];
                patient.visit_count += 1;
                if recency_cmp(&record.timestamp, &patient.last_visit).is_gt() {
                    patient.last_visit = record.timestamp.clone();
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(patients.len());
                patients.push(Patient {
                    id: record.patient_id.clone(),
                    display_name: patient_name(&record.patient_id),
                    display_phone: patient_phone(&record.patient_id, config),
                    last_visit: record.timestamp.clone(),
                    visit_count: 1,
                });
            }
        }
    }

    patients.sort_by(|a, b| recency_cmp(&b.last_visit, &a.last_visit));
    patients
}

/// Patients whose name (case-insensitive), phone or id contains `query`.
pub fn search_patients<'a>(patients: &'a [Patient], query: &str) -> Vec<&'a Patient> {
    if query.is_empty() {
        return patients.iter().collect();
    }
    let lowered = query.to_lowercase();
    patients
        .iter()
        .filter(|patient| {
            patient.display_name.to_lowercase().contains(&lowered)
                || patient.display_phone.contains(query)
                || patient.id.contains(query)
        })
        .collect()
}

/// A patient's appointments in chronological order.
pub fn patient_history<'a>(
    records: &'a [NormalizedAppointment],
    patient_id: &str,
) -> Vec<&'a NormalizedAppointment> {
    let filters = FilterState {
        patient: Some(patient_id.to_string()),
        ..FilterState::default()
    };
    let mut history = filter_appointments(records, &filters, None);
    sort_chronologically(&mut history);
    history
}

/// Patient search page: directory, the selected patient's history and the
/// selected appointment.
pub fn build_patient_search_view(
    records: &[NormalizedAppointment],
    query: &str,
    selected_patient: Option<&str>,
    selected_appointment: Option<&str>,
    config: &DashboardConfig,
) -> PatientSearchView {
    let directory = build_patient_directory(records, config);
    let matches: Vec<Patient> = search_patients(&directory, query)
        .into_iter()
        .cloned()
        .collect();

    let chosen = selected_patient
        .and_then(|id| directory.iter().find(|patient| patient.id == id))
        .or_else(|| matches.first())
        .cloned();

    let history = chosen
        .as_ref()
        .map(|patient| patient_history(records, &patient.id))
        .unwrap_or_default();

    let selected = selected_appointment
        .and_then(|id| history.iter().find(|record| record.id == id))
        .map(|record| appointment_detail(record, config));

    let history = history
        .into_iter()
        .map(|record| HistoryRow {
            id: record.id.clone(),
            time: format_time_of_day(&record.timestamp),
            doctor_label: format!("Доктор {}", non_empty_or(&record.doctor_id, PLACEHOLDER)),
            note: record.note.clone(),
            price: record.price,
            price_label: format_currency(record.price, config),
            paid: record.status.is_paid(),
        })
        .collect();

    PatientSearchView {
        query: query.to_string(),
        patients: matches,
        selected_patient: chosen,
        history,
        selected,
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_core::PaymentStatus;

    fn appt(id: &str, doctor: &str, patient: &str, timestamp: &str) -> NormalizedAppointment {
        NormalizedAppointment {
            id: id.to_string(),
            doctor_id: doctor.to_string(),
            patient_id: patient.to_string(),
            service_id: "S1".to_string(),
            timestamp: timestamp.to_string(),
            date_label: split_date_part(timestamp).to_string(),
            price: 1000.0,
            ..NormalizedAppointment::default()
        }
    }

    #[test]
    fn options_are_distinct_and_years_descending() {
        let records = vec![
            appt("1", "D2", "P1", "01.02.2024 9:00:00"),
            appt("2", "D1", "P1", "01.02.2025 9:00:00"),
            appt("3", "D2", "", "01.02.2023 9:00:00"),
        ];
        let options = filter_options(&records);
        assert_eq!(options.doctors, vec!["D2", "D1"]);
        assert_eq!(options.patients, vec!["P1"]);
        assert_eq!(options.services, vec!["S1"]);
        assert_eq!(options.years, vec![2025, 2024, 2023]);
    }

    #[test]
    fn titles_reflect_date_source() {
        let none = FilterState::default();
        assert_eq!(
            home_title(&none, "16.11.2025", "16.11.2025"),
            "Приемы сегодня (16.11.2025)"
        );
        assert_eq!(
            home_title(&none, "15.11.2025", "16.11.2025"),
            "Приемы на 15.11.2025"
        );
        let explicit = FilterState {
            date: Some("01.01.2025".into()),
            ..FilterState::default()
        };
        assert_eq!(
            home_title(&explicit, "15.11.2025", "16.11.2025"),
            "Приемы на 01.01.2025"
        );
    }

    #[test]
    fn home_rows_use_placeholder_for_missing_patient() {
        let records = vec![appt("1", "D1", "", "16.11.2025 9:00:00")];
        let view = build_home_view(
            &records,
            "16.11.2025",
            &FilterState::default(),
            &DashboardConfig::default(),
        );
        assert_eq!(view.rows[0].patient, PLACEHOLDER);
        assert_eq!(view.rows[0].price_label, "1000");
    }

    #[test]
    fn visits_select_first_item_by_default() {
        let records = vec![
            appt("b", "D2", "P1", "16.11.2025 11:00:00"),
            appt("a", "D1", "P2", "16.11.2025 9:00:00"),
            appt("c", "D2", "P3", "16.11.2025 8:00:00"),
        ];
        let config = DashboardConfig::default();
        let view = build_visits_view(&records, "16.11.2025", &FilterState::default(), None, &config);

        assert_eq!(view.groups.len(), 2);
        assert_eq!(view.groups[0].doctor_id, "D2");
        assert_eq!(view.groups[0].items[0].id, "c");
        assert_eq!(view.groups[0].items[1].id, "b");
        assert_eq!(view.groups[1].doctor_id, "D1");
        assert_eq!(view.total_items(), 3);
        assert_eq!(view.selected_id.as_deref(), Some("c"));

        let chosen =
            build_visits_view(&records, "16.11.2025", &FilterState::default(), Some("a"), &config);
        assert_eq!(chosen.selected_id.as_deref(), Some("a"));
        assert_eq!(
            chosen.selected.map(|detail| detail.patient_name),
            Some(patient_name("P2"))
        );
    }

    #[test]
    fn detail_uses_placeholders() {
        let mut record = appt("1", "D1", "P1", "16.11.2025 9:05:00");
        record.cash = 600.0;
        record.status = PaymentStatus::Paid;
        let detail = appointment_detail(&record, &DashboardConfig::default());
        assert_eq!(detail.date, "16.11.2025");
        assert_eq!(detail.time, "09:05");
        assert_eq!(detail.service, "Услуга S1");
        assert_eq!(detail.cash_label, "600");
        assert_eq!(detail.cashless_label, "0");
        assert_eq!(detail.complaint, "нет.");
        assert_eq!(detail.admin_comment, PLACEHOLDER);
    }

    #[test]
    fn visits_across_months_follow_the_calendar() {
        // As text "01.12.2025" < "15.11.2025".
        let records = vec![
            appt("dec", "D1", "P1", "01.12.2025 9:00:00"),
            appt("nov", "D1", "P1", "15.11.2025 9:00:00"),
        ];
        let directory = build_patient_directory(&records, &DashboardConfig::default());
        assert_eq!(directory[0].last_visit, "01.12.2025 9:00:00");

        let ids: Vec<&str> = patient_history(&records, "P1")
            .iter()
            .map(|record| record.id.as_str())
            .collect();
        assert_eq!(ids, vec!["nov", "dec"]);
    }

    #[test]
    fn directory_counts_visits_and_tracks_latest() {
        let records = vec![
            appt("1", "D1", "P1", "15.11.2025 9:00:00"),
            appt("2", "D1", "P2", "14.11.2025 9:00:00"),
            appt("3", "D1", "P1", "16.11.2025 10:00:00"),
            appt("4", "D1", "P1", "16.11.2025 9:30:00"),
            appt("5", "D1", "", "17.11.2025 9:30:00"),
        ];
        let directory = build_patient_directory(&records, &DashboardConfig::default());
        assert_eq!(directory.len(), 2);
        assert_eq!(directory[0].id, "P1");
        assert_eq!(directory[0].visit_count, 3);
        assert_eq!(directory[0].last_visit, "16.11.2025 10:00:00");
        assert_eq!(directory[1].id, "P2");
    }

    #[test]
    fn search_matches_name_phone_or_id() {
        let records = vec![
            appt("1", "D1", "P1", "15.11.2025 9:00:00"),
            appt("2", "D1", "Q7", "14.11.2025 9:00:00"),
        ];
        let config = DashboardConfig::default();
        let directory = build_patient_directory(&records, &config);

        assert_eq!(search_patients(&directory, "").len(), 2);
        assert_eq!(search_patients(&directory, "Q7")[0].id, "Q7");

        let name = patient_name("P1").to_uppercase();
        assert!(search_patients(&directory, &name)
            .iter()
            .any(|patient| patient.id == "P1"));

        let phone = patient_phone("Q7", &config);
        assert!(search_patients(&directory, &phone[3..8])
            .iter()
            .any(|patient| patient.id == "Q7"));
        assert!(search_patients(&directory, "zzz-nothing").is_empty());
    }

    #[test]
    fn search_view_defaults_to_first_match() {
        let records = vec![
            appt("1", "D1", "P1", "15.11.2025 9:00:00"),
            appt("2", "", "P1", "13.11.2025 9:00:00"),
            appt("3", "D1", "P2", "16.11.2025 9:00:00"),
        ];
        let config = DashboardConfig::default();
        let view = build_patient_search_view(&records, "P1", None, Some("2"), &config);

        assert_eq!(view.patients.len(), 1);
        assert_eq!(view.selected_patient.as_ref().map(|p| p.id.as_str()), Some("P1"));
        let ids: Vec<&str> = view.history.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(view.history[0].doctor_label, "Доктор —");
        assert_eq!(view.selected.map(|detail| detail.id), Some("2".to_string()));
    }
}
