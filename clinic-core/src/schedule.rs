//! Общий конвейер выборки: выбор даты показа, фильтры и группировка по врачу.

use std::cmp::Ordering;
use std::collections::{hash_map::Entry, HashMap, HashSet};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{AppointmentFields, FilterState};

/// Разбирает метку `DD.MM.YYYY` в календарный день.
pub fn parse_date_label(label: &str) -> Option<NaiveDate> {
    let mut parts = label.trim().split('.');
    let day = parts.next()?.trim().parse::<u32>().ok()?;
    let month = parts.next()?.trim().parse::<u32>().ok()?;
    let year = parts.next()?.trim().parse::<i32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Разбирает `DD.MM.YYYY H:MM:SS`; часы, минуты и секунды могут быть без ведущего нуля.
pub fn parse_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
    let (date_part, time_part) = timestamp.trim().split_once(' ')?;
    let date = parse_date_label(date_part)?;

    let mut parts = time_part.trim().split(':');
    let hour = parts.next()?.parse::<u32>().ok()?;
    let minute = parts.next()?.parse::<u32>().ok()?;
    let second = match parts.next() {
        Some(raw) => raw.parse::<u32>().ok()?,
        None => 0,
    };
    let time = NaiveTime::from_hms_opt(hour, minute, second)?;
    Some(NaiveDateTime::new(date, time))
}

/// Год из третьего компонента метки даты. Сам день может быть некорректным.
pub fn year_of_label(label: &str) -> Option<i32> {
    label
        .trim()
        .split('.')
        .nth(2)
        .and_then(|raw| raw.trim().parse::<i32>().ok())
        .filter(|year| *year != 0)
}

/// Дата показа: предпочтительная, если по ней есть записи, иначе самая поздняя
/// из присутствующих. Без датированных записей возвращается предпочтительная.
pub fn resolve_effective_date<T: AppointmentFields>(records: &[T], preferred: &str) -> String {
    if records.iter().any(|record| record.date_label() == preferred) {
        return preferred.to_string();
    }

    let mut seen = HashSet::new();
    let mut latest: Option<(&str, Option<NaiveDate>)> = None;

    for label in records.iter().map(AppointmentFields::date_label) {
        if label.is_empty() || !seen.insert(label) {
            continue;
        }
        let parsed = parse_date_label(label);
        // Неразборчивые метки идут после любых корректных дат.
        let newer = match latest {
            None => true,
            Some((_, current)) => parsed > current,
        };
        if newer {
            latest = Some((label, parsed));
        }
    }

    latest
        .map(|(label, _)| label.to_string())
        .unwrap_or_else(|| preferred.to_string())
}

/// Проверяет одну запись против фильтров и даты по умолчанию.
pub fn matches_filters<T: AppointmentFields>(
    record: &T,
    filters: &FilterState,
    default_date: Option<&str>,
) -> bool {
    let date = filters
        .active_date()
        .or(default_date.filter(|date| !date.is_empty()));

    if let Some(date) = date {
        if record.date_label() != date {
            return false;
        }
    }
    if let Some(year) = filters.active_year() {
        if year_of_label(record.date_label()) != Some(year) {
            return false;
        }
    }
    if let Some(doctor) = filters.active_doctor() {
        if record.doctor_id() != doctor {
            return false;
        }
    }
    if let Some(patient) = filters.active_patient() {
        if record.patient_id() != patient {
            return false;
        }
    }
    if let Some(service) = filters.active_service() {
        if record.service_id() != service {
            return false;
        }
    }
    true
}

/// Подпоследовательность записей, прошедших все активные фильтры, в исходном порядке.
pub fn filter_appointments<'a, T: AppointmentFields>(
    records: &'a [T],
    filters: &FilterState,
    default_date: Option<&str>,
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| matches_filters(*record, filters, default_date))
        .collect()
}

/// Хронологическое сравнение по дате и времени. Нераспознанные значения идут
/// после распознанных и сравниваются как строки.
pub fn chronological_cmp(left: &str, right: &str) -> Ordering {
    match (parse_timestamp(left), parse_timestamp(right)) {
        (Some(a), Some(b)) => a.cmp(&b).then_with(|| left.cmp(right)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => left.cmp(right),
    }
}

/// Сравнение «свежести» визита: нераспознанные значения считаются самыми старыми.
pub fn recency_cmp(left: &str, right: &str) -> Ordering {
    (parse_timestamp(left), left).cmp(&(parse_timestamp(right), right))
}

/// Устойчивая сортировка по возрастанию времени приёма.
pub fn sort_chronologically<T: AppointmentFields>(items: &mut [&T]) {
    items.sort_by(|a, b| chronological_cmp(a.timestamp(), b.timestamp()));
}

/// Разбивает отсортированные записи по врачу. Группы идут в порядке первого
/// появления врача, порядок внутри группы сохраняется.
pub fn group_by_doctor<'a, T: AppointmentFields>(sorted: &[&'a T]) -> Vec<(String, Vec<&'a T>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<&'a T>)> = Vec::new();

    for &record in sorted {
        match index.entry(record.doctor_id()) {
            Entry::Occupied(slot) => groups[*slot.get()].1.push(record),
            Entry::Vacant(slot) => {
                slot.insert(groups.len());
                groups.push((record.doctor_id().to_string(), vec![record]));
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NormalizedAppointment;

    fn appt(id: &str, doctor: &str, timestamp: &str) -> NormalizedAppointment {
        NormalizedAppointment {
            id: id.to_string(),
            doctor_id: doctor.to_string(),
            patient_id: format!("P-{id}"),
            service_id: "S1".to_string(),
            timestamp: timestamp.to_string(),
            date_label: timestamp.split(' ').next().unwrap_or_default().to_string(),
            ..NormalizedAppointment::default()
        }
    }

    #[test]
    fn preferred_date_wins_when_present() {
        let records = vec![
            appt("1", "D1", "15.11.2025 9:00:00"),
            appt("2", "D1", "16.11.2025 9:00:00"),
        ];
        assert_eq!(resolve_effective_date(&records, "16.11.2025"), "16.11.2025");
    }

    #[test]
    fn falls_back_to_most_recent_date() {
        let records = vec![
            appt("1", "D1", "31.12.2023 9:00:00"),
            appt("2", "D1", "01.01.2024 9:00:00"),
        ];
        assert_eq!(resolve_effective_date(&records, "19.10.2026"), "01.01.2024");
    }

    #[test]
    fn empty_input_keeps_preferred_date() {
        let records: Vec<NormalizedAppointment> = Vec::new();
        assert_eq!(resolve_effective_date(&records, "19.10.2026"), "19.10.2026");

        let undated = vec![NormalizedAppointment::default()];
        assert_eq!(resolve_effective_date(&undated, "19.10.2026"), "19.10.2026");
    }

    #[test]
    fn unparseable_labels_lose_to_real_dates() {
        let mut broken = appt("1", "D1", "xx.11.2025 9:00:00");
        broken.date_label = "xx.11.2025".to_string();
        let records = vec![broken, appt("2", "D1", "02.02.2020 9:00:00")];
        assert_eq!(resolve_effective_date(&records, "19.10.2026"), "02.02.2020");
    }

    #[test]
    fn explicit_date_overrides_default() {
        let records = vec![
            appt("1", "D1", "15.11.2025 9:00:00"),
            appt("2", "D1", "16.11.2025 9:00:00"),
        ];
        let filters = FilterState {
            date: Some("15.11.2025".into()),
            ..FilterState::default()
        };
        let hits = filter_appointments(&records, &filters, Some("16.11.2025"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn year_is_read_from_date_label() {
        let mut record = appt("1", "D1", "15.11.2025 9:00:00");
        record.timestamp = "15.11.2024 9:00:00".to_string();
        let filters = FilterState {
            year: Some(2025),
            ..FilterState::default()
        };
        assert!(matches_filters(&record, &filters, None));
    }

    #[test]
    fn sorts_by_time_of_day_not_text() {
        let records = vec![
            appt("late", "D1", "15.11.2025 10:00:00"),
            appt("early", "D1", "15.11.2025 9:05:00"),
            appt("broken", "D1", "unknown"),
        ];
        let mut items: Vec<&NormalizedAppointment> = records.iter().collect();
        sort_chronologically(&mut items);
        let ids: Vec<&str> = items.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "late", "broken"]);
    }

    #[test]
    fn groups_follow_first_appearance() {
        let records = vec![
            appt("1", "D2", "15.11.2025 8:00:00"),
            appt("2", "D1", "15.11.2025 9:00:00"),
            appt("3", "D2", "15.11.2025 10:00:00"),
        ];
        let items: Vec<&NormalizedAppointment> = records.iter().collect();
        let groups = group_by_doctor(&items);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "D2");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "D1");
    }

    #[test]
    fn recency_treats_unknown_as_oldest() {
        assert!(recency_cmp("", "15.11.2025 9:00:00").is_lt());
        assert!(recency_cmp("16.11.2025 8:00:00", "15.11.2025 9:00:00").is_gt());
        assert!(chronological_cmp("", "15.11.2025 9:00:00").is_gt());
    }

    #[test]
    fn timestamp_parser_accepts_short_components() {
        let parsed = parse_timestamp("15.11.2025 9:5:00").map(|dt| dt.to_string());
        assert_eq!(parsed.as_deref(), Some("2025-11-15 09:05:00"));
        assert!(parse_timestamp("15.11.2025").is_none());
        assert!(parse_date_label("31.02.2025").is_none());
        assert_eq!(year_of_label("31.02.2025"), Some(2025));
    }
}
