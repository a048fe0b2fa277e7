//! Conversions between form controls and filter values.

use clinic_core::FilterState;

/// `2025-11-16` (date input) -> `16.11.2025`.
pub fn iso_to_label(iso: &str) -> Option<String> {
    let mut parts = iso.trim().split('-');
    let year = parts.next().filter(|p| p.len() == 4)?;
    let month = parts.next().filter(|p| p.len() == 2)?;
    let day = parts.next().filter(|p| p.len() == 2)?;
    if parts.next().is_some() {
        return None;
    }
    Some(format!("{day}.{month}.{year}"))
}

/// `16.11.2025` -> `2025-11-16`; empty when the label is not in that shape.
pub fn label_to_iso(label: &str) -> String {
    let parts: Vec<&str> = label.trim().split('.').collect();
    match parts.as_slice() {
        [day, month, year] if day.len() == 2 && month.len() == 2 && year.len() == 4 => {
            format!("{year}-{month}-{day}")
        }
        _ => String::new(),
    }
}

/// Filter dimension edited by one control of the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Doctor,
    Patient,
    Service,
    Year,
    Date,
}

/// Returns `filters` with `field` set from a raw control value; an empty
/// value clears the constraint.
pub fn apply_control(filters: &FilterState, field: FilterField, raw: &str) -> FilterState {
    let value = Some(raw.trim().to_string()).filter(|v| !v.is_empty());
    let mut next = filters.clone();
    match field {
        FilterField::Doctor => next.doctor = value,
        FilterField::Patient => next.patient = value,
        FilterField::Service => next.service = value,
        FilterField::Year => next.year = value.and_then(|v| v.parse().ok()),
        FilterField::Date => next.date = value.and_then(|v| iso_to_label(&v)),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_input_round_trip() {
        assert_eq!(iso_to_label("2025-11-16").as_deref(), Some("16.11.2025"));
        assert_eq!(label_to_iso("16.11.2025"), "2025-11-16");
        assert_eq!(iso_to_label("16.11.2025"), None);
        assert_eq!(label_to_iso("1.1.2025"), "");
    }

    #[test]
    fn controls_set_and_clear_fields() {
        let filters = apply_control(&FilterState::default(), FilterField::Doctor, "D-7");
        assert_eq!(filters.doctor.as_deref(), Some("D-7"));

        let filters = apply_control(&filters, FilterField::Year, "2024");
        assert_eq!(filters.year, Some(2024));

        let filters = apply_control(&filters, FilterField::Date, "2025-11-15");
        assert_eq!(filters.date.as_deref(), Some("15.11.2025"));

        let cleared = apply_control(&filters, FilterField::Doctor, "");
        assert_eq!(cleared.doctor, None);
        assert_eq!(cleared.year, Some(2024));
    }
}
