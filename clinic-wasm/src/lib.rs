//! Framework-neutral WASM <-> JavaScript bridge for the dashboard views.

use clinic_core::{ClinicError, DashboardConfig, FilterState};
use clinic_fixture::Fixture;
use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[derive(Deserialize, Default)]
struct JsDashboardConfig {
    #[serde(default)]
    fixture_url: Option<String>,
    #[serde(default)]
    paid_status: Option<String>,
    #[serde(default)]
    phone_country_code: Option<String>,
    #[serde(default)]
    phone_digits: Option<usize>,
    #[serde(default)]
    currency_min_grouping: Option<usize>,
}

impl From<JsDashboardConfig> for DashboardConfig {
    fn from(cfg: JsDashboardConfig) -> Self {
        let mut base = DashboardConfig::default();
        if let Some(url) = cfg.fixture_url {
            base.fixture_url = url;
        }
        if let Some(status) = cfg.paid_status {
            base.paid_status = status;
        }
        if let Some(code) = cfg.phone_country_code {
            base.phone_country_code = code;
        }
        if let Some(digits) = cfg.phone_digits {
            base.phone_digits = digits;
        }
        if let Some(grouping) = cfg.currency_min_grouping {
            base.currency_min_grouping = grouping;
        }
        base
    }
}

fn read_config(config: Option<JsValue>) -> Result<DashboardConfig, JsValue> {
    match config {
        Some(js_cfg) if !js_cfg.is_undefined() && !js_cfg.is_null() => {
            let cfg: JsDashboardConfig = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Не удалось прочитать config: {err}")))?;
            Ok(DashboardConfig::from(cfg))
        }
        _ => Ok(DashboardConfig::default()),
    }
}

fn read_filters(filters: Option<JsValue>) -> Result<FilterState, JsValue> {
    match filters {
        Some(js_filters) if !js_filters.is_undefined() && !js_filters.is_null() => {
            from_value(js_filters)
                .map_err(|err| JsValue::from_str(&format!("Не удалось прочитать фильтры: {err}")))
        }
        _ => Ok(FilterState::default()),
    }
}

/// A non-array fixture is treated as an empty one.
fn read_fixture(fixture: JsValue, config: DashboardConfig) -> Result<Fixture, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let value = from_value::<serde_json::Value>(fixture)
        .map_err(|err| JsValue::from_str(&format!("Не удалось прочитать JSON фикстура: {err}")))?;

    match Fixture::from_value(value, config.clone()) {
        Ok(fixture) => Ok(fixture),
        Err(ClinicError::NotAnArray(_)) => Ok(Fixture::new(&[], config)),
        Err(err) => Err(JsValue::from_str(&format_clinic_error(err))),
    }
}

fn to_js<T: serde::Serialize>(view: &T) -> Result<JsValue, JsValue> {
    to_value(view).map_err(|err| JsValue::from_str(&format!("Не удалось сериализовать: {err}")))
}

#[wasm_bindgen(js_name = homeView)]
pub fn home_view(
    fixture: JsValue,
    today: String,
    filters: Option<JsValue>,
    config: Option<JsValue>,
) -> Result<JsValue, JsValue> {
    let cfg = read_config(config)?;
    let filters = read_filters(filters)?;
    let fixture = read_fixture(fixture, cfg)?;
    to_js(&fixture.home_view(&today, &filters))
}

#[wasm_bindgen(js_name = visitsView)]
pub fn visits_view(
    fixture: JsValue,
    today: String,
    selected_id: Option<String>,
    config: Option<JsValue>,
) -> Result<JsValue, JsValue> {
    let cfg = read_config(config)?;
    let fixture = read_fixture(fixture, cfg)?;
    to_js(&fixture.visits_view(&today, &FilterState::default(), selected_id.as_deref()))
}

#[wasm_bindgen(js_name = patientSearch)]
pub fn patient_search(
    fixture: JsValue,
    query: String,
    selected_patient: Option<String>,
    selected_appointment: Option<String>,
    config: Option<JsValue>,
) -> Result<JsValue, JsValue> {
    let cfg = read_config(config)?;
    let fixture = read_fixture(fixture, cfg)?;
    to_js(&fixture.patient_search(
        &query,
        selected_patient.as_deref(),
        selected_appointment.as_deref(),
    ))
}

fn format_clinic_error(err: ClinicError) -> String {
    format!("Clinic error: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_fields() {
        let cfg = DashboardConfig::from(JsDashboardConfig {
            paid_status: Some("paid".into()),
            phone_digits: Some(7),
            ..JsDashboardConfig::default()
        });
        assert_eq!(cfg.paid_status, "paid");
        assert_eq!(cfg.phone_digits, 7);
        assert_eq!(cfg.fixture_url, DashboardConfig::default().fixture_url);
        assert_eq!(cfg.phone_country_code, "996");
    }

    #[test]
    fn errors_are_prefixed() {
        let err = match Fixture::from_json_str("{}", DashboardConfig::default()) {
            Err(err) => err,
            Ok(_) => panic!("object body must be rejected"),
        };
        let text = format_clinic_error(err);
        assert!(text.starts_with("Clinic error: "));
        assert!(text.ends_with("object"));
    }
}
