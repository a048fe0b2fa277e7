use std::fs;

use clinic_core::{DashboardConfig, FilterState};
use clinic_fixture::Fixture;
use serde_json::Value;

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn home_view_matches_golden() {
    let body = fs::read_to_string(fixture_path("appointments.json"))
        .expect("Не удалось прочитать тестовый фикстур");

    let fixture =
        Fixture::from_json_str(&body, DashboardConfig::default()).expect("Фикстур не разобран");
    let view = fixture.home_view("16.11.2025", &FilterState::default());

    let actual = serde_json::to_value(view).expect("Не удалось сериализовать представление");

    let expected = fs::read_to_string(fixture_path("home_view.json"))
        .expect("Не удалось прочитать эталон");
    let expected_value: Value = serde_json::from_str(&expected).expect("Эталон некорректен");

    assert_eq!(actual, expected_value);
}
