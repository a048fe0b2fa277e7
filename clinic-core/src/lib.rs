//! Ядро панели клиники: модели приёмов, представления страниц и общий конвейер
//! выборки (дата, фильтры, группировка, форматирование).

use serde::{Deserialize, Serialize};

pub mod format;
pub mod pseudonym;
pub mod schedule;

pub use format::{format_currency, format_time_of_day, split_date_part};
pub use pseudonym::{doctor_name, patient_name, patient_phone};
pub use schedule::{
    chronological_cmp, filter_appointments, group_by_doctor, parse_date_label, parse_timestamp,
    recency_cmp, resolve_effective_date, sort_chronologically, year_of_label,
};

/// Настройки панели. Значения по умолчанию совпадают с рабочим фикстуром.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    /// Адрес JSON-фикстура с приёмами.
    pub fixture_url: String,
    /// Статус, который считается оплатой (сравнивается без регистра и пробелов).
    pub paid_status: String,
    /// Код страны для синтетических телефонов.
    pub phone_country_code: String,
    /// Число цифр после кода страны.
    pub phone_digits: usize,
    /// Минимальное число цифр, начиная с которого сумма делится на разряды.
    pub currency_min_grouping: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            fixture_url: "/appointments.json".to_string(),
            paid_status: "оплачено".to_string(),
            phone_country_code: "996".to_string(),
            phone_digits: 9,
            currency_min_grouping: 5,
        }
    }
}

/// Состояние оплаты приёма.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Pending,
}

impl PaymentStatus {
    /// Разбирает свободный текст статуса.
    pub fn from_label(label: &str, config: &DashboardConfig) -> Self {
        if label.trim().to_lowercase() == config.paid_status.trim().to_lowercase() {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Pending
        }
    }

    pub fn is_paid(self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }
}

/// Доступ к полям приёма, по которым работает конвейер выборки.
pub trait AppointmentFields {
    /// Метка дня `DD.MM.YYYY`.
    fn date_label(&self) -> &str;
    /// Дата и время `DD.MM.YYYY H:MM:SS`.
    fn timestamp(&self) -> &str;
    fn doctor_id(&self) -> &str;
    fn patient_id(&self) -> &str;
    fn service_id(&self) -> &str;
}

/// Канонический приём после нормализации сырой записи фикстура.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NormalizedAppointment {
    pub id: String,
    pub doctor_id: String,
    pub patient_id: String,
    pub service_id: String,
    pub timestamp: String,
    pub date_label: String,
    pub status: PaymentStatus,
    /// Исходный текст статуса, как он пришёл в записи.
    pub status_label: String,
    pub price: f64,
    /// Комментарий администратора, иначе жалобы при обращении.
    pub note: String,
    pub complaint: String,
    pub admin_comment: String,
    pub cash: f64,
    pub cashless: f64,
    pub conclusion_id: String,
}

impl AppointmentFields for NormalizedAppointment {
    fn date_label(&self) -> &str {
        &self.date_label
    }

    fn timestamp(&self) -> &str {
        &self.timestamp
    }

    fn doctor_id(&self) -> &str {
        &self.doctor_id
    }

    fn patient_id(&self) -> &str {
        &self.patient_id
    }

    fn service_id(&self) -> &str {
        &self.service_id
    }
}

/// Необязательные фильтры на равенство. Пустое поле не ограничивает выборку.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FilterState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Явная дата `DD.MM.YYYY`, заменяет вычисленную дату показа.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl FilterState {
    /// Нет ни одного активного ограничения.
    pub fn is_empty(&self) -> bool {
        active(&self.doctor).is_none()
            && active(&self.patient).is_none()
            && active(&self.service).is_none()
            && self.active_year().is_none()
            && self.active_date().is_none()
    }

    pub fn active_doctor(&self) -> Option<&str> {
        active(&self.doctor)
    }

    pub fn active_patient(&self) -> Option<&str> {
        active(&self.patient)
    }

    pub fn active_service(&self) -> Option<&str> {
        active(&self.service)
    }

    pub fn active_year(&self) -> Option<i32> {
        self.year.filter(|year| *year != 0)
    }

    pub fn active_date(&self) -> Option<&str> {
        active(&self.date)
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Строка списка приёмов на главной.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentRow {
    pub id: String,
    pub time: String,
    pub patient: String,
    pub note: String,
    pub price: f64,
    pub price_label: String,
    pub paid: bool,
}

/// Варианты значений для панели фильтров.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FilterOptions {
    pub doctors: Vec<String>,
    pub patients: Vec<String>,
    pub services: Vec<String>,
    /// Годы по убыванию.
    pub years: Vec<i32>,
}

/// Главная страница: приёмы выбранного дня.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HomeView {
    pub today: String,
    pub effective_date: String,
    pub title: String,
    pub filters: FilterState,
    pub options: FilterOptions,
    pub rows: Vec<AppointmentRow>,
}

/// Строка приёма внутри группы врача.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisitRow {
    pub id: String,
    pub time: String,
    pub patient_name: String,
    pub price: f64,
    pub price_label: String,
    pub paid: bool,
}

/// Приёмы одного врача за день.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctorGroup {
    pub doctor_id: String,
    pub display_name: String,
    pub items: Vec<VisitRow>,
}

/// Карточка «Подробнее о приеме».
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentDetail {
    pub id: String,
    pub date: String,
    pub time: String,
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub service: String,
    pub status: PaymentStatus,
    pub status_label: String,
    pub total_label: String,
    pub cash_label: String,
    pub cashless_label: String,
    pub complaint: String,
    pub admin_comment: String,
}

/// Страница «Приемы для врачей».
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisitsView {
    pub effective_date: String,
    pub title: String,
    pub groups: Vec<DoctorGroup>,
    pub selected_id: Option<String>,
    pub selected: Option<AppointmentDetail>,
}

impl VisitsView {
    /// Общее число приёмов во всех группах.
    pub fn total_items(&self) -> usize {
        self.groups.iter().map(|group| group.items.len()).sum()
    }
}

/// Пациент, собранный из всех его приёмов.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: String,
    pub display_name: String,
    pub display_phone: String,
    pub last_visit: String,
    pub visit_count: u32,
}

/// Строка истории приёмов пациента.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryRow {
    pub id: String,
    pub time: String,
    pub doctor_label: String,
    pub note: String,
    pub price: f64,
    pub price_label: String,
    pub paid: bool,
}

/// Страница «Поиск пациента».
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientSearchView {
    pub query: String,
    pub patients: Vec<Patient>,
    pub selected_patient: Option<Patient>,
    pub history: Vec<HistoryRow>,
    pub selected: Option<AppointmentDetail>,
}

/// Ошибки загрузки и разбора данных.
#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    #[error("Не удалось разобрать данные: {0}")]
    Parse(String),
    #[error("Ожидался JSON-массив приёмов, получено: {0}")]
    NotAnArray(String),
}
