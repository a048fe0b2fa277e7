//! Детерминированные подставные имена и телефоны для идентификаторов фикстура.
//!
//! В фикстуре нет настоящих имён, поэтому имя выбирается по хешу идентификатора.
//! Совпадения имён у разных идентификаторов допустимы.

use crate::DashboardConfig;

const PATIENT_SURNAMES: [&str; 10] = [
    "Акбаров",
    "Мамарасулов",
    "Кенжебеков",
    "Таалайбеков",
    "Сеиталиева",
    "Муразов",
    "Ниязбеков",
    "Канатбеков",
    "Рамизов",
    "Аскаров",
];

const PATIENT_GIVEN_NAMES: [&str; 10] = [
    "Айбек",
    "Айым",
    "Адилет",
    "Айдос",
    "Айдана",
    "Нурсултан",
    "Ариана",
    "Марсель",
    "Нурислам",
    "Сумая",
];

const DOCTOR_SPECIALTIES: [&str; 6] = ["Педиатр", "Невролог", "Уролог", "ЛОР", "Хирург", "Окулист"];

const DOCTOR_NAMES: [&str; 6] = [
    "Кулушова Аднай Канаат",
    "Аббасова Айгерим Аббасовна",
    "Сатытабекова Айдана Са",
    "Князев Игорь Алексеевич",
    "Бурдайбекова Мэрзим Улановна",
    "Абдразаков Рамизан",
];

/// Полиномиальный хеш (основание 31) по UTF-16 кодам символов, по модулю 2^32.
pub fn seed(id: &str) -> u32 {
    id.encode_utf16()
        .fold(0u32, |hash, unit| hash.wrapping_mul(31).wrapping_add(u32::from(unit)))
}

fn pick<'a>(table: &[&'a str], hash: u32) -> &'a str {
    table[hash as usize % table.len()]
}

/// «Фамилия Имя» пациента.
pub fn patient_name(id: &str) -> String {
    let hash = seed(id);
    format!(
        "{} {}",
        pick(&PATIENT_SURNAMES, hash),
        pick(&PATIENT_GIVEN_NAMES, hash >> 3)
    )
}

/// «Специальность - ФИО» врача.
pub fn doctor_name(id: &str) -> String {
    let hash = seed(id);
    format!(
        "{} - {}",
        pick(&DOCTOR_SPECIALTIES, hash),
        pick(&DOCTOR_NAMES, hash >> 3)
    )
}

/// Код страны и первые цифры хеша, дополненные нулями справа.
pub fn patient_phone(id: &str, config: &DashboardConfig) -> String {
    let digits: String = seed(id).to_string().chars().take(config.phone_digits).collect();
    format!(
        "{}{:0<width$}",
        config.phone_country_code,
        digits,
        width = config.phone_digits
    )
}
