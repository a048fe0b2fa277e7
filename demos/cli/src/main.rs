use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use clinic_core::{DashboardConfig, FilterState};
use clinic_fixture::Fixture;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum View {
    Home,
    Visits,
    Search,
}

#[derive(Parser, Debug)]
#[command(
    name = "clinic-cli",
    about = "Печатает страницы панели клиники по JSON-фикстуру с приёмами."
)]
struct Args {
    /// Путь к appointments.json.
    #[arg(short, long)]
    input: PathBuf,

    /// Какую страницу построить.
    #[arg(long, value_enum, default_value_t = View::Home)]
    view: View,

    /// Сегодняшняя дата `DD.MM.YYYY`; по умолчанию берётся из системных часов.
    #[arg(long)]
    today: Option<String>,

    #[arg(long)]
    date: Option<String>,

    #[arg(long)]
    doctor: Option<String>,

    #[arg(long)]
    patient: Option<String>,

    #[arg(long)]
    service: Option<String>,

    #[arg(long)]
    year: Option<i32>,

    /// Строка поиска пациента (страница search).
    #[arg(short, long, default_value = "")]
    query: String,

    /// Выделенный приём (visits, search) или пациент (search).
    #[arg(long)]
    selected: Option<String>,

    /// Печатать представление целиком в JSON.
    #[arg(long)]
    json: bool,

    /// Подробный лог (debug).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let data = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Не удалось прочитать файл {:?}", args.input))?;
    let fixture = Fixture::from_json_str(&data, DashboardConfig::default())
        .with_context(|| format!("Некорректный фикстур {:?}", args.input))?;
    info!(records = fixture.records().len(), "фикстур загружен");

    let today = args
        .today
        .clone()
        .unwrap_or_else(|| chrono::Local::now().format("%d.%m.%Y").to_string());
    let filters = FilterState {
        doctor: args.doctor.clone(),
        patient: args.patient.clone(),
        service: args.service.clone(),
        year: args.year,
        date: args.date.clone(),
    };
    debug!(?filters, %today, "параметры выборки");

    match args.view {
        View::Home => {
            let view = fixture.home_view(&today, &filters);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{}", view.title);
                if !view.filters.is_empty() {
                    println!("Фильтры: {}", serde_json::to_string(&view.filters)?);
                }
                for row in &view.rows {
                    let mark = if row.paid { "+" } else { " " };
                    println!(
                        "{mark} {} {:<12} {:>10}  {}",
                        row.time, row.patient, row.price_label, row.note
                    );
                }
            }
        }
        View::Visits => {
            let view = fixture.visits_view(&today, &filters, args.selected.as_deref());
            if args.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{} ({} приёмов)", view.title, view.total_items());
                for group in &view.groups {
                    println!("{}", group.display_name);
                    for item in &group.items {
                        println!("  {} {:<24} {:>10}", item.time, item.patient_name, item.price_label);
                    }
                }
                if let Some(detail) = &view.selected {
                    println!(
                        "Выбран {}: {} {}, {}, итого {}",
                        detail.id, detail.date, detail.time, detail.service, detail.total_label
                    );
                }
            }
        }
        View::Search => {
            let view = fixture.patient_search(&args.query, args.selected.as_deref(), None);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                for patient in &view.patients {
                    println!(
                        "{:<24} {} {} визитов: {}",
                        patient.display_name, patient.display_phone, patient.id, patient.visit_count
                    );
                }
                if let Some(patient) = &view.selected_patient {
                    println!("История {}:", patient.display_name);
                    for row in &view.history {
                        println!("  {} {} {:>10}", row.time, row.doctor_label, row.price_label);
                    }
                }
            }
        }
    }

    Ok(())
}
