//! Clinic dashboard UI for the WebAssembly target.

pub mod controls;
pub mod layout;
pub mod routes;

#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use std::rc::Rc;

    use crate::controls::{apply_control, label_to_iso, FilterField};
    use crate::layout::{LayoutAction, LayoutState};
    use crate::routes::{active_nav_key, search_href, split_href, Route, NAV_ITEMS};
    use crate::styles;
    use clinic_core::{
        AppointmentDetail, AppointmentRow, DashboardConfig, DoctorGroup, FilterState, HistoryRow,
        Patient,
    };
    use clinic_fixture::Fixture;
    use serde::Deserialize;
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        console, Document, Element, HtmlInputElement, HtmlSelectElement, Response,
        UrlSearchParams, Window,
    };
    use yew::events::{InputEvent, KeyboardEvent};
    use yew::prelude::*;
    use yew::TargetCast;

    impl Reducible for LayoutState {
        type Action = LayoutAction;

        fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
            Rc::new(self.apply(action))
        }
    }

    type LayoutContext = UseReducerHandle<LayoutState>;

    fn current_path() -> String {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_default()
    }

    fn current_search() -> String {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default()
    }

    fn query_param(search: &str, name: &str) -> String {
        UrlSearchParams::new_with_str(search)
            .ok()
            .and_then(|params| params.get(name))
            .unwrap_or_default()
    }

    fn today_label() -> String {
        chrono::Local::now().format("%d.%m.%Y").to_string()
    }

    async fn fetch_fixture_body(url: &str) -> Result<String, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("Нет window"))?;
        let response: Response = JsFuture::from(window.fetch_with_str(url))
            .await?
            .dyn_into()?;
        if !response.ok() {
            return Err(JsValue::from_str(&format!(
                "HTTP {} при загрузке {url}",
                response.status()
            )));
        }
        let body = JsFuture::from(response.text()?).await?;
        body.as_string()
            .ok_or_else(|| JsValue::from_str("Тело ответа не является строкой"))
    }

    /// Loads the fixture once per mount. Failures are logged and leave the
    /// page with an empty fixture.
    #[hook]
    fn use_fixture(config: DashboardConfig) -> Rc<Fixture> {
        let initial = config.clone();
        let fixture = use_state(move || Rc::new(Fixture::new(&[], initial)));

        {
            let fixture = fixture.clone();
            use_effect_with((), move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    match fetch_fixture_body(&config.fixture_url).await {
                        Ok(body) => match Fixture::from_json_str(&body, config) {
                            Ok(loaded) => fixture.set(Rc::new(loaded)),
                            Err(err) => console::error_1(&JsValue::from_str(&format!(
                                "Не удалось загрузить appointments.json: {err}"
                            ))),
                        },
                        Err(err) => console::error_1(&err),
                    }
                });
                || ()
            });
        }

        (*fixture).clone()
    }

    #[derive(Properties, PartialEq)]
    pub struct DashboardProps {
        pub config: DashboardConfig,
    }

    #[function_component(Dashboard)]
    fn dashboard(props: &DashboardProps) -> Html {
        let layout = use_reducer(LayoutState::default);
        let path = use_state(current_path);
        let search = use_state(current_search);

        use_effect_with((), |_| {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Err(err) = styles::ensure_styles(&document) {
                        console::error_1(&err);
                    }
                }
            }
            || ()
        });

        {
            let path = path.clone();
            let search = search.clone();
            use_effect_with((), move |_| {
                let listener = Closure::<dyn Fn()>::new(move || {
                    path.set(current_path());
                    search.set(current_search());
                });
                let window = web_sys::window();
                if let Some(window) = &window {
                    if let Err(err) = window
                        .add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
                    {
                        console::error_1(&err);
                    }
                }
                move || {
                    if let Some(window) = window {
                        if let Err(err) = window.remove_event_listener_with_callback(
                            "popstate",
                            listener.as_ref().unchecked_ref(),
                        ) {
                            console::error_1(&err);
                        }
                    }
                }
            });
        }

        let navigate = {
            let path = path.clone();
            let search = search.clone();
            Callback::from(move |href: String| {
                if let Some(window) = web_sys::window() {
                    match window.history() {
                        Ok(history) => {
                            if let Err(err) =
                                history.push_state_with_url(&JsValue::NULL, "", Some(&href))
                            {
                                console::error_1(&err);
                            }
                        }
                        Err(err) => console::error_1(&err),
                    }
                }
                let (next_path, next_search) = split_href(&href);
                path.set(next_path.to_string());
                search.set(next_search.to_string());
            })
        };

        let route = Route::from_path(&path);
        let state = *layout;
        let page = match route {
            Route::Home => html! { <HomePage config={props.config.clone()} /> },
            Route::Visits => html! { <VisitsPage config={props.config.clone()} /> },
            Route::Search => html! {
                <SearchPage
                    config={props.config.clone()}
                    query={query_param(&search, "q")}
                    on_navigate={navigate.clone()}
                />
            },
            Route::NotFound => html! { <NotFoundPage on_navigate={navigate.clone()} /> },
        };

        html! {
            <ContextProvider<LayoutContext> context={layout.clone()}>
                <div
                    class={classes!("clinic-root", state.sider_collapsed.then_some("is-collapsed"))}
                    data-theme={state.theme.as_attr()}
                >
                    <Sider path={(*path).clone()} on_navigate={navigate} />
                    <div>
                        <HeaderBar />
                        <main class="clinic-page">
                            <h1>{ route.title() }</h1>
                            { page }
                        </main>
                    </div>
                </div>
            </ContextProvider<LayoutContext>>
        }
    }

    #[derive(Properties, PartialEq)]
    struct SiderProps {
        path: String,
        on_navigate: Callback<String>,
    }

    #[function_component(Sider)]
    fn sider(props: &SiderProps) -> Html {
        let layout = use_context::<LayoutContext>();
        let collapsed = layout.map(|ctx| ctx.sider_collapsed).unwrap_or(false);
        let active = active_nav_key(&props.path);

        html! {
            <nav class="clinic-sider" aria-label="Разделы клиники">
                {
                    for NAV_ITEMS.iter().map(|item| {
                        let on_navigate = props.on_navigate.clone();
                        let target = item.path.to_string();
                        let onclick = Callback::from(move |event: MouseEvent| {
                            event.prevent_default();
                            on_navigate.emit(target.clone());
                        });
                        let label = if collapsed {
                            item.label.chars().take(1).collect::<String>()
                        } else {
                            item.label.to_string()
                        };
                        html! {
                            <a
                                href={item.path}
                                title={item.label}
                                class={classes!((item.key == active).then_some("is-active"))}
                                {onclick}
                            >
                                { label }
                            </a>
                        }
                    })
                }
            </nav>
        }
    }

    #[function_component(HeaderBar)]
    fn header_bar() -> Html {
        let Some(layout) = use_context::<LayoutContext>() else {
            return Html::default();
        };

        let on_toggle_sider = {
            let layout = layout.clone();
            Callback::from(move |_| layout.dispatch(LayoutAction::ToggleSider))
        };
        let on_toggle_theme = {
            let layout = layout.clone();
            Callback::from(move |_| layout.dispatch(LayoutAction::ToggleTheme))
        };
        let theme_label = match layout.theme {
            crate::layout::ThemeMode::Light => "Тёмная тема",
            crate::layout::ThemeMode::Dark => "Светлая тема",
        };

        html! {
            <header class="clinic-header">
                <button type="button" onclick={on_toggle_sider} aria-label="Свернуть меню">{"☰"}</button>
                <button type="button" onclick={on_toggle_theme}>{ theme_label }</button>
            </header>
        }
    }

    #[derive(Properties, PartialEq)]
    struct PageProps {
        config: DashboardConfig,
    }

    #[function_component(HomePage)]
    fn home_page(props: &PageProps) -> Html {
        let fixture = use_fixture(props.config.clone());
        let today = use_memo((), |_| today_label());
        let filters = use_state(FilterState::default);
        let filter_open = use_state(|| false);

        let view = fixture.home_view(&today, &filters);

        let on_open_filters = {
            let filter_open = filter_open.clone();
            Callback::from(move |_| filter_open.set(!*filter_open))
        };
        let on_reset = {
            let filters = filters.clone();
            Callback::from(move |_| filters.set(FilterState::default()))
        };
        let on_done = {
            let filter_open = filter_open.clone();
            Callback::from(move |_| filter_open.set(false))
        };

        let years: Vec<String> = view.options.years.iter().map(i32::to_string).collect();

        html! {
            <div class="clinic-columns">
                <section class="clinic-card">
                    <header>
                        <span>{ view.title.clone() }</span>
                        <button type="button" onclick={on_open_filters}>{"Фильтр"}</button>
                    </header>
                    <ul class="clinic-list">
                        {
                            if view.rows.is_empty() {
                                html! { <li class="clinic-empty">{"Нет записей"}</li> }
                            } else {
                                html! { <>{ for view.rows.iter().map(render_appointment_row) }</> }
                            }
                        }
                    </ul>
                </section>
                {
                    if *filter_open {
                        html! {
                            <aside class="clinic-card">
                                <header><span>{"Фильтры"}</span></header>
                                <div class="card-body filter-panel">
                                    { render_select("Выбрать доктора", "Доктор ID", &view.options.doctors,
                                        filters.doctor.clone(), on_control(filters.clone(), FilterField::Doctor)) }
                                    { render_select("Выбрать пациента", "Пациент ID", &view.options.patients,
                                        filters.patient.clone(), on_control(filters.clone(), FilterField::Patient)) }
                                    { render_select("Выбрать услугу", "Услуга ID", &view.options.services,
                                        filters.service.clone(), on_control(filters.clone(), FilterField::Service)) }
                                    { render_select("Год", "Год", &years,
                                        filters.year.map(|year| year.to_string()), on_control(filters.clone(), FilterField::Year)) }
                                    <label>
                                        {"Дата"}
                                        <input
                                            type="date"
                                            value={filters.date.as_deref().map(label_to_iso).unwrap_or_default()}
                                            onchange={on_control(filters.clone(), FilterField::Date)}
                                        />
                                    </label>
                                    <div class="row-lead">
                                        <button type="button" onclick={on_reset} disabled={filters.is_empty()}>
                                            {"Сбросить"}
                                        </button>
                                        <button type="button" onclick={on_done}>{"Готово"}</button>
                                    </div>
                                </div>
                            </aside>
                        }
                    } else {
                        Html::default()
                    }
                }
            </div>
        }
    }

    fn on_control(filters: UseStateHandle<FilterState>, field: FilterField) -> Callback<Event> {
        Callback::from(move |event: Event| {
            let value = event
                .target_dyn_into::<HtmlSelectElement>()
                .map(|select| select.value())
                .or_else(|| {
                    event
                        .target_dyn_into::<HtmlInputElement>()
                        .map(|input| input.value())
                })
                .unwrap_or_default();
            filters.set(apply_control(&filters, field, &value));
        })
    }

    fn render_select(
        label: &str,
        placeholder: &str,
        options: &[String],
        current: Option<String>,
        onchange: Callback<Event>,
    ) -> Html {
        html! {
            <label>
                { label }
                <select {onchange}>
                    <option value="" selected={current.is_none()}>{ placeholder }</option>
                    {
                        for options.iter().map(|option| {
                            let selected = current.as_deref() == Some(option.as_str());
                            html! { <option value={option.clone()} {selected}>{ option.clone() }</option> }
                        })
                    }
                </select>
            </label>
        }
    }

    fn status_dot(paid: bool) -> Html {
        let label = if paid { "Оплачено" } else { "Ожидает оплаты" };
        html! {
            <span class={classes!("status-dot", paid.then_some("is-paid"))} title={label} />
        }
    }

    fn render_appointment_row(row: &AppointmentRow) -> Html {
        html! {
            <li>
                <div class="row-main">
                    <span class="row-lead">
                        { status_dot(row.paid) }
                        <strong>{ row.time.clone() }</strong>
                        <span>{ row.patient.clone() }</span>
                    </span>
                    <span class="price-tag">{ row.price_label.clone() }</span>
                </div>
                <span class="row-note">{ row.note.clone() }</span>
            </li>
        }
    }

    #[function_component(VisitsPage)]
    fn visits_page(props: &PageProps) -> Html {
        let fixture = use_fixture(props.config.clone());
        let today = use_memo((), |_| today_label());
        let selected = use_state(|| None::<String>);

        let view = fixture.visits_view(&today, &FilterState::default(), selected.as_deref());
        let selected_id = view.selected_id.clone();

        html! {
            <div class="clinic-columns">
                <section class="clinic-card">
                    <header><span>{ view.title.clone() }</span></header>
                    <div class="clinic-list">
                        {
                            if view.groups.is_empty() {
                                html! { <p class="clinic-empty">{"Нет записей"}</p> }
                            } else {
                                html! {
                                    <>{ for view.groups.iter().map(|group| {
                                        render_doctor_group(group, selected_id.as_deref(), selected.clone())
                                    }) }</>
                                }
                            }
                        }
                    </div>
                </section>
                <section class="clinic-card">
                    <header><span>{"Подробнее о приеме"}</span></header>
                    <div class="card-body">
                        { render_visit_detail(view.selected.as_ref()) }
                    </div>
                </section>
                <section class="clinic-card">
                    <header><span>{"Осмотр врача"}</span></header>
                    <div class="card-body">
                        { render_exam(view.selected.as_ref()) }
                    </div>
                </section>
            </div>
        }
    }

    fn render_doctor_group(
        group: &DoctorGroup,
        selected_id: Option<&str>,
        selected: UseStateHandle<Option<String>>,
    ) -> Html {
        html! {
            <div key={group.doctor_id.clone()}>
                <div class="group-heading">{ group.display_name.clone() }</div>
                <ul class="clinic-list">
                    {
                        for group.items.iter().map(|item| {
                            let onclick = {
                                let selected = selected.clone();
                                let id = item.id.clone();
                                Callback::from(move |_| selected.set(Some(id.clone())))
                            };
                            let is_selected = selected_id == Some(item.id.as_str());
                            html! {
                                <li
                                    class={classes!("is-selectable", is_selected.then_some("is-selected"))}
                                    {onclick}
                                >
                                    <div class="row-main">
                                        <span class="row-lead">
                                            { status_dot(item.paid) }
                                            <strong>{ item.time.clone() }</strong>
                                            <span>{ item.patient_name.clone() }</span>
                                        </span>
                                        <span class="price-tag">{ item.price_label.clone() }</span>
                                    </div>
                                </li>
                            }
                        })
                    }
                </ul>
            </div>
        }
    }

    fn render_visit_detail(detail: Option<&AppointmentDetail>) -> Html {
        let Some(detail) = detail else {
            return html! { <p class="clinic-empty">{"Нет выбранного приема"}</p> };
        };

        html! {
            <dl class="detail-grid">
                <dt>{"Дата и время"}</dt>
                <dd>{ format!("{} {}", detail.date, detail.time) }</dd>
                <dt>{"Пациент"}</dt>
                <dd>{ format!("{} - {}", detail.patient_name, detail.patient_id) }</dd>
                <dt>{"Доктор"}</dt>
                <dd>{ detail.doctor_name.clone() }</dd>
                <dt>{"Услуга"}</dt>
                <dd>{ detail.service.clone() }</dd>
                <dt>{"Итого, сом"}</dt>
                <dd><span class="price-tag">{ detail.total_label.clone() }</span></dd>
                <dt>{"Наличные"}</dt>
                <dd>{ detail.cash_label.clone() }</dd>
                <dt>{"Безналичные"}</dt>
                <dd>{ detail.cashless_label.clone() }</dd>
                <dt>{"Статус"}</dt>
                <dd>{ detail.status_label.clone() }</dd>
            </dl>
        }
    }

    fn render_exam(detail: Option<&AppointmentDetail>) -> Html {
        let Some(detail) = detail else {
            return html! { <p class="clinic-empty">{"Выберите прием"}</p> };
        };

        html! {
            <dl class="detail-grid">
                <dt>{"Жалобы"}</dt>
                <dd>{ detail.complaint.clone() }</dd>
                <dt>{"Анамнез"}</dt>
                <dd>{ detail.admin_comment.clone() }</dd>
                <dt>{"Объективно"}</dt>
                <dd>{"—"}</dd>
            </dl>
        }
    }

    #[derive(Properties, PartialEq)]
    struct SearchPageProps {
        config: DashboardConfig,
        /// Current `q` parameter of the address bar.
        query: String,
        on_navigate: Callback<String>,
    }

    #[function_component(SearchPage)]
    fn search_page(props: &SearchPageProps) -> Html {
        let fixture = use_fixture(props.config.clone());
        let filter = use_state(|| props.query.clone());
        let selected_patient = use_state(|| None::<String>);
        let selected_appointment = use_state(|| None::<String>);

        // Back and forward between `?q=` values re-sync the field.
        {
            let filter = filter.clone();
            use_effect_with(props.query.clone(), move |query| {
                filter.set(query.clone());
                || ()
            });
        }

        let view = fixture.patient_search(
            &filter,
            selected_patient.as_deref(),
            selected_appointment.as_deref(),
        );
        let chosen_id = view.selected_patient.as_ref().map(|patient| patient.id.clone());

        let on_input = {
            let filter = filter.clone();
            Callback::from(move |event: InputEvent| {
                let input: HtmlInputElement = event.target_unchecked_into();
                filter.set(input.value());
            })
        };

        let on_submit = {
            let on_navigate = props.on_navigate.clone();
            Callback::from(move |event: KeyboardEvent| {
                if event.key() != "Enter" {
                    return;
                }
                let input: HtmlInputElement = event.target_unchecked_into();
                match write_query_param("q", &input.value()) {
                    Ok(encoded) => on_navigate.emit(search_href(&encoded)),
                    Err(err) => console::error_1(&err),
                }
            })
        };

        html! {
            <div class="clinic-columns">
                <section class="clinic-card">
                    <header><span>{"Пациенты"}</span></header>
                    <div class="search-box">
                        <input
                            type="search"
                            placeholder="Поиск по имени, телефону, ID"
                            value={(*filter).clone()}
                            oninput={on_input}
                            onkeydown={on_submit}
                            aria-label="Поиск пациента"
                        />
                    </div>
                    <ul class="clinic-list">
                        {
                            if view.patients.is_empty() {
                                html! { <li class="clinic-empty">{"Нет пациентов"}</li> }
                            } else {
                                html! {
                                    <>{ for view.patients.iter().map(|patient| {
                                        render_patient(
                                            patient,
                                            chosen_id.as_deref(),
                                            selected_patient.clone(),
                                            selected_appointment.clone(),
                                        )
                                    }) }</>
                                }
                            }
                        }
                    </ul>
                </section>
                <section class="clinic-card">
                    <header><span>{"История приемов"}</span></header>
                    <ul class="clinic-list">
                        {
                            if view.history.is_empty() {
                                html! { <li class="clinic-empty">{"Нет приемов"}</li> }
                            } else {
                                html! {
                                    <>{ for view.history.iter().map(|row| {
                                        render_history_row(row, selected_appointment.clone())
                                    }) }</>
                                }
                            }
                        }
                    </ul>
                    <div class="card-body">
                        { render_patient_detail(view.selected_patient.as_ref()) }
                    </div>
                </section>
                <section class="clinic-card">
                    <header><span>{"Подробнее о приеме"}</span></header>
                    <div class="card-body">
                        { render_visit_detail(view.selected.as_ref()) }
                        { render_exam(view.selected.as_ref()) }
                    </div>
                </section>
            </div>
        }
    }

    fn write_query_param(name: &str, value: &str) -> Result<String, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("Нет window"))?;
        let params = UrlSearchParams::new_with_str(&window.location().search()?)?;
        if value.is_empty() {
            params.delete(name);
        } else {
            params.set(name, value);
        }
        Ok(String::from(params.to_string()))
    }

    fn render_patient(
        patient: &Patient,
        chosen_id: Option<&str>,
        selected_patient: UseStateHandle<Option<String>>,
        selected_appointment: UseStateHandle<Option<String>>,
    ) -> Html {
        let onclick = {
            let id = patient.id.clone();
            Callback::from(move |_| {
                selected_patient.set(Some(id.clone()));
                selected_appointment.set(None);
            })
        };
        let is_selected = chosen_id == Some(patient.id.as_str());

        html! {
            <li
                key={patient.id.clone()}
                class={classes!("is-selectable", is_selected.then_some("is-selected"))}
                {onclick}
            >
                <strong>{ patient.display_name.clone() }</strong>
                <span class="row-note">{ patient.display_phone.clone() }</span>
            </li>
        }
    }

    fn render_history_row(row: &HistoryRow, selected: UseStateHandle<Option<String>>) -> Html {
        let is_selected = selected.as_deref() == Some(row.id.as_str());
        let onclick = {
            let id = row.id.clone();
            Callback::from(move |_| selected.set(Some(id.clone())))
        };

        html! {
            <li
                class={classes!("is-selectable", is_selected.then_some("is-selected"))}
                {onclick}
            >
                <div class="row-main">
                    <span class="row-lead">
                        { status_dot(row.paid) }
                        <strong>{ row.time.clone() }</strong>
                        <span>{ row.doctor_label.clone() }</span>
                    </span>
                    <span class="price-tag">{ row.price_label.clone() }</span>
                </div>
                <span class="row-note">{ row.note.clone() }</span>
            </li>
        }
    }

    fn render_patient_detail(patient: Option<&Patient>) -> Html {
        let Some(patient) = patient else {
            return html! { <p class="clinic-empty">{"Нет выбранных полей"}</p> };
        };

        html! {
            <dl class="detail-grid">
                <dt>{"Имя"}</dt>
                <dd>{ patient.display_name.clone() }</dd>
                <dt>{"Телефон"}</dt>
                <dd>{ patient.display_phone.clone() }</dd>
                <dt>{"ID"}</dt>
                <dd>{ patient.id.clone() }</dd>
                <dt>{"Последний визит"}</dt>
                <dd>{ patient.last_visit.clone() }</dd>
                <dt>{"Визитов"}</dt>
                <dd>{ patient.visit_count.to_string() }</dd>
            </dl>
        }
    }

    #[derive(Properties, PartialEq)]
    struct NotFoundProps {
        on_navigate: Callback<String>,
    }

    #[function_component(NotFoundPage)]
    fn not_found_page(props: &NotFoundProps) -> Html {
        let on_home = {
            let on_navigate = props.on_navigate.clone();
            Callback::from(move |_| on_navigate.emit(Route::Home.path().to_string()))
        };

        html! {
            <div class="not-found">
                <p>{"Похоже, раздел ещё не реализован или адрес введён неверно."}</p>
                <button type="button" onclick={on_home}>{"На главную"}</button>
            </div>
        }
    }

    #[derive(Deserialize, Default)]
    struct JsUiConfig {
        #[serde(default)]
        fixture_url: Option<String>,
        #[serde(default)]
        paid_status: Option<String>,
    }

    #[wasm_bindgen]
    pub fn mount_dashboard(selector: &str, config: JsValue) -> Result<(), JsValue> {
        let window: Window = web_sys::window().ok_or_else(|| JsValue::from_str("Нет window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Нет доступа к document"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Ошибка селектора: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("Элемент по селектору не найден"))?;

        let overrides: JsUiConfig = if config.is_undefined() || config.is_null() {
            JsUiConfig::default()
        } else {
            from_value(config)?
        };
        let mut cfg = DashboardConfig::default();
        if let Some(url) = overrides.fixture_url {
            cfg.fixture_url = url;
        }
        if let Some(status) = overrides.paid_status {
            cfg.paid_status = status;
        }

        yew::Renderer::<Dashboard>::with_root_and_props(target, DashboardProps { config: cfg })
            .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_dashboard;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_dashboard(_: &str, _: wasm_bindgen::JsValue) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "clinic-ui поддерживает только сборку под wasm32",
    ))
}
