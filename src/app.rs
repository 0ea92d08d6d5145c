use leptos::svg::Svg;
use leptos::*;
use std::rc::Rc;

use crate::application::{ChartSession, SubmitOutcome};
use crate::domain::chart::{ChartLayout, ChartPhase};
use crate::domain::errors::reduce_errors;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{AccountGateway, ContactGateway, DateRange, PriceSeries};
use crate::global_state::{Toast, ToastVariant, dismiss_toast, show_toast, toasts};
use crate::infrastructure::http::ApexBridgeClient;
use crate::infrastructure::navigation::RecordNavigator;
use crate::infrastructure::rendering::SvgChartRenderer;
use crate::{log_error, log_info, log_warn};

/// Default drawing surface dimensions, in SVG user units.
pub const DEFAULT_SVG_WIDTH: f64 = 1000.0;
pub const DEFAULT_SVG_HEIGHT: f64 = 400.0;

const CONTACT_COLUMNS: [&str; 3] = ["FirstName", "LastName", "Email"];

/// Page shell mounting the widgets plus the shared toast host
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .stock-chart-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                max-width: 1100px;
                margin: 0 auto;
                padding: 20px;
                color: #1a2733;
            }

            .widget {
                background: #fff;
                border: 1px solid #d8dde6;
                border-radius: 8px;
                padding: 16px;
                margin-bottom: 20px;
            }

            .controls {
                display: flex;
                gap: 12px;
                align-items: flex-end;
                margin-bottom: 12px;
            }

            .controls label {
                display: flex;
                flex-direction: column;
                font-size: 12px;
                gap: 4px;
            }

            .status {
                color: #54698d;
                font-size: 13px;
            }

            .errors {
                color: #c23934;
                font-size: 13px;
            }

            table {
                width: 100%;
                border-collapse: collapse;
                font-size: 13px;
            }

            th, td {
                text-align: left;
                padding: 6px 8px;
                border-bottom: 1px solid #e8ebf0;
            }

            .toast-stack {
                position: fixed;
                top: 16px;
                right: 16px;
                display: flex;
                flex-direction: column;
                gap: 8px;
                z-index: 1000;
            }

            .toast {
                display: flex;
                gap: 8px;
                align-items: baseline;
                padding: 10px 14px;
                border-radius: 6px;
                color: #fff;
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.25);
            }

            .toast-error { background: #c23934; }
            .toast-warning { background: #b8860b; }
            .toast-success { background: #2e7d32; }
            .toast-info { background: #16325c; }

            .toast button {
                background: transparent;
                border: none;
                color: inherit;
                cursor: pointer;
            }
            "#}
        </style>
        <div class="stock-chart-app">
            <h1>"Stock Dashboard"</h1>
            <div class="widget">
                <CandlestickChart />
            </div>
            <div class="widget">
                <AccountFinder />
            </div>
            <div class="widget">
                <ContactList />
            </div>
            <ToastHost />
        </div>
    }
}

/// Candlestick chart widget: date-range inputs, submit, SVG surface.
///
/// A phase machine gates drawing: the surface must be mounted and the
/// renderer bootstrapped before stored data is drawn, and both the
/// bootstrap and every fetch/draw cycle are idempotent.
#[component]
pub fn CandlestickChart(
    #[prop(default = DEFAULT_SVG_WIDTH)] svg_width: f64,
    #[prop(default = DEFAULT_SVG_HEIGHT)] svg_height: f64,
) -> impl IntoView {
    let (start_date, set_start_date) = create_signal(String::new());
    let (end_date, set_end_date) = create_signal(String::new());
    let (phase, set_phase) = create_signal(ChartPhase::Unmounted);
    let (series, set_series) = create_signal(PriceSeries::default());
    let (status, set_status) = create_signal("Pick a date range".to_string());

    let session = Rc::new(ChartSession::new(ApexBridgeClient::new()));
    let renderer = Rc::new(SvgChartRenderer::new("candlestick-svg"));
    let svg_ref = create_node_ref::<Svg>();

    // Mount + bootstrap, once. Re-runs after the first success return early
    // through the phase guard.
    let bootstrap_renderer = Rc::clone(&renderer);
    create_effect(move |_| {
        if svg_ref.get().is_none() || phase.get_untracked() != ChartPhase::Unmounted {
            return;
        }
        set_phase.set(ChartPhase::Unmounted.mounted());
        match bootstrap_renderer.bootstrap() {
            Ok(()) => set_phase.update(|p| *p = p.loaded()),
            Err(error) => {
                log_error!(
                    LogComponent::Presentation("CandlestickChart"),
                    "bootstrap failed: {error}"
                );
                show_toast("Error initializing chart", &error.to_string(), ToastVariant::Error);
            }
        }
    });

    // Redraw whenever phase or data changes; layout is recomputed from
    // scratch and the renderer clears before drawing.
    let draw_renderer = Rc::clone(&renderer);
    create_effect(move |_| {
        let current = phase.get();
        series.with(|stored| {
            if !current.can_draw() || stored.is_empty() {
                return;
            }
            match ChartLayout::compute(stored, svg_width, svg_height) {
                Some(layout) => {
                    if let Err(error) = draw_renderer.render(&layout) {
                        log_error!(
                            LogComponent::Presentation("CandlestickChart"),
                            "render failed: {error}"
                        );
                    }
                }
                None => {
                    log_warn!(
                        LogComponent::Presentation("CandlestickChart"),
                        "series not drawable, skipping render"
                    );
                }
            }
        });
    });

    let submit_session = Rc::clone(&session);
    let on_submit = move |_| {
        let range = DateRange::new(start_date.get_untracked(), end_date.get_untracked());
        log_info!(
            LogComponent::Presentation("CandlestickChart"),
            "submit for {}..{}",
            range.start,
            range.end
        );

        let session = Rc::clone(&submit_session);
        spawn_local(async move {
            match session.submit(&range).await {
                SubmitOutcome::Updated(count) => {
                    set_series.set(session.series_snapshot());
                    set_phase.update(|p| *p = p.data_ready());
                    set_status.set(format!("Loaded {count} price points"));
                }
                SubmitOutcome::Rejected => {
                    set_status.set("Previous fetch still running".to_string());
                }
                SubmitOutcome::Incomplete => {
                    set_status.set("Both dates are required".to_string());
                }
                // Failure is already logged; the prior chart stays up.
                SubmitOutcome::Failed => {}
            }
        });
    };

    view! {
        <div class="candlestick-chart">
            <h2>"Candlestick Chart"</h2>
            <div class="controls">
                <label>
                    "Start date"
                    <input
                        type="date"
                        on:change=move |ev| set_start_date.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "End date"
                    <input
                        type="date"
                        on:change=move |ev| set_end_date.set(event_target_value(&ev))
                    />
                </label>
                <button on:click=on_submit>"Load"</button>
            </div>
            <svg
                id="candlestick-svg"
                node_ref=svg_ref
                width=svg_width
                height=svg_height
            ></svg>
            <div class="status">{move || status.get()}</div>
        </div>
    }
}

/// Account lookup by minimum annual revenue. The resource refetches every
/// time the watched revenue value changes, mirroring a reactive wire.
#[component]
pub fn AccountFinder() -> impl IntoView {
    let (annual_revenue, set_annual_revenue) = create_signal::<Option<f64>>(None);
    let (record_page_url, set_record_page_url) = create_signal::<Option<String>>(None);

    let client = ApexBridgeClient::new();
    let accounts = create_resource(
        move || annual_revenue.get(),
        move |revenue| {
            let client = client.clone();
            async move {
                match revenue {
                    Some(value) => client.query_accounts_by_revenue(value).await,
                    None => Ok(Vec::new()),
                }
            }
        },
    );

    let view_record = move |record_id: &str| {
        match RecordNavigator::navigate_to_record("Account", record_id, "view") {
            Ok(url) => set_record_page_url.set(Some(url)),
            Err(error) => {
                log_error!(LogComponent::Presentation("AccountFinder"), "{error}");
            }
        }
    };

    view! {
        <div class="account-finder">
            <h2>"Account Finder"</h2>
            <div class="controls">
                <label>
                    "Annual revenue"
                    <input
                        type="number"
                        prop:value=move || {
                            annual_revenue.get().map(|v| v.to_string()).unwrap_or_default()
                        }
                        on:change=move |ev| {
                            set_annual_revenue.set(event_target_value(&ev).parse().ok())
                        }
                    />
                </label>
                <button on:click=move |_| set_annual_revenue.set(None)>"Reset"</button>
            </div>
            {move || match accounts.get() {
                None => view! { <p class="status">"Loading accounts..."</p> }.into_view(),
                Some(Err(error)) => {
                    view! { <p class="errors">{error.to_string()}</p> }.into_view()
                }
                Some(Ok(rows)) => {
                    view! {
                        <table>
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Annual Revenue"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|account| {
                                        let id = account.id.clone();
                                        view! {
                                            <tr>
                                                <td>{account.name}</td>
                                                <td>{format!("${:.0}", account.annual_revenue)}</td>
                                                <td>
                                                    <button on:click=move |_| view_record(&id)>
                                                        "View"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_view()
                }
            }}
            {move || {
                record_page_url
                    .get()
                    .map(|url| view! { <p class="status">"Record page: " {url}</p> })
            }}
        </div>
    }
}

/// Contact directory table. One-shot subscription yielding either rows or
/// a reduced, display-ready error list.
#[component]
pub fn ContactList() -> impl IntoView {
    let client = ApexBridgeClient::new();
    let contacts = create_resource(
        || (),
        move |_| {
            let client = client.clone();
            async move { client.get_contacts().await }
        },
    );

    view! {
        <div class="contact-list">
            <h2>"Contacts"</h2>
            {move || match contacts.get() {
                None => view! { <p class="status">"Loading contacts..."</p> }.into_view(),
                Some(Err(error)) => {
                    let messages = reduce_errors(&error);
                    view! {
                        <ul class="errors">
                            {messages.into_iter().map(|m| view! { <li>{m}</li> }).collect_view()}
                        </ul>
                    }
                        .into_view()
                }
                Some(Ok(rows)) => {
                    view! {
                        <table>
                            <thead>
                                <tr>
                                    {CONTACT_COLUMNS
                                        .iter()
                                        .map(|column| view! { <th>{*column}</th> })
                                        .collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|contact| {
                                        view! {
                                            <tr>
                                                <td>{contact.first_name}</td>
                                                <td>{contact.last_name}</td>
                                                <td>{contact.email}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}

/// Renders the global toast queue; each toast stays until dismissed.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast toast-{}", toast.variant)>
                            <strong>{toast.title}</strong>
                            <span>{toast.message}</span>
                            <button on:click=move |_| dismiss_toast(id)>"✕"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
