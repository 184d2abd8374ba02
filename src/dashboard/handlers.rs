//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - Route handlers for displaying the dashboard and its htmx partial
//! - HTML view functions for rendering the dashboard UI
//! - State and query types used by the handlers

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    http::header::VARY,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    dashboard::{
        cards::summary_cards_view,
        charts::{DashboardChart, build_charts, charts_script, charts_view},
    },
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, ECHARTS_CDN, FORM_LABEL_STYLE, HeadElement, base},
    metrics::{
        DailyRecord, Dataset, DatasetStore, RangeMode, Summary, filter_records, resolve_range,
    },
    theme::Theme,
    timezone::today_in,
};

/// The query value the range selector uses for the unfiltered view.
///
/// It is not a known range mode, so it falls through to showing every record.
const ALL_RANGE_QUERY_VALUE: &str = "all";

const SELECT_STYLE: &str = "p-2 rounded border outline-none transition \
    bg-white border-gray-300 dark:bg-gray-700 dark:text-white dark:border-gray-600";

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The records to display.
    pub dataset: Arc<DatasetStore>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            dataset: state.dataset.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The user's display choices, carried in the query string.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// The range mode, e.g. "last-7-days". Unknown values show every record.
    pub range: Option<String>,
    /// "light" or "dark".
    pub theme: Option<String>,
}

/// Holds all the data needed to render the dashboard.
pub(super) struct DashboardData {
    /// The selected range, or `None` for the unfiltered view.
    pub range: Option<RangeMode>,
    pub theme: Theme,
    /// The records inside the selected range.
    pub records: Vec<DailyRecord>,
    pub summary: Summary,
    charts: Vec<DashboardChart>,
}

/// Display the dashboard.
///
/// Requests made by htmx get only the dashboard body so the range selector
/// can swap it in place. Both responses vary on `HX-Request` since they share a URL.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    HxRequest(is_htmx_request): HxRequest,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, Error> {
    let today = today_in(&state.local_timezone)?;
    let dataset = state.dataset.current(today);
    let data = build_dashboard_data(&dataset, &query, today);

    tracing::debug!(
        "Showing {} of {} records for range {:?}",
        data.records.len(),
        dataset.records().len(),
        data.range
    );

    let markup = if is_htmx_request {
        dashboard_body(&data)
    } else {
        dashboard_view(&data)
    };

    Ok(([(VARY, "HX-Request")], markup).into_response())
}

/// Filter, summarise and chart the dataset for the requested range.
pub(super) fn build_dashboard_data(
    dataset: &Dataset,
    query: &DashboardQuery,
    today: Date,
) -> DashboardData {
    let range = resolve_range(query.range.as_deref());
    let theme = Theme::from_query(query.theme.as_deref());
    let records = filter_records(dataset.records(), range, today);
    let summary = Summary::from_records(&records);
    let charts = build_charts(&records);

    DashboardData {
        range,
        theme,
        records,
        summary,
        charts,
    }
}

/// The dashboard URL for `range` and `theme`.
fn dashboard_url(range: Option<RangeMode>, theme: Theme) -> String {
    let range = range.map_or(ALL_RANGE_QUERY_VALUE, RangeMode::as_query_value);

    format!(
        "{}?range={range}&theme={}",
        endpoints::DASHBOARD_VIEW,
        theme.as_query_value()
    )
}

/// Renders the full dashboard page.
fn dashboard_view(data: &DashboardData) -> Markup {
    let scripts = [HeadElement::ScriptLink(ECHARTS_CDN.to_owned())];

    base("Dashboard", data.theme, &scripts, &dashboard_body(data))
}

/// Renders everything inside the page body: header, range selector, cards and charts.
///
/// This is also the partial returned for htmx requests.
fn dashboard_body(data: &DashboardData) -> Markup {
    let toggle_url = dashboard_url(data.range, data.theme.toggled());

    html!(
        main id="dashboard"
        {
            header class="flex items-center justify-between mb-8"
            {
                h1 class="text-4xl font-extrabold tracking-tight" { "Marketing Dashboard" }

                a id="theme-toggle" href=(toggle_url) class=(BUTTON_PRIMARY_STYLE)
                {
                    (data.theme.toggle_label())
                }
            }

            (range_selector(data.range, data.theme))

            (summary_cards_view(&data.summary))

            @if data.records.is_empty() {
                p class="mb-6 text-gray-500 dark:text-gray-400"
                {
                    "No records fall in this date range."
                }
            }

            (charts_view(&data.charts))

            (charts_script(&data.charts, data.theme))
        }
    )
}

/// Renders the date range drop-down.
///
/// Changing the selection fetches the new dashboard body with htmx. Without
/// JavaScript the form is submitted with the button instead.
fn range_selector(selected: Option<RangeMode>, theme: Theme) -> Markup {
    html!(
        form
            id="range-form"
            method="get"
            action=(endpoints::DASHBOARD_VIEW)
            hx-get=(endpoints::DASHBOARD_VIEW)
            hx-trigger="change"
            hx-target="#dashboard"
            hx-swap="outerHTML"
            hx-push-url="true"
            class="mb-6"
        {
            label for="range" class=(FORM_LABEL_STYLE) { "Date Range:" }

            select id="range" name="range" class=(SELECT_STYLE)
            {
                @for mode in RangeMode::ALL {
                    option value=(mode.as_query_value()) selected[selected == Some(mode)]
                    {
                        (mode.label())
                    }
                }

                option value=(ALL_RANGE_QUERY_VALUE) selected[selected.is_none()]
                {
                    "All Data"
                }
            }

            input type="hidden" name="theme" value=(theme.as_query_value());

            noscript
            {
                button type="submit" class={"ml-2 " (BUTTON_PRIMARY_STYLE)} { "Apply" }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        http::{StatusCode, header::VARY},
        routing::get,
    };
    use axum_test::TestServer;
    use rand::{SeedableRng, rngs::StdRng};
    use scraper::{ElementRef, Html, Selector};
    use std::sync::Arc;
    use time::{Duration, macros::date};

    use crate::{
        endpoints,
        metrics::{Dataset, DatasetStore, RangeMode},
        theme::Theme,
        timezone::today_in,
    };

    use super::{
        DashboardQuery, DashboardState, build_dashboard_data, dashboard_url, get_dashboard_page,
    };

    fn get_test_server(dataset: Dataset) -> TestServer {
        let state = DashboardState {
            dataset: Arc::new(DatasetStore::new(dataset)),
            local_timezone: "Etc/UTC".to_owned(),
        };
        let app = Router::new()
            .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
            .with_state(state);

        TestServer::try_new(app).expect("Could not create test server.")
    }

    fn generated_dataset() -> Dataset {
        let today = today_in("Etc/UTC").unwrap();
        Dataset::generate(today, &mut StdRng::seed_from_u64(42))
    }

    fn query(range: Option<&str>, theme: Option<&str>) -> DashboardQuery {
        DashboardQuery {
            range: range.map(str::to_owned),
            theme: theme.map(str::to_owned),
        }
    }

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }

    fn select_one<'a>(html: &'a Html, selector: &str) -> ElementRef<'a> {
        let parsed = Selector::parse(selector).unwrap();
        html.select(&parsed)
            .next()
            .unwrap_or_else(|| panic!("no element matches {selector}"))
    }

    fn text_of(html: &Html, selector: &str) -> String {
        select_one(html, selector).text().collect::<String>().trim().to_owned()
    }

    #[tokio::test]
    async fn dashboard_page_loads_successfully() {
        let server = get_test_server(Dataset::sample());

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        assert_valid_html(&html);

        assert_eq!(text_of(&html, "h1"), "Marketing Dashboard");
        assert_eq!(text_of(&html, "#total-leads p"), "350");
        assert_eq!(text_of(&html, "#avg-conversion p"), "26.6%");
        assert_eq!(text_of(&html, "#total-spend p"), "$1,160");

        for id in [
            "leads-chart",
            "conversion-chart",
            "spend-chart",
            "email-chart",
            "social-chart",
            "ads-chart",
        ] {
            select_one(&html, &format!("#{id}"));
        }
    }

    #[tokio::test]
    async fn default_range_is_last_7_days() {
        let server = get_test_server(generated_dataset());

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        let selected = select_one(&html, "#range option[selected]");
        assert_eq!(selected.value().attr("value"), Some("last-7-days"));
    }

    #[tokio::test]
    async fn htmx_request_returns_body_partial() {
        let server = get_test_server(Dataset::sample());

        let response = server
            .get("/dashboard?range=this-month")
            .add_header("HX-Request", "true")
            .await;

        response.assert_status_ok();
        let text = response.text();
        assert!(!text.contains("<!DOCTYPE html>"), "{text}");
        assert!(text.starts_with("<main id=\"dashboard\""), "{text}");

        let html = Html::parse_fragment(&text);
        let selected = select_one(&html, "#range option[selected]");
        assert_eq!(selected.value().attr("value"), Some("this-month"));
    }

    #[tokio::test]
    async fn full_page_and_partial_vary_on_htmx_header() {
        let server = get_test_server(Dataset::sample());

        let full = server.get("/dashboard?range=last-7-days").await;
        let partial = server
            .get("/dashboard?range=last-7-days")
            .add_header("HX-Request", "true")
            .await;

        full.assert_status_ok();
        partial.assert_status_ok();
        assert!(full.text().starts_with("<!DOCTYPE html>"));
        assert!(partial.text().starts_with("<main id=\"dashboard\""));
        for response in [&full, &partial] {
            assert_eq!(
                response.headers().get(VARY).and_then(|value| value.to_str().ok()),
                Some("HX-Request")
            );
        }
    }

    #[tokio::test]
    async fn week_old_generated_data_is_refreshed_for_today() {
        let today = today_in("Etc/UTC").unwrap();
        let started = today - Duration::days(8);
        let server = get_test_server(Dataset::generate(started, &mut StdRng::seed_from_u64(11)));

        let response = server.get("/dashboard?range=last-7-days").await;

        response.assert_status_ok();
        let text = response.text();
        assert!(!text.contains("No records fall in this date range."), "{text}");
        let html = Html::parse_document(&text);
        assert_ne!(text_of(&html, "#avg-conversion p"), "No data");
    }

    #[tokio::test]
    async fn unrecognized_range_shows_all_records() {
        let dataset = generated_dataset();
        let expected_leads: u64 = dataset.records().iter().map(|r| u64::from(r.leads)).sum();
        let server = get_test_server(dataset);

        let response = server.get("/dashboard?range=bogus").await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        assert_eq!(text_of(&html, "#total-leads p"), expected_leads.to_string());
        let selected = select_one(&html, "#range option[selected]");
        assert_eq!(selected.value().attr("value"), Some("all"));
    }

    #[tokio::test]
    async fn dark_theme_marks_root_and_offers_light_toggle() {
        let server = get_test_server(Dataset::sample());

        let response = server
            .get("/dashboard?range=last-30-days&theme=dark")
            .await;

        response.assert_status(StatusCode::OK);
        let html = Html::parse_document(&response.text());
        assert_eq!(select_one(&html, "html").value().attr("class"), Some("dark"));

        let toggle = select_one(&html, "#theme-toggle");
        assert_eq!(toggle.text().collect::<String>().trim(), "Toggle Light Mode");
        assert_eq!(
            toggle.value().attr("href"),
            Some("/dashboard?range=last-30-days&theme=light")
        );
    }

    #[test]
    fn this_month_data_shares_todays_month() {
        let today = date!(2026 - 10 - 19);
        let dataset = Dataset::generate(today, &mut StdRng::seed_from_u64(9));

        let data = build_dashboard_data(&dataset, &query(Some("this month"), None), today);

        assert_eq!(data.range, Some(RangeMode::ThisMonth));
        assert!(data.records.len() <= 30);
        assert!(data.records.iter().all(|r| {
            let date = r.date.unwrap();
            date.month() == today.month() && date.year() == today.year()
        }));
        assert_eq!(data.theme, Theme::Light);
    }

    #[test]
    fn dashboard_url_uses_all_for_unfiltered_view() {
        assert_eq!(
            dashboard_url(None, Theme::Dark),
            "/dashboard?range=all&theme=dark"
        );
        assert_eq!(
            dashboard_url(Some(RangeMode::Last7Days), Theme::Light),
            "/dashboard?range=last-7-days&theme=light"
        );
    }
}
