//! Chart generation and rendering for the dashboard.
//!
//! Each metric gets its own line chart over the visible days. Charts are
//! generated as JSON configuration for the ECharts library and rendered with
//! corresponding HTML containers and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid},
    element::{AxisType, ItemStyle, LineStyle, LineStyleType, SplitLine, Tooltip, Trigger},
    series::Line,
};
use maud::{Markup, PreEscaped, html};

use crate::{
    html::CARD_STYLE,
    metrics::{DailyRecord, Metric},
    theme::Theme,
};

/// The height of each chart in pixels.
const CHART_HEIGHT_PX: u32 = 200;

/// Charts per grid row.
const CHARTS_PER_ROW: usize = 3;

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The heading shown above the chart
    pub title: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Build one chart per metric from the visible records.
pub(super) fn build_charts(records: &[DailyRecord]) -> Vec<DashboardChart> {
    Metric::ALL
        .into_iter()
        .map(|metric| DashboardChart {
            id: metric.chart_id(),
            title: metric.title(),
            options: metric_chart(metric, records).to_string(),
        })
        .collect()
}

/// A line chart of `metric` with one point per record, labelled by weekday.
pub(super) fn metric_chart(metric: Metric, records: &[DailyRecord]) -> Chart {
    let labels: Vec<String> = records.iter().map(|record| record.day.to_owned()).collect();
    let values: Vec<f64> = records
        .iter()
        .map(|record| f64::from(record.value(metric)))
        .collect();

    Chart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .top("8%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .split_line(dashed_grid_line())
                .data(labels),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .split_line(dashed_grid_line()),
        )
        .series(
            Line::new()
                .name(metric.title())
                .smooth(true)
                .item_style(ItemStyle::new().color(metric.color()))
                .line_style(LineStyle::new().color(metric.color()))
                .data(values),
        )
}

fn row_style(row: usize) -> &'static str {
    if row == 0 {
        "grid grid-cols-1 md:grid-cols-3 gap-6"
    } else {
        "grid grid-cols-1 md:grid-cols-3 gap-6 mt-10"
    }
}

fn dashed_grid_line() -> SplitLine {
    SplitLine::new()
        .show(true)
        .line_style(LineStyle::new().type_(LineStyleType::Dashed))
}

/// Renders the chart containers in rows of three.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        @for (row, row_charts) in charts.chunks(CHARTS_PER_ROW).enumerate() {
            section class=(row_style(row))
            {
                @for chart in row_charts {
                    div class=(CARD_STYLE)
                    {
                        h2 class="text-lg font-semibold mb-2" { (chart.title) }

                        div
                            id=(chart.id)
                            data-chart
                            class="w-full"
                            style=(format!("height: {CHART_HEIGHT_PX}px"))
                        {}
                    }
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// The script runs inline so it also initialises charts that htmx swaps into
/// the page. Charts follow `theme`. A single window resize listener resizes
/// whichever charts are currently on the page, and is only added once.
pub(super) fn charts_script(charts: &[DashboardChart], theme: Theme) -> Markup {
    let mut script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    if (!chartDom) {{ return; }}
                    const previous = echarts.getInstanceByDom(chartDom);
                    if (previous) {{ previous.dispose(); }}
                    const chart = echarts.init(chartDom, "{}");
                    const option = {};
                    chart.setOption(option);
                    chart.setOption({{ backgroundColor: "transparent" }});
                }})();"#,
                chart.id,
                theme.echarts_theme(),
                chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    script_content.push_str(RESIZE_LISTENER_SCRIPT);

    html!(script { (PreEscaped(script_content)) })
}

const RESIZE_LISTENER_SCRIPT: &str = r#"
if (!window.dashboardChartsResizeListener) {
    window.dashboardChartsResizeListener = () => {
        document.querySelectorAll("[data-chart]").forEach((chartDom) => {
            const chart = echarts.getInstanceByDom(chartDom);
            if (chart) { chart.resize(); }
        });
    };
    window.addEventListener("resize", window.dashboardChartsResizeListener);
}"#;
