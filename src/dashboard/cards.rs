//! Card components for the summary statistics.

use maud::{Markup, html};

use crate::{
    html::{CARD_LABEL_STYLE, CARD_STYLE, CARD_VALUE_STYLE, format_currency_rounded},
    metrics::Summary,
};

/// Shown in place of the average when there are no records to average.
pub(super) const NO_DATA_LABEL: &str = "No data";

/// Formats a conversion rate with one decimal place, e.g. "26.6%".
fn format_conversion(avg_conversion: Option<f64>) -> String {
    match avg_conversion {
        Some(value) => format!("{value:.1}%"),
        None => NO_DATA_LABEL.to_owned(),
    }
}

/// Renders the total leads, average conversion and total spend cards.
pub(super) fn summary_cards_view(summary: &Summary) -> Markup {
    html! {
        section
            id="summary-cards"
            class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-10"
        {
            (summary_card("total-leads", "Total Leads", &summary.total_leads.to_string()))
            (summary_card(
                "avg-conversion",
                "Avg. Conversion",
                &format_conversion(summary.avg_conversion),
            ))
            (summary_card(
                "total-spend",
                "Total Spend",
                &format_currency_rounded(summary.total_spend as f64),
            ))
        }
    }
}

fn summary_card(id: &str, label: &str, value: &str) -> Markup {
    html! {
        div id=(id) class=(CARD_STYLE)
        {
            h3 class=(CARD_LABEL_STYLE) { (label) }
            p class=(CARD_VALUE_STYLE) { (value) }
        }
    }
}
