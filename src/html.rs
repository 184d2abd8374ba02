use maud::{DOCTYPE, Markup, PreEscaped, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

use crate::{endpoints, theme::Theme};

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "px-4 py-2 rounded bg-blue-600 \
    hover:bg-blue-700 text-white font-semibold";

// Form styles
pub const FORM_LABEL_STYLE: &str = "mr-2 font-medium";

// Card styles
pub const CARD_STYLE: &str = "p-4 rounded-xl shadow-md transition-colors \
    bg-white dark:bg-gray-800";
pub const CARD_LABEL_STYLE: &str = "text-sm font-medium text-gray-400";
pub const CARD_VALUE_STYLE: &str = "text-2xl font-bold mt-1";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "min-h-screen p-6 transition-colors \
    bg-gray-50 text-gray-900 dark:bg-gray-900 dark:text-white";

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com/3.4.16";
const HTMX_CDN: &str = "https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js";
pub const ECHARTS_CDN: &str = "https://cdn.jsdelivr.net/npm/echarts@5.6.0/dist/echarts.min.js";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
}

pub fn base(title: &str, theme: Theme, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class=[theme.is_dark().then_some("dark")]
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Marketing Dashboard" }

                script src=(TAILWIND_CDN) {}
                script { (PreEscaped("tailwind.config = { darkMode: 'class' };")) }
                script src=(HTMX_CDN) {}

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }
            }

            body class=(PAGE_CONTAINER_STYLE)
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href=(endpoints::DASHBOARD_VIEW)
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Back to Dashboard"
                    }
                }
            }
        }
    );

    base(title, Theme::default(), &[], &content)
}

/// Format `number` as whole dollars with thousands separators, e.g. "$1,160".
pub fn format_currency_rounded(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    let number = number.round();

    if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0".to_owned()
    }
}
