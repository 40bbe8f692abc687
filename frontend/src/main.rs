#![allow(non_snake_case)]

use chrono::Utc;
use sycamore::prelude::*;

use sensor_dashboard::{chart::Metric, source::HttpReadingSource, Dashboard, Selection};

use crate::controls::{ErrorBanner, LastUpdated, SelectionControls, SeriesChart, StatCards, ThemeToggle};
use crate::helpers::{create_theme_signal, start_refresher};

mod controls;
mod helpers;

fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    sycamore::render(|cx| {
        // Global context signals
        let theme = create_theme_signal(cx);
        provide_context_ref(cx, theme);

        let selection = create_signal(cx, Selection::default());
        provide_context_ref(cx, selection);

        let dashboard = create_signal(cx, Dashboard::new(Utc::now()));
        provide_context_ref(cx, dashboard);

        start_refresher(cx, HttpReadingSource::default(), selection, dashboard);

        view! { cx,
            App()
        }
    })
}

#[component]
fn App(cx: Scope) -> View<DomNode> {
    view! { cx,
        div(class="App") {
            header(class="App-header") {
                ThemeToggle()
                h1 { "IoT Sensor Dashboard" }
                SelectionControls()
                ErrorBanner()
            }

            main(class="dashboard-content") {
                StatCards()
                SeriesChart(metric = Metric::Temperature)
                SeriesChart(metric = Metric::Humidity)
                LastUpdated()
            }
        }
    }
}
