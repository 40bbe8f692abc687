use sycamore::prelude::*;

use sensor_dashboard::{chart::local_time_label, Dashboard};

#[component]
pub fn StatCards<G: Html>(cx: Scope) -> View<G> {
    let dashboard = use_context::<Signal<Dashboard>>(cx);

    let latest_temp = create_selector(cx, move || format!("{}°C", dashboard.get().latest_temperature_label()));
    let latest_hum = create_selector(cx, move || format!("{}%", dashboard.get().latest_humidity_label()));
    let avg_temp = create_selector(cx, move || format!("{}°C", dashboard.get().stats().avg_temp_label()));
    let max_temp = create_selector(cx, move || format!("{}°C", dashboard.get().stats().max_temp_label()));
    let min_temp = create_selector(cx, move || format!("{}°C", dashboard.get().stats().min_temp_label()));

    view! { cx,
        div(class="stats-container") {
            div(class="stat-card current-reading") {
                h4 { "Latest Temperature" }
                p { (latest_temp.get()) }
            }
            div(class="stat-card current-reading") {
                h4 { "Latest Humidity" }
                p { (latest_hum.get()) }
            }
            div(class="stat-card") {
                h4 { "Avg Temp" }
                p { (avg_temp.get()) }
            }
            div(class="stat-card") {
                h4 { "Max Temp" }
                p { (max_temp.get()) }
            }
            div(class="stat-card") {
                h4 { "Min Temp" }
                p { (min_temp.get()) }
            }
        }
    }
}

#[component]
pub fn ErrorBanner<G: Html>(cx: Scope) -> View<G> {
    let dashboard = use_context::<Signal<Dashboard>>(cx);
    let error = create_selector(cx, move || dashboard.get().status().error.clone());

    view! { cx,
        (match &*error.get() {
            Some(message) => {
                let message = message.clone();
                view! { cx, p(class="error") { (message) } }
            }
            None => view! { cx, },
        })
    }
}

/// Footer with the time of the last good refresh and the activity dot.
#[component]
pub fn LastUpdated<G: Html>(cx: Scope) -> View<G> {
    let dashboard = use_context::<Signal<Dashboard>>(cx);

    let dot_class = create_selector(cx, move || match dashboard.get().status().fresh {
        true => "status-dot active",
        false => "status-dot",
    });
    let updated = create_selector(cx, move || local_time_label(dashboard.get().status().last_updated));

    view! { cx,
        div(class="footer") {
            span(class=dot_class.get())
            "Last Updated: "
            (updated.get())
        }
    }
}
