use sycamore::prelude::*;

use models::sensor::SENSORS;
use sensor_dashboard::{prefs, selection::parse_date_input, EntryLimit, Selection, Theme};

use crate::helpers::{update_selection, LocalStorage};

#[component]
pub fn ThemeToggle<G: Html>(cx: Scope) -> View<G> {
    let theme = use_context::<Signal<Theme>>(cx);

    let label = create_selector(cx, move || match *theme.get() {
        Theme::Light => "Switch to Dark Mode",
        Theme::Dark => "Switch to Light Mode",
    });

    let toggle = move |_| theme.set(prefs::toggle_theme(&LocalStorage, *theme.get_untracked()));

    view! { cx,
        button(class="theme-toggle-btn", on:click=toggle) {
            (label.get())
        }
    }
}

/// Sensor, entry count and date pickers.
///
/// The inputs edit plain strings; a change that survives parsing is written
/// back to the shared [`Selection`], which is what re-fetches.
#[component]
pub fn SelectionControls<G: Html>(cx: Scope) -> View<G> {
    let selection = use_context::<Signal<Selection>>(cx);

    let initial = selection.get_untracked();
    let sensor = create_signal(cx, initial.sensor.clone());
    let limit = create_signal(cx, initial.limit.count().to_string());
    let date = create_signal(cx, initial.date.map(|d| d.to_string()).unwrap_or_default());

    create_effect(cx, move || {
        // `|` so every input signal gets tracked
        update_selection(selection, |next| {
            next.select_sensor(&sensor.get())
                | limit
                    .get()
                    .parse::<EntryLimit>()
                    .map(|l| next.select_limit(l))
                    .unwrap_or(false)
                | next.select_date(parse_date_input(&date.get()))
        });
    });

    let sensor_options = View::new_fragment(
        SENSORS
            .iter()
            .map(|&(id, name)| {
                if id == initial.sensor {
                    view! { cx, option(value=id, selected=true) { (name) } }
                } else {
                    view! { cx, option(value=id) { (name) } }
                }
            })
            .collect(),
    );

    let limit_options = View::new_fragment(
        EntryLimit::ALL
            .into_iter()
            .map(|entry_limit| {
                let value = entry_limit.count().to_string();
                let text = entry_limit.to_string();
                if entry_limit == initial.limit {
                    view! { cx, option(value=value, selected=true) { (text) } }
                } else {
                    view! { cx, option(value=value) { (text) } }
                }
            })
            .collect(),
    );

    let clear_date = move |_| date.set(String::new());

    view! { cx,
        div(class="controls-container") {
            div(class="control-group") {
                label { "Filter by Date: " }
                input(type="date", bind:value=date)
                (if date.get().is_empty() {
                    view! { cx, }
                } else {
                    view! { cx,
                        button(class="clear-btn", on:click=clear_date) { "Clear" }
                    }
                })
            }
            div(class="control-group") {
                label { "Select Sensor: " }
                select(bind:value=sensor) {
                    (sensor_options)
                }
            }
            div(class="control-group") {
                label { "Show Entries: " }
                select(bind:value=limit) {
                    (limit_options)
                }
            }
        }
    }
}
