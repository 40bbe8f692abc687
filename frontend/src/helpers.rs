use chrono::Utc;
use gloo_timers::future::sleep;
use sycamore::{
    futures::spawn_local_scoped,
    prelude::*,
    reactive::{create_effect_scoped, BoundedScope},
};
use web_sys::window;

use sensor_dashboard::{
    prefs::{self, PreferenceStore},
    source::ReadingSource,
    Dashboard, ReadingQuery, RefreshOutcome, Selection, Theme, FRESH_INDICATOR, REFRESH_INTERVAL,
};

/// `window.localStorage`; every call quietly does nothing when storage is unavailable.
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let ls = window()?.local_storage().ok().flatten()?;
        ls.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(ls) = window().and_then(|w| w.local_storage().ok().flatten()) else { return };
        if ls.set_item(key, value).is_err() {
            web_sys::console::warn_1(&format!("couldn't save {key} preference").into());
        }
    }
}

/// Theme signal restored from local storage and mirrored onto `<body>`.
pub fn create_theme_signal<'a>(cx: Scope<'a>) -> &'a Signal<Theme> {
    let theme = create_signal(cx, prefs::load_theme(&LocalStorage));
    create_effect(cx, move || apply_theme_class(*theme.get()));

    theme
}

fn apply_theme_class(theme: Theme) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    body.set_class_name(theme.as_str());
}

/// Applies `update` to a copy of the selection and writes it back only when
/// `update` reports a change, so re-picking the current value notifies nobody.
pub fn update_selection(selection: &Signal<Selection>, update: impl FnOnce(&mut Selection) -> bool) -> bool {
    let mut next = (*selection.get_untracked()).clone();
    let changed = update(&mut next);
    if changed {
        selection.set(next);
    }
    changed
}

/// Runs `on_change` now and after every selection change with the new query.
///
/// Each run gets a fresh child scope; the previous one is disposed first, which
/// cancels whatever was spawned on it. Only `selection` is tracked.
pub fn on_selection_change<'a, F>(cx: Scope<'a>, selection: &'a Signal<Selection>, mut on_change: F)
where
    F: for<'child> FnMut(BoundedScope<'child, 'a>, ReadingQuery) + 'a,
{
    create_effect_scoped(cx, move |child_cx| {
        let query = selection.get().query();
        on_change(child_cx, query);
    });
}

/// Fetches right away and then every [`REFRESH_INTERVAL`], starting over whenever
/// the selection changes.
///
/// Only the timer belongs to the effect's child scope, so a selection change
/// cancels it while requests already in flight still land.
pub fn start_refresher<'a, S>(
    cx: Scope<'a>,
    source: S,
    selection: &'a Signal<Selection>,
    dashboard: &'a Signal<Dashboard>,
) where
    S: ReadingSource + 'a,
{
    let source = create_ref(cx, source);

    on_selection_change(cx, selection, move |timer_cx, query| {
        spawn_local_scoped(cx, refresh(source, query.clone(), dashboard));
        spawn_local_scoped(timer_cx, async move {
            loop {
                sleep(REFRESH_INTERVAL).await;
                spawn_local_scoped(cx, refresh(source, query.clone(), dashboard));
            }
        });
    });
}

pub async fn refresh<S: ReadingSource>(source: &S, query: ReadingQuery, dashboard: &Signal<Dashboard>) {
    let result = source.fetch(&query).await;
    if let Err(err) = &result {
        web_sys::console::error_1(&format!("Error fetching sensor data: {err}").into());
    }

    let outcome = dashboard.modify().apply(&query, result, Utc::now());
    if outcome == RefreshOutcome::Fresh {
        sleep(FRESH_INDICATOR).await;
        dashboard.modify().clear_fresh();
    }
}
