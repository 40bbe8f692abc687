use std::cell::Cell;

use anyhow::bail;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use sycamore::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use models::sensor;
use sensor_dashboard::{
    chart::{draw_chart, ChartPoint, Metric},
    Dashboard, Selection, Theme,
};

#[derive(Prop)]
pub struct ChartParams {
    pub metric: Metric,
}

/// One metric of the selected sensor's cached series, redrawn whenever the
/// series, the selection or the theme changes.
#[component]
pub fn SeriesChart<G: Html>(cx: Scope, params: ChartParams) -> View<G> {
    let metric = params.metric;
    let dashboard = use_context::<Signal<Dashboard>>(cx);
    let selection = use_context::<Signal<Selection>>(cx);
    let theme = use_context::<Signal<Theme>>(cx);
    let prepared = create_ref(cx, Cell::new(false));
    let canvas_node = create_node_ref(cx);

    let heading = create_selector(cx, move || {
        let name = sensor::display_name(&selection.get().sensor).unwrap_or_default();
        metric.heading(name)
    });

    create_effect(cx, move || {
        let dashboard = dashboard.get();
        let selection = selection.get();
        let theme = *theme.get();
        let Some(canvas) = canvas_node.try_get::<DomNode>() else {
            return;
        };

        if !prepared.get() {
            prepare_canvas(&canvas);
            prepared.set(true);
        }

        if let Err(err) = render_canvas(&canvas, dashboard.series(&selection.sensor), metric, theme) {
            web_sys::console::warn_1(&format!("F (chart) ({err})").into());
        }
    });

    view! { cx,
        div(class="chart-container") {
            h3 { (heading.get()) }
            canvas(ref=canvas_node, style="width: 100%;")
        }
    }
}

const CHART_HEIGHT: f64 = 300.0;

fn prepare_canvas(canvas: &DomNode) -> Option<()> {
    let canvas = canvas.inner_element().dyn_into::<HtmlCanvasElement>().ok()?;
    let window = window()?;

    let width: f64 = window
        .get_computed_style(&canvas)
        .ok()
        .flatten()?
        .get_property_value("width")
        .ok()?
        .trim_end_matches("px")
        .parse()
        .ok()?;
    canvas
        .style()
        .set_property("height", &format!("{CHART_HEIGHT}px"))
        .ok()?;

    let display_factor = window.device_pixel_ratio();
    canvas.set_width((width * display_factor) as u32);
    canvas.set_height((CHART_HEIGHT * display_factor) as u32);

    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    ctx.scale(display_factor, display_factor).ok()
}

fn render_canvas(canvas: &DomNode, points: &[ChartPoint], metric: Metric, theme: Theme) -> anyhow::Result<()> {
    let Ok(canvas) = canvas.inner_element().dyn_into::<HtmlCanvasElement>() else {
        bail!("Couldn't convert canvas to HtmlCanvasElement");
    };

    // Clear the canvas
    let Some(ctx) = canvas.get_context("2d").map_err(|e| anyhow::anyhow!("JsError: {e:?}"))? else {
        bail!("No 2D context available");
    };
    let Some(ctx) = ctx.dyn_ref::<CanvasRenderingContext2d>() else {
        bail!("2D context is the wrong type");
    };
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);

    let Some(backend) = CanvasBackend::with_canvas_object(canvas) else {
        bail!("Couldn't create canvas backend");
    };

    let scaling = window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let (w, h) = backend.get_size();
    let (w, h) = ((w as f64 / scaling) as u32, (h as f64 / scaling) as u32);
    let root = backend.into_drawing_area();
    let root = root.shrink((0, 0), (w, h));

    draw_chart(&root, points, metric, theme)
}
