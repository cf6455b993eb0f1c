use std::f64::consts::TAU;

use gloo_timers::callback::Interval;
use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Date;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::config;
use crate::engine::scene::{Frame, Scene};

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Keep the backing store the same size as the element on screen.
fn fit_to_layout(canvas: &HtmlCanvasElement) -> Option<(f64, f64)> {
    let width = canvas.client_width().max(0) as u32;
    let height = canvas.client_height().max(0) as u32;
    if width == 0 || height == 0 {
        return None;
    }
    if canvas.width() != width {
        canvas.set_width(width);
    }
    if canvas.height() != height {
        canvas.set_height(height);
    }
    Some((width as f64, height as f64))
}

fn paint(ctx: &CanvasRenderingContext2d, frame: &Frame, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);

    ctx.set_line_width(1.0);
    for line in &frame.lines {
        ctx.set_stroke_style(&JsValue::from_str(&line.tint.css(line.alpha)));
        ctx.begin_path();
        ctx.move_to(line.from.0, line.from.1);
        ctx.line_to(line.to.0, line.to.1);
        ctx.stroke();
    }

    for point in &frame.points {
        ctx.set_fill_style(&JsValue::from_str(&point.tint.css(point.alpha)));
        ctx.begin_path();
        if ctx.arc(point.at.0, point.at.1, point.radius, 0.0, TAU).is_ok() {
            ctx.fill();
        }
    }
}

#[function_component(HeroScene)]
pub fn hero_scene() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let scene = Scene::hero(&mut rand::thread_rng(), config::STAR_COUNT);
                debug!("hero scene built with {} stars", scene.stars().len());
                let started = Date::now();

                let interval = Interval::new(config::SCENE_FRAME_MS, move || {
                    let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                        return;
                    };
                    let Some((width, height)) = fit_to_layout(&canvas) else {
                        return;
                    };
                    let Some(ctx) = context_2d(&canvas) else {
                        return;
                    };
                    let t = (Date::now() - started) / 1000.0;
                    paint(&ctx, &scene.frame(t, width, height), width, height);
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="hero-canvas" aria-hidden="true"></canvas>
    }
}
