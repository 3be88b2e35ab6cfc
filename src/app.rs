//! Browser glue: stage canvas, animation-frame loop and the wasm entry points.

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, window};

use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::layer::Surface;
use crate::session::Session;

pub const STAGE_CANVAS_ID: &str = "cb-stage";

/// Canvas 2d context as a drawing surface. Opacity maps to `globalAlpha`.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64, background: &str) {
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_fill_style(&JsValue::from_str(background));
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str, opacity: f64) {
        self.ctx.set_global_alpha(opacity);
        self.ctx.set_fill_style(&JsValue::from_str(fill));
        self.ctx.fill_rect(x, y, width, height);
    }
}

struct AppState {
    session: Session,
    surface: CanvasSurface,
    start_ms: Option<f64>, // timestamp of the first frame
}

thread_local! {
    static APP_STATE: std::cell::RefCell<Option<AppState>> = const { std::cell::RefCell::new(None) };
    static FRAME_LOOPS: std::cell::Cell<u32> = const { std::cell::Cell::new(0) };
}

/// Number of animation-frame loops started on this thread (at most one).
#[doc(hidden)]
pub fn frame_loop_count() -> u32 {
    FRAME_LOOPS.with(|n| n.get())
}

#[wasm_bindgen]
pub fn start_demo() -> Result<(), JsValue> {
    run(DemoConfig::default())
}

/// Start with a JSON config; missing fields take their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_demo_with_config(json: &str) -> Result<(), JsValue> {
    run(DemoConfig::from_json(json)?)
}

fn host(msg: &str) -> DemoError {
    DemoError::Host(msg.to_string())
}

fn run(config: DemoConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| host("no window"))?;
    let doc = win.document().ok_or_else(|| host("no document"))?;

    let vw = win.inner_width()?.as_f64().ok_or_else(|| host("innerWidth is not a number"))?;
    let vh = win.inner_height()?.as_f64().ok_or_else(|| host("innerHeight is not a number"))?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let session = Session::new(config, vw, vh, &mut rng).inspect_err(|e| {
        gloo::console::warn!("demo startup failed", e.to_string());
    })?;
    let (stage_w, stage_h) = session.stage_size();

    // Create / reuse the stage canvas inside the container (or body)
    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id(STAGE_CANVAS_ID) {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id(STAGE_CANVAS_ID);
        match doc.get_element_by_id(&session.config().container_id) {
            Some(container) => container.append_child(&c)?,
            None => doc.body().ok_or_else(|| host("no body"))?.append_child(&c)?,
        };
        c
    };
    canvas.set_width(stage_w as u32);
    canvas.set_height(stage_h as u32);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| host("2d context unavailable"))?
        .dyn_into()?;

    let mut surface = CanvasSurface::new(ctx);
    session.render(&mut surface);
    if let Some(pair) = session.pair() {
        gloo::console::log!("animating block", pair.moving.0, "against", pair.target.0);
    }

    // a restart swaps the session; the running loop picks it up
    APP_STATE.with(|s| s.replace(Some(AppState { session, surface, start_ms: None })));
    if frame_loop_count() == 0 {
        start_frame_loop();
    }
    Ok(())
}

type FrameCallback = std::rc::Rc<std::cell::RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(cb: &FrameCallback) {
    if let (Some(w), Some(closure)) = (window(), cb.borrow().as_ref()) {
        let _ = w.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}

fn start_frame_loop() {
    FRAME_LOOPS.with(|n| n.set(n.get() + 1));
    let f: FrameCallback = std::rc::Rc::new(std::cell::RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        APP_STATE.with(|state_cell| {
            if let Some(state) = state_cell.borrow_mut().as_mut() {
                frame(state, ts);
            }
        });
        request_frame(&f);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}

fn frame(state: &mut AppState, ts: f64) {
    let start = *state.start_ms.get_or_insert(ts);
    state.session.tick(ts - start);
    state.session.render(&mut state.surface);
}
