#![cfg(target_arch = "wasm32")]
//! Web front-end: composition root for the particle visualizer.
//!
//! Owns the session state (particle system, pointer, audio graph handle)
//! and wires it into the DOM, the input handlers and the render loop. The
//! loop starts immediately in the idle-animating phase; audio coupling
//! begins after the Play gesture unlocks the AudioContext.

mod audio;
mod dom;
mod events;
mod frame;
mod render;

use app_core::{ParticleSystem, PointerState, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Shared session state owned by the composition root and handed into the
/// render loop and event wiring. Replaces the page-global flags of a
/// typical canvas visualizer with explicit handles; the audio slot doubles
/// as the "audio started" gate (None until the Play gesture).
#[derive(Clone)]
pub(crate) struct Session {
    pub particles: Rc<RefCell<ParticleSystem>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub audio: Rc<RefCell<Option<audio::AudioGraph>>>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let ctx2d: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let viewport = Viewport::new(canvas.width() as f32, canvas.height() as f32);
    let particles = Rc::new(RefCell::new(ParticleSystem::new(
        viewport,
        js_sys::Date::now() as u64,
    )));
    particles.borrow_mut().reset();

    let session = Session {
        particles,
        pointer: Rc::new(RefCell::new(PointerState::new(viewport.center()))),
        audio: Rc::new(RefCell::new(None)),
    };

    // Keep the canvas backing size and the simulation bounds in sync with
    // the window.
    {
        let canvas_resize = canvas.clone();
        let particles_resize = session.particles.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
            particles_resize.borrow_mut().resize(Viewport::new(
                canvas_resize.width() as f32,
                canvas_resize.height() as f32,
            ));
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
            .ok();
        resize_closure.forget();
    }

    events::wire_pointer_handlers(&session, &canvas, dom::input_element(&document, "connectToggle"));
    events::wire_ui_controls(&session, &document);

    let frame_ctx = frame::FrameContext {
        canvas,
        ctx2d,
        particles: session.particles.clone(),
        pointer: session.pointer.clone(),
        audio: session.audio.clone(),
        spectrum_toggle: dom::input_element(&document, "spectrumToggle"),
        connect_toggle: dom::input_element(&document, "connectToggle"),
        freq_buf: Vec::new(),
        positions_buf: Vec::new(),
        last_instant: Instant::now(),
    };
    log::info!(
        "render loop starting with {} particles",
        session.particles.borrow().len()
    );
    frame::start_loop(Rc::new(RefCell::new(frame_ctx)));
    Ok(())
}
