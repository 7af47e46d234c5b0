//! Per-frame orchestration: elapsed-time scaling, background wash,
//! spectrum sampling, particle update/draw, link pass, rescheduling.

use crate::audio::AudioGraph;
use crate::dom;
use crate::render;
use app_core::{
    for_each_link, link_color, max_link_distance, particle_color, ParticleSystem, PointerState,
    Viewport, LINK_LINE_WIDTH, TIME_SCALE_PER_MS,
};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,
    pub particles: Rc<RefCell<ParticleSystem>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub audio: Rc<RefCell<Option<AudioGraph>>>,
    pub spectrum_toggle: Option<web::HtmlInputElement>,
    pub connect_toggle: Option<web::HtmlInputElement>,

    // Reused every frame to keep the loop allocation-free.
    pub freq_buf: Vec<u8>,
    pub positions_buf: Vec<Vec2>,

    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let elapsed = now - self.last_instant;
        self.last_instant = now;
        // Scaled simulation time; refresh-rate independent.
        let dt = elapsed.as_secs_f64() as f32 * 1000.0 * TIME_SCALE_PER_MS;

        let width = self.canvas.width() as f32;
        let height = self.canvas.height() as f32;
        let viewport = Viewport::new(width, height);
        let surface = render::Surface::new(&self.ctx2d);
        surface.paint_background(width, height);

        // One spectrum sample per frame. None (audio idle, toggle off) is
        // "unavailable" and applies no coupling; Some(0.0) is silence.
        let energy = if dom::checkbox_checked(self.spectrum_toggle.as_ref()) {
            let audio = self.audio.borrow();
            match audio.as_ref() {
                Some(graph) => graph.sample_energy(&mut self.freq_buf),
                None => None,
            }
        } else {
            None
        };

        {
            let pointer = self.pointer.borrow();
            let mut particles = self.particles.borrow_mut();
            particles.update(dt, energy, &pointer);
            for p in particles.iter() {
                surface.fill_circle(p.pos, p.draw_radius(), &particle_color(p.hue, p.alpha));
            }
            if dom::checkbox_checked(self.connect_toggle.as_ref()) {
                particles.positions_into(&mut self.positions_buf);
                surface.set_line_width(LINK_LINE_WIDTH);
                for_each_link(
                    &self.positions_buf,
                    max_link_distance(viewport),
                    |a, b, alpha| surface.stroke_line(a, b, &link_color(alpha)),
                );
            }
        }
    }
}

/// Run the frame callback on every animation tick, forever. The loop is
/// never stopped; pausing audio only removes the coupling.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
