//! Pointer/touch input and control-panel wiring.
//!
//! Every handler closes over the session handles it needs; nothing here
//! touches global state.

use crate::audio::AudioGraph;
use crate::dom;
use crate::Session;
use app_core::BURST_COUNT;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const DEFAULT_VOLUME: f32 = 0.6;

/// Convert client coordinates into canvas backing-pixel coordinates.
#[inline]
fn client_canvas_px(client_x: f32, client_y: f32, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = client_x - rect.left() as f32;
    let y_css = client_y - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w > 0.0 && h > 0.0 {
        Vec2::new(
            x_css / w * canvas.width() as f32,
            y_css / h * canvas.height() as f32,
        )
    } else {
        Vec2::new(x_css, y_css)
    }
}

#[inline]
fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    client_canvas_px(ev.client_x() as f32, ev.client_y() as f32, canvas)
}

pub fn wire_pointer_handlers(
    session: &Session,
    canvas: &web::HtmlCanvasElement,
    connect_toggle: Option<web::HtmlInputElement>,
) {
    // pointermove
    {
        let pointer = session.pointer.clone();
        let canvas_move = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = pointer_canvas_px(&ev, &canvas_move);
            pointer.borrow_mut().on_move(pos.x, pos.y);
        }) as Box<dyn FnMut(_)>);
        if let Some(w) = web::window() {
            let _ =
                w.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerdown: a press edge spawns a burst at the press position;
    // holding does not re-trigger.
    {
        let pointer = session.pointer.clone();
        let particles = session.particles.clone();
        let canvas_down = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = pointer_canvas_px(&ev, &canvas_down);
            if pointer.borrow_mut().press_start(pos.x, pos.y) {
                particles.borrow_mut().spawn(BURST_COUNT, Some(pos));
            }
            let _ = canvas_down.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ =
            canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerup
    {
        let pointer = session.pointer.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            pointer.borrow_mut().press_end();
        }) as Box<dyn FnMut(_)>);
        if let Some(w) = web::window() {
            let _ =
                w.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // click flips the link overlay
    if let Some(toggle) = connect_toggle {
        let closure = Closure::wrap(Box::new(move || {
            toggle.set_checked(!toggle.checked());
        }) as Box<dyn FnMut()>);
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // touch mirrors the pointer path
    {
        let pointer = session.pointer.clone();
        let canvas_touch = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(t) = ev.touches().get(0) {
                let pos = client_canvas_px(t.client_x() as f32, t.client_y() as f32, &canvas_touch);
                pointer.borrow_mut().on_move(pos.x, pos.y);
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(w) = web::window() {
            let _ =
                w.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
    {
        let pointer = session.pointer.clone();
        let particles = session.particles.clone();
        let canvas_touch = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(t) = ev.touches().get(0) {
                let pos = client_canvas_px(t.client_x() as f32, t.client_y() as f32, &canvas_touch);
                if pointer.borrow_mut().press_start(pos.x, pos.y) {
                    particles.borrow_mut().spawn(BURST_COUNT, Some(pos));
                }
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(w) = web::window() {
            let _ =
                w.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
    {
        let pointer = session.pointer.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
            pointer.borrow_mut().press_end();
        }) as Box<dyn FnMut(_)>);
        if let Some(w) = web::window() {
            let _ =
                w.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

pub fn wire_ui_controls(session: &Session, document: &web::Document) {
    let Some(media) = dom::media_element(document, "audio") else {
        log::warn!("missing #audio element; audio controls disabled");
        return;
    };
    let volume_input = dom::input_element(document, "volume");
    let play_btn = dom::button_element(document, "playBtn");
    let pause_btn = dom::button_element(document, "pauseBtn");

    // Play: the user gesture that unlocks audio. Builds the analysis graph
    // on first use; with no file loaded the demo tone stands in.
    {
        let audio = session.audio.clone();
        let media_play = media.clone();
        let volume_play = volume_input.clone();
        let play = play_btn.clone();
        let pause = pause_btn.clone();
        dom::add_click_listener(document, "playBtn", move || {
            let volume = dom::input_value_f32(volume_play.as_ref(), DEFAULT_VOLUME);
            if audio.borrow().is_none() {
                match AudioGraph::build(&media_play, volume) {
                    Ok(g) => *audio.borrow_mut() = Some(g),
                    Err(()) => return,
                }
            }
            let mut slot = audio.borrow_mut();
            let Some(graph) = slot.as_mut() else { return };
            graph.resume_if_suspended();
            if media_play.src().is_empty() {
                graph.start_demo_tone();
            } else {
                let _ = media_play.play();
                dom::set_disabled(play.as_ref(), true);
                dom::set_disabled(pause.as_ref(), false);
            }
        });
    }

    // Pause: stop media and the demo tone. Coupling drops to
    // "unavailable" while the visual loop keeps running.
    {
        let audio = session.audio.clone();
        let media_pause = media.clone();
        let play = play_btn.clone();
        let pause = pause_btn.clone();
        dom::add_click_listener(document, "pauseBtn", move || {
            if !media_pause.paused() {
                let _ = media_pause.pause();
            }
            if let Some(g) = audio.borrow_mut().as_mut() {
                g.stop_demo_tone();
            }
            dom::set_disabled(play.as_ref(), false);
            dom::set_disabled(pause.as_ref(), true);
        });
    }

    // Volume slider drives the graph gain directly.
    if let Some(volume_el) = volume_input.clone() {
        let audio = session.audio.clone();
        let volume_read = volume_input.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(g) = audio.borrow().as_ref() {
                g.set_volume(dom::input_value_f32(volume_read.as_ref(), DEFAULT_VOLUME));
            }
        }) as Box<dyn FnMut()>);
        let _ = volume_el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // File upload: object URL into the media element, then reattach the
    // analysis graph to the new source and start playback.
    if let Some(file_input) = dom::input_element(document, "audioFile") {
        let audio = session.audio.clone();
        let media_file = media.clone();
        let volume_file = volume_input.clone();
        let play = play_btn.clone();
        let pause = pause_btn.clone();
        let input_el = file_input.clone();
        let closure = Closure::wrap(Box::new(move || {
            let Some(file) = input_el.files().and_then(|l| l.get(0)) else {
                return;
            };
            let Ok(url) = web::Url::create_object_url_with_blob(&file) else {
                return;
            };
            media_file.set_src(&url);
            media_file.load();
            // Without a graph yet, playback starts with the Play gesture.
            let taken = audio.borrow_mut().take();
            if let Some(old) = taken {
                let volume = dom::input_value_f32(volume_file.as_ref(), DEFAULT_VOLUME);
                match old.reattach_source(&media_file, volume) {
                    Ok(next) => {
                        *audio.borrow_mut() = Some(next);
                        let _ = media_file.play();
                        dom::set_disabled(play.as_ref(), true);
                        dom::set_disabled(pause.as_ref(), false);
                    }
                    Err(()) => log::error!("audio graph rebuild failed on file change"),
                }
            }
        }) as Box<dyn FnMut()>);
        let _ =
            file_input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Reset repopulates the field at the nominal count.
    {
        let particles = session.particles.clone();
        dom::add_click_listener(document, "resetBtn", move || {
            particles.borrow_mut().reset();
        });
    }
}
