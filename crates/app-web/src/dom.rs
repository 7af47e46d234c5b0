use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn input_element(document: &web::Document, id: &str) -> Option<web::HtmlInputElement> {
    document.get_element_by_id(id).and_then(|el| el.dyn_into().ok())
}

#[inline]
pub fn button_element(document: &web::Document, id: &str) -> Option<web::HtmlButtonElement> {
    document.get_element_by_id(id).and_then(|el| el.dyn_into().ok())
}

#[inline]
pub fn media_element(document: &web::Document, id: &str) -> Option<web::HtmlMediaElement> {
    document.get_element_by_id(id).and_then(|el| el.dyn_into().ok())
}

#[inline]
pub fn checkbox_checked(el: Option<&web::HtmlInputElement>) -> bool {
    el.map(|e| e.checked()).unwrap_or(false)
}

#[inline]
pub fn input_value_f32(el: Option<&web::HtmlInputElement>, default: f32) -> f32 {
    el.and_then(|e| e.value().parse().ok()).unwrap_or(default)
}

#[inline]
pub fn set_disabled(btn: Option<&web::HtmlButtonElement>, disabled: bool) {
    if let Some(b) = btn {
        b.set_disabled(disabled);
    }
}
