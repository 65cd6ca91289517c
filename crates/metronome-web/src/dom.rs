use metronome_core::DEFAULT_SURFACE_SIZE;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn add_listener(
    document: &web::Document,
    element_id: &str,
    event: &str,
    mut handler: impl FnMut() + 'static,
) {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
            _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            closure.forget();
        }
        None => log::warn!("missing #{} for {} listener", element_id, event),
    }
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) {
    add_listener(document, element_id, "click", handler);
}

#[inline]
pub fn add_input_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) {
    add_listener(document, element_id, "input", handler);
}

pub fn input_by_id(document: &web::Document, element_id: &str) -> Option<web::HtmlInputElement> {
    let input = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok());
    if input.is_none() {
        log::warn!("missing <input id=\"{}\">", element_id);
    }
    input
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

/// Size the canvas backing store to a square as wide as its container and
/// return the side length in pixels.
pub fn square_canvas_to_container(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    container_id: &str,
) -> f64 {
    let width = document
        .get_element_by_id(container_id)
        .map(|el| el.client_width())
        .filter(|w| *w > 0)
        .map(f64::from)
        .unwrap_or(DEFAULT_SURFACE_SIZE);
    let side = width.floor().max(1.0);
    canvas.set_width(side as u32);
    canvas.set_height(side as u32);
    side
}
