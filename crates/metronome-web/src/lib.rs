#![cfg(target_arch = "wasm32")]
use crate::frame::{FrameContext, RafScheduler};
use metronome_core::{Boundary, ControlSource, Session};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod canvas;
mod constants;
mod controls;
mod dom;
mod frame;
mod ui;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("metronome-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let side = dom::square_canvas_to_container(&document, &canvas, constants::CANVAS_CONTAINER_ID);
    let boundary = Boundary::from_square(side)?;
    let surface = canvas::CanvasSurface::new(&canvas)?;

    controls::wire_label_mirrors(&document);
    let controls = controls::DomControls::from_document(&document);
    let session = Session::new(boundary, &controls.read());

    let tone = audio::WebTone::new();
    if tone.is_none() {
        log::warn!("WebAudio unavailable; running silently");
    }

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        session,
        controls,
        surface,
        tone,
        progress: ui::ProgressBar::from_document(&document),
        scheduler: RafScheduler::default(),
    }));
    frame::install_loop(&frame_ctx);
    frame_ctx.borrow_mut().redraw();
    ui::set_start_caption(&document, frame_ctx.borrow().session.run_state());

    wire_buttons(&document, &frame_ctx);
    log::info!("[init] canvas {}x{} ready", side, side);
    Ok(())
}

fn wire_buttons(document: &web::Document, frame_ctx: &Rc<RefCell<FrameContext>>) {
    let ctx_start = frame_ctx.clone();
    let doc_start = document.clone();
    dom::add_click_listener(document, constants::START_BUTTON_ID, move || {
        let state = ctx_start.borrow_mut().toggle_running();
        ui::set_start_caption(&doc_start, state);
    });

    let ctx_reset = frame_ctx.clone();
    dom::add_click_listener(document, constants::RESET_BUTTON_ID, move || {
        ctx_reset.borrow_mut().reset();
    });
}
