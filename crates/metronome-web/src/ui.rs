use crate::constants::{PAUSE_CAPTION, PROGRESS_BAR_ID, START_BUTTON_ID, START_CAPTION};
use crate::dom;
use metronome_core::{ProgressDisplay, RunState};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Progress indicator whose CSS width tracks the loop fraction.
pub struct ProgressBar {
    el: Option<web::HtmlElement>,
}

impl ProgressBar {
    pub fn from_document(document: &web::Document) -> Self {
        let el = document
            .get_element_by_id(PROGRESS_BAR_ID)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        if el.is_none() {
            log::warn!("missing #{}; progress will not be shown", PROGRESS_BAR_ID);
        }
        Self { el }
    }
}

impl ProgressDisplay for ProgressBar {
    fn set_progress(&mut self, fraction: f64) {
        if let Some(el) = &self.el {
            _ = el
                .style()
                .set_property("width", &format!("{:.2}%", fraction * 100.0));
        }
    }
}

#[inline]
pub fn set_start_caption(document: &web::Document, state: RunState) {
    let caption = match state {
        RunState::Running { .. } => PAUSE_CAPTION,
        RunState::Paused => START_CAPTION,
    };
    dom::set_text(document, START_BUTTON_ID, caption);
}
