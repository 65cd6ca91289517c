//! Live control inputs read straight from the DOM on every poll.

use crate::constants::*;
use crate::dom;
use metronome_core::{Configuration, ControlSource, MetronomeError, PitchMode};
use std::cell::{Cell, RefCell};
use web_sys as web;

pub struct DomControls {
    particle_count: Option<web::HtmlInputElement>,
    pitch_offset: Option<web::HtmlInputElement>,
    speed_multiplier: Option<web::HtmlInputElement>,
    show_lines: Option<web::HtmlInputElement>,
    fixed_pitch: Option<web::HtmlInputElement>,
    // last successfully parsed values; a bad field falls back to these
    last_good: Cell<Configuration>,
    last_error: RefCell<Option<MetronomeError>>,
}

impl DomControls {
    pub fn from_document(document: &web::Document) -> Self {
        Self {
            particle_count: dom::input_by_id(document, PARTICLE_COUNT_ID),
            pitch_offset: dom::input_by_id(document, PITCH_OFFSET_ID),
            speed_multiplier: dom::input_by_id(document, SPEED_MULTIPLIER_ID),
            show_lines: dom::input_by_id(document, SHOW_LINES_ID),
            fixed_pitch: dom::input_by_id(document, FIXED_PITCH_ID),
            last_good: Cell::new(Configuration::default()),
            last_error: RefCell::new(None),
        }
    }

    fn parse_into<T>(
        &self,
        input: &Option<web::HtmlInputElement>,
        parse: fn(&str) -> metronome_core::Result<T>,
        slot: &mut T,
    ) {
        let Some(el) = input else {
            return;
        };
        match parse(&el.value()) {
            Ok(v) => *slot = v,
            Err(e) => {
                // warn once per distinct bad value rather than every frame
                let mut last = self.last_error.borrow_mut();
                if last.as_ref() != Some(&e) {
                    log::warn!("{}; keeping previous value", e);
                    *last = Some(e);
                }
            }
        }
    }
}

impl ControlSource for DomControls {
    fn read(&self) -> Configuration {
        let mut cfg = self.last_good.get();
        self.parse_into(
            &self.particle_count,
            Configuration::parse_particle_count,
            &mut cfg.particle_count,
        );
        self.parse_into(
            &self.pitch_offset,
            Configuration::parse_pitch_offset_cents,
            &mut cfg.pitch_offset_cents,
        );
        self.parse_into(
            &self.speed_multiplier,
            Configuration::parse_speed_multiplier,
            &mut cfg.speed_multiplier,
        );
        if let Some(el) = &self.show_lines {
            cfg.show_lines = el.checked();
        }
        if let Some(el) = &self.fixed_pitch {
            cfg.pitch_mode = if el.checked() {
                PitchMode::Fixed
            } else {
                PitchMode::ByIndex
            };
        }
        let cfg = cfg.normalized();
        self.last_good.set(cfg);
        cfg
    }
}

/// Keep each slider's value label in step with the slider.
pub fn wire_label_mirrors(document: &web::Document) {
    for (input_id, label_id) in LABEL_MIRRORS {
        let Some(input) = dom::input_by_id(document, input_id) else {
            continue;
        };
        dom::set_text(document, label_id, &input.value());
        let doc = document.clone();
        dom::add_input_listener(document, input_id, move || {
            dom::set_text(&doc, label_id, &input.value());
        });
    }
}
