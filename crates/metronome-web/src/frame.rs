use crate::audio::WebTone;
use crate::canvas::CanvasSurface;
use crate::controls::DomControls;
use crate::ui::ProgressBar;
use metronome_core::{ControlSource, Host, ProgressDisplay, RunState, Session, TickScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickClosure = Closure<dyn FnMut()>;

/// `requestAnimationFrame`-backed scheduler. The frame callback is installed
/// once by [`install_loop`]; each request queues it for the next frame.
#[derive(Clone, Default)]
pub struct RafScheduler {
    tick: Rc<RefCell<Option<TickClosure>>>,
}

impl TickScheduler for RafScheduler {
    fn request_tick(&self) {
        let tick = self.tick.borrow();
        let (Some(w), Some(cb)) = (web::window(), tick.as_ref()) else {
            log::warn!("frame requested before the loop was installed");
            return;
        };
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame error: {:?}", e);
        }
    }
}

pub struct FrameContext {
    pub session: Session,
    pub controls: DomControls,
    pub surface: CanvasSurface,
    pub tone: Option<WebTone>,
    pub progress: ProgressBar,
    pub scheduler: RafScheduler,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = instant::now();
        let mut host = Host {
            controls: &self.controls,
            surface: &mut self.surface,
            tone: &self.tone,
            progress: &mut self.progress,
            scheduler: &self.scheduler,
        };
        self.session.tick(now, &mut host);
    }

    /// Start/pause button. Resumes audio on the way in since this runs
    /// inside a user gesture.
    pub fn toggle_running(&mut self) -> RunState {
        if !self.session.is_running() {
            if let Some(tone) = &self.tone {
                tone.resume();
            }
        }
        self.session.toggle(instant::now(), &self.scheduler)
    }

    /// Reset button: rebuild particles from the current controls and repaint.
    pub fn reset(&mut self) {
        let config = self.controls.read();
        self.session.reset(&config);
        self.redraw_with(config.show_lines);
        self.progress.set_progress(self.session.progress());
    }

    pub fn redraw(&mut self) {
        let show_lines = self.controls.read().show_lines;
        self.redraw_with(show_lines);
    }

    fn redraw_with(&mut self, show_lines: bool) {
        self.session.draw(&mut self.surface, show_lines);
    }
}

/// Hook the frame callback into the context's scheduler. Nothing runs until
/// the session is started.
pub fn install_loop(frame_ctx: &Rc<RefCell<FrameContext>>) {
    let frame_ctx_tick = frame_ctx.clone();
    let closure = Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
    }) as Box<dyn FnMut()>);
    *frame_ctx.borrow().scheduler.tick.borrow_mut() = Some(closure);
}
