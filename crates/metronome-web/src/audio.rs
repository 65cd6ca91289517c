use metronome_core::{ToneEmitter, TONE_GAIN};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// WebAudio tone source: one square-wave oscillator per note, all routed
/// through a single fixed gain stage.
pub struct WebTone {
    audio_ctx: web::AudioContext,
    output: web::GainNode,
}

impl WebTone {
    /// Build the audio graph. `None` when the browser offers no WebAudio;
    /// the metronome then runs silently.
    pub fn new() -> Option<Self> {
        let audio_ctx = match web::AudioContext::new() {
            Ok(ctx) => ctx,
            Err(e) => {
                log::error!("AudioContext error: {:?}", e);
                return None;
            }
        };
        let output = match web::GainNode::new(&audio_ctx) {
            Ok(g) => g,
            Err(e) => {
                log::error!("Output GainNode error: {:?}", e);
                return None;
            }
        };
        output.gain().set_value(TONE_GAIN);
        if let Err(e) = output.connect_with_audio_node(&audio_ctx.destination()) {
            log::error!("GainNode connect error: {:?}", e);
            return None;
        }
        Some(Self { audio_ctx, output })
    }

    /// Browsers keep a fresh context suspended until a user gesture.
    pub fn resume(&self) {
        match self.audio_ctx.resume() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("AudioContext resume rejected: {:?}", e);
                }
            }),
            Err(e) => log::warn!("AudioContext resume error: {:?}", e),
        }
    }
}

impl ToneEmitter for WebTone {
    fn play_note(&self, frequency_hz: f64, duration_sec: f64) {
        let src = match web::OscillatorNode::new(&self.audio_ctx) {
            Ok(src) => src,
            Err(e) => {
                log::warn!("OscillatorNode error: {:?}", e);
                return;
            }
        };
        src.set_type(web::OscillatorType::Square);
        src.frequency().set_value(frequency_hz as f32);
        _ = src.connect_with_audio_node(&self.output);
        let now = self.audio_ctx.current_time();
        _ = src.start_with_when(now);
        _ = src.stop_with_when(now + duration_sec);
    }
}
