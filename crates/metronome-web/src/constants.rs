// DOM element ids the front-end binds to (see index.html)

pub const CANVAS_ID: &str = "metronome-canvas";
pub const CANVAS_CONTAINER_ID: &str = "metronome-container";
pub const PROGRESS_BAR_ID: &str = "progress-bar";

pub const START_BUTTON_ID: &str = "start-button";
pub const RESET_BUTTON_ID: &str = "reset-button";

pub const PARTICLE_COUNT_ID: &str = "particle-count";
pub const PITCH_OFFSET_ID: &str = "pitch-offset";
pub const SPEED_MULTIPLIER_ID: &str = "speed-multiplier";
pub const SHOW_LINES_ID: &str = "show-lines";
pub const FIXED_PITCH_ID: &str = "fixed-pitch";

// Value mirrors: (input id, label id)
pub const LABEL_MIRRORS: [(&str, &str); 3] = [
    (PARTICLE_COUNT_ID, "particle-count-value"),
    (PITCH_OFFSET_ID, "pitch-offset-value"),
    (SPEED_MULTIPLIER_ID, "speed-multiplier-value"),
];

pub const START_CAPTION: &str = "Start";
pub const PAUSE_CAPTION: &str = "Pause";
