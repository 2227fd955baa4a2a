// Default dial configuration shared by the core state machine and the web
// frontend.

// Origin hit circle radius, CSS px
pub const DEFAULT_RADIUS: f64 = 100.0;

// Widget color
pub const DEFAULT_RGB: [u8; 3] = [43, 156, 212];

// Output range
pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 1.0;
