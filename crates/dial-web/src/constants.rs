// Render and page tuning constants for the canvas frontend.

// Stroke widths (CSS px)
pub const ORIGIN_RING_WIDTH: f64 = 4.0;
pub const RANGE_RING_WIDTH: f64 = 2.0;

// Widget color alpha while idle vs. tracking a contact
pub const IDLE_ALPHA: f64 = 0.5;
pub const ACTIVE_ALPHA: f64 = 0.8;

// Handle disc radius as a fraction of the origin circle radius
pub const HANDLE_RADIUS_FACTOR: f64 = 0.8;

// Handle color before it is actually grabbed
pub const HANDLE_ARMED_STYLE: &str = "rgba(150, 150, 150, 0.5)";

// Value text: font size as a fraction of the radius
pub const FONT_SIZE_FACTOR: f64 = 0.5;
pub const TEXT_STYLE: &str = "rgba(0, 0, 0, 1.0)";

// Tutorial hint
pub const HINT_TEXT: &str = "Move to the handle to grab it";
pub const HINT_WIDTH_PX: f64 = 300.0;
pub const HINT_OFFSET_X: f64 = 20.0;
pub const HINT_OFFSET_Y: f64 = -10.0;

// Demo page: per-dial origin hit radius as a fraction of the smaller
// container dimension
pub const DEMO_RADIUS_FACTORS: [f64; 3] = [0.15, 0.075, 0.075];
