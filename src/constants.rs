use raylib::prelude::Color;

pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const CELEBRATION_DURATION: f32 = 8.0;    // Confetti window after startup (seconds)
pub const AUTOPLAY_PERIOD: f32 = 3.0;         // Time between automatic photo changes (seconds)
pub const FADE_DURATION: f32 = 0.5;           // Photo fade-in after a change (seconds)

pub const MAX_CONFETTI: usize = 400;          // Upper bound of live confetti pieces
pub const CONFETTI_SPAWN_RATE: f32 = 120.0;   // Pieces spawned per second while active

pub const DEFAULT_NAME: &str = "Rúben";
pub const DEFAULT_MESSAGE: &str = "Wishing you an amazing day filled with joy, laughter, and love";
pub const DEFAULT_DONATION_URL: &str = "https://www.buymeacoffee.com/ruihuang";
pub const FOOTER_TEXT: &str = "Made by Chinezinhooooo";

pub const GRADIENT_PINK: Color = Color::new(236, 72, 153, 255);
pub const GRADIENT_PURPLE: Color = Color::new(168, 85, 247, 255);
pub const GRADIENT_YELLOW: Color = Color::new(250, 204, 21, 255);
pub const PLAYING_RED: Color = Color::new(220, 38, 38, 255);
pub const PAUSED_GREEN: Color = Color::new(22, 163, 74, 255);
pub const DONATION_BLUE: Color = Color::new(95, 127, 255, 255);
