mod hsv;
mod utils;

use smart_leds::RGB8;

pub use hsv::hsv_to_rgb;
pub use utils::{BLACK, grb_word};

pub type Rgb = RGB8;
