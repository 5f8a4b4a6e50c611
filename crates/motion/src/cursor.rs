/// Half the cursor dot's size; the dot is centred on the pointer.
pub const CURSOR_RADIUS: f64 = 16.0;
pub const TOUCH_BREAKPOINT: f64 = 768.0;
pub const PRESSED_SCALE: f64 = 0.8;
pub const LINK_SCALE: f64 = 1.5;

pub fn cursor_offset((x, y): (f64, f64)) -> (f64, f64) {
    (x - CURSOR_RADIUS, y - CURSOR_RADIUS)
}

pub fn cursor_scale(pressed: bool, over_link: bool) -> f64 {
    if pressed {
        PRESSED_SCALE
    } else if over_link {
        LINK_SCALE
    } else {
        1.0
    }
}

/// Narrow or touch-capable viewports keep the native cursor.
pub fn is_touch_viewport(width: f64, touch: bool) -> bool {
    touch || width < TOUCH_BREAKPOINT
}
