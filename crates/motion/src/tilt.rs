pub const MAX_TILT_DEG: f64 = 10.0;
pub const HOVER_SCALE: f64 = 1.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
}

impl Tilt {
    pub const REST: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
    };
}

/// Card rotation for a pointer at `(x, y)` in viewport coordinates.
///
/// Pointer above the centre tips the top edge towards the viewer (positive X),
/// pointer to the right turns the card right (positive Y). `None` means the
/// pointer left the card.
pub fn card_tilt(pointer: Option<(f64, f64)>, rect: Rect) -> Tilt {
    let Some((x, y)) = pointer else {
        return Tilt::REST;
    };
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Tilt::REST;
    }

    let half_w = rect.width / 2.0;
    let half_h = rect.height / 2.0;
    let dx = x - (rect.left + half_w);
    let dy = y - (rect.top + half_h);

    Tilt {
        rotate_x: (dy / half_h) * -MAX_TILT_DEG,
        rotate_y: (dx / half_w) * MAX_TILT_DEG,
        scale: HOVER_SCALE,
    }
}
