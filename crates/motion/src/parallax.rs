use crate::interpolate;

pub const DEFAULT_PARALLAX_OFFSET: f64 = 50.0;

/// `(progress, opacity)`: faded at both edges of the viewport.
pub const PARALLAX_OPACITY_STOPS: [(f64, f64); 4] = [(0.0, 0.4), (0.3, 1.0), (0.7, 1.0), (1.0, 0.4)];
/// `(progress, scale)`: full size mid-screen.
pub const PARALLAX_SCALE_STOPS: [(f64, f64); 3] = [(0.0, 0.95), (0.5, 1.0), (1.0, 0.95)];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub translate_y: f64,
    pub opacity: f64,
    pub scale: f64,
}

/// `progress` runs from 0 when the section's top enters the bottom of the
/// viewport to 1 when its bottom leaves the top.
pub fn parallax(progress: f64, offset: f64) -> Parallax {
    let progress = progress.clamp(0.0, 1.0);

    Parallax {
        translate_y: interpolate(progress, &[(0.0, -offset), (1.0, offset)]),
        opacity: interpolate(progress, &PARALLAX_OPACITY_STOPS),
        scale: interpolate(progress, &PARALLAX_SCALE_STOPS),
    }
}

/// Scroll progress of a section of `height` whose top sits at `top` (viewport
/// coordinates) in a viewport of `viewport_height`.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + height;
    if travel <= 0.0 {
        return 0.0;
    }

    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}
