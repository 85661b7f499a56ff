/// Pixel rectangle the rendered image is mapped into.
///
/// Physical pixels, origin top-left. Components stay fractional; wgpu accepts
/// `f32` viewports, so no rounding is applied.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ViewportRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewportRect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Full-surface rectangle anchored at the origin.
    #[inline]
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f32, height as f32)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

/// Shrinks `(width, height)` along one axis so that the result has the given aspect ratio.
///
/// Wider than `aspect` keeps the height; otherwise the width is kept.
pub fn fit_aspect(width: f32, height: f32, aspect: f32) -> (f32, f32) {
    if width / height > aspect {
        (height * aspect, height)
    } else {
        (width, width / aspect)
    }
}

/// Keeps a viewport locked to a fixed aspect ratio inside a changing window.
///
/// The last window size is cached; `update` only recomputes when it changes.
#[derive(Debug, Clone)]
pub struct AspectLock {
    aspect: f32,
    last_size: Option<(u32, u32)>,
    current: Option<ViewportRect>,
}

impl AspectLock {
    pub const FOUR_BY_THREE: f32 = 4.0 / 3.0;

    pub fn new(aspect: f32) -> Self {
        debug_assert!(aspect.is_finite() && aspect > 0.0);
        Self {
            aspect,
            last_size: None,
            current: None,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Last computed viewport, if the window has had a non-empty size.
    pub fn current(&self) -> Option<ViewportRect> {
        self.current
    }

    /// Feeds the current window size.
    ///
    /// Returns the new viewport when the size changed since the previous call,
    /// `None` when nothing changed or the window has zero area.
    pub fn update(&mut self, width: u32, height: u32) -> Option<ViewportRect> {
        if self.last_size == Some((width, height)) {
            return None;
        }
        self.last_size = Some((width, height));

        if width == 0 || height == 0 {
            self.current = None;
            return None;
        }

        let (w, h) = fit_aspect(width as f32, height as f32, self.aspect);
        let rect = ViewportRect::new(0.0, 0.0, w, h);
        log::debug!("viewport locked to {w}x{h} inside {width}x{height}");

        self.current = Some(rect);
        Some(rect)
    }
}

impl Default for AspectLock {
    fn default() -> Self {
        Self::new(Self::FOUR_BY_THREE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ── fit_aspect ────────────────────────────────────────────────────────

    #[test]
    fn widescreen_keeps_height() {
        let (w, h) = fit_aspect(1600.0, 900.0, AspectLock::FOUR_BY_THREE);
        assert_relative_eq!(w, 1200.0);
        assert_relative_eq!(h, 900.0);
    }

    #[test]
    fn portrait_keeps_width() {
        let (w, h) = fit_aspect(800.0, 1000.0, AspectLock::FOUR_BY_THREE);
        assert_relative_eq!(w, 800.0);
        assert_relative_eq!(h, 600.0);
    }

    #[test]
    fn exact_ratio_is_unchanged() {
        let (w, h) = fit_aspect(1024.0, 768.0, AspectLock::FOUR_BY_THREE);
        assert_relative_eq!(w, 1024.0);
        assert_relative_eq!(h, 768.0);
    }

    #[test]
    fn result_always_fits_and_keeps_ratio() {
        for width in (1..=2000).step_by(37) {
            for height in (1..=2000).step_by(41) {
                let (ww, hh) = (width as f32, height as f32);
                let (w, h) = fit_aspect(ww, hh, AspectLock::FOUR_BY_THREE);

                assert_relative_eq!(w / h, 4.0 / 3.0, max_relative = 1e-5);
                let kept_height = w <= ww + 1e-3 && h == hh;
                let kept_width = h <= hh + 1e-3 && w == ww;
                assert!(kept_height || kept_width, "{width}x{height} -> {w}x{h}");
            }
        }
    }

    // ── AspectLock ────────────────────────────────────────────────────────

    #[test]
    fn first_update_computes_viewport() {
        let mut lock = AspectLock::default();
        let rect = lock.update(1600, 900).unwrap();
        assert_eq!(rect, ViewportRect::new(0.0, 0.0, 1200.0, 900.0));
        assert_eq!(lock.current(), Some(rect));
    }

    #[test]
    fn unchanged_size_is_not_recomputed() {
        let mut lock = AspectLock::default();
        assert!(lock.update(800, 1000).is_some());
        assert!(lock.update(800, 1000).is_none());
        assert_eq!(lock.current(), Some(ViewportRect::new(0.0, 0.0, 800.0, 600.0)));
    }

    #[test]
    fn resize_recomputes() {
        let mut lock = AspectLock::default();
        lock.update(800, 600);
        let rect = lock.update(1600, 900).unwrap();
        assert_relative_eq!(rect.width, 1200.0);
    }

    #[test]
    fn zero_area_yields_no_viewport() {
        let mut lock = AspectLock::default();
        lock.update(800, 600);
        assert!(lock.update(0, 600).is_none());
        assert!(lock.current().is_none());

        // Restoring the old size recomputes since the cache saw the zero size.
        assert!(lock.update(800, 600).is_some());
    }

    #[test]
    fn viewport_rect_validity() {
        assert!(ViewportRect::from_size(10, 10).is_valid());
        assert!(!ViewportRect::from_size(0, 10).is_valid());
        assert!(!ViewportRect::new(0.0, 0.0, f32::NAN, 1.0).is_valid());
    }
}
