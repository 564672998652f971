use egui::{Pos2, Rect, Vec2};

/// Maps image coordinates to screen coordinates: `screen = origin + image * zoom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Screen position of the image's top-left corner
    pub origin: Pos2,
    pub zoom: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            origin: Pos2::ZERO,
            zoom: 1.0,
        }
    }
}

impl ViewTransform {
    pub fn new(origin: Pos2, zoom: f32) -> Self {
        Self { origin, zoom }
    }

    pub fn to_screen(&self, image_pos: Pos2) -> Pos2 {
        self.origin + image_pos.to_vec2() * self.zoom
    }

    pub fn to_image(&self, screen_pos: Pos2) -> Pos2 {
        ((screen_pos - self.origin) / self.zoom).to_pos2()
    }

    /// Screen rectangle covered by an image of `size`
    pub fn image_rect(&self, size: Vec2) -> Rect {
        Rect::from_min_size(self.origin, size * self.zoom)
    }

    /// Change the zoom while keeping the image point under `anchor` fixed on screen
    pub fn zoom_around(&mut self, anchor: Pos2, new_zoom: f32) {
        let image_point = self.to_image(anchor);
        self.zoom = new_zoom;
        self.origin = anchor - image_point.to_vec2() * new_zoom;
    }

    /// Center an image of `size` inside `viewport` at the current zoom
    pub fn center_in(&mut self, viewport: Rect, size: Vec2) {
        self.origin = viewport.center() - size * self.zoom / 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_round_trip_through_screen() {
        let view = ViewTransform::new(pos2(100.0, 50.0), 2.0);
        let screen = view.to_screen(pos2(10.0, 20.0));
        assert_eq!(screen, pos2(120.0, 90.0));
        assert_eq!(view.to_image(screen), pos2(10.0, 20.0));
    }

    #[test]
    fn test_zoom_keeps_anchor_fixed() {
        let mut view = ViewTransform::new(pos2(0.0, 0.0), 1.0);
        let anchor = pos2(40.0, 30.0);
        let before = view.to_image(anchor);
        view.zoom_around(anchor, 1.04);
        let after = view.to_image(anchor);
        assert!((before - after).length() < 1e-4);
        assert_eq!(view.zoom, 1.04);
    }

    #[test]
    fn test_center_in() {
        let mut view = ViewTransform::default();
        let viewport = Rect::from_min_size(pos2(0.0, 0.0), vec2(200.0, 100.0));
        view.center_in(viewport, vec2(100.0, 50.0));
        assert_eq!(view.origin, pos2(50.0, 25.0));
    }
}
