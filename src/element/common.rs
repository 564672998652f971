use egui::{Pos2, Rect};
use image::{Rgba, RgbaImage};

/// Lengths below this are treated as zero when normalizing directions
pub const DEGENERATE_LENGTH: f32 = 1e-6;

/// Calculate distance from a point to a line segment (useful for stroke hit testing)
pub(crate) fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len <= DEGENERATE_LENGTH {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

/// Calculate the bounding box for a set of points
pub(crate) fn calculate_bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(
        Pos2::new(min_x - padding, min_y - padding),
        Pos2::new(max_x + padding, max_y + padding),
    )
}

/// Even-odd ray casting. Self-intersecting outlines are accepted as-is.
pub(crate) fn point_in_polygon(point: Pos2, vertices: &[Pos2]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Paint every pixel of `mask` inside `bounds` whose center satisfies `contains`.
pub(crate) fn fill_pixels<F>(mask: &mut RgbaImage, bounds: Rect, color: Rgba<u8>, contains: F)
where
    F: Fn(Pos2) -> bool,
{
    if bounds.min.x > bounds.max.x || bounds.min.y > bounds.max.y {
        return;
    }
    let (width, height) = mask.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let x0 = bounds.min.x.floor().max(0.0) as u32;
    let y0 = bounds.min.y.floor().max(0.0) as u32;
    let x1 = (bounds.max.x.ceil().max(0.0) as u32).min(width);
    let y1 = (bounds.max.y.ceil().max(0.0) as u32).min(height);

    for y in y0..y1 {
        for x in x0..x1 {
            let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
            if contains(center) {
                mask.put_pixel(x, y, color);
            }
        }
    }
}
