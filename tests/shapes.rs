use eframe_markup::element::{Shape, factory};
use egui::{Color32, Pos2, Rect};
use image::{Rgba, RgbaImage};

fn capsule(begin: (f32, f32), end: (f32, f32), radius: f32) -> Shape {
    factory::create_stroke(
        Pos2::new(begin.0, begin.1),
        Pos2::new(end.0, end.1),
        radius,
        Color32::GREEN,
    )
}

fn polygon(points: &[(f32, f32)]) -> Shape {
    let vertices = points.iter().map(|(x, y)| Pos2::new(*x, *y)).collect();
    factory::create_polygon(vertices, Color32::RED)
}

#[test]
fn test_capsule_quad_corners() {
    let shape = capsule((0.0, 0.0), (10.0, 0.0), 5.0);
    let stroke = shape.as_stroke().unwrap();

    let quad = stroke.quad().unwrap();
    assert_eq!(
        quad,
        [
            Pos2::new(0.0, 5.0),
            Pos2::new(10.0, 5.0),
            Pos2::new(10.0, -5.0),
            Pos2::new(0.0, -5.0),
        ]
    );
}

#[test]
fn test_capsule_bounding_box() {
    let shape = capsule((10.0, 0.0), (10.0, 10.0), 5.0);
    assert_eq!(
        shape.bounding_box(),
        Rect::from_min_max(Pos2::new(5.0, -5.0), Pos2::new(15.0, 15.0))
    );
}

#[test]
fn test_zero_length_stroke_is_a_disc() {
    let shape = capsule((5.0, 5.0), (5.0, 5.0), 5.0);
    let stroke = shape.as_stroke().unwrap();

    assert!(stroke.is_degenerate());
    assert!(stroke.quad().is_none());
    assert_eq!(
        shape.bounding_box(),
        Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0))
    );
    assert!(shape.contains(Pos2::new(8.0, 5.0)));
    assert!(!shape.contains(Pos2::new(11.0, 5.0)));
}

#[test]
fn test_capsule_contains_end_caps() {
    let shape = capsule((0.0, 0.0), (10.0, 0.0), 2.0);
    assert!(shape.contains(Pos2::new(5.0, 1.9)));
    assert!(shape.contains(Pos2::new(11.5, 0.0)));
    assert!(shape.contains(Pos2::new(-1.0, 1.0)));
    assert!(!shape.contains(Pos2::new(5.0, 2.5)));
    assert!(!shape.contains(Pos2::new(12.5, 0.0)));
}

#[test]
fn test_polygon_bounding_box_and_contains() {
    let shape = polygon(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);

    assert_eq!(
        shape.bounding_box(),
        Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0))
    );
    assert!(shape.contains(Pos2::new(5.0, 5.0)));
    assert!(!shape.contains(Pos2::new(15.0, 5.0)));
}

#[test]
fn test_concave_polygon_contains() {
    // L shape
    let shape = polygon(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 4.0),
        (4.0, 4.0),
        (4.0, 10.0),
        (0.0, 10.0),
    ]);
    assert!(shape.contains(Pos2::new(2.0, 8.0)));
    assert!(shape.contains(Pos2::new(8.0, 2.0)));
    assert!(!shape.contains(Pos2::new(8.0, 8.0)));
}

#[test]
fn test_self_intersecting_polygon_uses_even_odd() {
    let bowtie = polygon(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)]);
    assert!(bowtie.contains(Pos2::new(8.0, 5.0)));
    assert!(!bowtie.contains(Pos2::new(5.0, 2.0)));
}

#[test]
fn test_rasterize_stays_inside_shape() {
    let mut mask = RgbaImage::new(20, 20);
    capsule((5.0, 5.0), (15.0, 5.0), 2.0).rasterize(&mut mask);

    assert_eq!(*mask.get_pixel(10, 5), Rgba([0, 255, 0, 255]));
    assert_eq!(*mask.get_pixel(10, 10), Rgba([0, 0, 0, 0]));
    assert_eq!(*mask.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
}

#[test]
fn test_rasterize_clips_to_image() {
    let mut mask = RgbaImage::new(10, 10);
    polygon(&[(-20.0, -20.0), (30.0, -20.0), (30.0, 30.0), (-20.0, 30.0)]).rasterize(&mut mask);

    assert!(mask.pixels().all(|p| *p == Rgba([255, 0, 0, 255])));
}
