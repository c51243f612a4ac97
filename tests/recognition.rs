use std::f64::consts::TAU;
use std::sync::Arc;
use std::thread;

use dollar_recognizer::{
    catalog, geometry, CatalogEntry, Degeneracy, Error, Point, Recognizer, RecognizerConfig,
    SearchParameters, RESAMPLE_SIZE, SQUARE_SIZE,
};

fn line_and_circle() -> Vec<CatalogEntry> {
    let line = (0..=10).map(|i| (i as f64 * 10.0, 0.0));
    let circle = (0..64).map(|i| {
        let a = TAU * i as f64 / 64.0;
        (50.0 + 50.0 * a.cos(), 50.0 + 50.0 * a.sin())
    });
    vec![CatalogEntry::new("line", line), CatalogEntry::new("circle", circle)]
}

fn drawn_segment() -> Vec<Point> {
    (0..20)
        .map(|i| {
            let t = i as f64 / 19.0;
            Point::new(100.0 * t, 5.0 * t)
        })
        .collect()
}

fn drawn_loop() -> Vec<Point> {
    (0..40)
        .map(|i| {
            let a = TAU * i as f64 / 39.0;
            let r = 48.0 + 3.0 * (3.0 * a).sin();
            Point::new(200.0 + r * a.cos(), 120.0 + r * a.sin())
        })
        .collect()
}

/// A standard gesture with a little deterministic jitter, as if drawn by hand.
fn wobbly(name: &str) -> Vec<Point> {
    let entry = catalog::standard()
        .into_iter()
        .find(|e| e.name == name)
        .unwrap();
    entry
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let i = i as f64;
            Point::new(p.x + (i * 0.7).sin(), p.y + (i * 1.3).cos())
        })
        .collect()
}

fn rotated_about_origin(points: &[Point], degrees: f64) -> Vec<Point> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    points
        .iter()
        .map(|p| Point::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos))
        .collect()
}

#[test]
fn line_and_circle_scenario() {
    let config = RecognizerConfig::default().with_one_dimensional_threshold(0.25);
    let recognizer = Recognizer::new(line_and_circle(), config).unwrap();

    assert_eq!(recognizer.recognize(&drawn_segment()).unwrap(), "line");
    assert_eq!(recognizer.recognize(&drawn_loop()).unwrap(), "circle");
}

#[test]
fn straight_templates_are_rejected_with_plain_scaling() {
    let err = Recognizer::new(line_and_circle(), RecognizerConfig::default()).unwrap_err();
    match err {
        Error::InvalidTemplate {
            name,
            reason: Degeneracy::FlatBoundingBox { height, .. },
        } => {
            assert_eq!(name, "line");
            assert_eq!(height, 0.0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_catalog_is_rejected() {
    let err = Recognizer::new(Vec::<CatalogEntry>::new(), RecognizerConfig::default()).unwrap_err();
    assert_eq!(err, Error::NoTemplates);
}

#[test]
fn normalized_strokes_are_centered_squares() {
    let recognizer = Recognizer::with_standard_catalog().unwrap();
    for template in recognizer.store().iter() {
        let points = template.points();
        assert_eq!(points.len(), RESAMPLE_SIZE);

        let c = geometry::centroid(points).unwrap();
        assert!(c.x.abs() < 1e-9 && c.y.abs() < 1e-9, "{}: {c:?}", template.name());

        let (w, h) = geometry::bounding_box(points).unwrap();
        assert!((w - SQUARE_SIZE).abs() < 1e-9, "{}: {w}", template.name());
        assert!((h - SQUARE_SIZE).abs() < 1e-9, "{}: {h}", template.name());
    }
}

#[test]
fn hand_drawn_shapes_are_recognized() {
    let recognizer = Recognizer::with_standard_catalog().unwrap();
    for name in ["triangle", "check", "circle", "zig-zag", "star"] {
        assert_eq!(recognizer.recognize(&wobbly(name)).unwrap(), name);
    }
}

#[test]
fn small_rotations_keep_the_label() {
    let recognizer = Recognizer::with_standard_catalog().unwrap();
    for name in ["triangle", "check", "star"] {
        let stroke = wobbly(name);
        let expected = recognizer.recognize(&stroke).unwrap();
        for degrees in [-2.0, -1.25, -0.5, 0.5, 1.25, 2.0] {
            let rotated = rotated_about_origin(&stroke, degrees);
            assert_eq!(recognizer.recognize(&rotated).unwrap(), expected, "{name} at {degrees}");
        }
    }
}

#[test]
fn scaling_keeps_the_label() {
    let recognizer = Recognizer::with_standard_catalog().unwrap();
    for name in ["caret", "zig-zag", "pigtail"] {
        let stroke = wobbly(name);
        let expected = recognizer.recognize(&stroke).unwrap();
        for factor in [0.01, 0.5, 3.0, 250.0, 1e160] {
            let scaled: Vec<Point> = stroke
                .iter()
                .map(|p| Point::new(p.x * factor, p.y * factor))
                .collect();
            assert_eq!(recognizer.recognize(&scaled).unwrap(), expected, "{name} x{factor}");
        }
    }
}

#[test]
fn translation_keeps_the_label() {
    let recognizer = Recognizer::with_standard_catalog().unwrap();
    for name in ["rectangle", "arrow", "delete"] {
        let stroke = wobbly(name);
        let expected = recognizer.recognize(&stroke).unwrap();
        for (dx, dy) in [(-500.0, 1234.0), (0.25, -0.75), (1e4, 1e4)] {
            let moved: Vec<Point> = stroke
                .iter()
                .map(|p| Point::new(p.x + dx, p.y + dy))
                .collect();
            assert_eq!(
                recognizer.recognize(&moved).unwrap(),
                expected,
                "{name} by ({dx}, {dy})"
            );
        }
    }
}

#[test]
fn precision_can_be_pinned_independently_of_the_range() {
    let precise =
        RecognizerConfig::default().with_search(SearchParameters::from_degrees(2.0, 0.05));
    let recognizer = Recognizer::new(catalog::standard(), precise).unwrap();
    assert_eq!(recognizer.search_parameters().angle_range, 2f64.to_radians());
    assert_eq!(recognizer.search_parameters().angle_precision, 0.05f64.to_radians());
    assert_eq!(recognizer.recognize(&wobbly("v")).unwrap(), "v");
}

#[test]
fn one_store_serves_many_threads() {
    let recognizer = Arc::new(Recognizer::with_standard_catalog().unwrap());
    let names = ["triangle", "circle", "check", "star"];

    thread::scope(|scope| {
        for name in names {
            let recognizer = Arc::clone(&recognizer);
            scope.spawn(move || {
                for _ in 0..4 {
                    assert_eq!(recognizer.recognize(&wobbly(name)).unwrap(), name);
                }
            });
        }
    });

    let clone = (*recognizer).clone();
    assert!(Arc::ptr_eq(clone.store(), recognizer.store()));
}

#[test]
fn degenerate_strokes_never_return_a_label() {
    let recognizer = Recognizer::with_standard_catalog().unwrap();
    assert!(matches!(
        recognizer.recognize(&[]),
        Err(Error::DegenerateStroke(Degeneracy::TooFewPoints { count: 0 }))
    ));
    assert!(matches!(
        recognizer.recognize(&[Point::new(7.0, 7.0); 3]),
        Err(Error::DegenerateStroke(Degeneracy::ZeroLength))
    ));
    let vertical: Vec<Point> = (0..30).map(|i| Point::new(12.0, i as f64)).collect();
    assert!(matches!(
        recognizer.recognize(&vertical),
        Err(Error::DegenerateStroke(Degeneracy::FlatBoundingBox { .. }))
    ));
}
