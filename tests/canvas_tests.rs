use flo_poly::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn gridsize_must_be_finite_and_positive() {
    assert!(Canvas::new(0.0).is_err());
    assert!(Canvas::new(-1.0).is_err());
    assert!(Canvas::new(f64::NAN).is_err());
    assert!(Canvas::new(0.1).is_ok());
}

#[test]
fn drawing_a_square_builds_a_square() {
    let mut canvas = Canvas::new(0.1).unwrap();

    canvas.move_to(100.0, 150.0);
    canvas.line_to(200.0, 150.0).unwrap();
    canvas.line_to(200.0, 250.0).unwrap();
    canvas.line_to(100.0, 250.0).unwrap();
    canvas.close().unwrap();

    let square = canvas.result();

    assert!(square.gridsize() == 0.1);
    assert!(approx(square.area(), 10000.0), "Area was {}", square.area());
    assert!(square.bbox() == [100.0, 150.0, 200.0, 250.0], "Bounding box was {:?}", square.bbox());
}

#[test]
fn result_is_idempotent() {
    let mut canvas = Canvas::new(1.0).unwrap();

    canvas.move_to(0.0, 0.0);
    canvas.line_to(10.0, 0.0).unwrap();
    canvas.line_to(10.0, 10.0).unwrap();
    canvas.close().unwrap();

    let first   = canvas.result();
    let second  = canvas.result();

    assert!(first == second);

    // The canvas stays usable after result()
    canvas.move_to(20.0, 0.0);
    canvas.line_to(30.0, 0.0).unwrap();
    canvas.line_to(30.0, 10.0).unwrap();
    canvas.close().unwrap();

    let third = canvas.result();

    assert!(approx(third.area(), first.area() + 50.0), "Areas were {} and {}", first.area(), third.area());
}

#[test]
fn unclosed_contours_are_not_emitted() {
    let mut canvas = Canvas::new(1.0).unwrap();

    canvas.move_to(0.0, 0.0);
    canvas.line_to(10.0, 0.0).unwrap();
    canvas.line_to(10.0, 10.0).unwrap();
    canvas.line_to(0.0, 10.0).unwrap();

    // No close: the polygon is empty
    assert!(canvas.result().is_empty());
    assert!(canvas.result().decompose().is_empty());
}

#[test]
fn move_to_discards_an_open_contour() {
    let mut canvas = Canvas::new(1.0).unwrap();

    // Two vertices of an abandoned contour, then a closed triangle
    canvas.move_to(100.0, 100.0);
    canvas.line_to(200.0, 100.0).unwrap();

    canvas.move_to(0.0, 0.0);
    canvas.line_to(10.0, 0.0).unwrap();
    canvas.line_to(10.0, 10.0).unwrap();
    canvas.close().unwrap();

    let triangle = canvas.result();

    assert!(approx(triangle.area(), 50.0), "Area was {}", triangle.area());
    assert!(triangle.bbox() == [0.0, 0.0, 10.0, 10.0], "Bounding box was {:?}", triangle.bbox());
}

#[test]
fn zero_length_edges_are_rejected() {
    let mut canvas = Canvas::new(0.1).unwrap();

    canvas.move_to(0.0, 0.0);
    assert!(canvas.line_to(0.0, 0.0) == Err(PolygonError::DegenerateInput));

    // Points that snap onto the previous vertex count as zero-length too
    assert!(canvas.line_to(0.04, -0.04) == Err(PolygonError::DegenerateInput));

    // The rejected calls left the canvas unchanged and it can carry on
    canvas.line_to(10.0, 0.0).unwrap();
    canvas.line_to(10.0, 10.0).unwrap();
    canvas.close().unwrap();

    assert!(approx(canvas.result().area(), 50.0), "Area was {}", canvas.result().area());
}

#[test]
fn close_needs_three_distinct_vertices() {
    let mut canvas = Canvas::new(1.0).unwrap();

    canvas.move_to(0.0, 0.0);
    canvas.line_to(10.0, 0.0).unwrap();

    assert!(canvas.close() == Err(PolygonError::DegenerateInput));

    // The contour is still open: adding a third vertex makes it closeable
    canvas.line_to(10.0, 10.0).unwrap();
    assert!(canvas.close() == Ok(()));

    assert!(approx(canvas.result().area(), 50.0), "Area was {}", canvas.result().area());
}

#[test]
fn close_without_a_contour_does_nothing() {
    let mut canvas = Canvas::new(1.0).unwrap();

    assert!(canvas.close() == Ok(()));
    assert!(canvas.result().is_empty());
}

#[test]
fn line_to_without_a_contour_starts_one() {
    let mut canvas = Canvas::new(1.0).unwrap();

    canvas.line_to(0.0, 0.0).unwrap();
    canvas.line_to(10.0, 0.0).unwrap();
    canvas.line_to(10.0, 10.0).unwrap();
    canvas.close().unwrap();

    assert!(approx(canvas.result().area(), 50.0), "Area was {}", canvas.result().area());
}

#[test]
fn explicit_return_to_the_start_closes_cleanly() {
    // Drawing the closing edge by hand and then calling close() must not double it up
    let mut canvas = Canvas::new(1.0).unwrap();

    canvas.move_to(0.0, 0.0);
    canvas.line_to(10.0, 0.0).unwrap();
    canvas.line_to(10.0, 10.0).unwrap();
    canvas.line_to(0.0, 10.0).unwrap();
    canvas.line_to(0.0, 0.0).unwrap();
    canvas.close().unwrap();

    let square = canvas.result();

    assert!(approx(square.area(), 100.0), "Area was {}", square.area());
    assert!(square.decompose() == vec![
        PathOp::Move(0.0, 0.0),
        PathOp::Line(0.0, 10.0),
        PathOp::Line(10.0, 10.0),
        PathOp::Line(10.0, 0.0),
        PathOp::Line(0.0, 0.0),
    ], "Decomposed to {:?}", square.decompose());
}

#[test]
fn several_contours_accumulate() {
    let mut canvas = Canvas::new(1.0).unwrap();

    canvas.move_to(0.0, 0.0);
    canvas.line_to(10.0, 0.0).unwrap();
    canvas.line_to(10.0, 10.0).unwrap();
    canvas.line_to(0.0, 10.0).unwrap();
    canvas.close().unwrap();

    canvas.move_to(20.0, 0.0);
    canvas.line_to(30.0, 0.0).unwrap();
    canvas.line_to(30.0, 10.0).unwrap();
    canvas.line_to(20.0, 10.0).unwrap();
    canvas.close().unwrap();

    let both = canvas.result();

    assert!(approx(both.area(), 200.0), "Area was {}", both.area());
    assert!(both.bbox() == [0.0, 0.0, 30.0, 10.0], "Bounding box was {:?}", both.bbox());
}
