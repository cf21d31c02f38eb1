//! Vector integration tests.

#![expect(clippy::float_cmp, reason = "results below are exact in binary")]

use seqmodel::Vector2;

#[test]
fn magnitude_of_known_vectors() {
    assert_eq!(Vector2::new(0.0, 0.0).magnitude(), 0.0);
    assert_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0);
    assert_eq!(Vector2::new(-5.0, 12.0).magnitude(), 13.0);
}

#[test]
fn magnitude_does_not_overflow() {
    let v = Vector2::new(1e200, 1e200);
    assert!(v.magnitude().is_finite());
    assert!(v.magnitude() > 1e200);
}

#[test]
fn default_is_origin() {
    let v = Vector2::default();
    assert_eq!(v, Vector2::new(0.0, 0.0));
    assert!(!v.is_nonzero());
}

#[test]
fn truthiness_looks_at_components() {
    assert!(Vector2::new(0.0, 0.0001).is_nonzero());
    assert!(Vector2::new(-1.0, 0.0).is_nonzero());
    assert!(!Vector2::new(-0.0, 0.0).is_nonzero());
    assert!(Vector2::new(f64::NAN, 0.0).is_nonzero());
}

#[test]
fn arithmetic_returns_new_values() {
    let a = Vector2::new(2.0, 4.0);
    let b = Vector2::new(2.0, 1.0);

    assert_eq!(a.add(b), Vector2::new(4.0, 5.0));
    assert_eq!(a + b, Vector2::new(4.0, 5.0));
    assert_eq!(a.scale(3.0), Vector2::new(6.0, 12.0));
    assert_eq!(a * 3.0, Vector2::new(6.0, 12.0));
    assert_eq!(-a, Vector2::new(-2.0, -4.0));

    assert_eq!(a, Vector2::new(2.0, 4.0));
}

#[test]
fn dot_and_cross() {
    let a = Vector2::new(1.0, 2.0);
    let b = Vector2::new(3.0, 4.0);

    assert_eq!(a.dot(b), 11.0);
    assert_eq!(a.cross(b), -2.0);
    assert_eq!(b.cross(a), 2.0);
    assert_eq!(a.cross(a), 0.0);
}

#[test]
fn text_representations() {
    let v = Vector2::new(3.0, 4.5);
    assert_eq!(format!("{v:?}"), "Vector2(3.0, 4.5)");
    assert_eq!(v.to_string(), "(3.0, 4.5)");
    assert_eq!(Vector2::default().to_string(), "(0.0, 0.0)");
    assert_eq!(Vector2::new(-1.25, 2.0).to_string(), "(-1.25, 2.0)");
}
