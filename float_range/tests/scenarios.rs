use float_range::{FloatRange, RangeError, is_close};

fn assert_values(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!(is_close(*a, *e), "{actual:?} vs {expected:?}");
    }
}

#[test]
fn ascending_with_inexact_step() {
    let r = FloatRange::new(1.0, 2.0, 0.3).unwrap();
    assert_eq!(r.len(), 4);
    assert_values(&r.iter().collect::<Vec<_>>(), &[1.0, 1.3, 1.6, 1.9]);
    assert!(is_close(r.get(-1).unwrap(), 1.9));
}

#[test]
fn descending() {
    let r = FloatRange::new(2.0, 1.0, -0.5).unwrap();
    assert_eq!(r.len(), 2);
    assert_values(&r.iter().collect::<Vec<_>>(), &[2.0, 1.5]);
}

#[test]
fn tenths() {
    let r = FloatRange::new(0.0, 1.0, 0.1).unwrap();
    assert_eq!(r.len(), 10);
    assert_eq!(r.index(0.5).unwrap(), 5);
    assert_eq!(r.iter().count(), 10);
}

#[test]
fn one_argument_form() {
    assert_eq!(
        FloatRange::until(5.0).unwrap(),
        FloatRange::new(0.0, 5.0, 1.0).unwrap()
    );
}

#[test]
fn equality_across_arithmetic_paths() {
    let direct = FloatRange::new(0.0, 1.0, 0.1).unwrap();
    let derived = FloatRange::new(0.3 - 0.1 - 0.2, 0.1 * 10.0, 1.0 / 10.0).unwrap();
    assert_eq!(direct, derived);
}

#[test]
fn errors_surface_to_caller() {
    assert!(matches!(
        FloatRange::new(1.0, 2.0, 0.0),
        Err(RangeError::InvalidArgument { .. })
    ));

    let r = FloatRange::new(0.0, 1.0, 0.25).unwrap();
    assert!(matches!(r.index(0.3), Err(RangeError::NotFound { .. })));
    assert!(matches!(r.get(4), Err(RangeError::IndexOutOfRange { .. })));
    assert!(matches!(
        r.slice(Some(1), Some(3), Some(-1)),
        Err(RangeError::UnsupportedOperation { .. })
    ));

    let mut cursor = r.iter();
    assert_eq!(cursor.by_ref().count(), 4);
    assert!(matches!(cursor.advance(), Err(RangeError::EndOfSequence)));
}

#[test]
fn error_messages() {
    let r = FloatRange::new(0.0, 1.0, 0.25).unwrap();
    assert_eq!(
        r.index(0.3).unwrap_err().to_string(),
        "0.3 is not in float_range(0, 1, 0.25)"
    );
    assert_eq!(
        r.get(-9).unwrap_err().to_string(),
        "offset -9 out of range for float_range(0, 1, 0.25) of length 4"
    );
    assert_eq!(
        FloatRange::new(0.0, 1.0, 0.0).unwrap_err().to_string(),
        "invalid step 0: must be nonzero"
    );
    assert_eq!(
        r.slice(Some(1), None, Some(-1)).unwrap_err().to_string(),
        "unsupported slice [1::-1] of float_range(0, 1, 0.25)"
    );
}
