//! Unit tests for error.rs

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_invalid_range_display() {
    let err = Error::InvalidRange("z_near (10) must be less than z_far (1)".to_string());
    let display = format!("{}", err);
    assert!(display.starts_with("Invalid clip range"));
    assert!(display.contains("z_near (10)"));
}

#[test]
fn test_invalid_viewport_display() {
    let err = Error::InvalidViewport("0x600".to_string());
    assert_eq!(format!("{}", err), "Invalid viewport: 0x600");
}

#[test]
fn test_invalid_field_of_view_display() {
    let err = Error::InvalidFieldOfView("180 degrees".to_string());
    assert_eq!(format!("{}", err), "Invalid field of view: 180 degrees");
}

#[test]
fn test_invalid_frustum_scale_display() {
    let err = Error::InvalidFrustumScale("-1".to_string());
    assert_eq!(format!("{}", err), "Invalid frustum scale: -1");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::InvalidViewport("test".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug_names_variant() {
    assert!(format!("{:?}", Error::InvalidRange("r".to_string())).contains("InvalidRange"));
    assert!(format!("{:?}", Error::InvalidViewport("v".to_string())).contains("InvalidViewport"));
    assert!(format!("{:?}", Error::InvalidFieldOfView("f".to_string())).contains("InvalidFieldOfView"));
    assert!(format!("{:?}", Error::InvalidFrustumScale("s".to_string())).contains("InvalidFrustumScale"));
}

#[test]
fn test_error_clone() {
    let err = Error::InvalidRange("near == far".to_string());
    let cloned = err.clone();
    assert_eq!(format!("{}", err), format!("{}", cloned));
}

// ============================================================================
// ERROR PROPAGATION TESTS
// ============================================================================

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<f32> {
        Err(Error::InvalidFrustumScale("0".to_string()))
    }

    fn outer() -> Result<f32> {
        let scale = inner()?;
        Ok(scale * 2.0)
    }

    match outer() {
        Err(Error::InvalidFrustumScale(msg)) => assert_eq!(msg, "0"),
        other => panic!("unexpected result: {:?}", other),
    }
}
