use firstrade_client::error::AppError;
use reqwest::StatusCode;

#[test]
fn test_app_error_display_authentication() {
    let error = AppError::Authentication("login failed".to_string());
    assert_eq!(error.to_string(), "authentication failed: login failed");
    assert!(error.is_authentication());
}

#[test]
fn test_app_error_display_response_shape() {
    let error = AppError::ResponseShape("missing <success>".to_string());
    assert_eq!(
        error.to_string(),
        "unexpected response shape: missing <success>"
    );
    assert!(!error.is_authentication());
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("quantity must be positive".to_string());
    assert_eq!(error.to_string(), "invalid input: quantity must be positive");
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::BAD_GATEWAY);
    assert!(error.to_string().contains("502"));
}

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}
