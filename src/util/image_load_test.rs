use super::*;

#[test]
fn cancelled_picker_has_no_message() {
    assert_eq!(ImageLoadError::NoFile.user_message(), None);
}

#[test]
fn read_failure_is_reported() {
    assert_eq!(
        ImageLoadError::Read.user_message().as_deref(),
        Some("Could not load that picture: the browser could not read the file.")
    );
}

#[test]
fn reader_error_carries_detail() {
    let err = ImageLoadError::Reader("InvalidStateError".to_owned());
    assert_eq!(err.to_string(), "could not start reading the file: InvalidStateError");
    assert!(err.user_message().is_some_and(|m| m.contains("InvalidStateError")));
}
