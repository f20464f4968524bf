use crate::{Error, required};

#[test]
fn test_required() {
    assert_eq!(required(Some(3)), Ok(3));
    assert_eq!(required::<i32>(None), Err(Error::Absent));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        Error::Absent.to_string(),
        "no argument at the selected position"
    );
    assert_eq!(
        Error::TypeMismatch {
            expected: "array",
            found: "int"
        }
        .to_string(),
        "type mismatch: expected array, found int"
    );
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&Error::Absent);
}
