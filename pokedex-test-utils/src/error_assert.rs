use core::fmt::{
    Debug,
    Display,
};

/// [`assert`]s that the result is an error with the given message.
#[track_caller]
pub fn assert_error_message<T, E>(result: Result<T, E>, message: &str)
where
    T: Debug,
    E: Display,
{
    match result {
        Ok(value) => panic!("expected error \"{message}\", got {value:?}"),
        Err(err) => pretty_assertions::assert_eq!(err.to_string(), message),
    }
}

/// [`assert`]s that the result is an error that contains the given message.
#[track_caller]
pub fn assert_error_message_contains<T, E>(result: Result<T, E>, message: &str)
where
    T: Debug,
    E: Display,
{
    match result {
        Ok(value) => panic!("expected error containing \"{message}\", got {value:?}"),
        Err(err) => {
            let err = err.to_string();
            assert!(
                err.contains(message),
                "expected error containing \"{message}\", got \"{err}\""
            );
        }
    }
}
