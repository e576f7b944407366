//! Error macros for gradebook

/// Return early with an invalid input error
#[macro_export]
macro_rules! bail_invalid {
    ($field:expr, $value:expr) => {
        return Err($crate::error::GradeError::invalid_input($field, $value))
    };
}

/// Macro for mapping database errors
#[macro_export]
macro_rules! map_db_err {
    ($op:expr, $error:expr) => {
        $crate::error::GradeError::db_operation($op, $error)
    };
}

/// Extract a typed column from a row, naming the field on failure
#[macro_export]
macro_rules! extract {
    ($row:expr, $idx:expr, $field:expr) => {
        $row.get($idx)
            .map_err(|e| $crate::error::GradeError::field_extraction($field, e))
    };
}
