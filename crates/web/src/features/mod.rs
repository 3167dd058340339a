use axum::extract::{Path, rejection::PathRejection};

use crate::error::WebError;

pub mod categories;
pub mod questions;
pub mod quiz;

/// Resource id from the path. Anything but a non-negative integer that fits
/// the id column is treated as an unknown route.
pub(crate) fn resource_id(path: Result<Path<u32>, PathRejection>) -> Result<i32, WebError> {
    let Path(id) = path.map_err(|_| WebError::NotFound)?;
    i32::try_from(id).map_err(|_| WebError::NotFound)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn test_resource_id_in_range() {
        assert_eq!(resource_id(Ok(Path(19))).unwrap(), 19);
        assert_eq!(resource_id(Ok(Path(0))).unwrap(), 0);
    }

    #[test]
    fn test_resource_id_beyond_column_is_not_found() {
        let error = resource_id(Ok(Path(u32::MAX))).unwrap_err();
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }
}
