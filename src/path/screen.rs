use crate::errors::{RouteError, RouteResult};

/// Rejects request paths carrying ASCII control or whitespace bytes.
#[inline]
pub fn check_request_path(path: &str) -> RouteResult<()> {
    match path.bytes().position(|b| b <= 0x20 || b == 0x7f) {
        None => Ok(()),
        Some(index) => Err(RouteError::BadRequest {
            reason: format!(
                "path contains control or whitespace byte {} at index {index}",
                path.as_bytes()[index]
            ),
        }),
    }
}
