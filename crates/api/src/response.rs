//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// Used where a handler returns derived data (access resolutions, action
/// acknowledgements) rather than a bare entity body.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
