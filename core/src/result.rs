//! Uniform success/failure shape returned by every API call.

use crate::error::{ApiError, ErrorKind};

/// Outcome of one API call. Expected failures (network, 4xx, 5xx) are values
/// of this type, never panics.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    /// 2xx. `payload` is `None` for 204 and empty bodies.
    Success { payload: Option<T>, status: u16 },
    Failure { error: ApiError, status: u16 },
}

impl<T> ApiResult<T> {
    pub fn success(payload: T, status: u16) -> Self {
        ApiResult::Success {
            payload: Some(payload),
            status,
        }
    }

    pub fn empty(status: u16) -> Self {
        ApiResult::Success {
            payload: None,
            status,
        }
    }

    pub fn failure(error: ApiError, status: u16) -> Self {
        ApiResult::Failure { error, status }
    }

    pub fn status(&self) -> u16 {
        match self {
            ApiResult::Success { status, .. } | ApiResult::Failure { status, .. } => *status,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success { .. })
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            ApiResult::Success { payload, .. } => payload.as_ref(),
            ApiResult::Failure { .. } => None,
        }
    }

    pub fn into_payload(self) -> Option<T> {
        match self {
            ApiResult::Success { payload, .. } => payload,
            ApiResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            ApiResult::Success { .. } => None,
            ApiResult::Failure { error, .. } => Some(error),
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error().map(ApiError::kind)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            ApiResult::Success { payload, status } => ApiResult::Success {
                payload: payload.map(f),
                status,
            },
            ApiResult::Failure { error, status } => ApiResult::Failure { error, status },
        }
    }

    /// Drop the status for callers that prefer `?`.
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        match self {
            ApiResult::Success { payload, .. } => Ok(payload),
            ApiResult::Failure { error, .. } => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_keeps_status() {
        let r = ApiResult::success(vec![1, 2, 3], 200).map(|v| v.len());
        assert_eq!(r, ApiResult::success(3, 200));

        let f: ApiResult<Vec<i32>> = ApiResult::failure(ApiError::Network, 500);
        let mapped = f.map(|v| v.len());
        assert_eq!(mapped.status(), 500);
        assert_eq!(mapped.error_kind(), Some(ErrorKind::Network));
    }

    #[test]
    fn into_result_splits_outcomes() {
        assert_eq!(ApiResult::<u8>::empty(204).into_result(), Ok(None));
        let err = ApiResult::<u8>::failure(ApiError::NotFound("gone".into()), 404)
            .into_result()
            .unwrap_err();
        assert_eq!(err, ApiError::NotFound("gone".into()));
    }
}
