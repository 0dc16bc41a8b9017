//! JSON envelopes shared by every endpoint.
//!
//! Successful reads answer `{"success": true, "data": …}`; commands and
//! failures answer `{"success": <bool>, "message": "…"}`.

use serde::Serialize;

/// `{"success": true, "data": …}`
#[derive(Debug, Serialize)]
pub struct DataBody<T> {
    success: bool,
    data: T,
}

impl<T> DataBody<T> {
    /// Wrap a successful payload.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{"success": <bool>, "message": "…"}`
#[derive(Debug, Serialize)]
pub struct MessageBody {
    success: bool,
    message: &'static str,
}

impl MessageBody {
    /// A successful outcome with a fixed message.
    #[must_use]
    pub fn success(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }

    /// A failed outcome with a fixed, client-safe message.
    #[must_use]
    pub fn failure(message: &'static str) -> Self {
        Self {
            success: false,
            message,
        }
    }
}
