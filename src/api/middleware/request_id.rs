//! Request-ID middleware.
//!
//! Stamps each request with an `x-request-id` UUID and propagates it onto the
//! response, so a client-reported failure can be matched to its server logs.

use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Sets a fresh UUID on requests that arrive without an `x-request-id`.
pub fn set_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Copies the request's `x-request-id` onto the response.
pub fn propagate_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}
