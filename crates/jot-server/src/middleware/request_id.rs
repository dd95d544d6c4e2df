//! Request ID handling.
//!
//! Requests arriving without an `x-request-id` header get a fresh UUID,
//! and whatever id a request carries is echoed on its response so a
//! client can quote it when reporting a failure. Both halves come from
//! tower-http; this module just fixes the header name and generator in
//! one place.

use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Layer that stamps a UUID into `x-request-id` when the client sent none.
///
/// Apply this outermost so the id is present for the whole middleware
/// stack, the trace span included.
pub fn set_request_id() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Layer that copies the request's `x-request-id` onto the response.
pub fn propagate_request_id() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}
