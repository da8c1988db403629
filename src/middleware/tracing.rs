// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Generates request IDs and wraps every HTTP request in a span with status and latency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::headers::REQUEST_ID;
use axum::{body::Body, Router};
use http::{HeaderName, HeaderValue, Request, Response};
use std::time::Duration;
use tower_http::{
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{field::Empty, Span};
use uuid::Uuid;

/// Generates `req_<uuid>` identifiers for requests that arrive without one
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdGenerator;

impl MakeRequestId for RequestIdGenerator {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&format!("req_{}", Uuid::new_v4().simple()))
            .ok()
            .map(RequestId::new)
    }
}

fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("n/a");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
        status = Empty,
        latency_ms = Empty,
    )
}

fn record_response(response: &Response<Body>, latency: Duration, span: &Span) {
    span.record("status", response.status().as_u16());
    span.record("latency_ms", latency.as_millis());
    tracing::info!(parent: span, "Request completed");
}

/// Wrap a router with request-id assignment, propagation and the HTTP trace span
///
/// Layers run outermost first: set request id, propagate it to the response,
/// then trace.
pub fn apply_http_layers(router: Router) -> Router {
    let header = HeaderName::from_static(REQUEST_ID);

    router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_response(record_response),
        )
        .layer(PropagateRequestIdLayer::new(header.clone()))
        .layer(SetRequestIdLayer::new(header, RequestIdGenerator))
}
