//! Panic isolation for request handlers
//!
//! A panic anywhere below the router is caught at the request boundary,
//! logged, and turned into a JSON 500 carrying the panic message. Other
//! in-flight requests and the process keep running.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::Response;
use tower_http::catch_panic::CatchPanicLayer;

use super::response::respond_with_error;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Layer wrapping every route with panic recovery.
pub fn catch_panic_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(panic_response as PanicHandler)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic_message(err.as_ref());
    tracing::error!(panic = %message, "request handler panicked");
    respond_with_error(StatusCode::INTERNAL_SERVER_ERROR, message)
}

/// Text of a panic payload (`panic!` with a literal or a formatted string).
pub fn panic_message(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "Unknown error".to_owned()
    }
}
