use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Request logging middleware: one structured event per API request.
pub async fn request_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        "api_request"
    );

    response
}
