//! Middleware for the HTTP client.
//!
//! Logs every upstream exchange. Only method, path and status are recorded; query
//! strings, headers and bodies carry credentials or tokens and are left out.

use std::time::Instant;

use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};

/// Request logging middleware.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestLogger;

#[async_trait::async_trait]
impl Middleware for RequestLogger {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let method = req.method().clone();
        let path = req.url().path().to_string();
        let started = Instant::now();

        let result = next.run(req, extensions).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(response) => tracing::debug!(
                %method,
                path = %path,
                status = response.status().as_u16(),
                elapsed_ms,
                "Upstream request finished"
            ),
            Err(e) => tracing::debug!(
                %method,
                path = %path,
                error = %e,
                elapsed_ms,
                "Upstream request failed"
            ),
        }

        result
    }
}
