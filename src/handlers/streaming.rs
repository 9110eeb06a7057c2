//! Streamed JSON array responses
//!
//! List endpoints deliver their records as a JSON array written one element
//! at a time instead of buffering the whole result set. A store error after
//! the first bytes have been written can only abort the body mid-stream;
//! errors before that surface through the handler as usual.

use axum::body::{Body, Bytes};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use futures::{stream, Stream, StreamExt};
use serde::Serialize;

use crate::error::DomainError;

/// Wraps an entity stream into a streamed JSON array body
pub struct JsonArrayStream<S>(pub S);

impl<S, T> IntoResponse for JsonArrayStream<S>
where
    S: Stream<Item = Result<T, DomainError>> + Send + 'static,
    T: Serialize,
{
    fn into_response(self) -> Response {
        let elements = self.0.enumerate().map(|(index, element)| {
            let element = element?;
            let json = serde_json::to_vec(&element)
                .map_err(|e| DomainError::Internal(e.to_string()))?;

            let mut chunk = Vec::with_capacity(json.len() + 1);
            if index > 0 {
                chunk.push(b',');
            }
            chunk.extend_from_slice(&json);
            Ok(Bytes::from(chunk))
        });

        let body = stream::once(async { Ok::<_, DomainError>(Bytes::from_static(b"[")) })
            .chain(elements)
            .chain(stream::once(async { Ok(Bytes::from_static(b"]")) }));

        (
            [(header::CONTENT_TYPE, "application/json")],
            Body::from_stream(body),
        )
            .into_response()
    }
}
