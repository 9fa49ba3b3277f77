// Chunked JSON streaming utilities
use crate::application::streaming_service::StreamMessage;
use crate::infrastructure::http_response::brotli_compress;
use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use futures::stream::Stream;
use futures::StreamExt;

/// Create a chunked streaming response of length-prefixed JSON messages
pub fn chunked_json_stream<S>(stream: S, compress: bool) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = StreamMessage> + Send + 'static,
{
    let byte_stream = stream.then(move |msg| async move { serialize_chunk(msg, compress).await });

    let body = Body::from_stream(byte_stream);

    // Chunks are compressed individually, so no Content-Encoding on the response itself
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .header(header::TRANSFER_ENCODING, "chunked")
        .body(body)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Frame: 4-byte big-endian payload length, then the (optionally Brotli) JSON payload
pub async fn serialize_chunk(msg: StreamMessage, compress: bool) -> Result<Bytes, std::io::Error> {
    let json = serde_json::to_vec(&msg)?;

    let payload = if compress {
        brotli_compress(json).await?
    } else {
        json
    };

    let length = u32::try_from(payload.len())
        .map_err(|_| std::io::Error::new(std::io::ErrorKind::InvalidData, "chunk too large"))?;
    let mut chunk = BytesMut::with_capacity(4 + payload.len());
    chunk.put_u32(length);
    chunk.put_slice(&payload);

    Ok(chunk.freeze())
}

/// Helper to create a streaming response from a receiver
pub fn stream_from_receiver(
    mut rx: tokio::sync::mpsc::Receiver<StreamMessage>,
    compress: bool,
) -> impl IntoResponse {
    let stream = async_stream::stream! {
        while let Some(msg) = rx.recv().await {
            yield msg;
        }
    };

    match chunked_json_stream(stream, compress) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Buf;

    #[tokio::test]
    async fn test_chunk_is_length_prefixed() {
        let msg = StreamMessage::Complete {
            widgets: 2,
            duration_ms: 5,
        };
        let mut chunk = serialize_chunk(msg, false).await.unwrap();

        let length = chunk.get_u32() as usize;
        assert_eq!(length, chunk.len());

        let json: serde_json::Value = serde_json::from_slice(&chunk).unwrap();
        assert_eq!(json["type"], "complete");
        assert_eq!(json["widgets"], 2);
    }

    #[tokio::test]
    async fn test_compressed_chunk_round_trips() {
        use async_compression::tokio::bufread::BrotliDecoder;
        use tokio::io::AsyncReadExt;

        let msg = StreamMessage::ChartUpdate {
            id: "traffic_sources".to_string(),
            values: crate::domain::dashboard::ChartValues::Ranked {
                items: vec![crate::domain::metrics::NamedValue::new("Direct", 3_210.0)],
            },
        };
        let plain = serde_json::to_vec(&msg).unwrap();
        let mut chunk = serialize_chunk(msg, true).await.unwrap();

        let length = chunk.get_u32() as usize;
        assert_eq!(length, chunk.len());

        let mut decoder = BrotliDecoder::new(std::io::Cursor::new(chunk.to_vec()));
        let mut decoded = Vec::new();
        decoder.read_to_end(&mut decoded).await.unwrap();
        assert_eq!(decoded, plain);

        let json: serde_json::Value = serde_json::from_slice(&decoded).unwrap();
        assert_eq!(json["type"], "chart_update");
        assert_eq!(json["values"]["items"][0]["name"], "Direct");
    }

    #[tokio::test]
    async fn test_stream_body_contains_all_frames() {
        let (tx, rx) = tokio::sync::mpsc::channel(4);
        tx.send(StreamMessage::Complete { widgets: 0, duration_ms: 1 }).await.unwrap();
        tx.send(StreamMessage::Complete { widgets: 1, duration_ms: 2 }).await.unwrap();
        drop(tx);

        let response = stream_from_receiver(rx, false).into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let mut body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let mut frames = 0;
        while body.has_remaining() {
            let length = body.get_u32() as usize;
            body.advance(length);
            frames += 1;
        }
        assert_eq!(frames, 2);
    }
}
