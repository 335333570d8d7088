use std::pin::pin;

use bytes::Bytes;
use futures_util::{Stream, StreamExt};

use crate::internal::http::structs::{FetchError, GuardedBuffer};

/// 流式读取响应体到限长缓冲；累计超过 `max_bytes` 时立即中止，不再继续拉流。
pub async fn read_guarded<S, E>(
    stream: S,
    max_bytes: usize,
) -> Result<Vec<u8>, FetchError>
where
    S: Stream<Item = Result<Bytes, E>>,
    FetchError: From<E>,
{
    let mut stream = pin!(stream);
    let mut buffer = GuardedBuffer::new(max_bytes);

    while let Some(part) = stream.next().await {
        buffer.extend(&part?)?;
    }

    Ok(buffer.into_inner())
}
