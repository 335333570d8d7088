//! 分片循环：从 0 开始逐个请求分片并入队，直到某个分片声明没有后续。

use tracing::debug;

use crate::internal::http::functions::fetch_with_retries;
use crate::internal::http::structs::FetchParams;
use crate::internal::session::structs::TransferSession;
use crate::internal::transfer::chunk_writer::ChunkWriterHandle;
use crate::internal::transfer::structs::{
    FileChunk, QueuedChunk, TransferError, TransferHooksContainer,
};

use super::{CHUNK_END_POINT, CHUNK_MAX_BYTES, CHUNK_NUM_PARAM, FILE_PARAM};

/// 分片循环的参数（形参超过 3 个，用 struct 承载）。
pub(super) struct PumpChunksParams<'a> {
    pub session: &'a TransferSession,
    pub file_name: &'a str,
    pub writer: &'a mut ChunkWriterHandle,
    pub hooks: &'a mut TransferHooksContainer,
}

/// 返回入队的分片总数。
///
/// 每次请求前先看写盘任务是否已经结束：结束即说明它失败了，立刻放弃，不再请求后续分片。
pub(super) async fn pump_chunks(
    params: PumpChunksParams<'_>,
) -> Result<u64, TransferError> {
    let PumpChunksParams {
        session,
        file_name,
        writer,
        hooks,
    } = params;

    let mut chunk_num: u64 = 0;
    loop {
        if writer.is_finished() {
            return Err(consumer_failure(writer).await);
        }

        let chunk = fetch_chunk(session, file_name, chunk_num).await?;
        let has_next = chunk.has_next;

        if writer.send(QueuedChunk::new(chunk_num, chunk)).await.is_err() {
            return Err(consumer_failure(writer).await);
        }
        debug!(chunk_num, has_next, "分片已入队");
        hooks.run_on_chunk(chunk_num, has_next);

        if !has_next {
            return Ok(chunk_num + 1);
        }
        chunk_num += 1;
    }
}

async fn fetch_chunk(
    session: &TransferSession,
    file_name: &str,
    chunk_num: u64,
) -> Result<FileChunk, TransferError> {
    let chunk_num_value = chunk_num.to_string();
    let query = [
        (FILE_PARAM, file_name),
        (CHUNK_NUM_PARAM, chunk_num_value.as_str()),
    ];
    let params = FetchParams {
        client: &session.client,
        base_url: &session.server_url,
        path: CHUNK_END_POINT,
        query: &query,
        max_bytes: CHUNK_MAX_BYTES,
        timeout: session.timeout,
        retries: session.retries,
    };

    let envelope = fetch_with_retries::<FileChunk>(&params).await?;
    envelope
        .into_payload()
        .map_err(|message| TransferError::ChunkFetchFailed { chunk_num, message })
}

/// 写盘任务已退出时取回它的错误，包装为 [`TransferError::ConsumerFailed`]。
async fn consumer_failure(writer: &mut ChunkWriterHandle) -> TransferError {
    let cause = match writer.join().await {
        Err(e) => e,
        // 末尾分片之前不可能成功结束
        Ok(_) => TransferError::WriterExited,
    };
    TransferError::ConsumerFailed(Box::new(cause))
}
