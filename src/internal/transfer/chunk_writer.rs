//! 写盘任务（消费者）
//!
//! 独占临时文件，按序处理队列中的分片：
//!
//! 1. 解码 base64（缓存于 [`QueuedChunk`]）
//! 2. 校验分片摘要，不一致立即失败，该分片不会写入任何字节
//! 3. 追加写入临时文件
//! 4. 收到末尾分片后关闭文件、从磁盘重新计算整文件摘要，一致则原子改名为正式文件
//!
//! 任何一步失败都只关闭临时文件、不删除，并丢弃接收端；删除由编排方收尾时负责。
//! 任务的结果通过 `JoinHandle` 交回，只产生一次。

mod digest;
mod temp_file;

use std::path::PathBuf;

use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::internal::transfer::structs::{QueuedChunk, TransferError};

pub(crate) use digest::{digests_match, file_digest, hex_digest};
pub(crate) use temp_file::{is_temp_file_name, remove_temp_file, temp_file_name};

/// 队列容量：网络慢于磁盘，不需要大队列
pub(crate) const QUEUE_CAPACITY: usize = 16;

/// 写盘任务启动时即确定的目标：文件名与整文件期望摘要。
#[derive(Debug, Clone)]
pub(crate) struct ChunkWriterTarget {
    pub incoming_dir: PathBuf,
    pub file_name: String,
    pub expected_checksum: String,
}

impl ChunkWriterTarget {
    pub(crate) fn temp_path(&self) -> PathBuf {
        self.incoming_dir.join(temp_file_name(&self.file_name))
    }

    pub(crate) fn final_path(&self) -> PathBuf {
        self.incoming_dir.join(&self.file_name)
    }
}

/// 生产者持有的写盘任务句柄：发送端 + 任务结果。
pub(crate) struct ChunkWriterHandle {
    sender: Option<mpsc::Sender<QueuedChunk>>,
    task: Option<JoinHandle<Result<PathBuf, TransferError>>>,
}

impl ChunkWriterHandle {
    /// 入队；队列满时等待（背压）。写盘任务已退出时立即返回 `Err`。
    pub(crate) async fn send(&self, chunk: QueuedChunk) -> Result<(), QueuedChunk> {
        match &self.sender {
            Some(sender) => sender.send(chunk).await.map_err(|e| e.0),
            None => Err(chunk),
        }
    }

    /// 写盘任务是否已经结束（成功或失败）。
    pub(crate) fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(|t| t.is_finished())
    }

    /// 关闭发送端；写盘任务处理完已入队的分片后会因通道关闭而结束。
    pub(crate) fn close(&mut self) {
        self.sender.take();
    }

    /// 关闭发送端并等待写盘任务结束，取回其唯一结果。
    pub(crate) async fn join(&mut self) -> Result<PathBuf, TransferError> {
        self.close();
        match self.task.take() {
            Some(task) => task.await?,
            None => Err(TransferError::WriterExited),
        }
    }
}

/// 启动写盘任务；临时文件在任务内创建。
pub(crate) fn spawn_chunk_writer(target: ChunkWriterTarget) -> ChunkWriterHandle {
    let (sender, receiver) = mpsc::channel(QUEUE_CAPACITY);
    let task = tokio::spawn(run_chunk_writer(target, receiver));

    ChunkWriterHandle {
        sender: Some(sender),
        task: Some(task),
    }
}

async fn run_chunk_writer(
    target: ChunkWriterTarget,
    mut receiver: mpsc::Receiver<QueuedChunk>,
) -> Result<PathBuf, TransferError> {
    let result = consume(&target, &mut receiver).await;

    if let Err(e) = &result {
        error!(file = %target.file_name, error = %e, "保存文件出错");
        // 不再接收，阻塞在 send 上的生产者会立即得到错误
        receiver.close();
    }

    result
}

async fn consume(
    target: &ChunkWriterTarget,
    receiver: &mut mpsc::Receiver<QueuedChunk>,
) -> Result<PathBuf, TransferError> {
    let temp_path = target.temp_path();
    let mut file = File::create(&temp_path)
        .await
        .map_err(TransferError::CreateTempFile)?;

    let mut received: u64 = 0;
    while let Some(chunk) = receiver.recv().await {
        let bytes = chunk.bytes().map_err(|source| TransferError::ChunkDecode {
            chunk_num: chunk.chunk_num(),
            source,
        })?;

        let actual = hex_digest(bytes);
        if !digests_match(&actual, chunk.hex_digest()) {
            return Err(TransferError::ChunkIntegrity {
                chunk_num: chunk.chunk_num(),
                expected: chunk.hex_digest().to_string(),
                actual,
            });
        }

        file.write_all(bytes)
            .await
            .map_err(TransferError::WriteTempFile)?;
        received += 1;
        debug!(chunk_num = chunk.chunk_num(), len = bytes.len(), "分片已写入");

        if !chunk.has_next() {
            return finalize(target, file).await;
        }
    }

    Err(TransferError::StreamClosed { received })
}

async fn finalize(
    target: &ChunkWriterTarget,
    mut file: File,
) -> Result<PathBuf, TransferError> {
    file.flush().await.map_err(TransferError::WriteTempFile)?;
    file.sync_all().await.map_err(TransferError::WriteTempFile)?;
    drop(file);

    let temp_path = target.temp_path();
    let actual = file_digest(&temp_path)
        .await
        .map_err(TransferError::ReadTempFile)?;
    if !digests_match(&actual, &target.expected_checksum) {
        return Err(TransferError::FileIntegrity {
            expected: target.expected_checksum.clone(),
            actual,
        });
    }

    let final_path = target.final_path();
    tokio::fs::rename(&temp_path, &final_path)
        .await
        .map_err(|source| TransferError::Commit {
            from: temp_path.clone(),
            to: final_path.clone(),
            source,
        })?;

    info!(path = %final_path.display(), "整文件校验通过，已改名为正式文件");
    Ok(final_path)
}
