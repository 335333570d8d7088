//! 传输相关错误类型。

use std::path::PathBuf;

use thiserror::Error;

use crate::internal::http::structs::FetchError;
use crate::internal::transfer::traits::transfer_hook::HookAbort;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("接收目录已存在但不是目录: {0}")]
    InvalidDestination(PathBuf),

    #[error("创建接收目录失败: {0}")]
    CreateDir(std::io::Error),

    #[error("无法确认目标文件是否存在 {path}: {source}")]
    InspectDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("非法文件名: {0}")]
    InvalidFileName(String),

    #[error("获取文件列表失败: {reason}")]
    MetadataUnavailable {
        reason: String,
        #[source]
        source: Option<FetchError>,
    },

    #[error("服务端拒绝返回分片 {chunk_num}: {message}")]
    ChunkFetchFailed { chunk_num: u64, message: String },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("分片 {chunk_num} base64 解码失败: {source}")]
    ChunkDecode {
        chunk_num: u64,
        #[source]
        source: base64::DecodeError,
    },

    #[error("分片 {chunk_num} 摘要不一致，期望 {expected}，实际 {actual}")]
    ChunkIntegrity {
        chunk_num: u64,
        expected: String,
        actual: String,
    },

    #[error("整文件摘要不一致，期望 {expected}，实际 {actual}")]
    FileIntegrity { expected: String, actual: String },

    #[error("创建临时文件失败: {0}")]
    CreateTempFile(std::io::Error),

    #[error("写入临时文件失败: {0}")]
    WriteTempFile(std::io::Error),

    #[error("读取临时文件失败: {0}")]
    ReadTempFile(std::io::Error),

    #[error("临时文件 {from} 改名为 {to} 失败: {source}")]
    Commit {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("分片流在末尾分片之前关闭，已收到 {received} 个分片")]
    StreamClosed { received: u64 },

    #[error("写盘任务提前结束")]
    WriterExited,

    #[error("写盘任务失败，放弃: {0}")]
    ConsumerFailed(#[source] Box<TransferError>),

    #[error("{0}")]
    HookAbort(#[from] HookAbort),

    #[error("写盘任务异常退出: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl TransferError {
    /// 剥掉 [`TransferError::ConsumerFailed`] 包装，返回写盘任务的原始错误。
    pub fn root(&self) -> &TransferError {
        match self {
            TransferError::ConsumerFailed(inner) => inner.root(),
            other => other,
        }
    }
}
