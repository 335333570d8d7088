//! 分片传输
//!
//! 从服务端取得最新文件，逐个拉取分片并在本地重组，整文件校验通过后才出现在正式文件名下。
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! # use std::time::Duration;
//! # use chunk_pull::session::TransferSession;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = TransferSession::new("http://localhost:8080", Duration::from_secs(60), 3)?;
//!
//! let outcome = session
//!     .build_transfer()
//!     .incoming_dir("in")
//!     .with_on_chunk_hook(|chunk_num, _has_next| println!("分片 {chunk_num}"))
//!     .send()
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::path::{Path, PathBuf};

use crate::internal::config::structs::client_config::DEFAULT_INCOMING_DIR;
use crate::internal::session::structs::TransferSession;
use crate::internal::transfer::orchestrator::run_transfer;
use crate::internal::transfer::traits::transfer_hook::{HookAbort, TransferHook};

use super::file_summary::FileSummary;
use super::hook_adapters::{
    AfterCompleteHookAdapter, BeforeStartHookAdapter, OnChunkHookAdapter,
};
use super::transfer_error::TransferError;
use super::transfer_hooks_container::TransferHooksContainer;
use super::transfer_outcome::TransferOutcome;

/// 单次分片传输；由 [`TransferSession::build_transfer`] 创建，链式配置后调用 [`ChunkTransfer::send`]。
pub struct ChunkTransfer {
    pub(crate) session: TransferSession,
    pub(crate) incoming_dir: PathBuf,
    pub(crate) hooks: TransferHooksContainer,
}

impl TransferSession {
    /// 创建一次传输；会话移交给传输，运行结束时随之释放连接池。
    ///
    /// 需要多次传输时先 `clone`，克隆共享同一连接池，全部释放后连接才会关闭。
    pub fn build_transfer(self) -> ChunkTransfer {
        ChunkTransfer {
            session: self,
            incoming_dir: PathBuf::from(DEFAULT_INCOMING_DIR),
            hooks: Default::default(),
        }
    }
}

impl ChunkTransfer {
    /// 设置接收目录；不存在时会自动创建。
    pub fn incoming_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.incoming_dir = path.as_ref().to_path_buf();
        self
    }

    /// 注册「开始前」钩子；闭包返回 `Err(HookAbort)` 会中止本次传输。
    pub fn with_before_start_hook<F, Fut>(mut self, f: F) -> Self
    where
        F: FnMut(FileSummary) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), HookAbort>> + Send + 'static,
    {
        self.hooks.add(BeforeStartHookAdapter(f));
        self
    }

    /// 注册「每个分片」钩子；参数为分片序号与是否还有后续分片。
    pub fn with_on_chunk_hook<F>(mut self, f: F) -> Self
    where
        F: FnMut(u64, bool) + Send + Sync + 'static,
    {
        self.hooks.add(OnChunkHookAdapter(f));
        self
    }

    /// 注册「完成后」钩子；正式文件改名成功后调用。
    pub fn with_after_complete_hook<F, Fut>(mut self, f: F) -> Self
    where
        F: FnMut(PathBuf) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.hooks.add(AfterCompleteHookAdapter(f));
        self
    }

    /// 添加完整钩子。
    pub fn with_hook(mut self, hook: impl TransferHook + 'static) -> Self {
        self.hooks.add(hook);
        self
    }

    /// 执行传输。
    pub async fn send(self) -> Result<TransferOutcome, TransferError> {
        run_transfer(self).await
    }
}
