//! 单阶段钩子适配器：将闭包包装成 [`TransferHook`]，供 `with_xx_hook` 使用。

use std::future::Future;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::internal::transfer::traits::transfer_hook::{HookAbort, TransferHook};

use super::file_summary::FileSummary;

/// 仅实现「开始前」的钩子适配器。
pub(crate) struct BeforeStartHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F, Fut> TransferHook for BeforeStartHookAdapter<F>
where
    F: FnMut(FileSummary) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), HookAbort>> + Send + 'static,
{
    async fn before_start(&mut self, file: &FileSummary) -> Result<(), HookAbort> {
        (self.0)(file.clone()).await
    }
}

/// 仅实现「每个分片」的钩子适配器。
pub(crate) struct OnChunkHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F> TransferHook for OnChunkHookAdapter<F>
where
    F: FnMut(u64, bool) + Send + Sync + 'static,
{
    fn on_chunk(&mut self, chunk_num: u64, has_next: bool) {
        (self.0)(chunk_num, has_next);
    }
}

/// 仅实现「完成后」的钩子适配器。
pub(crate) struct AfterCompleteHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F, Fut> TransferHook for AfterCompleteHookAdapter<F>
where
    F: FnMut(PathBuf) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn after_complete(&mut self, path: &Path) {
        (self.0)(path.to_path_buf()).await
    }
}
