use std::path::Path;

use crate::internal::transfer::traits::transfer_hook::{HookAbort, TransferHook};

use super::file_summary::FileSummary;

/// 钩子容器：按注册顺序依次执行。
#[derive(Default)]
pub struct TransferHooksContainer {
    hooks: Vec<Box<dyn TransferHook>>,
}

impl TransferHooksContainer {
    /// 添加一个传输钩子；支持多次调用以注册多个钩子。
    pub fn add(&mut self, hook: impl TransferHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub async fn run_before_start(
        &mut self,
        file: &FileSummary,
    ) -> Result<(), HookAbort> {
        for h in self.hooks.iter_mut() {
            h.before_start(file).await?;
        }
        Ok(())
    }

    pub fn run_on_chunk(&mut self, chunk_num: u64, has_next: bool) {
        for h in self.hooks.iter_mut() {
            h.on_chunk(chunk_num, has_next);
        }
    }

    pub async fn run_after_complete(&mut self, path: &Path) {
        for h in self.hooks.iter_mut() {
            h.after_complete(path).await;
        }
    }
}
