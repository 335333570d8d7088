//! 传输相关 trait：钩子接口，供编排流程在各阶段调用。

use std::path::Path;

use async_trait::async_trait;

use crate::internal::transfer::structs::FileSummary;

/// 钩子执行时请求中止传输时使用的错误。
#[derive(Debug, Clone)]
pub struct HookAbort;

impl std::fmt::Display for HookAbort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("传输被钩子中止")
    }
}

impl std::error::Error for HookAbort {}

/// 传输流程钩子：在「开始前 / 每个分片入队后 / 改名完成后」插入自定义逻辑。
///
/// 使用方式二选一（可混用）：
/// - **单阶段**：用 `with_before_start_hook` / `with_on_chunk_hook` / `with_after_complete_hook` 传入闭包；
/// - **完整钩子**：实现本 trait，通过 `with_hook` 注册。
#[async_trait]
pub trait TransferHook: Send + Sync {
    /// 选定文件后、启动写盘任务前调用。返回 `Err` 则中止本次传输，不会发起分片请求。
    async fn before_start(&mut self, _file: &FileSummary) -> Result<(), HookAbort> {
        Ok(())
    }

    /// 分片交给写盘任务后调用；此时分片尚未校验。
    fn on_chunk(&mut self, _chunk_num: u64, _has_next: bool) {}

    /// 正式文件改名成功后调用。
    async fn after_complete(&mut self, _path: &Path) {}
}
