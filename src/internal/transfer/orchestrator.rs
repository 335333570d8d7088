//! 编排（生产者）：准备目录 → 取文件列表 → 已存在则跳过 → 启动写盘任务 → 分片循环 → 等待写盘 → 收尾清理。

mod chunk_loop;
mod destination;
mod list_files;

use tracing::{debug, info, warn};

use crate::internal::transfer::chunk_writer::{
    remove_temp_file, spawn_chunk_writer, ChunkWriterTarget,
};
use crate::internal::transfer::structs::{
    ChunkTransfer, TransferError, TransferOutcome,
};

use chunk_loop::{pump_chunks, PumpChunksParams};
use destination::{already_present, ensure_incoming_dir, validate_file_name};
use list_files::fetch_newest_file;

pub(crate) use list_files::select_newest;

/// 文件列表接口
pub const FILES_END_POINT: &str = "/files";

/// 分片接口
pub const CHUNK_END_POINT: &str = "/chunk";

pub const FILE_PARAM: &str = "file";

pub const CHUNK_NUM_PARAM: &str = "chunkNum";

/// 文件列表响应上限（256KB），列表不应太长
pub const FILES_MAX_BYTES: usize = 256 * 1024;

/// 分片响应上限（5MB）
pub const CHUNK_MAX_BYTES: usize = 5 * 1024 * 1024;

/// 传输入口；任何失败都会中止整次运行，不会在正式文件名下留下文件。
pub(crate) async fn run_transfer(
    transfer: ChunkTransfer,
) -> Result<TransferOutcome, TransferError> {
    let ChunkTransfer {
        session,
        incoming_dir,
        mut hooks,
    } = transfer;

    ensure_incoming_dir(&incoming_dir).await?;

    let newest = fetch_newest_file(&session).await?;
    validate_file_name(&newest.name)?;

    let final_path = incoming_dir.join(&newest.name);
    if already_present(&final_path).await? {
        warn!(file = %newest.name, "最新文件已存在，跳过");
        return Ok(TransferOutcome::AlreadyPresent(final_path));
    }

    info!(file = %newest.name, "最新文件");
    hooks.run_before_start(&newest).await?;

    let target = ChunkWriterTarget {
        incoming_dir,
        file_name: newest.name.clone(),
        expected_checksum: newest.check_sum.clone(),
    };
    let temp_path = target.temp_path();
    let mut writer = spawn_chunk_writer(target);

    let pumped = pump_chunks(PumpChunksParams {
        session: &session,
        file_name: &newest.name,
        writer: &mut writer,
        hooks: &mut hooks,
    })
    .await;

    let result = match pumped {
        Ok(chunk_count) => {
            debug!(chunk_count, "分片已全部入队，等待写盘任务");
            writer.join().await
        }
        Err(e) => {
            // 关闭通道保证写盘任务一定退出，再删临时文件
            if let Err(writer_err) = writer.join().await {
                debug!(error = %writer_err, "写盘任务已结束");
            }
            Err(e)
        }
    };

    // 释放 HTTP 连接池（调用方未保留克隆时）
    drop(session);
    remove_temp_file(&temp_path).await;

    let saved = result?;
    hooks.run_after_complete(&saved).await;
    Ok(TransferOutcome::Saved(saved))
}
