pub mod chunk_transfer;
pub mod file_chunk;
pub mod file_summary;
pub mod hook_adapters;
pub mod queued_chunk;
pub mod transfer_error;
pub mod transfer_hooks_container;
pub mod transfer_outcome;

// 重导出公共类型
pub use chunk_transfer::ChunkTransfer;
pub use file_chunk::FileChunk;
pub use file_summary::FileSummary;
pub use queued_chunk::QueuedChunk;
pub use transfer_error::TransferError;
pub use transfer_hooks_container::TransferHooksContainer;
pub use transfer_outcome::TransferOutcome;
