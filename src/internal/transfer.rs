//! 传输流水线
//!
//! 生产者（编排）拉取文件列表与分片，经有界队列交给写盘任务（消费者）；写盘任务校验每个分片与整文件摘要，
//! 全部通过后才把临时文件原子改名为正式文件。
//!
//! ## 内部实现说明
//!
//! - `orchestrator` 子模块：生产者状态机，包括目录准备、选文件、分片循环与收尾清理
//! - `chunk_writer` 子模块：消费者任务，独占临时文件与摘要计算
//! - `structs` 子模块：线上数据模型、错误、结果、钩子容器
//! - `traits` 子模块：钩子接口

pub(crate) mod chunk_writer;
pub(crate) mod orchestrator;
pub mod structs;
pub mod traits;
