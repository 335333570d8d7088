//! 写盘任务测试：直接驱动队列，不经过网络。

use std::path::Path;
use std::pin::pin;

use futures_util::FutureExt;

use crate::internal::transfer::chunk_writer::{
    is_temp_file_name, remove_temp_file, spawn_chunk_writer, temp_file_name,
    ChunkWriterTarget, QUEUE_CAPACITY,
};
use crate::tests::{b64, md5_hex};
use crate::transfer::{FileChunk, QueuedChunk, TransferError};

fn queued(chunk_num: u64, data: &[u8], has_next: bool) -> QueuedChunk {
    QueuedChunk::new(
        chunk_num,
        FileChunk {
            data: b64(data),
            chunk_hex_digest: md5_hex(data),
            has_next,
        },
    )
}

fn target(dir: &Path, expected_checksum: String) -> ChunkWriterTarget {
    ChunkWriterTarget {
        incoming_dir: dir.to_path_buf(),
        file_name: "report.bin".to_string(),
        expected_checksum,
    }
}

#[tokio::test]
async fn chunks_are_appended_in_order_and_committed() {
    let dir = tempfile::tempdir().unwrap();
    let target = target(dir.path(), md5_hex(b"hello world"));
    let temp_path = target.temp_path();
    let final_path = target.final_path();

    let mut writer = spawn_chunk_writer(target);
    writer.send(queued(0, b"hello", true)).await.unwrap();
    writer.send(queued(1, b" ", true)).await.unwrap();
    writer.send(queued(2, b"world", false)).await.unwrap();

    let saved = writer.join().await.unwrap();
    assert_eq!(saved, final_path);
    assert_eq!(std::fs::read(&final_path).unwrap(), b"hello world");
    assert!(!temp_path.exists());
}

#[tokio::test]
async fn bad_chunk_digest_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let target = target(dir.path(), md5_hex(b"hello"));
    let temp_path = target.temp_path();
    let final_path = target.final_path();

    let bad = QueuedChunk::new(
        0,
        FileChunk {
            data: b64(b"hello"),
            chunk_hex_digest: md5_hex(b"other"),
            has_next: false,
        },
    );

    let mut writer = spawn_chunk_writer(target);
    writer.send(bad).await.unwrap();

    match writer.join().await {
        Err(TransferError::ChunkIntegrity {
            chunk_num,
            expected,
            actual,
        }) => {
            assert_eq!(chunk_num, 0);
            assert_eq!(expected, md5_hex(b"other"));
            assert_eq!(actual, md5_hex(b"hello"));
        }
        other => panic!("预期 ChunkIntegrity，得到 {:?}", other),
    }

    // 临时文件保留（由编排方删除），且没有写入任何字节
    assert_eq!(std::fs::metadata(&temp_path).unwrap().len(), 0);
    assert!(!final_path.exists());
}

#[tokio::test]
async fn whole_file_mismatch_keeps_final_name_free() {
    let dir = tempfile::tempdir().unwrap();
    let target = target(dir.path(), md5_hex(b"something else"));
    let temp_path = target.temp_path();
    let final_path = target.final_path();

    let mut writer = spawn_chunk_writer(target);
    writer.send(queued(0, b"hello", false)).await.unwrap();

    let err = writer.join().await.unwrap_err();
    assert!(matches!(err, TransferError::FileIntegrity { .. }));
    assert!(!final_path.exists());
    assert_eq!(std::fs::read(&temp_path).unwrap(), b"hello");

    remove_temp_file(&temp_path).await;
    assert!(!temp_path.exists());
}

#[tokio::test]
async fn closing_before_the_last_chunk_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let target = target(dir.path(), md5_hex(b"hello world"));
    let final_path = target.final_path();

    let mut writer = spawn_chunk_writer(target);
    writer.send(queued(0, b"hello", true)).await.unwrap();

    let err = writer.join().await.unwrap_err();
    assert!(matches!(err, TransferError::StreamClosed { received: 1 }));
    assert!(!final_path.exists());
}

#[tokio::test]
async fn invalid_base64_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let target = target(dir.path(), md5_hex(b""));

    let chunk = QueuedChunk::new(
        3,
        FileChunk {
            data: "不是 base64".to_string(),
            chunk_hex_digest: md5_hex(b""),
            has_next: false,
        },
    );

    let mut writer = spawn_chunk_writer(target);
    writer.send(chunk).await.unwrap();

    let err = writer.join().await.unwrap_err();
    assert!(matches!(err, TransferError::ChunkDecode { chunk_num: 3, .. }));
}

#[tokio::test]
async fn uppercase_digests_are_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let target = target(dir.path(), md5_hex(b"hello").to_uppercase());
    let final_path = target.final_path();

    let chunk = QueuedChunk::new(
        0,
        FileChunk {
            data: b64(b"hello"),
            chunk_hex_digest: md5_hex(b"hello").to_uppercase(),
            has_next: false,
        },
    );

    let mut writer = spawn_chunk_writer(target);
    writer.send(chunk).await.unwrap();

    assert_eq!(writer.join().await.unwrap(), final_path);
}

#[tokio::test]
async fn send_fails_once_the_writer_has_exited() {
    let dir = tempfile::tempdir().unwrap();
    let target = target(dir.path(), md5_hex(b"hello"));

    let mut writer = spawn_chunk_writer(target);
    writer.send(queued(0, b"hello", false)).await.unwrap();
    writer.join().await.unwrap();

    assert!(writer.is_finished());
    let rejected = writer.send(queued(1, b"late", false)).await.unwrap_err();
    assert_eq!(rejected.chunk_num(), 1);
    assert!(matches!(writer.join().await, Err(TransferError::WriterExited)));
}

#[tokio::test(flavor = "current_thread")]
async fn full_queue_blocks_the_producer_until_the_writer_drains() {
    let dir = tempfile::tempdir().unwrap();
    let total = QUEUE_CAPACITY + 2;
    let content = b"ab".repeat(total);
    let target = target(dir.path(), md5_hex(&content));
    let final_path = target.final_path();

    let mut writer = spawn_chunk_writer(target);

    // 单线程运行时：测试不让出执行权，写盘任务就不会开始消费
    for n in 0..QUEUE_CAPACITY as u64 {
        let sent = writer.send(queued(n, b"ab", true)).now_or_never();
        assert!(matches!(sent, Some(Ok(()))), "队列未满时分片 {} 应立即入队", n);
    }

    {
        let mut blocked = pin!(writer.send(queued(QUEUE_CAPACITY as u64, b"ab", true)));
        assert!(
            blocked.as_mut().now_or_never().is_none(),
            "队列已满时入队应等待写盘任务"
        );

        // 让出执行权后写盘任务开始消费，等待中的入队随之完成
        blocked.await.unwrap();
    }
    writer
        .send(queued(QUEUE_CAPACITY as u64 + 1, b"ab", false))
        .await
        .unwrap();

    assert_eq!(writer.join().await.unwrap(), final_path);
    assert_eq!(std::fs::read(&final_path).unwrap(), content);
}

#[test]
fn temp_name_is_stable_and_hidden() {
    let name = temp_file_name("report.bin");
    assert_eq!(name, temp_file_name("report.bin"));
    assert_ne!(name, temp_file_name("report.bin.bak"));
    assert!(name.starts_with('.'));
    assert!(name.ends_with(".part"));
    assert_eq!(name.len(), 1 + 64 + ".part".len());
}

#[test]
fn temp_names_never_look_like_final_names() {
    assert!(is_temp_file_name(&temp_file_name("report.bin")));
    assert!(is_temp_file_name(&temp_file_name("")));

    // 去掉前缀的摘要名是普通文件名，不属于临时文件
    let bare = temp_file_name("report.bin").trim_start_matches('.').to_string();
    assert!(!is_temp_file_name(&bare));
    assert!(!is_temp_file_name("report.bin"));
    assert!(!is_temp_file_name(".env"));
}
