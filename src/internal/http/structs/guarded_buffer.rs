use super::fetch_error::FetchError;

/// 默认初始容量（1KB）
pub const DEFAULT_START_CAPACITY: usize = 1024;

/// 限长缓冲：容量按倍数扩张，累计字节数一旦会超过上限立即报错。
///
/// 判断只看累计长度，与底层传输把数据拆成多少次读取无关。
#[derive(Debug)]
pub struct GuardedBuffer {
    buf: Vec<u8>,
    max_bytes: usize,
}

impl GuardedBuffer {
    pub fn new(max_bytes: usize) -> Self {
        Self::with_start_capacity(DEFAULT_START_CAPACITY.min(max_bytes), max_bytes)
    }

    pub fn with_start_capacity(start_capacity: usize, max_bytes: usize) -> Self {
        Self {
            buf: Vec::with_capacity(start_capacity),
            max_bytes,
        }
    }

    /// 追加一段数据；超过上限时返回 [`FetchError::ResponseTooLarge`]，已缓冲内容保持不变。
    pub fn extend(&mut self, part: &[u8]) -> Result<(), FetchError> {
        let needed = self.buf.len() + part.len();
        if needed > self.max_bytes {
            return Err(FetchError::ResponseTooLarge {
                limit: self.max_bytes,
            });
        }

        if needed > self.buf.capacity() {
            let mut capacity = self.buf.capacity().max(1);
            while capacity < needed {
                capacity = capacity.saturating_mul(2);
            }
            self.buf.reserve_exact(capacity - self.buf.len());
        }

        self.buf.extend_from_slice(part);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}
