/// 内部导出的模块
mod internal;


/// 宿主配置：服务端地址、超时、重试次数、接收目录
pub mod config {
    use crate::internal;
    pub use internal::config::structs::client_config::{
        DEFAULT_INCOMING_DIR, DEFAULT_RETRIES_NUMBER, DEFAULT_SERVER_URL,
        DEFAULT_TIME_OUT_MS,
    };
    pub use internal::config::structs::{ClientConfig, ConfigError};
}

pub mod session {
    use crate::internal;
    pub use internal::session::structs::{SessionError, TransferSession};
}

/// 对外提供基础请求能力，不限制死在传输流程中，以防有人自己要用
pub mod http {
    pub mod functions {
        use crate::internal;
        pub use internal::http::functions::*;
    }

    pub mod structs {
        use crate::internal;
        pub use internal::http::structs::*;
        pub use internal::http::structs::guarded_buffer::DEFAULT_START_CAPACITY;
    }
}

pub mod transfer {
    use crate::internal;
    // 结构体模型
    pub use internal::transfer::structs::*;
    // 接口与常量
    pub use internal::transfer::orchestrator::{
        CHUNK_END_POINT, CHUNK_MAX_BYTES, CHUNK_NUM_PARAM, FILES_END_POINT,
        FILES_MAX_BYTES, FILE_PARAM,
    };
    pub use internal::transfer::traits::transfer_hook::{HookAbort, TransferHook};
}
