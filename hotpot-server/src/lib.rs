//! Hotpot Server - 火锅店桌台预订服务
//!
//! # 架构概述
//!
//! A fixed pool of tables, each with a capacity, against which
//! customers book a time slot. The booking engine enforces a minimum
//! spacing between reservations on the same table; everything around
//! it is CRUD glue over an injected document store.
//!
//! # 模块结构
//!
//! ```text
//! hotpot-server/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── booking/       # 预订引擎: 视图、验证、生命周期
//! ├── db/            # 文档存储接口 + 仓储层
//! └── utils/         # 错误、日志、时间、验证工具
//! ```

pub mod api;
pub mod booking;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use booking::{BookingService, CreateError, build_table_views, validate};
pub use core::{Config, Server, ServerState};
pub use db::{DocumentStore, MemoryStore};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置环境 (dotenv + 日志)
pub fn setup_environment() {
    dotenv::dotenv().ok();
    let log_level = std::env::var("LOG_LEVEL").ok();
    init_logger_with_file(log_level.as_deref(), None);
}
