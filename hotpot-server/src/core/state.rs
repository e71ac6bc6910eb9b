use std::sync::Arc;

use crate::booking::BookingService;
use crate::core::Config;
use crate::db::{DocumentStore, MemoryStore};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，所有权成本极低。The store handle is injected
/// here and flows down explicitly; nothing in the crate reads an
/// ambient database, so tests substitute a fresh [`MemoryStore`]
/// per case.
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | store | 文档存储 |
/// | booking | 预订引擎 (含每桌串行化锁) |
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub store: Arc<dyn DocumentStore>,
    pub booking: Arc<BookingService>,
}

impl ServerState {
    /// Build state over an injected store backend
    pub fn new(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        let booking = Arc::new(BookingService::new(
            store.clone(),
            config.timezone,
            config.min_gap_hours,
        ));
        Self {
            config: Arc::new(config),
            store,
            booking,
        }
    }

    /// Build state over the built-in in-memory store
    pub fn in_memory(config: Config) -> Self {
        Self::new(config, Arc::new(MemoryStore::new()))
    }
}
