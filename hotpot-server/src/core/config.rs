use chrono_tz::Tz;

/// 服务器配置 - 预订服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | TIMEZONE | UTC (警告) | 业务时区 (IANA 名称) |
/// | MIN_GAP_HOURS | 3.0 | 同桌预订最小间隔(小时) |
/// | SEED_TABLE_COUNT | 50 | 初始化生成的桌台数 |
///
/// # 示例
///
/// ```ignore
/// TIMEZONE=Asia/Ho_Chi_Minh HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 业务时区 - 日期相关操作 (date sweep, datetime-local 输入)
    /// 全部使用此时区，绝不使用系统默认
    pub timezone: Tz,
    /// 同一桌台两个预订之间的最小间隔(小时)
    pub min_gap_hours: f64,
    /// POST /api/init 生成的桌台数量
    pub seed_table_count: u32,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值。`TIMEZONE` 缺失时 fallback 到
    /// UTC 并打印警告 — 时区影响按日期批量删除的边界，绝不静默选择。
    pub fn from_env() -> Self {
        let timezone = match std::env::var("TIMEZONE") {
            Ok(name) => match name.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    tracing::warn!(
                        "TIMEZONE '{}' is not a valid IANA zone name, falling back to UTC",
                        name
                    );
                    chrono_tz::UTC
                }
            },
            Err(_) => {
                tracing::warn!(
                    "TIMEZONE not set, date operations fall back to UTC; \
                     set TIMEZONE to the restaurant's zone to avoid \
                     off-by-one-day sweeps near midnight"
                );
                chrono_tz::UTC
            }
        };

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            timezone,
            min_gap_hours: std::env::var("MIN_GAP_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3.0),
            seed_table_count: std::env::var("SEED_TABLE_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 3000,
            environment: "development".into(),
            timezone: chrono_tz::UTC,
            min_gap_hours: 3.0,
            seed_table_count: 50,
        }
    }
}
