// ==========================================
// 马厩值班排班系统 - 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 集成方二选一: 开发环境用 init(), 生产环境用 init_json()
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 默认日志过滤器: 本库 info, 其余 warn
const DEFAULT_FILTER: &str = "warn,stable_duty_roster=info";

fn env_filter() -> EnvFilter {
    // RUST_LOG 优先, 例如 RUST_LOG=stable_duty_roster=trace
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// 初始化人类可读格式的日志系统(开发/调试)
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器(默认: warn,stable_duty_roster=info)
///
/// # 示例
/// ```no_run
/// use stable_duty_roster::logging;
/// logging::init();
/// ```
pub fn init() {
    fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// 初始化 JSON 行格式的日志系统(生产环境, 供日志采集管道消费)
///
/// 每条日志一行 JSON, 结构化字段(schedule_id / run_id 等)原样输出
pub fn init_json() {
    fmt()
        .json()
        .with_env_filter(env_filter())
        .with_current_span(true)
        .init();
}

/// 初始化测试环境的日志系统
///
/// debug 级别 + 测试捕获输出; 重复调用安全(忽略二次初始化)
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
