// ==========================================
// 马厩值班排班系统 - 配置层
// ==========================================
// 职责: 引擎运行参数的读取接口与内存实现
// ==========================================

pub mod assign_config_trait;
pub mod config_manager;

// 重导出核心配置接口
pub use assign_config_trait::AssignConfigReader;
pub use config_manager::{StaticAssignConfig, DEFAULT_MEMORY_HORIZON_DAYS};
