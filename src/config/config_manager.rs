// ==========================================
// 马厩值班排班系统 - 静态配置实现
// ==========================================
// 职责: 以内存常量形式提供引擎配置
// 注: 配置持久化与多级覆写由外部系统负责,此处只承载运行值
// ==========================================

use crate::config::assign_config_trait::AssignConfigReader;
use async_trait::async_trait;
use std::error::Error;

/// 历史积分记忆窗口默认值(天)
pub const DEFAULT_MEMORY_HORIZON_DAYS: i64 = 90;

// ==========================================
// StaticAssignConfig - 静态配置
// ==========================================
#[derive(Debug, Clone)]
pub struct StaticAssignConfig {
    memory_horizon_days: i64,
}

impl StaticAssignConfig {
    /// 创建自定义窗口的配置
    pub fn new(memory_horizon_days: i64) -> Self {
        Self {
            memory_horizon_days,
        }
    }
}

impl Default for StaticAssignConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_HORIZON_DAYS)
    }
}

#[async_trait]
impl AssignConfigReader for StaticAssignConfig {
    async fn get_memory_horizon_days(&self) -> Result<i64, Box<dyn Error>> {
        Ok(self.memory_horizon_days)
    }
}
