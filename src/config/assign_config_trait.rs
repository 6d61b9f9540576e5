// ==========================================
// 马厩值班排班系统 - 指派配置读取 Trait
// ==========================================
// 职责: 定义公平指派引擎所需的配置读取接口(不包含实现)
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use async_trait::async_trait;
use std::error::Error;

// ==========================================
// AssignConfigReader Trait
// ==========================================
// 用途: 指派引擎所需的配置读取接口
// 实现者: StaticAssignConfig(内存默认值)或外部配置源适配层
#[async_trait]
pub trait AssignConfigReader: Send + Sync {
    /// 获取历史积分记忆窗口(天)
    ///
    /// # 返回
    /// - i64: 回看窗口天数, 只有窗口内已发布排期计入历史积分
    ///
    /// # 默认值
    /// - 90
    async fn get_memory_horizon_days(&self) -> Result<i64, Box<dyn Error>>;
}
