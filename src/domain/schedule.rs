// ==========================================
// 马厩值班排班系统 - 排期领域模型
// ==========================================
// 依据: Roster_Engine_Specs_v0.2.md - schedule 实体
// ==========================================

use crate::domain::types::ScheduleStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Schedule - 值班排期
// ==========================================
// 生命周期由外部排期系统管理,引擎层只读
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub schedule_id: String,    // 排期唯一标识
    pub stable_id: String,      // 所属马厩
    pub start_date: NaiveDate,  // 排期起始日
    pub end_date: NaiveDate,    // 排期结束日
    pub status: ScheduleStatus, // 排期状态
}

impl Schedule {
    /// 判断是否已发布
    pub fn is_published(&self) -> bool {
        self.status == ScheduleStatus::Published
    }
}
