// ==========================================
// 马厩值班排班系统 - 班次领域模型
// ==========================================
// 依据: Roster_Engine_Specs_v0.2.md - shift 实体
// 红线: base_points 为持久字段,节假日加权只进运行统计
// ==========================================

use crate::domain::types::ShiftStatus;
use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

// ==========================================
// Shift - 值班班次
// ==========================================
// 用途: 外部排期系统创建(UNASSIGNED),引擎指派后回写
// 注: start_time/end_time 允许缺失 —— 历史导入数据存在脏值,
//     可用性过滤对缺失时间的班次按"放行"处理
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shift {
    // ===== 主键与关联 =====
    pub shift_id: String,    // 班次唯一标识
    pub schedule_id: String, // 所属排期
    pub stable_id: String,   // 所属马厩

    // ===== 时间信息 =====
    pub date: NaiveDate,                // 班次日期（星期几由此派生）
    pub start_time: Option<NaiveTime>,  // 开始时间
    pub end_time: Option<NaiveTime>,    // 结束时间

    // ===== 积分 =====
    pub base_points: i64, // 基础积分（持久值，引擎不改写）

    // ===== 指派状态 =====
    pub status: ShiftStatus,                   // 班次状态
    pub assigned_to: Option<String>,           // 被指派人员ID
    pub assigned_member_name: Option<String>,  // 被指派人员名称（快照）
    pub assigned_member_email: Option<String>, // 被指派人员邮箱（快照）
}

impl Shift {
    /// 判断是否待指派
    pub fn is_unassigned(&self) -> bool {
        self.status == ShiftStatus::Unassigned
    }

    /// 判断是否已指派
    pub fn is_assigned(&self) -> bool {
        self.status == ShiftStatus::Assigned
    }

    /// 班次日期对应的星期几
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

// ==========================================
// ShiftAssignmentUpdate - 指派回写单元
// ==========================================
// 用途: 批量提交的最小单位,由引擎产出、调用方持久化
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftAssignmentUpdate {
    pub shift_id: String,                      // 班次ID
    pub schedule_id: String,                   // 所属排期
    pub status: ShiftStatus,                   // 回写后状态（ASSIGNED）
    pub assigned_to: Option<String>,           // 被指派人员ID
    pub assigned_member_name: Option<String>,  // 被指派人员名称
    pub assigned_member_email: Option<String>, // 被指派人员邮箱
}

impl ShiftAssignmentUpdate {
    /// 由引擎改写后的班次生成回写单元
    pub fn from_shift(shift: &Shift) -> Self {
        Self {
            shift_id: shift.shift_id.clone(),
            schedule_id: shift.schedule_id.clone(),
            status: shift.status,
            assigned_to: shift.assigned_to.clone(),
            assigned_member_name: shift.assigned_member_name.clone(),
            assigned_member_email: shift.assigned_member_email.clone(),
        }
    }
}
