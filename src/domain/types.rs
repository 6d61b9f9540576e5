// ==========================================
// 马厩值班排班系统 - 领域类型定义
// ==========================================
// 依据: Roster_Engine_Specs_v0.2.md - 0.2 状态体系
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 班次状态 (Shift Status)
// ==========================================
// 红线: 引擎只做 UNASSIGNED → ASSIGNED 的单向迁移
// 序列化格式: SCREAMING_SNAKE_CASE (与后端存储一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftStatus {
    Unassigned, // 待指派
    Assigned,   // 已指派
    Completed,  // 已完成
    Cancelled,  // 已取消
    Missed,     // 缺勤
}

impl fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftStatus::Unassigned => write!(f, "UNASSIGNED"),
            ShiftStatus::Assigned => write!(f, "ASSIGNED"),
            ShiftStatus::Completed => write!(f, "COMPLETED"),
            ShiftStatus::Cancelled => write!(f, "CANCELLED"),
            ShiftStatus::Missed => write!(f, "MISSED"),
        }
    }
}

// ==========================================
// 排期状态 (Schedule Status)
// ==========================================
// 历史积分只统计 PUBLISHED 排期
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleStatus {
    Draft,     // 草稿
    Published, // 已发布
    Archived,  // 已归档
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleStatus::Draft => write!(f, "DRAFT"),
            ScheduleStatus::Published => write!(f, "PUBLISHED"),
            ScheduleStatus::Archived => write!(f, "ARCHIVED"),
        }
    }
}

impl ScheduleStatus {
    /// 转换为存储层字符串
    pub fn to_store_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Draft => "DRAFT",
            ScheduleStatus::Published => "PUBLISHED",
            ScheduleStatus::Archived => "ARCHIVED",
        }
    }
}
