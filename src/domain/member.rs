// ==========================================
// 马厩值班排班系统 - 值班人员领域模型
// ==========================================
// 依据: Roster_Engine_Specs_v0.2.md - member 实体
// 红线: 人员档案由外部成员目录维护,引擎层只读
// ==========================================

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

// ==========================================
// AvailabilityRestriction - 不可用时段
// ==========================================
// 语义: 命中该时段的班次绝不可指派给本人
// 区间: [start, end) 左闭右开
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRestriction {
    pub weekday: Weekday,     // 每周的星期几
    pub start: NaiveTime,     // 时段开始（含）
    pub end: NaiveTime,       // 时段结束（不含）
}

impl AvailabilityRestriction {
    /// 判断给定开始时间是否落在本不可用时段内
    pub fn covers(&self, weekday: Weekday, start_time: NaiveTime) -> bool {
        self.weekday == weekday && start_time >= self.start && start_time < self.end
    }
}

// ==========================================
// TimePreference - 偏好时段
// ==========================================
// 用途: 仅作展示参考,引擎不做任何强制
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePreference {
    pub weekday: Option<Weekday>,   // 偏好的星期几
    pub start: Option<NaiveTime>,   // 偏好开始时间
    pub end: Option<NaiveTime>,     // 偏好结束时间
}

// ==========================================
// MemberLimits - 个人班次上下限
// ==========================================
// 注: min_* 仅作数据保留,阻断判定只看 max_*
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberLimits {
    pub max_shifts_per_week: Option<u32>,  // 每周班次上限
    pub min_shifts_per_week: Option<u32>,  // 每周班次下限（数据保留）
    pub max_shifts_per_month: Option<u32>, // 每月班次上限
    pub min_shifts_per_month: Option<u32>, // 每月班次下限（数据保留）
}

impl MemberLimits {
    /// 无任何上限约束
    pub fn unlimited() -> Self {
        Self::default()
    }
}

// ==========================================
// Member - 值班人员
// ==========================================
// 用途: 成员目录读入,引擎层只读
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    // ===== 主键 =====
    pub member_id: String,    // 人员唯一标识

    // ===== 基础信息 =====
    pub display_name: String, // 显示名称
    pub email: String,        // 邮箱

    // ===== 可用性 =====
    pub availability: Vec<AvailabilityRestriction>, // 不可用时段列表（有序）
    pub preferred_times: Vec<TimePreference>,       // 偏好时段（仅参考，不强制）

    // ===== 班次限制 =====
    pub limits: MemberLimits, // 个人班次上下限
}

impl Member {
    /// 判断是否声明了不可用时段
    pub fn has_availability_restrictions(&self) -> bool {
        !self.availability.is_empty()
    }
}
