// ==========================================
// 马厩值班排班系统 - 领域模型层
// ==========================================
// 依据: Roster_Engine_Specs_v0.2.md - 主实体定义
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod member;
pub mod schedule;
pub mod shift;
pub mod types;

// 重导出核心类型
pub use member::{AvailabilityRestriction, Member, MemberLimits, TimePreference};
pub use schedule::Schedule;
pub use shift::{Shift, ShiftAssignmentUpdate};
pub use types::{ScheduleStatus, ShiftStatus};
