// ==========================================
// 马厩值班排班系统 - 可用性过滤引擎
// ==========================================
// 依据: Roster_Engine_Specs_v0.2.md - 2. Availability Filter
// 红线: 命中不可用时段的人员绝不进入候选集
// ==========================================
// 职责: (人员, 班次) → 是否可指派
// 注: 班次时间缺失时按"放行"处理(容忍脏数据,不因数据质量拒排)
// ==========================================

use crate::domain::{Member, Shift};

// ==========================================
// AvailabilityFilter - 可用性过滤引擎
// ==========================================
pub struct AvailabilityFilter {
    // 无状态引擎,不需要注入依赖
}

impl AvailabilityFilter {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 判断人员对某班次是否可用
    ///
    /// 规则:
    /// 1) 未声明不可用时段 → 可用
    /// 2) 班次开始时间落在同星期几的 [start, end) 时段内 → 不可用
    /// 3) 班次开始时间缺失 → 可用(放行)
    ///
    /// # 参数
    /// - `member`: 值班人员
    /// - `shift`: 待指派班次
    ///
    /// # 返回
    /// true 表示可指派
    pub fn is_available(&self, member: &Member, shift: &Shift) -> bool {
        self.check(member, shift).0
    }

    /// 判断可用性并输出原因
    ///
    /// # 返回
    /// (是否可用, 不可用原因)
    pub fn check(&self, member: &Member, shift: &Shift) -> (bool, Option<String>) {
        if !member.has_availability_restrictions() {
            return (true, None);
        }

        // 班次时间缺失: 无法比对时段,按放行处理
        let start_time = match shift.start_time {
            Some(t) => t,
            None => return (true, None),
        };

        let weekday = shift.weekday();
        for restriction in &member.availability {
            if restriction.covers(weekday, start_time) {
                return (
                    false,
                    Some(format!(
                        "NEVER_AVAILABLE: weekday={:?}, window=[{}, {})",
                        restriction.weekday, restriction.start, restriction.end
                    )),
                );
            }
        }

        (true, None)
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for AvailabilityFilter {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ShiftStatus;
    use crate::domain::{AvailabilityRestriction, MemberLimits};
    use chrono::{NaiveDate, NaiveTime, Weekday};

    // ==========================================
    // 测试辅助函数
    // ==========================================
    fn create_test_member(availability: Vec<AvailabilityRestriction>) -> Member {
        Member {
            member_id: "M001".to_string(),
            display_name: "张三".to_string(),
            email: "zhangsan@example.com".to_string(),
            availability,
            preferred_times: vec![],
            limits: MemberLimits::unlimited(),
        }
    }

    fn create_test_shift(date: NaiveDate, start_time: Option<NaiveTime>) -> Shift {
        Shift {
            shift_id: "S001".to_string(),
            schedule_id: "SCH001".to_string(),
            stable_id: "ST001".to_string(),
            date,
            start_time,
            end_time: start_time.map(|t| t + chrono::Duration::hours(2)),
            base_points: 5,
            status: ShiftStatus::Unassigned,
            assigned_to: None,
            assigned_member_name: None,
            assigned_member_email: None,
        }
    }

    fn restriction(weekday: Weekday, start_h: u32, end_h: u32) -> AvailabilityRestriction {
        AvailabilityRestriction {
            weekday,
            start: NaiveTime::from_hms_opt(start_h, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(end_h, 0, 0).unwrap(),
        }
    }

    // 2025-06-02 是周一
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    // ==========================================
    // 测试用例
    // ==========================================

    #[test]
    fn test_no_restrictions_always_available() {
        let filter = AvailabilityFilter::new();
        let member = create_test_member(vec![]);
        let shift = create_test_shift(monday(), NaiveTime::from_hms_opt(8, 0, 0));

        assert!(filter.is_available(&member, &shift));
    }

    #[test]
    fn test_restriction_blocks_matching_window() {
        let filter = AvailabilityFilter::new();
        let member = create_test_member(vec![restriction(Weekday::Mon, 8, 12)]);
        let shift = create_test_shift(monday(), NaiveTime::from_hms_opt(9, 0, 0));

        let (available, reason) = filter.check(&member, &shift);
        assert!(!available);
        assert!(reason.unwrap().contains("NEVER_AVAILABLE"));
    }

    #[test]
    fn test_window_start_inclusive() {
        let filter = AvailabilityFilter::new();
        let member = create_test_member(vec![restriction(Weekday::Mon, 8, 12)]);
        let shift = create_test_shift(monday(), NaiveTime::from_hms_opt(8, 0, 0));

        assert!(!filter.is_available(&member, &shift));
    }

    #[test]
    fn test_window_end_exclusive() {
        let filter = AvailabilityFilter::new();
        let member = create_test_member(vec![restriction(Weekday::Mon, 8, 12)]);
        let shift = create_test_shift(monday(), NaiveTime::from_hms_opt(12, 0, 0));

        assert!(filter.is_available(&member, &shift));
    }

    #[test]
    fn test_other_weekday_not_blocked() {
        let filter = AvailabilityFilter::new();
        let member = create_test_member(vec![restriction(Weekday::Tue, 8, 12)]);
        let shift = create_test_shift(monday(), NaiveTime::from_hms_opt(9, 0, 0));

        assert!(filter.is_available(&member, &shift));
    }

    #[test]
    fn test_missing_start_time_fails_open() {
        let filter = AvailabilityFilter::new();
        // 全天候不可用的周一限制
        let member = create_test_member(vec![restriction(Weekday::Mon, 0, 23)]);
        let shift = create_test_shift(monday(), None);

        // 时间缺失: 放行
        assert!(filter.is_available(&member, &shift));
    }
}
