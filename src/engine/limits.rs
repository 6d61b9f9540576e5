// ==========================================
// 马厩值班排班系统 - 班次上限引擎
// ==========================================
// 依据: Roster_Engine_Specs_v0.2.md - 5. Limit Enforcer
// 红线: 上限约束优先于积分公平 —— 达限人员不进候选集
// 注: min_shifts_* 字段不参与阻断判定(仅作数据保留)
// ==========================================

use crate::engine::tracking::MemberTrackingState;
use chrono::NaiveDate;

// ==========================================
// LimitEnforcer - 班次上限引擎
// ==========================================
pub struct LimitEnforcer {
    // 无状态引擎,不需要注入依赖
}

impl LimitEnforcer {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 判断人员对某日期的班次是否已达上限
    ///
    /// 规则:
    /// 1) 设置了每周上限且该日期所在 ISO 周计数已达上限 → 达限
    /// 2) 设置了每月上限且该日期所在自然月计数已达上限 → 达限
    ///
    /// # 参数
    /// - `state`: 人员运行状态
    /// - `shift_date`: 班次自身日期(分桶依据,与墙钟无关)
    ///
    /// # 返回
    /// true 表示已达上限,不可再指派
    pub fn has_reached_limit(&self, state: &MemberTrackingState, shift_date: NaiveDate) -> bool {
        self.check(state, shift_date).0
    }

    /// 判断上限并输出原因
    ///
    /// # 返回
    /// (是否达限, 达限原因)
    pub fn check(
        &self,
        state: &MemberTrackingState,
        shift_date: NaiveDate,
    ) -> (bool, Option<String>) {
        if let Some(max_week) = state.limits.max_shifts_per_week {
            let in_week = state.shifts_in_week(shift_date);
            if in_week >= max_week {
                return (
                    true,
                    Some(format!(
                        "WEEKLY_LIMIT_REACHED: {} >= {}",
                        in_week, max_week
                    )),
                );
            }
        }

        if let Some(max_month) = state.limits.max_shifts_per_month {
            let in_month = state.shifts_in_month(shift_date);
            if in_month >= max_month {
                return (
                    true,
                    Some(format!(
                        "MONTHLY_LIMIT_REACHED: {} >= {}",
                        in_month, max_month
                    )),
                );
            }
        }

        (false, None)
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for LimitEnforcer {
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
    use crate::domain::{Member, MemberLimits};
    use crate::engine::tracking::MemberTrackingState;

    fn create_test_state(limits: MemberLimits) -> MemberTrackingState {
        let member = Member {
            member_id: "M001".to_string(),
            display_name: "李四".to_string(),
            email: "lisi@example.com".to_string(),
            availability: vec![],
            preferred_times: vec![],
            limits,
        };
        MemberTrackingState::from_member(&member, 0)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_limits_never_capped() {
        let mut state = create_test_state(MemberLimits::unlimited());
        let enforcer = LimitEnforcer::new();
        let d = date(2025, 6, 2);

        for _ in 0..20 {
            state.record_assignment(5, d);
        }
        assert!(!enforcer.has_reached_limit(&state, d));
    }

    #[test]
    fn test_weekly_limit_blocks_same_week() {
        let mut state = create_test_state(MemberLimits {
            max_shifts_per_week: Some(1),
            ..MemberLimits::default()
        });
        let enforcer = LimitEnforcer::new();

        // 2025-06-02 与 2025-06-04 同属一周
        state.record_assignment(5, date(2025, 6, 2));

        let (capped, reason) = enforcer.check(&state, date(2025, 6, 4));
        assert!(capped);
        assert!(reason.unwrap().contains("WEEKLY_LIMIT_REACHED"));
    }

    #[test]
    fn test_weekly_limit_resets_next_week() {
        let mut state = create_test_state(MemberLimits {
            max_shifts_per_week: Some(1),
            ..MemberLimits::default()
        });
        let enforcer = LimitEnforcer::new();

        state.record_assignment(5, date(2025, 6, 2));

        // 下一周不受本周计数影响
        assert!(!enforcer.has_reached_limit(&state, date(2025, 6, 9)));
    }

    #[test]
    fn test_monthly_limit_blocks_same_month() {
        let mut state = create_test_state(MemberLimits {
            max_shifts_per_month: Some(2),
            ..MemberLimits::default()
        });
        let enforcer = LimitEnforcer::new();

        state.record_assignment(5, date(2025, 6, 2));
        state.record_assignment(5, date(2025, 6, 20));

        let (capped, reason) = enforcer.check(&state, date(2025, 6, 25));
        assert!(capped);
        assert!(reason.unwrap().contains("MONTHLY_LIMIT_REACHED"));
        // 次月不受影响
        assert!(!enforcer.has_reached_limit(&state, date(2025, 7, 1)));
    }

    #[test]
    fn test_min_limits_never_consulted() {
        let state = create_test_state(MemberLimits {
            min_shifts_per_week: Some(3),
            min_shifts_per_month: Some(10),
            ..MemberLimits::default()
        });
        let enforcer = LimitEnforcer::new();

        // 下限字段不参与阻断
        assert!(!enforcer.has_reached_limit(&state, date(2025, 6, 2)));
    }
}
