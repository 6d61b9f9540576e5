// ==========================================
// 马厩值班排班系统 - 公平指派引擎
// ==========================================
// 依据: Roster_Engine_Specs_v0.2.md - 6. Fairness Assigner
// 红线: 单遍贪心,不回溯不换班;已指派班次绝不改派
// 红线: 平局按人员传入顺序裁决,结果必须可复现
// ==========================================
// 职责: 将排期内待指派班次逐个指派给累计积分最低的合格人员
// 输入: 排期 + 班次列表 + 人员列表 + 历史积分
// 输出: 指派数量 + 改写后的班次 + 跳过记录 + 人员状态
// ==========================================

use crate::domain::{Member, Schedule, Shift, ShiftStatus};
use crate::engine::availability::AvailabilityFilter;
use crate::engine::holiday::HolidayWeighter;
use crate::engine::limits::LimitEnforcer;
use crate::engine::tracking::{MemberTrackingState, TrackingContext};
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, info, instrument};
use uuid::Uuid;

// ==========================================
// SkippedShift - 跳过记录
// ==========================================
// 无合格候选人的班次保持 UNASSIGNED,本结构承载原因
#[derive(Debug, Clone)]
pub struct SkippedShift {
    pub shift_id: String,
    pub date: NaiveDate,
    pub reason: String,
}

// ==========================================
// AssignmentOutcome - 指派结果
// ==========================================
#[derive(Debug, Clone)]
pub struct AssignmentOutcome {
    pub run_id: Uuid,                            // 本次运行标识
    pub assigned_count: usize,                   // 本次新指派的班次数
    pub updated_shifts: Vec<Shift>,              // 被改写的班次(待持久化)
    pub skipped: Vec<SkippedShift>,              // 无候选人而跳过的班次
    pub member_states: Vec<MemberTrackingState>, // 运行结束时的人员状态(传入顺序)
}

// ==========================================
// FairnessAssigner - 公平指派引擎
// ==========================================
pub struct FairnessAssigner {
    availability: AvailabilityFilter,
    limits: LimitEnforcer,
    weighter: HolidayWeighter,
}

impl FairnessAssigner {
    /// 创建新的 FairnessAssigner 实例
    ///
    /// # 参数
    /// - weighter: 节假日加权引擎
    pub fn new(weighter: HolidayWeighter) -> Self {
        Self {
            availability: AvailabilityFilter::new(),
            limits: LimitEnforcer::new(),
            weighter,
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行单遍指派
    ///
    /// 流程 (依据 Roster_Engine_Specs 6.2):
    /// 1) 按人员传入顺序构建运行状态,装载历史积分快照
    /// 2) 回放排期内既有指派 —— 部分已填充的排期同样校正积分基线
    /// 3) 待指派班次按日期升序逐个处理:
    ///    - 候选集 = 可用 且 未达上限 的人员
    ///    - 候选集为空: 班次保持待指派并记录原因(非错误)
    ///    - 否则指派给累计积分(历史+回放+本次)最低者,平局取先传入者
    /// 4) 指派即更新人员状态,周/月计数按班次自身日期分桶
    ///
    /// # 参数
    /// - `schedule`: 目标排期
    /// - `shifts`: 排期内全部班次
    /// - `members`: 候选人员(顺序即平局裁决顺序)
    /// - `historical_points`: memberId → 历史积分
    ///
    /// # 返回
    /// 指派结果(含改写后的班次副本,原列表不被修改)
    #[instrument(skip(self, shifts, members, historical_points), fields(
        schedule_id = %schedule.schedule_id,
        shifts_count = shifts.len(),
        members_count = members.len()
    ))]
    pub fn run_assignment(
        &self,
        schedule: &Schedule,
        shifts: &[Shift],
        members: &[Member],
        historical_points: &HashMap<String, i64>,
    ) -> AssignmentOutcome {
        let run_id = Uuid::new_v4();

        // ==========================================
        // 步骤1: 构建运行状态
        // ==========================================
        let mut ctx = TrackingContext::new(members, historical_points);

        // ==========================================
        // 步骤2: 回放既有指派
        // ==========================================
        let mut replayed = 0_usize;
        for shift in shifts.iter().filter(|s| s.is_assigned()) {
            if let Some(assignee) = &shift.assigned_to {
                if let Some(idx) = ctx.index_of(assignee) {
                    let weighted = self.weighter.weighted_points(shift.base_points, shift.date);
                    ctx.replay_existing_assignment(idx, weighted, shift.date);
                    replayed += 1;
                }
            }
        }

        info!(
            run_id = %run_id,
            replayed_count = replayed,
            "运行状态初始化完成, 开始主循环"
        );

        // ==========================================
        // 步骤3: 主循环 —— 待指派班次按日期升序
        // ==========================================
        // 稳定排序: 同日期班次保持传入顺序
        let mut pending: Vec<&Shift> = shifts.iter().filter(|s| s.is_unassigned()).collect();
        pending.sort_by_key(|s| s.date);

        let mut updated_shifts: Vec<Shift> = Vec::new();
        let mut skipped: Vec<SkippedShift> = Vec::new();

        for shift in pending {
            match self.select_candidate(members, &ctx, shift) {
                Some(idx) => {
                    let weighted = self.weighter.weighted_points(shift.base_points, shift.date);

                    // 改写班次副本,原班次列表不动
                    let mut assigned = shift.clone();
                    assigned.status = ShiftStatus::Assigned;
                    assigned.assigned_to = Some(ctx.state(idx).member_id.clone());
                    assigned.assigned_member_name = Some(ctx.state(idx).display_name.clone());
                    assigned.assigned_member_email = Some(ctx.state(idx).email.clone());

                    debug!(
                        shift_id = %shift.shift_id,
                        date = %shift.date,
                        member_id = %ctx.state(idx).member_id,
                        weighted_points = weighted,
                        "班次指派完成"
                    );

                    ctx.record_assignment(idx, weighted, shift.date);
                    updated_shifts.push(assigned);
                }
                None => {
                    let reason = self.build_skip_reason(members, &ctx, shift);
                    debug!(
                        shift_id = %shift.shift_id,
                        date = %shift.date,
                        reason = %reason,
                        "班次无合格候选人, 保持待指派"
                    );
                    skipped.push(SkippedShift {
                        shift_id: shift.shift_id.clone(),
                        date: shift.date,
                        reason,
                    });
                }
            }
        }

        let assigned_count = updated_shifts.len();
        info!(
            run_id = %run_id,
            assigned_count,
            skipped_count = skipped.len(),
            "指派主循环完成"
        );

        AssignmentOutcome {
            run_id,
            assigned_count,
            updated_shifts,
            skipped,
            member_states: ctx.into_states(),
        }
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    /// 选出累计积分最低的合格人员
    ///
    /// 严格小于比较 + 顺序迭代 ⇒ 平局时先传入者胜出
    fn select_candidate(
        &self,
        members: &[Member],
        ctx: &TrackingContext,
        shift: &Shift,
    ) -> Option<usize> {
        let mut best: Option<(usize, i64)> = None;

        for (idx, member) in members.iter().enumerate() {
            if !self.availability.is_available(member, shift) {
                continue;
            }
            let state = ctx.state(idx);
            if self.limits.has_reached_limit(state, shift.date) {
                continue;
            }

            let total = state.total_points();
            match best {
                Some((_, best_total)) if total >= best_total => {}
                _ => best = Some((idx, total)),
            }
        }

        best.map(|(idx, _)| idx)
    }

    /// 生成跳过原因(候选集画像,可解释性)
    fn build_skip_reason(
        &self,
        members: &[Member],
        ctx: &TrackingContext,
        shift: &Shift,
    ) -> String {
        let mut unavailable = 0_usize;
        let mut capped = 0_usize;

        for (idx, member) in members.iter().enumerate() {
            if !self.availability.is_available(member, shift) {
                unavailable += 1;
            } else if self.limits.has_reached_limit(ctx.state(idx), shift.date) {
                capped += 1;
            }
        }

        format!(
            "NO_ELIGIBLE_MEMBER: members={}, unavailable={}, capped={}",
            members.len(),
            unavailable,
            capped
        )
    }
}
