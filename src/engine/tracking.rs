// ==========================================
// 马厩值班排班系统 - 人员运行状态追踪
// ==========================================
// 依据: Roster_Engine_Specs_v0.2.md - 3. Member Tracking Context
// 红线: historical_points 为运行起点快照,运行中绝不改写
// 红线: 状态集合必须保持传入顺序 —— 平局按此顺序裁决,
//       禁止使用迭代顺序不确定的容器承载人员序列
// ==========================================
// 职责: 承载单次运行中每名人员的积分与班次计数
// 周/月计数一律按班次自身日期所在的 ISO 周/自然月分桶,
// 与运行时的墙钟时间无关
// ==========================================

use crate::domain::{Member, MemberLimits};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 班次日期所在的 ISO 周键 (ISO年, ISO周号)
pub fn week_key(date: NaiveDate) -> (i32, u32) {
    let iso = date.iso_week();
    (iso.year(), iso.week())
}

/// 班次日期所在的自然月键 (年, 月)
pub fn month_key(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

// ==========================================
// MemberTrackingState - 人员运行状态
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberTrackingState {
    // ===== 人员快照 =====
    pub member_id: String,    // 人员ID
    pub display_name: String, // 显示名称（指派回写用）
    pub email: String,        // 邮箱（指派回写用）
    pub limits: MemberLimits, // 班次上限快照

    // ===== 积分 =====
    pub historical_points: i64, // 记忆窗口内的历史积分（运行起点快照）
    pub seeded_points: i64,     // 排期内既有指派回放的加权积分
    pub current_points: i64,    // 本次运行新指派的加权积分

    // ===== 班次计数 =====
    pub assigned_shifts: u32, // 本次运行新指派的班次数

    // 周/月计数桶: 键为班次自身日期所在周/月
    // (既有指派回放与新指派都计入,上限判定的口径一致)
    pub shifts_per_week: HashMap<(i32, u32), u32>,
    pub shifts_per_month: HashMap<(i32, u32), u32>,
}

impl MemberTrackingState {
    /// 由人员档案构建运行起点状态
    ///
    /// # 参数
    /// - member: 人员档案
    /// - historical_points: 历史积分快照(无历史为 0)
    pub fn from_member(member: &Member, historical_points: i64) -> Self {
        Self {
            member_id: member.member_id.clone(),
            display_name: member.display_name.clone(),
            email: member.email.clone(),
            limits: member.limits.clone(),
            historical_points,
            seeded_points: 0,
            current_points: 0,
            assigned_shifts: 0,
            shifts_per_week: HashMap::new(),
            shifts_per_month: HashMap::new(),
        }
    }

    /// 选人比较口径: 历史 + 回放 + 本次运行
    pub fn total_points(&self) -> i64 {
        self.historical_points + self.seeded_points + self.current_points
    }

    /// 某日期所在 ISO 周内已计入的班次数
    pub fn shifts_in_week(&self, date: NaiveDate) -> u32 {
        self.shifts_per_week.get(&week_key(date)).copied().unwrap_or(0)
    }

    /// 某日期所在自然月内已计入的班次数
    pub fn shifts_in_month(&self, date: NaiveDate) -> u32 {
        self.shifts_per_month.get(&month_key(date)).copied().unwrap_or(0)
    }

    /// 回放排期内既有指派(运行前已 ASSIGNED 的班次)
    ///
    /// 积分进 seeded_points,周/月计数桶照常累加,
    /// 不计入 assigned_shifts(那是本次运行的新增口径)
    pub fn replay_existing_assignment(&mut self, weighted_points: i64, date: NaiveDate) {
        self.seeded_points += weighted_points;
        self.bump_date_buckets(date);
    }

    /// 记录本次运行的新指派
    pub fn record_assignment(&mut self, weighted_points: i64, date: NaiveDate) {
        self.current_points += weighted_points;
        self.assigned_shifts += 1;
        self.bump_date_buckets(date);
    }

    fn bump_date_buckets(&mut self, date: NaiveDate) {
        *self.shifts_per_week.entry(week_key(date)).or_insert(0) += 1;
        *self.shifts_per_month.entry(month_key(date)).or_insert(0) += 1;
    }
}

// ==========================================
// TrackingContext - 运行状态集合
// ==========================================
// 有序 Vec 承载人员状态,迭代顺序即人员传入顺序
#[derive(Debug, Clone)]
pub struct TrackingContext {
    states: Vec<MemberTrackingState>,
    index_by_id: HashMap<String, usize>,
}

impl TrackingContext {
    /// 由人员列表与历史积分映射构建
    ///
    /// # 参数
    /// - members: 人员列表(顺序保留,平局裁决依据)
    /// - historical_points: memberId → 历史积分(缺失按 0)
    pub fn new(members: &[Member], historical_points: &HashMap<String, i64>) -> Self {
        let mut states = Vec::with_capacity(members.len());
        let mut index_by_id = HashMap::with_capacity(members.len());

        for (idx, member) in members.iter().enumerate() {
            let historical = historical_points
                .get(&member.member_id)
                .copied()
                .unwrap_or(0);
            states.push(MemberTrackingState::from_member(member, historical));
            index_by_id.insert(member.member_id.clone(), idx);
        }

        Self {
            states,
            index_by_id,
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// 有序状态切片(传入顺序)
    pub fn states(&self) -> &[MemberTrackingState] {
        &self.states
    }

    /// 按下标取状态
    pub fn state(&self, idx: usize) -> &MemberTrackingState {
        &self.states[idx]
    }

    /// 人员ID → 下标
    pub fn index_of(&self, member_id: &str) -> Option<usize> {
        self.index_by_id.get(member_id).copied()
    }

    /// 回放既有指派到指定人员
    pub fn replay_existing_assignment(&mut self, idx: usize, weighted_points: i64, date: NaiveDate) {
        self.states[idx].replay_existing_assignment(weighted_points, date);
    }

    /// 记录新指派到指定人员
    pub fn record_assignment(&mut self, idx: usize, weighted_points: i64, date: NaiveDate) {
        self.states[idx].record_assignment(weighted_points, date);
    }

    /// 拆出全部状态(运行结束时移交结果)
    pub fn into_states(self) -> Vec<MemberTrackingState> {
        self.states
    }
}
