// ==========================================
// 马厩值班排班系统 - 历史积分聚合引擎
// ==========================================
// 依据: Roster_Engine_Specs_v0.2.md - 1. Historical Points Aggregator
// 红线: 纯读操作,不产生任何副作用
// ==========================================
// 职责: 记忆窗口内已发布排期的积分汇总
// 输入: stable_id + 候选人员ID + 窗口天数 + 基准日期
// 输出: memberId → 历史积分(无历史为 0)
// ==========================================

use crate::repository::ScheduleStore;
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, info, instrument};

// ==========================================
// HistoricalPointsAggregator - 历史积分聚合引擎
// ==========================================
pub struct HistoricalPointsAggregator {
    store: Arc<dyn ScheduleStore>,
}

impl HistoricalPointsAggregator {
    /// 创建新的 HistoricalPointsAggregator 实例
    ///
    /// # 参数
    /// - store: 排期/班次存储
    pub fn new(store: Arc<dyn ScheduleStore>) -> Self {
        Self { store }
    }

    /// 计算候选人员在记忆窗口内的历史积分
    ///
    /// 口径:
    /// - 窗口下界 threshold = today - horizon_days
    /// - 只统计 status=PUBLISHED 且 end_date >= threshold 的排期
    /// - 只统计 status=ASSIGNED 且 date >= threshold 的班次
    /// - 累加 base_points(历史积分不做节假日加权)
    /// - 候选集之外的受派人忽略;无历史的候选人记 0
    ///
    /// # 参数
    /// - stable_id: 马厩ID
    /// - member_ids: 候选人员ID列表
    /// - horizon_days: 记忆窗口天数
    /// - today: 基准日期
    ///
    /// # 返回
    /// memberId → 历史积分
    #[instrument(skip(self, member_ids), fields(stable_id = %stable_id, horizon_days))]
    pub async fn compute_historical_points(
        &self,
        stable_id: &str,
        member_ids: &[String],
        horizon_days: i64,
        today: NaiveDate,
    ) -> Result<HashMap<String, i64>, Box<dyn Error>> {
        let threshold = today - Duration::days(horizon_days);

        // 候选人员全部先记 0
        let mut points: HashMap<String, i64> = member_ids
            .iter()
            .map(|id| (id.clone(), 0_i64))
            .collect();

        // 窗口内已发布排期
        let schedules = self
            .store
            .list_published_schedules(stable_id, threshold)
            .await?;

        if schedules.is_empty() {
            info!(threshold = %threshold, "记忆窗口内无已发布排期, 历史积分全部为 0");
            return Ok(points);
        }

        let schedule_ids: Vec<String> = schedules
            .iter()
            .map(|s| s.schedule_id.clone())
            .collect();

        // 窗口内已指派班次
        let shifts = self
            .store
            .list_assigned_shifts(&schedule_ids, threshold)
            .await?;

        debug!(
            schedules_count = schedules.len(),
            shifts_count = shifts.len(),
            threshold = %threshold,
            "历史积分聚合数据装载完成"
        );

        // 按受派人累加 base_points(仅限候选集)
        for shift in &shifts {
            if let Some(assignee) = &shift.assigned_to {
                if let Some(total) = points.get_mut(assignee) {
                    *total += shift.base_points;
                }
            }
        }

        info!(
            members_count = points.len(),
            total_points = points.values().sum::<i64>(),
            "历史积分聚合完成"
        );

        Ok(points)
    }
}
