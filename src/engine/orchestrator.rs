// ==========================================
// 马厩值班排班系统 - 指派编排器
// ==========================================
// 依据: Roster_Engine_Specs_v0.2.md - 7. 指派主流程
// 用途: 协调 装载 → 纯计算 → 批量回写 三个阶段
// ==========================================
// 红线: 同一排期不允许并发运行(排期级互斥锁);
//       不同排期相互独立,可并行
// 红线: 装载失败即中止,不产生任何写入;
//       任何一批回写失败视为整次运行失败,由调用方整体重试
// ==========================================

use crate::config::AssignConfigReader;
use crate::domain::{Schedule, ShiftAssignmentUpdate};
use crate::engine::assigner::{AssignmentOutcome, FairnessAssigner};
use crate::engine::history::HistoricalPointsAggregator;
use crate::engine::holiday::HolidayWeighter;
use crate::repository::{
    HolidayCalendar, MemberDirectory, ScheduleStore, COMMIT_BATCH_SIZE,
};
use chrono::Utc;
use serde::Serialize;
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

// ==========================================
// RunSummary - 运行摘要
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub run_id: Uuid,          // 本次运行标识
    pub schedule_id: String,   // 目标排期
    pub assigned_count: usize, // 本次新指派班次数
    pub skipped_count: usize,  // 无候选人跳过的班次数
    pub committed_count: usize, // 已回写的班次数
}

impl RunSummary {
    /// 序列化为 JSON(日志/审计用)
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// ==========================================
// AssignmentOrchestrator - 指派编排器
// ==========================================
pub struct AssignmentOrchestrator<C>
where
    C: AssignConfigReader,
{
    config: Arc<C>,
    store: Arc<dyn ScheduleStore>,
    directory: Arc<dyn MemberDirectory>,
    aggregator: HistoricalPointsAggregator,
    assigner: FairnessAssigner,
    // 排期级互斥锁注册表: schedule_id → 锁
    run_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<C> AssignmentOrchestrator<C>
where
    C: AssignConfigReader,
{
    /// 创建新的编排器实例
    ///
    /// # 参数
    /// - config: 配置读取器
    /// - store: 排期/班次存储
    /// - directory: 成员目录
    /// - calendar: 节假日日历
    pub fn new(
        config: Arc<C>,
        store: Arc<dyn ScheduleStore>,
        directory: Arc<dyn MemberDirectory>,
        calendar: Arc<dyn HolidayCalendar>,
    ) -> Self {
        Self {
            aggregator: HistoricalPointsAggregator::new(store.clone()),
            assigner: FairnessAssigner::new(HolidayWeighter::new(calendar)),
            config,
            store,
            directory,
            run_locks: Mutex::new(HashMap::new()),
        }
    }

    /// 计算候选人员的历史积分(对外直接暴露)
    ///
    /// # 参数
    /// - stable_id: 马厩ID
    /// - member_ids: 候选人员ID列表
    ///
    /// # 返回
    /// memberId → 记忆窗口内历史积分
    pub async fn compute_historical_points(
        &self,
        stable_id: &str,
        member_ids: &[String],
    ) -> Result<HashMap<String, i64>, Box<dyn Error>> {
        let horizon_days = self.config.get_memory_horizon_days().await?;
        let today = Utc::now().date_naive();
        self.aggregator
            .compute_historical_points(stable_id, member_ids, horizon_days, today)
            .await
    }

    /// 执行完整指派流程(单排期)
    ///
    /// # 参数
    /// - schedule: 目标排期
    ///
    /// # 返回
    /// 运行摘要
    pub async fn execute_run(&self, schedule: &Schedule) -> Result<RunSummary, Box<dyn Error>> {
        // ==========================================
        // 步骤0: 排期级互斥
        // ==========================================
        let lock = self.schedule_lock(&schedule.schedule_id).await;
        let _guard = lock.lock().await;

        info!(
            schedule_id = %schedule.schedule_id,
            stable_id = %schedule.stable_id,
            "开始执行指派流程"
        );

        // ==========================================
        // 步骤1: 装载阶段(可挂起;失败即中止,无任何写入)
        // ==========================================
        debug!("步骤1: 装载人员与班次");

        let (members, shifts) = futures::try_join!(
            self.directory.list_eligible_members(&schedule.stable_id),
            self.store.list_shifts_for_schedule(&schedule.schedule_id),
        )?;

        let member_ids: Vec<String> = members.iter().map(|m| m.member_id.clone()).collect();
        let horizon_days = self.config.get_memory_horizon_days().await?;
        let today = Utc::now().date_naive();
        let historical_points = self
            .aggregator
            .compute_historical_points(&schedule.stable_id, &member_ids, horizon_days, today)
            .await?;

        info!(
            members_count = members.len(),
            shifts_count = shifts.len(),
            "装载阶段完成"
        );

        // ==========================================
        // 步骤2: 纯计算阶段(不挂起)
        // ==========================================
        debug!("步骤2: 执行单遍公平指派");

        let outcome = self
            .assigner
            .run_assignment(schedule, &shifts, &members, &historical_points);

        // ==========================================
        // 步骤3: 批量回写阶段(按上限分片)
        // ==========================================
        debug!("步骤3: 批量回写指派结果");

        let committed_count = self.commit_outcome(&outcome).await?;

        let summary = RunSummary {
            run_id: outcome.run_id,
            schedule_id: schedule.schedule_id.clone(),
            assigned_count: outcome.assigned_count,
            skipped_count: outcome.skipped.len(),
            committed_count,
        };

        info!(summary = %summary.to_json(), "指派流程完成");

        Ok(summary)
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    /// 取出(或创建)排期对应的互斥锁
    async fn schedule_lock(&self, schedule_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.run_locks.lock().await;
        locks
            .entry(schedule_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// 分片回写指派结果
    ///
    /// 任何一批失败立即上抛 —— 整次运行视为失败,
    /// 由调用方整体重试(重跑安全: 已指派班次不会被改派)
    async fn commit_outcome(&self, outcome: &AssignmentOutcome) -> Result<usize, Box<dyn Error>> {
        let updates: Vec<ShiftAssignmentUpdate> = outcome
            .updated_shifts
            .iter()
            .map(ShiftAssignmentUpdate::from_shift)
            .collect();

        if updates.is_empty() {
            debug!("无新指派, 跳过回写");
            return Ok(0);
        }

        for (batch_no, chunk) in updates.chunks(COMMIT_BATCH_SIZE).enumerate() {
            if let Err(err) = self.store.commit_assignments(chunk).await {
                warn!(
                    run_id = %outcome.run_id,
                    batch_no,
                    batch_size = chunk.len(),
                    error = %err,
                    "批量回写失败, 整次运行作废"
                );
                return Err(err.into());
            }
            debug!(batch_no, batch_size = chunk.len(), "批量回写完成");
        }

        Ok(updates.len())
    }
}
