// ==========================================
// 马厩值班排班系统 - 排期/班次存储接口
// ==========================================
// 依据: Roster_Engine_Specs_v0.2.md - 外部协作方
// 职责: 定义引擎所需的排期/班次读取与回写接口(不包含实现)
// 红线: 引擎不直接访问后端存储,一切经由本接口
// ==========================================

use crate::domain::{Schedule, Shift, ShiftAssignmentUpdate};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;
use chrono::NaiveDate;

// ==========================================
// 批量提交上限
// ==========================================
// 后端存储的单批操作上限(观测值约 450~500),
// 以显式常量建模,提交方按此分片
pub const COMMIT_BATCH_SIZE: usize = 450;

// ==========================================
// ScheduleStore Trait
// ==========================================
// 实现者: 外部排期系统的存储适配层
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// 查询某马厩已发布的排期
    ///
    /// # 参数
    /// - stable_id: 马厩ID
    /// - since: 截止日期下界(含), 只返回 end_date >= since 的排期
    ///
    /// # 返回
    /// - Vec<Schedule>: status = PUBLISHED 的排期列表
    async fn list_published_schedules(
        &self,
        stable_id: &str,
        since: NaiveDate,
    ) -> RepositoryResult<Vec<Schedule>>;

    /// 查询多个排期内已指派的班次
    ///
    /// # 参数
    /// - schedule_ids: 排期ID集合
    /// - since: 日期下界(含), 只返回 date >= since 的班次
    ///
    /// # 返回
    /// - Vec<Shift>: status = ASSIGNED 的班次列表
    async fn list_assigned_shifts(
        &self,
        schedule_ids: &[String],
        since: NaiveDate,
    ) -> RepositoryResult<Vec<Shift>>;

    /// 查询单个排期的全部班次
    ///
    /// # 参数
    /// - schedule_id: 排期ID
    ///
    /// # 返回
    /// - Vec<Shift>: 按日期升序排列
    async fn list_shifts_for_schedule(&self, schedule_id: &str) -> RepositoryResult<Vec<Shift>>;

    /// 批量回写指派结果
    ///
    /// # 参数
    /// - updates: 回写单元列表, 单次调用不得超过 COMMIT_BATCH_SIZE
    ///
    /// # 语义
    /// - 单批原子: 要么全部落库,要么整体失败
    /// - 任何一批失败即视为整次运行失败,由调用方整体重试
    async fn commit_assignments(&self, updates: &[ShiftAssignmentUpdate]) -> RepositoryResult<()>;
}
