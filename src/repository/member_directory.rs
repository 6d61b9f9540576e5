// ==========================================
// 马厩值班排班系统 - 成员目录接口
// ==========================================
// 职责: 定义引擎所需的人员读取接口(不包含实现)
// 红线: 人员档案的增删改不在引擎范围内
// ==========================================

use crate::domain::Member;
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// MemberDirectory Trait
// ==========================================
// 实现者: 外部成员管理系统的适配层
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// 查询某马厩可参与值班的人员
    ///
    /// # 参数
    /// - stable_id: 马厩ID
    ///
    /// # 返回
    /// - Vec<Member>: 含可用性限制与班次上限, 顺序即指派平局的裁决顺序
    async fn list_eligible_members(&self, stable_id: &str) -> RepositoryResult<Vec<Member>>;
}
