// ==========================================
// 马厩值班排班系统 - 仓储层错误类型
// ==========================================
// 依据: Rust 错误处理最佳实践
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 数据读取错误 =====
    #[error("记录未找到: {entity} with id={id}")]
    NotFound { entity: String, id: String },

    #[error("数据读取失败: {0}")]
    ReadError(String),

    // ===== 批量提交错误 =====
    #[error("批量提交失败: {0}")]
    CommitError(String),

    #[error("批量提交超限: 单批最多 {limit} 条, 实际 {actual} 条")]
    BatchTooLarge { limit: usize, actual: usize },

    // ===== 数据质量错误 =====
    #[error("数据验证失败: {0}")]
    ValidationError(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
