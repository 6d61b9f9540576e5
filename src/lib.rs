// ==========================================
// 马厩值班排班系统 - 核心库
// ==========================================
// 依据: Roster_Master_Spec.md - 系统宪法
// 系统定位: 公平排班引擎 (积分驱动, 单遍贪心)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 仓储接口层 - 外部协作方
pub mod repository;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 运行参数
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ScheduleStatus, ShiftStatus};

// 领域实体
pub use domain::{
    AvailabilityRestriction, Member, MemberLimits, Schedule, Shift, ShiftAssignmentUpdate,
    TimePreference,
};

// 引擎
pub use engine::{
    AssignmentOrchestrator, AssignmentOutcome, AvailabilityFilter, FairnessAssigner,
    HistoricalPointsAggregator, HolidayWeighter, LimitEnforcer, MemberTrackingState, RunSummary,
    SkippedShift, TrackingContext,
};

// 仓储接口
pub use repository::{
    FixedHolidayCalendar, HolidayCalendar, MemberDirectory, NoHolidays, RepositoryError,
    RepositoryResult, ScheduleStore, COMMIT_BATCH_SIZE,
};

// 配置
pub use config::{AssignConfigReader, StaticAssignConfig};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "马厩值班排班系统";

// ==========================================
// 预编译检查
// ==========================================
