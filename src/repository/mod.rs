// ==========================================
// 马厩值班排班系统 - 仓储接口层
// ==========================================
// 职责: 定义引擎消费的外部协作方接口与错误类型
// 红线: 本层只有接口与错误,不含任何后端实现
// ==========================================

pub mod error;
pub mod holiday_calendar;
pub mod member_directory;
pub mod schedule_store;

// 重导出核心接口
pub use error::{RepositoryError, RepositoryResult};
pub use holiday_calendar::{FixedHolidayCalendar, HolidayCalendar, NoHolidays};
pub use member_directory::MemberDirectory;
pub use schedule_store::{ScheduleStore, COMMIT_BATCH_SIZE};
