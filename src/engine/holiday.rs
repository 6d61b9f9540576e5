// ==========================================
// 马厩值班排班系统 - 节假日加权引擎
// ==========================================
// 依据: Roster_Engine_Specs_v0.2.md - 4. Holiday Weighter
// 红线: 加权只进运行统计,绝不回写 shift.base_points
// ==========================================
// 职责: 日期 → 加权积分
// 输入: base_points + date + 节假日日历
// 输出: 加权后的积分值
// ==========================================

use crate::repository::HolidayCalendar;
use chrono::NaiveDate;
use std::sync::Arc;

// ==========================================
// HolidayWeighter - 节假日加权引擎
// ==========================================
pub struct HolidayWeighter {
    calendar: Arc<dyn HolidayCalendar>,
}

impl HolidayWeighter {
    /// 创建新的 HolidayWeighter 实例
    ///
    /// # 参数
    /// - calendar: 节假日日历(由外部协作方预装载)
    pub fn new(calendar: Arc<dyn HolidayCalendar>) -> Self {
        Self { calendar }
    }

    /// 计算某日期班次的加权积分
    ///
    /// 节假日按日历系数加权(四舍五入取整),非节假日原值返回。
    ///
    /// # 参数
    /// - base_points: 班次基础积分
    /// - date: 班次日期
    ///
    /// # 返回
    /// 加权后的积分值
    pub fn weighted_points(&self, base_points: i64, date: NaiveDate) -> i64 {
        if self.calendar.is_holiday(date) {
            (base_points as f64 * self.calendar.holiday_multiplier()).round() as i64
        } else {
            base_points
        }
    }
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{FixedHolidayCalendar, NoHolidays};

    #[test]
    fn test_non_holiday_unchanged() {
        let weighter = HolidayWeighter::new(Arc::new(NoHolidays));
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

        assert_eq!(weighter.weighted_points(10, date), 10);
    }

    #[test]
    fn test_holiday_multiplied() {
        let holiday = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        let weighter =
            HolidayWeighter::new(Arc::new(FixedHolidayCalendar::new([holiday], 1.5)));

        // 10 * 1.5 = 15
        assert_eq!(weighter.weighted_points(10, holiday), 15);
    }

    #[test]
    fn test_holiday_rounding() {
        let holiday = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        let weighter =
            HolidayWeighter::new(Arc::new(FixedHolidayCalendar::new([holiday], 1.5)));

        // 5 * 1.5 = 7.5 → 8
        assert_eq!(weighter.weighted_points(5, holiday), 8);
    }

    #[test]
    fn test_non_holiday_date_on_holiday_calendar() {
        let holiday = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        let workday = NaiveDate::from_ymd_opt(2025, 10, 8).unwrap();
        let weighter =
            HolidayWeighter::new(Arc::new(FixedHolidayCalendar::new([holiday], 2.0)));

        assert_eq!(weighter.weighted_points(7, workday), 7);
    }
}
