// ==========================================
// 马厩值班排班系统 - 主入口
// ==========================================
// 系统定位: 公平排班引擎,以库形式被排期服务集成
// ==========================================

fn main() {
    stable_duty_roster::logging::init();

    tracing::info!("==================================================");
    tracing::info!("马厩值班排班系统 - 公平排班引擎");
    tracing::info!("系统版本: {}", stable_duty_roster::VERSION);
    tracing::info!("==================================================");

    println!("{} v{}", stable_duty_roster::APP_NAME, stable_duty_roster::VERSION);
    println!();
    println!("本引擎以库形式集成:");
    println!("use stable_duty_roster::AssignmentOrchestrator;");
    println!();
    println!("接入方需提供 ScheduleStore / MemberDirectory / HolidayCalendar 实现。");
}
