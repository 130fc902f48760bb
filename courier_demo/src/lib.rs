use chrono::{TimeZone, Utc};
use courier_models::AuditInfo;

pub mod brand;
pub mod template;

fn audit(created_by: &str) -> AuditInfo {
    let created_at = Utc.with_ymd_and_hms(2024, 11, 4, 9, 30, 0).unwrap();
    AuditInfo {
        created_at,
        created_by: created_by.into(),
        updated_at: created_at,
        updated_by: created_by.into(),
    }
}
