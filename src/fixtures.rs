//! Demo data sets behind the read-only query surface.
//!
//! These collections are fixed at startup; the query handlers only filter
//! them. Accessors taking a filter return an empty `Vec` for an unknown
//! employee id — never an error. Entities without an employee reference
//! ignore the filter.

use crate::model::activity::ActivityData;
use crate::model::attendance::AttendanceRecord;
use crate::model::employee::Employee;
use crate::model::punch::{Punch, PunchStatus};
use crate::model::report::{DailyReport, ToolUsage};
use crate::model::task::Task;
use crate::model::tool::Tool;
use crate::model::work_area::WorkArea;
use once_cell::sync::Lazy;

const T0: &str = "2024-06-01T09:00:00.000Z";
const T1: &str = "2024-06-01T09:05:00.000Z";
const T2: &str = "2024-06-01T17:30:00.000Z";

fn matches(filter: Option<&str>, employee_id: &str) -> bool {
    filter.is_none_or(|id| id == employee_id)
}

static ATTENDANCE: Lazy<Vec<AttendanceRecord>> = Lazy::new(|| {
    vec![
        AttendanceRecord {
            record_id: "att001".to_string(),
            employee_id: "emp001".to_string(),
            check_in_time: T0.to_string(),
            check_out_time: None,
            work_area_id: "area001".to_string(),
            is_offline_entry: false,
            sync_time: None,
            created_at: T0.to_string(),
            updated_at: T0.to_string(),
        },
        AttendanceRecord {
            record_id: "att002".to_string(),
            employee_id: "emp002".to_string(),
            check_in_time: T0.to_string(),
            check_out_time: Some(T2.to_string()),
            work_area_id: "area002".to_string(),
            is_offline_entry: true,
            sync_time: Some(T2.to_string()),
            created_at: T0.to_string(),
            updated_at: T2.to_string(),
        },
    ]
});

static ACTIVITY: Lazy<Vec<ActivityData>> = Lazy::new(|| {
    vec![
        ActivityData {
            activity_id: "act001".to_string(),
            record_id: "att001".to_string(),
            employee_id: "emp001".to_string(),
            record_time: T1.to_string(),
            latitude: 35.6895,
            longitude: 139.6917,
            altitude: Some(10.0),
            heading: Some(90.0),
            acceleration_x: Some(0.1),
            acceleration_y: Some(0.2),
            acceleration_z: Some(0.3),
            activity_type: "walking".to_string(),
            is_synced: true,
            created_at: T1.to_string(),
        },
        ActivityData {
            activity_id: "act002".to_string(),
            record_id: "att002".to_string(),
            employee_id: "emp002".to_string(),
            record_time: T1.to_string(),
            latitude: 35.6905,
            longitude: 139.6930,
            altitude: None,
            heading: None,
            acceleration_x: None,
            acceleration_y: None,
            acceleration_z: None,
            activity_type: "driving".to_string(),
            is_synced: false,
            created_at: T1.to_string(),
        },
    ]
});

static EMPLOYEES: Lazy<Vec<Employee>> = Lazy::new(|| {
    vec![
        Employee {
            employee_id: "emp001".to_string(),
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone_number: Some("123-456-7890".to_string()),
            assigned_area: Some("area001".to_string()),
            is_active: true,
            created_at: T0.to_string(),
            updated_at: T0.to_string(),
        },
        Employee {
            employee_id: "emp002".to_string(),
            name: "Taro Yamada".to_string(),
            email: "taro.yamada@example.com".to_string(),
            phone_number: None,
            assigned_area: Some("area002".to_string()),
            is_active: true,
            created_at: T0.to_string(),
            updated_at: T0.to_string(),
        },
    ]
});

static WORK_AREAS: Lazy<Vec<WorkArea>> = Lazy::new(|| {
    vec![WorkArea {
        area_id: "area001".to_string(),
        area_name: "Main Office".to_string(),
        coordinates: vec![[35.689, 139.691], [35.690, 139.692], [35.691, 139.690]],
        description: Some("Main office building area".to_string()),
        created_at: T0.to_string(),
        updated_at: T0.to_string(),
    }]
});

static GEOFENCES: Lazy<Vec<crate::model::geofence::CircularGeoFence>> = Lazy::new(|| {
    use crate::model::geofence::{CircularGeoFence, LatLng};
    vec![CircularGeoFence {
        id: "area002".to_string(),
        name: "Yard Gate".to_string(),
        center: LatLng { lat: 35.6890, lng: 139.6920 },
        radius: 75.0,
        description: "Equipment yard entrance".to_string(),
        color: "#3388ff".to_string(),
    }]
});

static PUNCHES: Lazy<Vec<Punch>> = Lazy::new(|| {
    vec![
        Punch {
            punch_id: "punch001".to_string(),
            employee_id: "emp001".to_string(),
            status: PunchStatus::PunchIn,
            punch_time: T0.to_string(),
            work_area_id: "area001".to_string(),
        },
        Punch {
            punch_id: "punch002".to_string(),
            employee_id: "emp002".to_string(),
            status: PunchStatus::PunchOut,
            punch_time: T2.to_string(),
            work_area_id: "area002".to_string(),
        },
    ]
});

static TASKS: Lazy<Vec<Task>> = Lazy::new(|| {
    vec![Task {
        task_id: "task001".to_string(),
        name: "Perimeter survey".to_string(),
        assigned_employee_ids: vec!["emp001".to_string(), "emp002".to_string()],
        required_tools: vec!["tool001".to_string(), "tool002".to_string()],
        scheduled_start: T0.to_string(),
        work_area_id: "area001".to_string(),
    }]
});

static TOOLS: Lazy<Vec<Tool>> = Lazy::new(|| {
    vec![
        Tool {
            tool_id: "tool001".to_string(),
            name: "Total station".to_string(),
            category: "survey".to_string(),
            is_available: true,
        },
        Tool {
            tool_id: "tool002".to_string(),
            name: "Radio".to_string(),
            category: "comms".to_string(),
            is_available: false,
        },
    ]
});

static EMPLOYEE_REPORTS: Lazy<Vec<DailyReport>> = Lazy::new(|| {
    vec![DailyReport {
        report_id: "rep001".to_string(),
        employee_id: "emp001".to_string(),
        report_date: "2024-06-01".to_string(),
        tool_usage: vec![ToolUsage { tool_id: "tool001".to_string(), hours: 6.5 }],
        activities: vec![ACTIVITY[0].clone()],
        notes: Some("North boundary staked".to_string()),
    }]
});

static ADMIN_REPORTS: Lazy<Vec<DailyReport>> = Lazy::new(|| {
    vec![
        EMPLOYEE_REPORTS[0].clone(),
        DailyReport {
            report_id: "rep002".to_string(),
            employee_id: "emp002".to_string(),
            report_date: "2024-06-01".to_string(),
            tool_usage: vec![ToolUsage { tool_id: "tool002".to_string(), hours: 2.0 }],
            activities: vec![ACTIVITY[1].clone()],
            notes: None,
        },
    ]
});

pub fn attendance(filter: Option<&str>) -> Vec<AttendanceRecord> {
    ATTENDANCE.iter().filter(|r| matches(filter, &r.employee_id)).cloned().collect()
}

pub fn activity(filter: Option<&str>) -> Vec<ActivityData> {
    ACTIVITY.iter().filter(|a| matches(filter, &a.employee_id)).cloned().collect()
}

pub fn employees(filter: Option<&str>) -> Vec<Employee> {
    EMPLOYEES.iter().filter(|e| matches(filter, &e.employee_id)).cloned().collect()
}

pub fn work_areas() -> Vec<WorkArea> {
    WORK_AREAS.clone()
}

pub fn geofences() -> Vec<crate::model::geofence::CircularGeoFence> {
    GEOFENCES.clone()
}

pub fn punches(filter: Option<&str>) -> Vec<Punch> {
    PUNCHES.iter().filter(|p| matches(filter, &p.employee_id)).cloned().collect()
}

pub fn tasks(filter: Option<&str>) -> Vec<Task> {
    TASKS
        .iter()
        .filter(|t| filter.is_none_or(|id| t.assigned_employee_ids.iter().any(|e| e == id)))
        .cloned()
        .collect()
}

pub fn tools() -> Vec<Tool> {
    TOOLS.clone()
}

pub fn employee_reports(filter: Option<&str>) -> Vec<DailyReport> {
    EMPLOYEE_REPORTS.iter().filter(|r| matches(filter, &r.employee_id)).cloned().collect()
}

pub fn admin_reports(filter: Option<&str>) -> Vec<DailyReport> {
    ADMIN_REPORTS.iter().filter(|r| matches(filter, &r.employee_id)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_narrow_to_one_employee() {
        assert_eq!(attendance(None).len(), 2);
        assert_eq!(attendance(Some("emp001")).len(), 1);
        assert_eq!(activity(Some("emp002"))[0].activity_type, "driving");
        assert_eq!(punches(Some("emp001"))[0].status, PunchStatus::PunchIn);
    }

    #[test]
    fn unknown_employee_yields_empty_not_error() {
        assert!(attendance(Some("emp999")).is_empty());
        assert!(activity(Some("emp999")).is_empty());
        assert!(employees(Some("emp999")).is_empty());
        assert!(tasks(Some("emp999")).is_empty());
        assert!(employee_reports(Some("emp999")).is_empty());
    }

    #[test]
    fn tasks_filter_on_assignment_membership() {
        assert_eq!(tasks(Some("emp002")).len(), 1);
    }
}
