pub mod activity;
pub mod attendance;
pub mod employee;
pub mod geofence;
pub mod punch;
pub mod report;
pub mod staff_record;
pub mod task;
pub mod tool;
pub mod work_area;
