pub mod areas;
pub mod backend;
pub mod cell;
pub mod sheet;
pub mod staff;
