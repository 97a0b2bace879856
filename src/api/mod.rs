pub mod action;
pub mod command;
pub mod query;
