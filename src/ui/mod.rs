pub mod dashboard;
pub mod footer;
pub mod help;
pub mod mount_list;
pub mod theme;
