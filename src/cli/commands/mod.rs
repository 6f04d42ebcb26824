pub mod add;
pub mod away;
pub mod backup;
pub mod config;
pub mod db;
pub mod dismiss;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod report;
