pub mod about;
pub mod agri_tool;
pub mod crop_management;
pub mod dashboard;
pub mod deepseek_chat;
pub mod department;
pub mod employee;
pub mod field_management;
pub mod home;
pub mod tool_usage;
pub mod video_monitor;
pub mod visualization;
