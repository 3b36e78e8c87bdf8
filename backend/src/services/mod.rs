pub mod clients;
pub mod logs;
pub mod session;
