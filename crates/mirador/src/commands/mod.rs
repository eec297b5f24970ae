pub mod init;
pub mod list;
