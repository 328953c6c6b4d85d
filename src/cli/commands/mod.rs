pub mod add;
pub mod config;
pub mod days;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod search;
