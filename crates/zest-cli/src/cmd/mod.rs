pub mod branch;
pub mod current;
pub mod init;
pub mod prompt;
pub mod spec;
pub mod status;
