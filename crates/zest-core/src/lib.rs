pub mod config;
pub mod deploy;
pub mod error;
pub mod frontmatter;
pub mod io;
pub mod naming;
pub mod paths;
pub mod plugin;
pub mod prompt;
pub mod spec;
pub mod types;

pub use error::{Result, ZestError};
