//! Standalone prompts built from the bundled command files, for editors
//! without a plugin directory (e.g. `codex "$(zest-dev prompt new '...')"`).

use crate::error::{Result, ZestError};
use crate::frontmatter;
use crate::paths;
use crate::plugin;

pub const COMMANDS: &[&str] = &["new", "research", "design", "implement", "summarize"];

/// Token in command bodies replaced by the user's arguments.
pub const ARGUMENTS_TOKEN: &str = "$ARGUMENTS";

/// Drop the metadata block, substitute the arguments, trim.
pub fn render(content: &str, args: &str) -> String {
    frontmatter::strip(content)
        .replace(ARGUMENTS_TOKEN, args)
        .trim()
        .to_string()
}

pub fn generate(command: &str, args: &str) -> Result<String> {
    if !COMMANDS.contains(&command) {
        return Err(ZestError::UnknownCommand {
            name: command.to_string(),
            valid: COMMANDS.join(", "),
        });
    }

    let path = format!("{}/{command}.md", paths::COMMANDS_DIR);
    let content = plugin::read(&path).ok_or(ZestError::CommandNotFound(path))?;
    Ok(render(&content, args))
}
