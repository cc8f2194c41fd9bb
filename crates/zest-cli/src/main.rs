mod cmd;
mod output;
mod picker;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "zest-dev",
    about = "A lightweight, human-interactive development workflow for AI-assisted coding",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .zest-dev/, specs/ or .git/)
    #[arg(long, global = true, env = "ZEST_DEV_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON instead of YAML
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show spec count and the current spec
    Status,

    /// Show spec details
    Show {
        /// Spec id, or `current`
        spec: String,
    },

    /// List every spec with its status
    List,

    /// Create a new spec dated today
    Create {
        /// Kebab-case slug, e.g. `add-oauth-login`
        slug: String,
    },

    /// Set the current spec (interactive picker when no id is given)
    SetCurrent {
        /// Spec id or path to the spec directory
        spec: Option<String>,
    },

    /// Clear the current spec
    UnsetCurrent,

    /// Move a spec forward to a new status
    Update {
        /// Spec id, or `current`
        spec: String,
        /// new, researched, designed or implemented
        status: String,
    },

    /// Create and switch to a git branch named after the current spec's slug
    CreateBranch,

    /// Deploy commands, skills and agents into .cursor/ and .opencode/
    Init,

    /// Print a standalone prompt for editors without plugin support,
    /// e.g. codex "$(zest-dev prompt new 'task description')"
    Prompt {
        /// new, research, design, implement or summarize
        command: String,
        /// Arguments substituted into the prompt, joined with spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG replaces the default level entirely.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    tracing::debug!(root = %root.display(), "resolved project root");

    let result = match cli.command {
        Commands::Status => cmd::status::run(&root, cli.json),
        Commands::Show { spec } => cmd::spec::show(&root, &spec, cli.json),
        Commands::List => cmd::spec::list(&root, cli.json),
        Commands::Create { slug } => cmd::spec::create(&root, &slug, cli.json),
        Commands::SetCurrent { spec } => cmd::current::set(&root, spec.as_deref(), cli.json),
        Commands::UnsetCurrent => cmd::current::unset(&root, cli.json),
        Commands::Update { spec, status } => cmd::spec::update(&root, &spec, &status, cli.json),
        Commands::CreateBranch => cmd::branch::run(&root, cli.json),
        Commands::Init => cmd::init::run(&root, cli.json),
        Commands::Prompt { command, args } => cmd::prompt::run(&command, &args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
