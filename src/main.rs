//! CLI entry point for yestree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::Level;
use yestree::{
    Charset, ExcludeMode, ExcludeOptions, OutputConfig, PathList, TreeError, TreeFormatter,
    TreeOptions, WalkStats, print_json, scan,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Exclusion mode as spelled on the command line
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ModeArg {
    /// Hide excluded paths and everything below them
    #[default]
    All,
    /// Keep excluded paths but hide their contents
    Children,
}

impl From<ModeArg> for ExcludeMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::All => ExcludeMode::All,
            ModeArg::Children => ExcludeMode::ChildrenOnly,
        }
    }
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "yestree")]
#[command(about = "Print a directory tree, with path and extension exclusions")]
#[command(version)]
struct Args {
    /// Directory to display (a leading ~ expands to the home directory)
    #[arg(default_value = ".")]
    path: String,

    /// Show hidden files and directories
    #[arg(short, long)]
    all: bool,

    /// Descend only N levels deep (at most 30)
    #[arg(short = 'L', long = "level")]
    level: Option<u32>,

    /// Exclude a path, relative to the tree root (can be used multiple times)
    #[arg(short = 'I', long = "exclude", value_name = "PATH")]
    exclude: Vec<PathBuf>,

    /// How excluded paths are hidden
    #[arg(long = "exclude-mode", value_name = "MODE", default_value = "all")]
    exclude_mode: ModeArg,

    /// Exclude files with this extension, e.g. .log (can be used multiple times)
    #[arg(short = 'e', long = "exclude-ext", value_name = "EXT")]
    exclude_ext: Vec<String>,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Characters used to draw the tree
    #[arg(long = "charset", default_value = "unicode")]
    charset: Charset,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log skipped entries and walk details to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Expand a leading `~` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix('~') {
        if rest.is_empty() || rest.starts_with('/') {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest.trim_start_matches('/'));
            }
        }
    }
    PathBuf::from(path)
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Report a failed walk the way `tree` does: summary first, then the reason.
fn report_error(args: &Args, err: &TreeError) {
    match err {
        TreeError::NotFound { .. } | TreeError::NotADirectory { .. } => {
            println!("\n{}", WalkStats::default().summary());
            eprintln!("{} [error opening dir]", args.path);
        }
        _ => eprintln!("yestree: {}", err),
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = TreeOptions {
        cwd: Some(expand_home(&args.path)),
        depth: args.level.map_or(yestree::tree::MAX_DEPTH as i64, i64::from),
        exclude: ExcludeOptions {
            path: PathList::Many(args.exclude.clone()),
            mode: args.exclude_mode.into(),
            extensions: args.exclude_ext.clone(),
        },
        json: args.json,
        silent: true,
        show_hidden: args.all,
    };

    let walk = match scan(&options) {
        Ok(walk) => walk,
        Err(e) => {
            report_error(&args, &e);
            process::exit(e.exit_code());
        }
    };

    if !walk.warnings.is_empty() {
        tracing::info!(count = walk.warnings.len(), "some entries could not be read");
    }

    let result = if args.json {
        print_json(walk.root.as_ref())
    } else {
        let formatter = TreeFormatter::new(OutputConfig {
            use_color: should_use_color(args.color),
            charset: args.charset,
        });
        formatter.print(walk.root.as_ref(), &walk.stats)
    };

    if let Err(e) = result {
        eprintln!("yestree: error writing output: {}", e);
        process::exit(1);
    }
}
