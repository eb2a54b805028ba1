use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

mod commands;
mod context;
mod format;

/// quay - Quay registry tag queries
///
/// Lists repository tags from the Quay Tag API, interactively or as an
/// Ansible binary module.
#[derive(Parser, Debug)]
#[command(name = "quay")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Verbose output on stderr (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a YAML config file
    #[arg(long, global = true, env = "QUAY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the tags of a repository
    Tags {
        /// Repository path (namespace/name)
        repository: String,
        /// Filter to only active tags (true or false)
        #[arg(long)]
        only_active_tags: Option<bool>,
        /// Page index for the results
        #[arg(long)]
        page: Option<i64>,
        /// Number of results per page
        #[arg(long)]
        limit: Option<i64>,
        /// Only return this tag
        #[arg(long = "tag")]
        specific_tag: Option<String>,
        /// Keep registry order instead of sorting newest first
        #[arg(long)]
        unsorted: bool,
        /// Quay API base URL
        #[arg(long)]
        url: Option<String>,
        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
        /// Map --limit the way the first tag_info release did (sorted listing only)
        #[arg(long, conflicts_with = "unsorted")]
        legacy_limit: bool,
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
        /// Show only tag names
        #[arg(short, long)]
        quiet: bool,
    },
    /// Run as an Ansible binary module
    Module {
        /// Module name: tag_info or tag_list
        name: String,
        /// JSON args file written by Ansible
        args_file: PathBuf,
    },
    /// Display version information
    Version,
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Sends diagnostics to stderr; stdout carries results only.
fn init_logging(verbosity: context::VerbosityLevel) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let verbosity = context::VerbosityLevel::from_count(cli.verbose);
    init_logging(verbosity);
    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let code = match cli.command {
        Commands::Version => {
            commands::version::print_version();
            0
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
            0
        }
        Commands::Module { name, args_file } => {
            // A broken config file must still yield a JSON answer.
            let ctx = match context::AppContext::build(cli.config.as_deref(), verbosity) {
                Ok(ctx) => ctx,
                Err(e) => {
                    let outcome = libquay::Outcome::failure(
                        e.to_string(),
                        libquay::ErrorLog::new(),
                        None,
                    );
                    println!("{}", commands::module::render(&outcome));
                    std::process::exit(outcome.exit_code());
                }
            };
            commands::module::handle_module(&ctx, &name, &args_file).await
        }
        Commands::Tags {
            repository,
            only_active_tags,
            page,
            limit,
            specific_tag,
            unsorted,
            url,
            timeout,
            legacy_limit,
            format,
            quiet,
        } => {
            let ctx = match context::AppContext::build(cli.config.as_deref(), verbosity) {
                Ok(ctx) => ctx,
                Err(e) => {
                    format::error(&e.to_string());
                    std::process::exit(1);
                }
            };
            let request = commands::tags::TagsRequest {
                repository,
                only_active_tags,
                page,
                limit,
                specific_tag,
                unsorted,
                url,
                timeout,
                legacy_limit,
            };
            let fmt = format::OutputFormat::from(format.as_str());
            commands::tags::handle_tags(&ctx, &request, fmt, quiet).await
        }
    };

    std::process::exit(code);
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
