//! Error Prone argument compiler CLI
//!
//! Entry point for the `errorprone-args` command-line tool.

use clap::{Args, Parser, Subcommand};
use errorprone_args::config::{PROJECT_CONFIG_FILE, USER_CONFIG_PATH};
use errorprone_args::{parse_argument_string, render, CliOverrides, ConfigError, EffectiveConfig};
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "errorprone-args")]
#[command(about = "Compile Error Prone options into javac plugin arguments", version)]
struct Cli {
    /// Log filter (e.g. "debug", "errorprone_options=trace")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the argument string for the effective configuration
    Render {
        #[command(flatten)]
        sources: SourceArgs,

        #[command(flatten)]
        overrides: CliOverrides,

        /// Print the `-Xplugin:ErrorProne …` javac argument instead
        #[arg(long, conflicts_with = "json")]
        plugin: bool,

        /// Print the resolved options, tokens and provenance as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify the tokens of an argument string
    Explain {
        /// The arguments to explain (after --)
        #[arg(last = true, required = true)]
        args: Vec<String>,
    },

    /// Check that the configuration resolves
    Verify {
        #[command(flatten)]
        sources: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Project config file, repeatable (default: .errorprone.toml if present)
    #[arg(long, short = 'c')]
    config: Vec<PathBuf>,

    /// User config file (default: ~/.config/errorprone/options.toml if present)
    #[arg(long)]
    user_config: Option<PathBuf>,

    /// Ignore the user config file
    #[arg(long, conflicts_with = "user_config")]
    no_user_config: bool,
}

impl SourceArgs {
    fn user_config_path(&self) -> Option<PathBuf> {
        if self.no_user_config {
            return None;
        }
        if let Some(ref path) = self.user_config {
            return Some(path.clone());
        }
        let home = std::env::var_os("HOME")?;
        let path = PathBuf::from(home).join(USER_CONFIG_PATH);
        path.exists().then_some(path)
    }

    fn project_config_paths(&self) -> Vec<PathBuf> {
        if !self.config.is_empty() {
            return self.config.clone();
        }
        let default = PathBuf::from(PROJECT_CONFIG_FILE);
        if default.exists() {
            vec![default]
        } else {
            Vec::new()
        }
    }

    fn build(&self, overrides: Option<&CliOverrides>) -> Result<EffectiveConfig, ConfigError> {
        let user = self.user_config_path();
        let projects = self.project_config_paths();
        debug!(user = ?user, projects = ?projects, "resolving config layers");
        EffectiveConfig::build(
            user.as_deref(),
            &projects,
            overrides.map(CliOverrides::to_value),
        )
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Render {
            sources,
            overrides,
            plugin,
            json,
        } => run_render(&sources, &overrides, plugin, json),
        Commands::Explain { args } => run_explain(&args),
        Commands::Verify { sources } => run_verify(&sources),
    }
}

fn run_render(sources: &SourceArgs, overrides: &CliOverrides, plugin: bool, json: bool) {
    let report = match sources.build(Some(overrides)).and_then(render) {
        Ok(r) => r,
        Err(e) => fail(&e),
    };

    if json {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    } else if plugin {
        // Nothing is printed when the plugin is disabled
        if let Some(argument) = report.plugin_argument {
            println!("{}", argument);
        }
    } else {
        println!("{}", report.argument_string);
    }
}

fn run_explain(args: &[String]) {
    // Elements may themselves hold several tokens
    let joined = args.join(" ");
    match parse_argument_string(&joined) {
        Ok(parsed) => match parsed.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("{}: {}", e.to_code(), e);
            process::exit(1);
        }
    }
}

fn run_verify(sources: &SourceArgs) {
    let result = sources.build(None).and_then(render);
    match result {
        Ok(report) => {
            println!("Configuration valid");
            println!();
            for source in &report.effective_config.sources {
                match source.path {
                    Some(ref path) => println!("  {:?}: {}", source.origin, path),
                    None => println!("  {:?}", source.origin),
                }
            }
            println!("  Checks: {}", report.resolved.checks.len());
            println!("  Check options: {}", report.resolved.check_options.len());
            println!("  Arguments: {}", report.arguments.len());
        }
        Err(e) => fail(&e),
    }
}

fn fail(error: &ConfigError) -> ! {
    eprintln!("{}: {}", error.code(), error);
    process::exit(1);
}
