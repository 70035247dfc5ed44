use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use hashify_cli::config::{AppConfig, ConfigManager, get_config};
use hashify_cli::error::{CliError, CliResult, ErrorContext, ExitCode};
use hashify_cli::history::{self, HistoryEntry};
use hashify_cli::output::{self, OutputFormat, create_formatter};
use hashify_cli::record::DigestRecord;
use hashify_cli::{fingerprint, paths, terminal};
use hashify_core::batch::hash_lines_with;
use hashify_core::{
    DigestComputer, DigestRequest, HashAlgorithm, SaltPosition, compare, generate_salt, visualize,
};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hashify")]
#[command(author, version, about = "Hashify - salted text hashing, comparison and hash fingerprints", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a piece of text, optionally salted
    Hash {
        /// Text to hash; read from stdin when omitted
        text: Option<String>,

        /// Hash algorithm to use (md5, sha256, sha512)
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Salt to mix into the text before hashing
        #[arg(short, long, conflicts_with = "random_salt")]
        salt: Option<String>,

        /// Generate a random salt
        #[arg(long)]
        random_salt: bool,

        /// Where the salt goes (prefix, postfix)
        #[arg(short = 'p', long)]
        salt_position: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the result to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Show the color fingerprint of the digest
        #[arg(long)]
        fingerprint: bool,

        /// Don't record this digest in the history
        #[arg(long)]
        no_history: bool,
    },

    /// Hash two texts and check whether the digests match
    Compare {
        /// First text
        first: String,

        /// Second text
        second: String,

        /// Hash algorithm to use (md5, sha256, sha512)
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Hash every non-empty line of a file
    Batch {
        /// Input file, or '-' for stdin
        file: PathBuf,

        /// Hash algorithm to use (md5, sha256, sha512)
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the results to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show or manage recorded hashes
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },

    /// Render the color fingerprint of a hex digest
    Visualize {
        /// Hex digest, at least 16 characters
        digest: String,

        /// Print one CSS color per pixel instead of colored blocks
        #[arg(long)]
        css: bool,
    },

    /// Print a random salt
    Salt,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum HistoryCommand {
    /// List recorded hashes, newest first
    List {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Remove every recorded hash
    Clear,

    /// Export the history
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "FILE", conflicts_with = "save")]
        output: Option<PathBuf>,

        /// Write to hash_history_<timestamp>.json in the current directory
        #[arg(long)]
        save: bool,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Get a configuration value
    Get {
        /// Configuration key (e.g., hashing.default_algorithm)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., hashing.default_algorithm)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all configuration values
    List,

    /// Print the configuration file path
    Path,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let debug = cli.debug;

    // Initialize logging based on debug flag
    if debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("hashify_core", log::LevelFilter::Debug)
            .filter_module("hashify_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let code = match run(cli).await {
        Ok(code) => code,
        Err(error) => {
            eprint!("{}", error.format_for_user(debug));
            error.exit_code()
        }
    };

    std::process::exit(code.code());
}

async fn run(cli: Cli) -> CliResult<ExitCode> {
    // Config subcommands must work even when the file on disk is broken
    let config = match cli.command {
        Commands::Config { .. } => AppConfig::default(),
        _ => get_config().context("Failed to load configuration")?,
    };
    configure_color(cli.no_color, config.output.color_enabled);

    let code = match cli.command {
        Commands::Hash {
            text,
            algorithm,
            salt,
            random_salt,
            salt_position,
            format,
            output,
            fingerprint,
            no_history,
        } => {
            let options = HashOptions {
                algorithm: resolve_algorithm(algorithm.as_deref(), &config)?,
                salt: if random_salt { Some(generate_salt()) } else { salt },
                salt_position: match salt_position {
                    Some(position) => position.parse()?,
                    None => config.hashing.salt_position,
                },
                format: format.unwrap_or(config.output.default_format),
                output,
                fingerprint,
                record_history: config.history.enabled && !no_history,
            };
            hash_command(&config, text, options).await?
        }
        Commands::Compare {
            first,
            second,
            algorithm,
            format,
        } => {
            let algorithm = resolve_algorithm(algorithm.as_deref(), &config)?;
            let format = format.unwrap_or(config.output.default_format);
            compare_command(&first, &second, algorithm, format)?
        }
        Commands::Batch {
            file,
            algorithm,
            format,
            output,
        } => {
            let algorithm = resolve_algorithm(algorithm.as_deref(), &config)?;
            let format = format.unwrap_or(config.output.default_format);
            batch_command(&file, algorithm, format, output.as_deref()).await?
        }
        Commands::History { command } => history_command(&config, command).await?,
        Commands::Visualize { digest, css } => visualize_command(&digest, css),
        Commands::Salt => {
            println!("{}", generate_salt());
            ExitCode::Success
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
            ExitCode::Success
        }
        Commands::Config { command } => config_command(command)?,
    };

    Ok(code)
}

/// Turn colors off when asked to or when nobody is watching
fn configure_color(no_color: bool, color_enabled: bool) {
    if no_color || !color_enabled || !terminal::supports_ansi() {
        colored::control::set_override(false);
    }
}

/// Parse the `--algorithm` flag, falling back to the configured default
fn resolve_algorithm(arg: Option<&str>, config: &AppConfig) -> hashify_core::Result<HashAlgorithm> {
    match arg {
        Some(value) => value.parse(),
        None => Ok(config.hashing.default_algorithm),
    }
}

struct HashOptions {
    algorithm: HashAlgorithm,
    salt: Option<String>,
    salt_position: SaltPosition,
    format: OutputFormat,
    output: Option<PathBuf>,
    fingerprint: bool,
    record_history: bool,
}

async fn hash_command(config: &AppConfig, text: Option<String>, options: HashOptions) -> Result<ExitCode> {
    let text = match text {
        Some(text) => text,
        None => read_stdin_text()?,
    };

    let mut request = DigestRequest::new(text, options.algorithm);
    if let Some(salt) = options.salt {
        request = request.with_salt(salt, options.salt_position);
    }

    log::debug!(
        "Hashing {} bytes with {} (salted: {})",
        request.text.len(),
        options.algorithm,
        request.is_salted()
    );

    let computer = DigestComputer::new();
    let hash = computer.compute(&request)?;
    let record = DigestRecord::from_request(&request, hash);

    if record.hash.is_empty() && options.format == OutputFormat::Text {
        let message = match &options.output {
            Some(path) => format!(
                "Input is empty, nothing to hash. Skipped writing {}",
                path.display()
            ),
            None => "Input is empty, nothing to hash".to_string(),
        };
        eprintln!("{}", message.yellow());
        return Ok(ExitCode::Success);
    }

    let use_color = options.output.is_none() && config.output.color_enabled;
    let formatter = create_formatter(options.format, use_color);
    let rendered = formatter.format_digest(&record)?;

    if output::emit(&rendered, options.output.as_deref())?
        && let Some(path) = &options.output
    {
        eprintln!("{}", format!("Saved hash to {}", path.display()).green());
    }

    if options.fingerprint && options.output.is_none() {
        println!();
        visualize_command(&record.hash, false);
    }

    if options.record_history && !record.hash.is_empty() {
        let store = history::create_store(&config.history);
        store
            .append(HistoryEntry::new(record))
            .await
            .context("Failed to record history")?;
    }

    Ok(ExitCode::Success)
}

/// Read the text to hash from stdin, dropping the final line break
fn read_stdin_text() -> Result<String> {
    if terminal::stdin_is_terminal() {
        return Err(CliError::misuse("No text given")
            .with_suggestion("Pass the text as an argument or pipe it in, e.g. 'echo hello | hashify hash'")
            .into());
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;

    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }

    Ok(text)
}

fn compare_command(
    first: &str,
    second: &str,
    algorithm: HashAlgorithm,
    format: OutputFormat,
) -> Result<ExitCode> {
    let comparison = compare(first, second, algorithm)?;
    let formatter = create_formatter(format, true);
    println!("{}", formatter.format_comparison(&comparison)?);

    Ok(match comparison.matches {
        Some(false) => ExitCode::GeneralError,
        _ => ExitCode::Success,
    })
}

async fn batch_command(
    file: &Path,
    algorithm: HashAlgorithm,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<ExitCode> {
    let content = if file == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        content
    } else {
        tokio::fs::read_to_string(file)
            .await
            .with_context(|| format!("Failed to read {}", file.display()))?
    };

    let computer = DigestComputer::new();
    let entries = hash_lines_with(&computer, &content, algorithm)?;

    if entries.is_empty() {
        eprintln!("{}", "No non-empty lines to hash".yellow());
        return Ok(ExitCode::Success);
    }

    let formatter = create_formatter(format, output.is_none());
    let rendered = formatter.format_batch(&entries)?;

    if output::emit(&rendered, output)?
        && let Some(path) = output
    {
        eprintln!(
            "{}",
            format!("Wrote {} hashes to {}", entries.len(), path.display()).green()
        );
    }

    Ok(ExitCode::Success)
}

async fn history_command(config: &AppConfig, command: HistoryCommand) -> Result<ExitCode> {
    let store = history::create_store(&config.history);

    match command {
        HistoryCommand::List { format } => {
            let entries = store.list().await.context("Failed to read history")?;
            let format = format.unwrap_or(config.output.default_format);
            let formatter = create_formatter(format, true);
            println!("{}", formatter.format_history(&entries)?);
        }
        HistoryCommand::Clear => {
            let removed = store.len().await.context("Failed to read history")?;
            store.clear().await.context("Failed to clear history")?;
            eprintln!("{}", format!("Cleared {removed} history entries").green());
        }
        HistoryCommand::Export {
            format,
            output,
            save,
        } => {
            let entries = store.list().await.context("Failed to read history")?;
            let formatter = create_formatter(format, false);
            let rendered = formatter.format_history(&entries)?;

            let path = if save {
                Some(PathBuf::from(paths::history_export_file_name(chrono::Utc::now())))
            } else {
                output
            };

            if output::emit(&rendered, path.as_deref())?
                && let Some(path) = &path
            {
                eprintln!(
                    "{}",
                    format!("Exported {} entries to {}", entries.len(), path.display()).green()
                );
            }
        }
    }

    Ok(ExitCode::Success)
}

fn visualize_command(digest: &str, css: bool) -> ExitCode {
    let Some(grid) = visualize(digest.trim()) else {
        eprintln!("{}", fingerprint::PLACEHOLDER.dimmed());
        return ExitCode::Success;
    };

    if css || !terminal::supports_truecolor() {
        println!("{}", fingerprint::render_css(&grid));
    } else {
        println!("{}", fingerprint::render_blocks(&grid));
    }

    ExitCode::Success
}

fn config_command(command: ConfigCommand) -> Result<ExitCode> {
    let mut manager = ConfigManager::new();

    match command {
        ConfigCommand::Get { key } => {
            println!("{}", manager.get(&key)?);
        }
        ConfigCommand::Set { key, value } => {
            manager.set(&key, &value)?;
            eprintln!("{}", format!("Set {key} = {value}").green());
            eprintln!(
                "Configuration saved to: {}",
                manager.get_config_path().display()
            );
        }
        ConfigCommand::List => {
            let items = manager.list()?;
            eprintln!("{}", "Configuration:".bold().blue());
            eprintln!("Config file: {}", manager.get_config_path().display());
            eprintln!();

            // Items are sorted, so sections come out grouped
            let mut current_section = "";
            for (key, value) in &items {
                let (section, field) = key.split_once('.').unwrap_or(("general", key));
                if section != current_section {
                    if !current_section.is_empty() {
                        println!();
                    }
                    println!("[{}]", section.yellow());
                    current_section = section;
                }
                println!("  {} = {}", field.cyan(), value);
            }
        }
        ConfigCommand::Path => {
            println!("{}", manager.get_config_path().display());
        }
    }

    Ok(ExitCode::Success)
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
