use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use explainshell_core::{EXPLAINSHELL_ORIGIN, OutputFormat, extract_with_origin, render};
use explainshell_fetch::{FetchConfig, Fetcher};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const EXAMPLE: &str = r#"Example: explain "ls -la | grep .ts""#;

#[derive(Debug, Parser)]
#[command(name = "explain", version)]
#[command(about = "Explain shell commands using explainshell.com")]
#[command(after_help = EXAMPLE)]
struct Cli {
    /// Command line to explain. Separate words are joined with single spaces.
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
    /// Explain a saved explainshell page instead of fetching one ("-" reads stdin).
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
    /// Origin of the explanation service.
    #[arg(long, hide = true, default_value = EXPLAINSHELL_ORIGIN)]
    origin: String,
    /// Log request and extraction details to stderr.
    #[arg(short, long)]
    verbose: bool,
    /// Do not print the progress line before fetching.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), String> {
    let parsed = match &cli.input {
        Some(path) => {
            let markup = read_input(path)?;
            extract_with_origin(&markup, &cli.origin)
        }
        None => {
            let command = join_command(&cli.command).ok_or_else(|| {
                format!("no command to explain\n\nUsage: explain <COMMAND>...\n{EXAMPLE}")
            })?;
            if !cli.quiet {
                eprintln!("Fetching explanation for: \"{command}\"...\n");
            }
            Fetcher::new(FetchConfig::with_origin(cli.origin.as_str()))
                .fetch_explanation(&command)
                .await
                .map_err(|err| err.to_string())?
        }
    };

    debug!(
        segments = parsed.segments.len(),
        help_blocks = parsed.help_texts.len(),
        format = ?cli.format,
        "Rendering explanation"
    );
    let output = render(&parsed, cli.format).map_err(|err| err.to_string())?;
    println!("{output}");
    Ok(())
}

/// Joins argument words with single spaces; `None` if nothing but whitespace
/// was given.
fn join_command(words: &[String]) -> Option<String> {
    let command = words.join(" ");
    if command.trim().is_empty() {
        None
    } else {
        Some(command)
    }
}

fn read_input(path: &Path) -> Result<String, String> {
    if path == Path::new("-") {
        let mut markup = String::new();
        std::io::stdin()
            .read_to_string(&mut markup)
            .map_err(|err| format!("Failed to read stdin: {err}"))?;
        return Ok(markup);
    }
    fs::read_to_string(path).map_err(|err| format!("Failed to read '{}': {err}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_command_uses_single_spaces() {
        let words = vec!["ls".to_string(), "-la".to_string(), "|".to_string(), "wc".to_string()];
        assert_eq!(join_command(&words).as_deref(), Some("ls -la | wc"));
    }

    #[test]
    fn test_join_command_rejects_blank_input() {
        assert_eq!(join_command(&[]), None);
        assert_eq!(join_command(&[" ".to_string(), "\t".to_string()]), None);
    }

    #[test]
    fn test_cli_keeps_hyphenated_words_in_command() {
        let cli = Cli::try_parse_from(["explain", "ls", "-la", "--color=auto"]).unwrap();
        assert_eq!(cli.command, ["ls", "-la", "--color=auto"]);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.origin, EXPLAINSHELL_ORIGIN);
    }

    #[test]
    fn test_cli_parses_format_and_input() {
        let cli =
            Cli::try_parse_from(["explain", "--format", "json", "--input", "page.html"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.input, Some(PathBuf::from("page.html")));
        assert!(cli.command.is_empty());
    }
}
