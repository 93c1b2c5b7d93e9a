//! compose-analyzer command line interface

use clap::{Parser, Subcommand};
use colored::Colorize;
use compose_analyzer::config::MinSeverity;
use compose_analyzer::core::{Severity, RULES};
use compose_analyzer::{analyze_project_parallel, get_formatter, Config, OutputFormat};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(
    name = "compose-analyzer",
    version,
    about = "Accessibility and correctness analyzer for Compose-style UI code"
)]
struct Cli {
    /// Files or directories to analyze
    paths: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Path to a configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Glob patterns to exclude
    #[arg(long)]
    exclude: Vec<String>,

    /// Minimum severity to report (error, warning, info)
    #[arg(long)]
    min_severity: Option<String>,

    /// Disable the accessibility analyzer
    #[arg(long)]
    no_accessibility: bool,

    /// Disable the text style analyzer
    #[arg(long)]
    no_text_style: bool,

    /// Disable the correctness analyzer
    #[arg(long)]
    no_correctness: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print progress information
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all known rules and their default severities
    Rules,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if matches!(cli.command, Some(Commands::Rules)) {
        print_rules(!cli.no_color);
        return ExitCode::SUCCESS;
    }

    let format = match cli.format.parse::<OutputFormat>() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    let mut config = load_config(&cli);
    apply_cli_overrides(&mut config, &cli);

    if cli.paths.is_empty() {
        eprintln!("No input paths given. Pass files or directories to analyze.");
        return ExitCode::from(2);
    }

    let files = collect_files(&cli.paths);
    if files.is_empty() {
        eprintln!("No Kotlin source files found under the given paths.");
        return ExitCode::from(2);
    }

    if cli.verbose {
        eprintln!("Analyzing {} file(s)...", files.len());
    }

    let file_refs: Vec<&Path> = files.iter().map(|p| p.as_path()).collect();
    let results = match analyze_project_parallel(&file_refs, &config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    let use_color = !cli.no_color && atty::is(atty::Stream::Stdout);
    let formatter = get_formatter(format, use_color);
    let output = formatter.format(&results);
    if !output.is_empty() {
        print!("{}", output);
    } else if cli.verbose {
        eprintln!("No issues found.");
    }

    let has_errors = results
        .iter()
        .flat_map(|r| &r.diagnostics)
        .any(|d| d.severity == Severity::Error);
    if has_errors {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn load_config(cli: &Cli) -> Config {
    if let Some(path) = &cli.config {
        match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(2);
            }
        }
    } else {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Config::find_and_load(&cwd).unwrap_or_default()
    }
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if cli.no_accessibility {
        config.analyzers.accessibility = false;
    }
    if cli.no_text_style {
        config.analyzers.text_style = false;
    }
    if cli.no_correctness {
        config.analyzers.correctness = false;
    }
    config.exclude.extend(cli.exclude.iter().cloned());

    if let Some(min) = &cli.min_severity {
        match min.to_lowercase().as_str() {
            "error" => config.min_severity = MinSeverity::Error,
            "warning" => config.min_severity = MinSeverity::Warning,
            "info" => config.min_severity = MinSeverity::Info,
            other => {
                eprintln!("Unknown severity: {}", other);
                std::process::exit(2);
            }
        }
    }
}

/// Collect Kotlin source files from the given paths
fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }

        for entry in WalkDir::new(path)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let p = entry.path();
            if p.is_file()
                && p.extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e == "kt" || e == "kts")
            {
                files.push(p.to_path_buf());
            }
        }
    }

    files.sort();
    files.dedup();
    files
}

fn print_rules(use_color: bool) {
    for rule in RULES {
        let severity = rule.severity.as_str();
        let severity = if use_color {
            match rule.severity {
                Severity::Error => severity.red().bold().to_string(),
                Severity::Warning => severity.yellow().bold().to_string(),
                Severity::Info => severity.cyan().to_string(),
            }
        } else {
            severity.to_string()
        };

        println!(
            "{:<28} {:<13} [{}] {}",
            rule.id,
            rule.category.as_str(),
            severity,
            rule.brief
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_collect_files_walks_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("ui/screens");
        fs::create_dir_all(&nested).unwrap();

        for name in ["Main.kt", "ui/screens/Home.kt", "README.md"] {
            let mut f = File::create(temp_dir.path().join(name)).unwrap();
            writeln!(f, "// {}", name).unwrap();
        }

        let files = collect_files(&[temp_dir.path().to_path_buf()]);
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "kt"));
    }

    #[test]
    fn test_collect_files_accepts_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("Anything.txt");
        File::create(&file).unwrap();

        // Explicitly named files are analyzed regardless of extension
        let files = collect_files(&[file.clone()]);
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_collect_files_dedups() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("Main.kt");
        File::create(&file).unwrap();

        let files = collect_files(&[file.clone(), temp_dir.path().to_path_buf()]);
        assert_eq!(files.len(), 1);
    }
}
