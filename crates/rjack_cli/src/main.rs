//! rjc: The rjack Jack syntax analyzer CLI.
//!
//! Usage:
//!   rjc [options] [path...]
//!
//! Each path is a `.jack` file or a directory containing `.jack` files. Every
//! file is one compilation unit, parsed independently; a failing unit does
//! not stop the others.

use clap::Parser as ClapParser;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use rjack_core::text::LineMap;
use rjack_diagnostics::Error;
use rjack_emitter::TreeWriter;
use rjack_parser::Parser;

#[derive(ClapParser, Debug)]
#[command(name = "rjc", about = "rjack - A Jack syntax analyzer written in Rust", disable_version_flag = true)]
struct Cli {
    /// Jack source files or directories containing .jack files.
    #[arg(value_name = "PATH")]
    paths: Vec<String>,

    /// Write output trees into this directory instead of next to the sources.
    #[arg(long = "outDir")]
    out_dir: Option<String>,

    /// Print trees to stdout instead of writing .xml files.
    #[arg(long)]
    stdout: bool,

    /// List all files that are part of the run.
    #[arg(long = "listFiles")]
    list_files: bool,

    /// Enable pretty printing for diagnostics.
    #[arg(long, default_value_t = true)]
    pretty: bool,

    /// Print the analyzer version.
    #[arg(short = 'v', long)]
    version: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("rjc Version 0.1.0");
        return;
    }

    let exit_code = run_analyze(&cli);
    process::exit(exit_code);
}

/// What happened to one compilation unit.
enum UnitResult {
    /// Tree written to this path.
    Written(PathBuf),
    /// Tree text to print on stdout.
    Tree(String),
    /// The file could not be read or the output could not be written.
    Io(String),
    /// The unit failed to parse; the source is kept for display.
    Failed { source: String, error: Error },
}

fn run_analyze(cli: &Cli) -> i32 {
    let start = Instant::now();

    let files = match resolve_input_files(&cli.paths) {
        Ok(files) => files,
        Err(msg) => {
            print_error(&msg);
            return 1;
        }
    };

    if files.is_empty() {
        print_error("No input files found.");
        return 1;
    }

    if cli.list_files {
        for f in &files {
            println!("{}", f.display());
        }
    }

    // Units are independent; parse them in parallel and report in order.
    let results: Vec<UnitResult> = files
        .par_iter()
        .map(|file| analyze_unit(file, cli))
        .collect();

    let use_color = cli.pretty && atty_is_terminal();
    let mut io_failures = 0usize;
    let mut parse_failures = 0usize;

    for (file, result) in files.iter().zip(results) {
        match result {
            UnitResult::Written(path) => {
                if use_color {
                    eprintln!("{}{} -> {}{}", GRAY, file.display(), path.display(), RESET);
                }
            }
            UnitResult::Tree(text) => {
                print!("{}", text);
            }
            UnitResult::Io(msg) => {
                io_failures += 1;
                print_error(&msg);
            }
            UnitResult::Failed { source, error } => {
                parse_failures += 1;
                print_unit_error(file, &source, &error, use_color);
            }
        }
    }

    let elapsed = start.elapsed();

    if parse_failures > 0 {
        let msg = format!(
            "Found {} error{}.",
            parse_failures,
            if parse_failures == 1 { "" } else { "s" }
        );
        if use_color {
            eprintln!("\n{}{}{}", RED, msg, RESET);
        } else {
            eprintln!("\n{}", msg);
        }
        return 2;
    }
    if io_failures > 0 {
        return 1;
    }

    if use_color {
        eprintln!(
            "{}Analyzed {} file{} in {:.2}s.{}",
            GRAY,
            files.len(),
            if files.len() == 1 { "" } else { "s" },
            elapsed.as_secs_f64(),
            RESET
        );
    }

    0
}

/// Expand the command-line paths into the list of compilation units.
/// Directories contribute their `.jack` files, non-recursively.
fn resolve_input_files(paths: &[String]) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();
    for raw in paths {
        let path = Path::new(raw);
        if !path.exists() {
            return Err(format!("Path '{}' does not exist.", path.display()));
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .map_err(|e| format!("Failed to read directory '{}': {}", path.display(), e))?;
            let mut found = Vec::new();
            for entry in entries {
                let entry =
                    entry.map_err(|e| format!("Failed to read directory '{}': {}", path.display(), e))?;
                let file_path = entry.path();
                if file_path.extension().and_then(|s| s.to_str()) == Some("jack") {
                    found.push(file_path);
                }
            }
            // Directory order is not stable; sort it.
            found.sort();
            files.extend(found);
        } else {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// Run the whole pipeline on one unit.
fn analyze_unit(file: &Path, cli: &Cli) -> UnitResult {
    let source = match fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => return UnitResult::Io(format!("Failed to read '{}': {}", file.display(), e)),
    };

    match Parser::new(&source).parse_class() {
        Ok(tree) => {
            let text = TreeWriter::new().write_tree(&tree);
            if cli.stdout {
                UnitResult::Tree(text)
            } else {
                match write_output(file, &text, cli.out_dir.as_deref()) {
                    Ok(path) => UnitResult::Written(path),
                    Err(msg) => UnitResult::Io(msg),
                }
            }
        }
        Err(error) => UnitResult::Failed { source, error },
    }
}

/// Write a unit's tree as `<Stem>.xml`, next to the source or under the
/// requested output directory.
fn write_output(file: &Path, text: &str, out_dir: Option<&str>) -> Result<PathBuf, String> {
    let out_path = match out_dir {
        Some(dir) => {
            let dir = Path::new(dir);
            fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create '{}': {}", dir.display(), e))?;
            let stem = file
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "out".to_string());
            dir.join(format!("{}.xml", stem))
        }
        None => file.with_extension("xml"),
    };
    fs::write(&out_path, text)
        .map_err(|e| format!("Failed to write '{}': {}", out_path.display(), e))?;
    Ok(out_path)
}

/// Print a unit's parse failure: the message, then the offending source line
/// with a caret when the error has a span.
fn print_unit_error(file: &Path, source: &str, error: &Error, use_color: bool) {
    if use_color {
        eprintln!(
            "{}{}{}: {}{}error{}: {}",
            CYAN,
            file.display(),
            RESET,
            BOLD,
            RED,
            RESET,
            error
        );
    } else {
        eprintln!("{}: error: {}", file.display(), error);
    }

    let line_map = LineMap::new(source);
    let line = error.line();
    let Some(line_span) = line_map.line_span(line) else {
        return;
    };
    let line_text = &source[line_span.to_range()];
    let gutter = format!("  {} | ", line);
    eprintln!("{}{}", gutter, line_text);

    if let Some(span) = error.span() {
        let col = span.start.saturating_sub(line_span.start) as usize;
        let width = (span.length as usize).max(1);
        let caret_line = format!("{}{}", " ".repeat(gutter.len() + col), "^".repeat(width));
        if use_color {
            eprintln!("{}{}{}", RED, caret_line, RESET);
        } else {
            eprintln!("{}", caret_line);
        }
    }
}

fn print_error(msg: &str) {
    if atty_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    // On Unix, check whether stderr is a terminal.
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}
