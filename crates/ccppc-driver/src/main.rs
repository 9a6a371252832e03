use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use clap::{Parser, ValueEnum};
use colored::Colorize;

use ccppc_resolver::{collect_dependencies, is_implementation};

#[derive(Parser)]
#[command(
    name = "ccppc",
    version = "0.1.0",
    about = "C/C++ compilation helper with automatic dependency detection",
    long_about = "Scans a C++ source file for quoted #include directives,\nmaps every reachable header to its implementation file and hands\nthe whole set to the compiler in a single invocation."
)]
struct Cli {
    /// Source code file to compile
    #[arg(value_parser = source_file)]
    filename: PathBuf,

    /// Compiler to invoke
    #[arg(long, default_value = "clang")]
    compiler: CompilerKind,

    /// C++ language standard
    #[arg(long, default_value = "17")]
    std: CppStd,

    /// Print the discovered dependencies before compiling
    #[arg(short, long)]
    verbose: bool,

    /// Extra flags passed to the compiler verbatim (after --)
    #[arg(last = true)]
    extra: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CompilerKind {
    /// clang++
    Clang,
    /// g++
    Gcc,
}

impl CompilerKind {
    fn binary(self) -> &'static str {
        match self {
            CompilerKind::Clang => "clang++",
            CompilerKind::Gcc => "g++",
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CppStd {
    #[value(name = "98")]
    Cpp98,
    #[value(name = "11")]
    Cpp11,
    #[value(name = "14")]
    Cpp14,
    #[value(name = "17")]
    Cpp17,
    #[value(name = "20")]
    Cpp20,
}

impl CppStd {
    fn flag(self) -> &'static str {
        match self {
            CppStd::Cpp98 => "-std=c++98",
            CppStd::Cpp11 => "-std=c++11",
            CppStd::Cpp14 => "-std=c++14",
            CppStd::Cpp17 => "-std=c++17",
            CppStd::Cpp20 => "-std=c++20",
        }
    }
}

/// Accept only compilable C++ sources (.cpp, .cxx, .cc, .C).
fn source_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if is_implementation(&path) {
        Ok(path)
    } else {
        Err("invalid source file extension, expected .cpp, .cxx, .cc or .C".to_string())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let dependencies = match collect_dependencies(&cli.filename) {
        Ok(deps) => deps,
        Err(e) => {
            eprintln!(
                "{} {}: {}",
                "error:".red().bold(),
                cli.filename.display(),
                e
            );
            return ExitCode::FAILURE;
        }
    };

    // Sorted so the reported and executed command is reproducible across
    // runs; the set itself carries no order.
    let mut dependencies: Vec<PathBuf> = dependencies.into_iter().collect();
    dependencies.sort();

    if cli.verbose {
        println!("Discovered {} dependencies", dependencies.len());
        for (i, dep) in dependencies.iter().enumerate() {
            println!("  {}. {}", i + 1, dep.display());
        }
    }

    let args = compile_args(&cli.filename, &dependencies, cli.std, &cli.extra);
    let binary = cli.compiler.binary();

    println!("\n{}\n", "Running:".yellow().bold());
    println!("{}\n", render_command(binary, &args).green().bold());

    match Command::new(binary).args(&args).status() {
        Ok(status) if status.success() => ExitCode::SUCCESS,
        Ok(status) => {
            eprintln!("{} {} exited with {}", "error:".red().bold(), binary, status);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{} failed to run {}: {}", "error:".red().bold(), binary, e);
            ExitCode::FAILURE
        }
    }
}

/// Assemble the compiler argument list: root file first, then the sorted
/// dependency set, then the language standard and any pass-through flags.
fn compile_args(
    filename: &Path,
    dependencies: &[PathBuf],
    std: CppStd,
    extra: &[String],
) -> Vec<String> {
    let mut args = Vec::with_capacity(dependencies.len() + extra.len() + 2);
    args.push(filename.display().to_string());
    args.extend(dependencies.iter().map(|d| d.display().to_string()));
    args.push(std.flag().to_string());
    args.extend(extra.iter().cloned());
    args
}

/// Render the exact command line for the console report.
fn render_command(binary: &str, args: &[String]) -> String {
    let mut command = String::from(binary);
    for arg in args {
        command.push(' ');
        command.push_str(arg);
    }
    command
}
