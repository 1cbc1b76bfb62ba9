use clap::{Parser, Subcommand};
use media_manifest::config::{self, ManifestConfig};
use media_manifest::manifest::Tree;
use media_manifest::root::{ArgRoot, PromptRoot, RootSource};
use media_manifest::output;
use media_manifest::scan::{self, ScanError, ScanEvent};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::mpsc;

fn version_string() -> &'static str {
    if env!("MANIFEST_ON_RELEASE_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    let hash = env!("MANIFEST_GIT_HASH");
    if hash.is_empty() {
        "dev@unknown"
    } else {
        // Leaked once at startup
        Box::leak(format!("dev@{hash}").into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "media-manifest")]
#[command(about = "Generate a sorted JSON manifest of videos and pages in a directory tree")]
#[command(long_about = "\
Generate a sorted JSON manifest of videos and pages in a directory tree

Every .mp4, .webm, .avi (video) and .html, .htm (link) file under the root is
listed with an absolute file:// URL. Folders without any such file are left
out.

Ordering:
  Files:   leading number first (2.mp4 before 10.mp4), then by name
  Folders: first number anywhere (Season 2 before Season 10), then by name

Without --root-dir you are asked for the directory; a blank answer cancels.

An optional media-manifest.toml in the root sets the output path and JSON
indent. A file that cannot be used is reported and the defaults apply.
Run 'media-manifest gen-config' to print a documented one.")]
#[command(version = version_string())]
struct Cli {
    /// Directory to scan
    #[arg(long, alias = "root_dir", global = true)]
    root_dir: Option<PathBuf>,

    /// Manifest path (overrides `output` in media-manifest.toml)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the root and write the manifest (default)
    Generate,
    /// Scan the root and print the tree without writing anything
    Check,
    /// Print a stock media-manifest.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let command = cli.command.unwrap_or(Command::Generate);
    if let Command::GenConfig = command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let source: Box<dyn RootSource> = match cli.root_dir {
        Some(path) => Box::new(ArgRoot(path)),
        None => {
            println!("No --root-dir argument provided. Asking for a directory...");
            Box::new(PromptRoot)
        }
    };
    let Some(root) = source.obtain()? else {
        println!("No directory selected. Exiting.");
        return Ok(());
    };
    println!(
        "Using root directory from {}: {}",
        source.describe(),
        root.display()
    );

    let (config, config_err) = config::load_config_or_default(&root);
    if let Some(err) = config_err {
        output::print_config_warning(&err);
    }
    let tree = scan_with_diagnostics(&root)?;

    match command {
        Command::Check => {
            output::print_tree(&tree);
            println!("==> Content is valid");
        }
        _ => {
            let output_path = cli.output.unwrap_or_else(|| PathBuf::from(&config.output));
            write_manifest(&tree, &output_path, &config)?;
            output::print_write_summary(&tree, &output_path);
        }
    }
    Ok(())
}

/// Scan `root`, printing diagnostics from a separate thread as they arrive.
fn scan_with_diagnostics(root: &Path) -> Result<Tree, ScanError> {
    let (tx, rx) = mpsc::channel::<ScanEvent>();
    let printer = std::thread::spawn(move || {
        for event in rx {
            output::print_scan_event(&event);
        }
    });
    let result = scan::scan(root, Some(&tx));
    drop(tx);
    let _ = printer.join();
    result
}

/// Write the manifest, creating parent directories and replacing any old file.
fn write_manifest(
    tree: &Tree,
    path: &Path,
    config: &ManifestConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = tree.to_json(config.indent)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)?;
    Ok(())
}
