use anyhow::Result;
use clap::{Parser, Subcommand};
use pdf_drawing::{DrawingStatistics, RenderOptions};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pdft", about = "Render page drawings to PDF", version)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON page list to PDF
    Render {
        /// Input JSON file (array of pages)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Render options JSON file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// Write uncompressed content streams
        #[arg(long)]
        no_compress: bool,

        /// Render pages concurrently
        #[arg(long)]
        parallel: bool,
    },

    /// Validate a JSON page list and print statistics
    Check {
        /// Input JSON file (array of pages)
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn print_statistics(stats: &DrawingStatistics) {
    println!("Page Statistics:");
    println!("  Pages: {}", stats.pages);
    println!("  Drawings: {}", stats.drawings());
    println!("    Solid lines: {}", stats.solid_lines);
    println!("    Dotted lines: {}", stats.dotted_lines);
    println!("    Texts: {} ({} characters)", stats.texts, stats.characters);
    println!("    Color boxes: {}", stats.color_boxes);
}

fn render_summary(pages: usize, output: &Path) -> String {
    format!("Rendered {} pages -> {}", pages, output.display())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Render {
            input,
            output,
            config,
            title,
            no_compress,
            parallel,
        } => {
            let mut options = match config {
                Some(path) => RenderOptions::load(&path).await?,
                None => RenderOptions::default(),
            };
            if title.is_some() {
                options.title = title;
            }
            if no_compress {
                options.compress = false;
            }
            if parallel {
                options.parallel = true;
            }

            let pages = pdf_drawing::load_pages(&input).await?;
            log::debug!("Loaded {} pages from {}", pages.len(), input.display());

            pdf_drawing::generate_pdf(&pages, &options, &output).await?;
            println!("{}", render_summary(pages.len(), &output));
        }

        Commands::Check { input } => {
            let pages = pdf_drawing::load_pages(&input).await?;
            pdf_drawing::validate_pages(&pages)?;
            print_statistics(&pdf_drawing::calculate_statistics(&pages));
        }
    }

    Ok(())
}
