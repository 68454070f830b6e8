mod logger;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use usage_report::constants::{COLUMN_WIDTHS, PAGE_CAPACITY};
use usage_report::grid::{horizontal_line_count, layout_grid};
use usage_report::{
    PaginationPlan, ReportHeader, ReportOptions, ReportTable, generate_report, load_usage_csv,
    save_report,
};

#[derive(Parser)]
#[command(name = "usage-report", about = "Monthly API usage report generator", version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a usage report PDF from CSV
    Render {
        /// Input CSV file (columns: api, version, application, owner, count)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Report year
        #[arg(long)]
        year: i32,

        /// Report month (1-12)
        #[arg(long)]
        month: u32,

        /// JSON options file (title, labels, month names)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show how rows would be spread across pages, without drawing
    Plan {
        /// Number of data rows
        #[arg(short, long)]
        rows: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::StderrLogger::new(cli.verbose)
        .init()
        .context("Failed to install logger")?;

    match cli.command {
        Commands::Render {
            input,
            output,
            year,
            month,
            config,
        } => {
            let options = match config {
                Some(path) => ReportOptions::load(&path)
                    .await
                    .with_context(|| format!("Failed to load options from {}", path.display()))?,
                None => ReportOptions::default(),
            };
            options.validate()?;

            let records = load_usage_csv(&input)
                .await
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let table = ReportTable::from_usage_records(options.column_headers.clone(), &records)?;
            let header = ReportHeader::for_period(&options, year, month, &chrono::Local::now())?;

            match generate_report(&table, &header, &options).await? {
                Some(bytes) => {
                    save_report(&bytes, &output).await?;
                    println!(
                        "Generated report with {} rows → {}",
                        table.row_count(),
                        output.display()
                    );
                }
                None => println!("No usage records in {}; nothing to render", input.display()),
            }
        }

        Commands::Plan { rows } => {
            let plan = PaginationPlan::new(rows);
            let grid = layout_grid(&plan, &COLUMN_WIDTHS);

            println!("Pagination Plan:");
            println!("  Rows: {}", plan.total_rows());
            println!("  Capacity: {}", PAGE_CAPACITY);
            println!("  Pages: {}", plan.total_pages());
            for (page, count) in plan.pages() {
                println!("    Page {}: {} rows", page, count);
            }
            println!("  Horizontal rules: {}", horizontal_line_count(&plan));
            println!("  Vertical rules: {}", grid.vertical_line_count());
        }
    }

    Ok(())
}
