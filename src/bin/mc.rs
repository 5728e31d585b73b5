use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use myth_collection::model::SourceFigurine;
use myth_collection::presentation::{display_name, populate_derived, today};
use myth_collection::service::{read_source_csv, Services};
use myth_collection::tracing::init_tracing;
use myth_collection::util::env;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "mc", version, about = "Myth collection admin CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
#[command(rename_all = "kebab-case")]
enum Commands {
    /// Bulk-import figurines from a CSV export of the collection sheet
    Import {
        /// Path to the CSV file
        csv: PathBuf,
        /// Map and report every row without storing anything
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Print the catalog as JSON, in display order
    List {
        /// Fold re-releases into their first occurrence
        #[arg(long, default_value_t = false)]
        exclude_restocks: bool,
        /// Only id, display name, lineup, category and status
        #[arg(long, default_value_t = false)]
        basic: bool,
    },
    /// Print the display name each CSV row would get
    Name {
        /// Path to the CSV file
        csv: PathBuf,
    },
}

fn read_rows(path: &Path) -> Result<Vec<SourceFigurine>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let rows = read_source_csv(BufReader::new(file))
        .with_context(|| format!("reading {}", path.display()))?;
    info!(rows = rows.len(), file = %path.display(), "read bulk sheet");
    Ok(rows)
}

#[tokio::main]
async fn main() -> Result<()> {
    env::init_env();
    init_tracing("warn,mc=info,myth_collection=info")?;

    let cli = Cli::parse();
    let services = Services::from_env().await?;

    match cli.command {
        Commands::Import { csv, dry_run } => {
            let rows = read_rows(&csv)?;
            if dry_run {
                let mapped = services.figurines.map_rows(&rows).await?;
                let today = today();
                for figurine in mapped {
                    let figurine = populate_derived(figurine, today);
                    println!(
                        "{}\t{}",
                        figurine.displayable_name.unwrap_or_default(),
                        figurine
                            .status
                            .map(|s| format!("{s:?}"))
                            .unwrap_or_default()
                    );
                }
                info!("dry run: nothing stored");
            } else {
                let imported = services.figurines.import(rows).await?;
                println!("imported {} figurines", imported.len());
            }
        }
        Commands::List {
            exclude_restocks,
            basic,
        } => {
            let out = if basic {
                serde_json::to_string_pretty(
                    &services.figurines.list_basic(exclude_restocks).await?,
                )?
            } else {
                serde_json::to_string_pretty(&services.figurines.list(exclude_restocks).await?)?
            };
            println!("{out}");
        }
        Commands::Name { csv } => {
            let rows = read_rows(&csv)?;
            for figurine in services.figurines.map_rows(&rows).await? {
                println!("{}", display_name(&figurine));
            }
        }
    }

    Ok(())
}
