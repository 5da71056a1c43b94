use clap::{Args, Subcommand};
use nb_core::sources::find_source;
use nb_core::{Error, Result, Source};
use crate::manager::ScraperManager;

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    #[command(subcommand)]
    pub command: SourceCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SourceCommands {
    /// List configured sources
    List,
    /// Print the candidates a source currently yields, without publishing
    Preview {
        /// Source name, e.g. TourDom
        name: String,
    },
}

pub async fn handle_command(args: SourceArgs, sources: &[Source], manager: &ScraperManager) -> Result<()> {
    match args.command {
        SourceCommands::List => {
            println!("Configured sources:");
            for source in sources {
                println!(
                    "  {} (rss: {}, html: {})",
                    source.name,
                    source.rss_url.as_deref().unwrap_or("-"),
                    source.html_url
                );
            }
        }
        SourceCommands::Preview { name } => {
            let source = find_source(sources, &name)
                .ok_or_else(|| Error::Config(format!("Unknown source: {}", name)))?;

            let items = manager.fetch_source_items(source).await;
            println!("Found {} candidates for {}", items.len(), source.name);
            for item in items {
                println!("- {} - {}", item.title, item.link);
            }
        }
    }
    Ok(())
}
