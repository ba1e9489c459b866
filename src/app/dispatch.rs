use crate::cli::{CacheCommands, Cli, Commands, SiteCommands};
use crate::config::Config;
use crate::links::fetcher::now_ms;
use crate::links::{FileCache, LinkPreview, LinkPreviewer, detect_links};
use crate::site::{NAV_ITEMS, SOCIAL_LINKS, current_year, format_date};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use super::render::{render_cache_entries, render_preview};

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Fetch { urls, json } => {
            let previewer = LinkPreviewer::new(config.preview)?;
            let previews = preview_all(&previewer, &urls).await;
            print_previews(&previews, json)
        }

        Commands::Scan { path, json } => {
            let previewer = LinkPreviewer::new(config.preview)?;
            let previews = scan_file(&previewer, &path).await?;
            print_previews(&previews, json)
        }

        Commands::Cache { cache_command } => {
            let cache = FileCache::new(config.preview.cache_dir.clone());
            let ttl = config.preview.cache_ttl();
            match cache_command {
                CacheCommands::List => {
                    let entries = cache.entries()?;
                    println!("{}", render_cache_entries(&entries, now_ms(), ttl));
                }
                CacheCommands::Prune => {
                    let removed = cache.prune(now_ms(), ttl)?;
                    info!(removed, dir = %cache.root().display(), "pruned link preview cache");
                    println!("removed {removed} entries");
                }
                CacheCommands::Clear => {
                    let removed = cache.clear()?;
                    info!(removed, dir = %cache.root().display(), "cleared link preview cache");
                    println!("removed {removed} entries");
                }
            }
            Ok(())
        }

        Commands::Site { site_command } => {
            match site_command {
                SiteCommands::Nav => println!("{}", serde_json::to_string_pretty(&NAV_ITEMS)?),
                SiteCommands::Social => {
                    println!("{}", serde_json::to_string_pretty(&SOCIAL_LINKS)?);
                }
                SiteCommands::Year => println!("{}", current_year()),
                SiteCommands::Date { value } => println!("{}", format_date(&value)?),
            }
            Ok(())
        }
    }
}

/// Preview each URL in turn. One request at a time, in input order.
pub async fn preview_all(previewer: &LinkPreviewer, urls: &[String]) -> Vec<LinkPreview> {
    let mut previews = Vec::with_capacity(urls.len());
    for url in urls {
        previews.push(previewer.preview(url).await);
    }
    previews
}

/// Detect the links in a content file and preview each of them.
pub async fn scan_file(previewer: &LinkPreviewer, path: &Path) -> Result<Vec<LinkPreview>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let links = detect_links(&content);
    info!(path = %path.display(), links = links.len(), "scanning content for links");

    let previews = preview_all(previewer, &links).await;
    let fallbacks = previews.iter().filter(|p| p.is_fallback()).count();
    if fallbacks > 0 {
        tracing::warn!(path = %path.display(), fallbacks, "some links fell back to placeholder previews");
    }
    Ok(previews)
}

fn print_previews(previews: &[LinkPreview], json: bool) -> Result<()> {
    if json {
        let records: Vec<_> = previews.iter().map(|p| &p.metadata).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        let blocks: Vec<_> = previews.iter().map(render_preview).collect();
        println!("{}", blocks.join("\n\n"));
    }
    Ok(())
}
