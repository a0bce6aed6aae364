use anyhow::{bail, Context, Result};
use avitocard::card::{is_listing_url, with_source_link};
use avitocard::debug;
use avitocard::debug_println;
use avitocard::listing::{ListingParser, ParserOptions};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Avitocard - turns an Avito listing into a short text card")]
struct Args {
    /// Listing URL (https://www.avito.ru/...)
    url: String,

    /// Directory holding cached cards
    #[clap(long, env = "AVITOCARD_CACHE_DIR", default_value = "cache")]
    cache_dir: PathBuf,

    /// Request timeout in seconds (transport default if not set)
    #[clap(short, long)]
    timeout: Option<u64>,

    /// Re-fetch the listing even if it is already cached
    #[clap(short, long)]
    refresh: bool,

    /// Append a link back to the listing
    #[clap(short, long)]
    link: bool,

    /// Enable debug output
    #[clap(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    debug::init(args.debug);

    let url = args.url.trim();
    if !is_listing_url(url) {
        bail!("Not an Avito listing URL: {}", url);
    }

    let options = ParserOptions {
        cache_dir: args.cache_dir,
        timeout: args.timeout.map(Duration::from_secs),
        ..ParserOptions::default()
    };
    debug_println!("Using cache directory {}", options.cache_dir.display());

    let parser = ListingParser::from_options(&options)?;
    let card = if args.refresh {
        parser.parse_fresh(url)
    } else {
        parser.parse(url)
    }
    .context(format!("Failed to process listing {}", url))?;

    if args.link {
        println!("{}", with_source_link(&card, url));
    } else {
        print!("{}", card);
    }

    Ok(())
}
