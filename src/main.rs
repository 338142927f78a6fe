// src/main.rs
use color_eyre::eyre::{Result, bail};

use pokebay_scrape::cli;
use pokebay_scrape::config::Session;
use pokebay_scrape::net::Transport;
use pokebay_scrape::scrape::Browser;

fn main() -> Result<()> {
    color_eyre::install()?;

    let params = cli::parse()?;
    let session = Session::from_env()?;
    let transport = Transport::new(session)?;

    let mut browser = Browser::new(transport);
    if let Some(out) = params.out {
        browser = browser.with_final_out(out);
    }

    let outcome = browser.run(&params.filter)?;
    if outcome.records.is_empty() {
        bail!("no auctions collected for filter {:?}", params.filter);
    }

    println!(
        "{} auctions over {} of {} page(s){}",
        outcome.records.len(),
        outcome.pages_scraped,
        outcome.total_pages,
        if outcome.stopped_early { " - stopped early, budget exceeded" } else { "" },
    );
    Ok(())
}
