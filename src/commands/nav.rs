//! Print the navigation links

use anyhow::Result;

use crate::site;
use crate::Folio;

/// Print navigation links under the current feature flags
pub fn run(folio: &Folio, json: bool) -> Result<()> {
    let links = site::links(&folio.config.features);

    if json {
        println!("{}", serde_json::to_string_pretty(&links)?);
    } else {
        for link in links {
            println!("  {:<12} {}", link.name, link.hash);
        }
    }

    Ok(())
}
