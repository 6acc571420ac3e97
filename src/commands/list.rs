//! List blog content

use anyhow::Result;

use super::{blog_disabled, post_line};
use crate::content::Post;
use crate::Folio;

/// List blog content by type
pub fn run(folio: &Folio, content_type: &str, limit: usize, json: bool) -> Result<()> {
    if !folio.blog_enabled() {
        blog_disabled();
        return Ok(());
    }

    let store = folio.load_posts()?;

    match content_type {
        "post" | "posts" => print_posts("Posts", &store.published(), json)?,
        "latest" => print_posts("Latest posts", &store.latest(limit), json)?,
        "draft" | "drafts" => print_posts("Drafts", &store.drafts(), json)?,
        "tag" | "tags" => {
            let tags = store.tags();
            if json {
                println!("{}", serde_json::to_string_pretty(&tags)?);
            } else {
                println!("Tags ({}):", tags.len());
                for (tag, count) in tags {
                    println!("  {} ({})", tag, count);
                }
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, latest, draft, tag",
                content_type
            );
        }
    }

    Ok(())
}

fn print_posts(heading: &str, posts: &[&Post], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(posts)?);
        return Ok(());
    }

    println!("{} ({}):", heading, posts.len());
    for post in posts {
        println!("{}", post_line(post));
    }
    Ok(())
}
