//! Show a single post and its related posts

use anyhow::Result;
use serde::Serialize;

use super::{blog_disabled, post_line};
use crate::content::Post;
use crate::helpers::full_date;
use crate::Folio;

#[derive(Serialize)]
struct PostWithRelated<'a> {
    post: &'a Post,
    related: Vec<&'a Post>,
}

/// Show the post at `slug`, drafts included
pub fn run(folio: &Folio, slug: &str, related: usize, json: bool) -> Result<()> {
    if !folio.blog_enabled() {
        blog_disabled();
        return Ok(());
    }

    let store = folio.load_posts()?;
    let Some(post) = store.get(slug) else {
        anyhow::bail!("Post not found: {}", slug);
    };
    let related = store.related(slug, related);

    if json {
        let out = PostWithRelated { post, related };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", post.title);
    println!(
        "{} • {}{}",
        full_date(&post.published_at),
        post.reading_time,
        if post.published { "" } else { " • draft" }
    );
    if !post.tags.is_empty() {
        println!("Tags: {}", post.tags.join(", "));
    }
    if let Some(image) = &post.image {
        println!("Image: {}", image);
    }
    println!();
    println!("{}", post.summary);

    if !related.is_empty() {
        println!();
        println!("Related ({}):", related.len());
        for post in related {
            println!("{}", post_line(post));
        }
    }

    Ok(())
}
