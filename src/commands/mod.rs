//! CLI subcommands

pub mod list;
pub mod nav;
pub mod show;

use crate::content::Post;
use crate::helpers::short_date;

/// One-line summary of a post, as printed by the listing commands
pub fn post_line(post: &Post) -> String {
    let mut line = format!(
        "  {} - {} [{}]",
        short_date(&post.published_at),
        post.title,
        post.slug
    );
    if !post.tags.is_empty() {
        line.push_str(&format!(" #{}", post.tags.join(" #")));
    }
    line
}

/// Print the notice shown when blog commands run with the blog disabled
fn blog_disabled() {
    println!("Blog is disabled (ENABLE_BLOG is not \"true\").");
}
