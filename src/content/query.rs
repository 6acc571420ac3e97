//! Post queries
//!
//! Pure functions over a post collection: listing, lookup and related posts.
//! None of them mutate the collection or fail; a miss is `None` and an empty
//! result is an empty `Vec`.

use super::Post;

/// Number of posts returned by `list_latest` and `list_related` by default
pub const DEFAULT_LIMIT: usize = 3;

/// Published posts, newest first.
///
/// Posts with the same publication date keep their collection order.
pub fn list_published(posts: &[Post]) -> Vec<&Post> {
    let mut published: Vec<&Post> = posts.iter().filter(|p| p.published).collect();
    sort_newest_first(&mut published);
    published
}

/// The `limit` most recent published posts
pub fn list_latest(posts: &[Post], limit: usize) -> Vec<&Post> {
    let mut latest = list_published(posts);
    latest.truncate(limit);
    latest
}

/// Find a post by exact slug, published or not.
///
/// Drafts stay reachable here even though listings leave them out.
pub fn find_by_slug<'a>(posts: &'a [Post], slug: &str) -> Option<&'a Post> {
    posts.iter().find(|p| p.slug == slug)
}

/// Published posts sharing at least one tag with the post at `slug`,
/// newest first, excluding that post itself.
pub fn list_related<'a>(posts: &'a [Post], slug: &str, limit: usize) -> Vec<&'a Post> {
    let Some(current) = find_by_slug(posts, slug) else {
        return Vec::new();
    };

    let mut related: Vec<&Post> = posts
        .iter()
        .filter(|p| p.slug != slug && p.published)
        .filter(|p| current.shares_tag_with(p))
        .collect();

    sort_newest_first(&mut related);
    related.truncate(limit);
    related
}

fn sort_newest_first(posts: &mut [&Post]) {
    // stable: ties keep their relative order
    posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}
