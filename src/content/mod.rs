//! Content module - blog posts, their loading, and the queries over them

mod frontmatter;
pub mod loader;
mod post;
pub mod query;
mod reading_time;
mod store;

pub use frontmatter::{FrontMatter, FrontMatterError};
pub use post::Post;
pub use query::{find_by_slug, list_latest, list_published, list_related, DEFAULT_LIMIT};
pub use reading_time::ReadingTime;
pub use store::PostStore;
