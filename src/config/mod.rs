//! Configuration module

mod env;
mod site;

pub use env::{parse_flag, EnvError};
pub use site::FeatureFlags;
pub use site::SiteConfig;
