//! Navigation links for the single-page portfolio

use serde::Serialize;

use crate::config::FeatureFlags;

/// A link to a section of the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub hash: &'static str,
}

impl NavLink {
    const fn new(name: &'static str, hash: &'static str) -> Self {
        Self { name, hash }
    }
}

const HOME: NavLink = NavLink::new("Home", "#home");
const ABOUT: NavLink = NavLink::new("About", "#about");
const EXPERIENCE: NavLink = NavLink::new("Experience", "#experience");
const PRINCIPLES: NavLink = NavLink::new("Principles", "#principles");
const BLOG: NavLink = NavLink::new("Blog", "#blog");
const CONTACT: NavLink = NavLink::new("Contact", "#contact");

/// Navigation links in page order. The Blog link only appears when the
/// blog is enabled.
pub fn links(flags: &FeatureFlags) -> Vec<NavLink> {
    let mut links = vec![HOME, ABOUT, EXPERIENCE, PRINCIPLES];
    if flags.enable_blog {
        links.push(BLOG);
    }
    links.push(CONTACT);
    links
}
