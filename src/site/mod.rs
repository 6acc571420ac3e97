//! Site sections and navigation

mod nav;

pub use nav::{links, NavLink};
