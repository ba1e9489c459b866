pub mod date;
pub mod nav;

pub use date::{current_year, format_date};
pub use nav::{NAV_ITEMS, NavItem, SOCIAL_LINKS, SocialLink};
