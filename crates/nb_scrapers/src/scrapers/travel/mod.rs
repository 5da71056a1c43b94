use crate::scrapers::SiteProfile;

pub mod tourdom;
pub mod tourister;

pub use tourdom::TOURDOM;
pub use tourister::TOURISTER;

/// Returns all available travel-site profiles
pub fn get_profiles() -> Vec<SiteProfile> {
    vec![TOURDOM, TOURISTER]
}
