// Landing page sections
// Developed by The ReFood Team (c)2025

mod about;
mod footer;
mod form;
mod hero;
mod quotes;
mod stats;
mod tracking;

pub use about::AboutUs;
pub use footer::Footer;
pub use form::FoodSpecificationForm;
pub use hero::Hero;
pub use quotes::Quotes;
pub use stats::Stats;
pub use tracking::FoodTracking;
