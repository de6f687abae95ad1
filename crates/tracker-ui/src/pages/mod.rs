//! Page components, one per route.

pub mod about;
pub mod home;
pub mod not_found;

pub use about::About;
pub use home::Tasks;
pub use not_found::NotFound;
