mod home;
mod talents;

pub use home::Home;
pub use talents::Talents;
