//! Page views. Each route in the web binary renders one of these.

mod blog;
mod contact;
mod home;
mod leads;
mod not_found;
mod playbook;

pub use blog::{Blog, BlogPost};
pub use contact::Contact;
pub use home::Home;
pub use leads::Leads;
pub use not_found::NotFound;
pub use playbook::Playbook;
