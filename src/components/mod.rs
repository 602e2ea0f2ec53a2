pub mod about;
pub mod actions_section;
pub mod client_logos;
pub mod data_section;
pub mod footer;
pub mod header;
pub mod hero;
pub mod projects;
pub mod services;
