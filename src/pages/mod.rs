pub mod home;
pub mod loading;
