pub mod transcript;
pub mod widget;
