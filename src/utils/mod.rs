pub mod hooks;
pub mod scroll;
pub mod throttle;
pub mod viewport;
