pub mod controller;
pub mod form;
pub mod lead;
pub mod validation;
