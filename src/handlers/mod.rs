//! Command handlers

pub mod action;
pub mod buzz;

pub use action::ActionHandler;
pub use buzz::BuzzHandler;
