//! prompt-assist: terminal prompt composer with backend-driven keyword
//! autocomplete for an image-generation service.

pub mod app;
pub mod autocomplete;
pub mod backend;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod logging;
pub mod notification;
pub mod templates;
pub mod widgets;

#[cfg(test)]
mod test_utils;
