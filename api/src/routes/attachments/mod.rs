//! Attachment route handlers

pub mod create;

pub use create::create_attachment;
