//! Attachment blob storage

pub mod local;

#[cfg(test)]
mod tests;

pub use local::LocalAttachmentStore;
