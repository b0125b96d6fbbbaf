//! Blob storage.

pub mod object_store_uploader;

pub use object_store_uploader::ObjectStoreUploader;
