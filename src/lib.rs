#[cfg(feature = "csr")]
pub mod app;
pub mod contact;
pub mod sections;
