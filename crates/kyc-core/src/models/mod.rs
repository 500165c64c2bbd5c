//! Data models for KYC validation.

pub mod config;
pub mod document;
