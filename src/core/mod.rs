//! Core functionality for prdraft
//!
//! This module contains shared infrastructure including:
//! - The read-only repository capability and its git2 implementation
//! - Credential management
//! - Application configuration

pub mod config;
pub mod credentials;
pub mod git;
pub mod repository;

pub use config::Config;
pub use credentials::CredentialStore;
pub use git::GitRepository;
pub use repository::{CommitInfo, RepositoryOps};
