//! Backend for browsing GitHub repositories and gists.
//!
//! `infra::github` is the API layer any frontend can call; the `ghdesk`
//! binary exposes it on the command line.

pub mod cli;
pub mod commands;
pub mod infra;
pub mod shared;
