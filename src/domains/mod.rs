//! Domains module containing business logic organized by bounded contexts.
//!
//! The server currently exposes a single domain, `tools`: the catalog of
//! callable tools and the dispatcher that runs them.

pub mod tools;
