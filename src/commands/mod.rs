pub mod fetch;
pub mod prune;
