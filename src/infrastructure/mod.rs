pub mod notifications;
pub mod persistence;
pub mod probing;
pub mod sites;
