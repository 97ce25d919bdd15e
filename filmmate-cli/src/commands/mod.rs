pub(crate) mod config;
pub(crate) mod films;
pub(crate) mod users;
