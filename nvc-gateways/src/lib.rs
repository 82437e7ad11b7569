pub mod github;
pub mod http;
pub mod static_files;

/// User agent of all outgoing requests.
pub const USER_AGENT: &str = "nvimcraft";
