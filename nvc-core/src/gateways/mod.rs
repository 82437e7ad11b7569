pub mod github;
pub mod markdown;
pub mod site;
