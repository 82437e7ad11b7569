pub mod gateways;
pub mod markdown;
pub mod repositories;
pub mod tag;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use nvc_entities::{id::*, plugin::*, resource::*, tag::*, time::*};
}
