mod error;
mod find_location;


pub use self::{error::Error, find_location::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::geocode::*};
}
