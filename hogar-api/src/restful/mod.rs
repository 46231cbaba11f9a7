mod device;
mod response;
mod user;

pub use device::*;
pub use response::*;
pub use user::*;
