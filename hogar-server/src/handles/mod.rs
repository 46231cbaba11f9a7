mod device_handle;
mod user_handle;

pub use device_handle::*;
pub use user_handle::*;
