mod devices;
mod login;

pub use devices::*;
pub use login::*;
