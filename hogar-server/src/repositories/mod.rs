mod device;
mod user;

pub use device::DeviceRepository;
pub use user::UserRepository;

/// Rows affected and generated key, as reported by the SQLite driver.
#[derive(Debug, Clone, Copy)]
pub struct RowsChanged {
    pub affected: u64,
    pub last_insert_id: i64,
}
