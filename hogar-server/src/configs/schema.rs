use hogar_api::models::DeviceKind;

use crate::models::{DeviceTable, Table, UsuarioTable};

/// Owns the table set and turns it into boot-time DDL. The three tables are
/// independent, so creation order does not matter.
pub struct SchemaManager {
    tables: Vec<Box<dyn Table>>,
}

impl SchemaManager {
    pub fn new(tables: Vec<Box<dyn Table>>) -> Self {
        Self { tables }
    }

    pub fn create_schema(&self) -> Vec<String> {
        self.tables.iter().map(|table| table.create()).collect()
    }

    pub fn dispose_schema(&self) -> Vec<String> {
        self.tables.iter().rev().map(|table| table.dispose()).collect()
    }
}

impl Default for SchemaManager {
    fn default() -> Self {
        SchemaManager::new(vec![
            Box::new(UsuarioTable),
            Box::new(DeviceTable::new(DeviceKind::Light)),
            Box::new(DeviceTable::new(DeviceKind::Door)),
        ])
    }
}
