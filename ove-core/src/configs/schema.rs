use crate::models::Table;
use crate::models::refresh_token::RefreshTokenTable;
use crate::models::user::UserTable;

/// Owns the table definitions in creation order; referencing tables come
/// after their targets.
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
        self.tables
            .iter()
            .rev()
            .map(|table| table.dispose())
            .collect()
    }
}

impl Default for SchemaManager {
    fn default() -> Self {
        Self::new(vec![Box::new(UserTable), Box::new(RefreshTokenTable)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispose_reverses_creation_order() {
        let manager = SchemaManager::default();

        let create = manager.create_schema();
        let dispose = manager.dispose_schema();

        assert!(create[0].contains("users"));
        assert!(dispose[0].contains("refresh_tokens"));
    }
}
