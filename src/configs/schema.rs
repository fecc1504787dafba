use crate::models::soil_reading::SoilReadingTable;
use crate::models::Table;

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
        SchemaManager::new(vec![Box::new(SoilReadingTable)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema_creates_reading_table() {
        let manager = SchemaManager::default();
        let statements = manager.create_schema();

        assert_eq!(statements.len(), 1);
        assert!(statements[0].contains("CREATE TABLE IF NOT EXISTS soil_data"));
        assert!(statements[0].contains("idx_soil_data_timestamp"));
    }

    #[test]
    fn test_dispose_reverses_creation_order() {
        struct First;
        impl Table for First {
            fn name(&self) -> &'static str {
                "first"
            }
            fn create(&self) -> String {
                "CREATE TABLE first;".to_string()
            }
            fn dispose(&self) -> String {
                "DROP TABLE first;".to_string()
            }
        }

        struct Second;
        impl Table for Second {
            fn name(&self) -> &'static str {
                "second"
            }
            fn create(&self) -> String {
                "CREATE TABLE second;".to_string()
            }
            fn dispose(&self) -> String {
                "DROP TABLE second;".to_string()
            }
        }

        let manager = SchemaManager::new(vec![Box::new(First), Box::new(Second)]);

        assert_eq!(manager.create_schema(), vec!["CREATE TABLE first;", "CREATE TABLE second;"]);
        assert_eq!(manager.dispose_schema(), vec!["DROP TABLE second;", "DROP TABLE first;"]);
    }
}
