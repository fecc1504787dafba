use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Table;

/// One stored sensor report. Rows are append-only; nothing ever updates a
/// reading after insert.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SoilReading {
    pub id: i64,
    pub nitrogen: i64,
    pub phosphorus: i64,
    pub potassium: i64,
    pub ph: f64,
    pub ec: i64,
    pub humidity: f64,
    pub temperature: f64,
    pub relay: String,
    pub timestamp: DateTime<Utc>,
}

/// A reading as it arrives for insertion, before the database assigns an id.
#[derive(Debug, Clone)]
pub struct NewSoilReading {
    pub nitrogen: i64,
    pub phosphorus: i64,
    pub potassium: i64,
    pub ph: f64,
    pub ec: i64,
    pub humidity: f64,
    pub temperature: f64,
    pub relay: String,
    pub timestamp: DateTime<Utc>,
}

pub struct SoilReadingTable;

impl Table for SoilReadingTable {
    fn name(&self) -> &'static str {
        "soil_data"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS soil_data (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nitrogen INTEGER NOT NULL,
                phosphorus INTEGER NOT NULL,
                potassium INTEGER NOT NULL,
                ph REAL NOT NULL,
                ec INTEGER NOT NULL,
                humidity REAL NOT NULL,
                temperature REAL NOT NULL,
                relay TEXT NOT NULL,
                timestamp DATETIME NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_soil_data_timestamp ON soil_data (timestamp);
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS soil_data;")
    }
}
