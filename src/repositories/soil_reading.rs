use std::sync::Arc;

use sqlx::Error;

use crate::configs::Storage;
use crate::models::{NewSoilReading, SoilReading};

pub struct SoilReadingRepository {
    storage: Arc<Storage>,
}

impl SoilReadingRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    // Append a new reading
    pub async fn create(&self, item: &NewSoilReading) -> Result<i64, Error> {
        let id = sqlx::query(
            r#"
            INSERT INTO soil_data (nitrogen, phosphorus, potassium, ph, ec, humidity, temperature, relay, timestamp)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(item.nitrogen)
        .bind(item.phosphorus)
        .bind(item.potassium)
        .bind(item.ph)
        .bind(item.ec)
        .bind(item.humidity)
        .bind(item.temperature)
        .bind(&item.relay)
        .bind(item.timestamp)
        .execute(self.storage.get_pool())
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    // Most recent reading, ties on timestamp broken by highest id
    pub async fn find_latest(&self) -> Result<Option<SoilReading>, Error> {
        let reading: Option<SoilReading> = sqlx::query_as(
            r#"
            SELECT * FROM soil_data
            ORDER BY timestamp DESC, id DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(self.storage.get_pool())
        .await?;

        Ok(reading)
    }
}
