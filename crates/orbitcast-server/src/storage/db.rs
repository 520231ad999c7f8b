//! PostgreSQL database layer

use anyhow::{Context, Result};
use orbitcast_core::{
    Broadcast, BroadcastInput, DatabaseConfig, Satellite, SatelliteInput, TvChannel, TvChannelInput,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;

pub struct Database {
    pool: Arc<PgPool>,
}

impl Database {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        tracing::info!(
            "Connecting to PostgreSQL at {}:{}/{}",
            config.host,
            config.port,
            config.name
        );

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&config.url())
            .await
            .with_context(|| {
                format!(
                    "Failed to connect to database '{}' at {}:{}",
                    config.name, config.host, config.port
                )
            })?;

        tracing::info!("PostgreSQL connection established");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    // Satellite operations
    pub async fn list_satellites(&self) -> Result<Vec<Satellite>> {
        let rows: Vec<SatelliteRow> = sqlx::query_as(
            r#"
            SELECT id, name, lifetime, orbit_radius FROM satellites
            "#,
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    pub async fn get_satellite(&self, id: i32) -> Result<Option<Satellite>> {
        let row: Option<SatelliteRow> = sqlx::query_as(
            r#"
            SELECT id, name, lifetime, orbit_radius FROM satellites WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(row.map(|r| r.into()))
    }

    pub async fn create_satellite(&self, input: &SatelliteInput) -> Result<i32> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO satellites (name, lifetime, orbit_radius)
            VALUES ($1, $2, $3) RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(input.lifetime)
        .bind(input.orbit_radius)
        .fetch_one(&*self.pool)
        .await?;

        Ok(id)
    }

    /// Replaces all fields of the row. Success is acknowledged whether or
    /// not a row matched the id.
    pub async fn update_satellite(&self, id: i32, input: &SatelliteInput) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE satellites
            SET name = $1, lifetime = $2, orbit_radius = $3
            WHERE id = $4
            "#,
        )
        .bind(&input.name)
        .bind(input.lifetime)
        .bind(input.orbit_radius)
        .bind(id)
        .execute(&*self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete_satellite(&self, id: i32) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM satellites WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&*self.pool)
        .await?;

        Ok(())
    }

    // TV channel operations
    pub async fn list_tv_channels(&self) -> Result<Vec<TvChannel>> {
        let rows: Vec<TvChannelRow> = sqlx::query_as(
            r#"
            SELECT id, name, language, specifics, company FROM tv_channels
            "#,
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    pub async fn get_tv_channel(&self, id: i32) -> Result<Option<TvChannel>> {
        let row: Option<TvChannelRow> = sqlx::query_as(
            r#"
            SELECT id, name, language, specifics, company FROM tv_channels WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(row.map(|r| r.into()))
    }

    pub async fn create_tv_channel(&self, input: &TvChannelInput) -> Result<i32> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO tv_channels (name, language, specifics, company)
            VALUES ($1, $2, $3, $4) RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(&input.language)
        .bind(&input.specifics)
        .bind(&input.company)
        .fetch_one(&*self.pool)
        .await?;

        Ok(id)
    }

    pub async fn update_tv_channel(&self, id: i32, input: &TvChannelInput) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE tv_channels
            SET name = $1, language = $2, specifics = $3, company = $4
            WHERE id = $5
            "#,
        )
        .bind(&input.name)
        .bind(&input.language)
        .bind(&input.specifics)
        .bind(&input.company)
        .bind(id)
        .execute(&*self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete_tv_channel(&self, id: i32) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM tv_channels WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&*self.pool)
        .await?;

        Ok(())
    }

    // Broadcast operations
    pub async fn list_broadcasts(&self) -> Result<Vec<Broadcast>> {
        let rows: Vec<BroadcastRow> = sqlx::query_as(
            r#"
            SELECT id, coverage_from, coverage_to, satellite_id, tv_channel_id FROM broadcasts
            "#,
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    pub async fn get_broadcast(&self, id: i32) -> Result<Option<Broadcast>> {
        let row: Option<BroadcastRow> = sqlx::query_as(
            r#"
            SELECT id, coverage_from, coverage_to, satellite_id, tv_channel_id
            FROM broadcasts WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(row.map(|r| r.into()))
    }

    /// Insert fails if either referenced row does not exist; the foreign
    /// keys are the only integrity check.
    pub async fn create_broadcast(&self, input: &BroadcastInput) -> Result<i32> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO broadcasts (coverage_from, coverage_to, satellite_id, tv_channel_id)
            VALUES ($1, $2, $3, $4) RETURNING id
            "#,
        )
        .bind(input.coverage_from)
        .bind(input.coverage_to)
        .bind(input.satellite_id)
        .bind(input.tv_channel_id)
        .fetch_one(&*self.pool)
        .await?;

        Ok(id)
    }

    pub async fn update_broadcast(&self, id: i32, input: &BroadcastInput) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE broadcasts
            SET coverage_from = $1, coverage_to = $2, satellite_id = $3, tv_channel_id = $4
            WHERE id = $5
            "#,
        )
        .bind(input.coverage_from)
        .bind(input.coverage_to)
        .bind(input.satellite_id)
        .bind(input.tv_channel_id)
        .bind(id)
        .execute(&*self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete_broadcast(&self, id: i32) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM broadcasts WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&*self.pool)
        .await?;

        Ok(())
    }
}

// Helper structs for sqlx query_as
#[derive(sqlx::FromRow)]
struct SatelliteRow {
    id: i32,
    name: String,
    lifetime: i32,
    orbit_radius: f64,
}

impl From<SatelliteRow> for Satellite {
    fn from(r: SatelliteRow) -> Self {
        Satellite {
            id: r.id,
            name: r.name,
            lifetime: r.lifetime,
            orbit_radius: r.orbit_radius,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TvChannelRow {
    id: i32,
    name: String,
    language: String,
    specifics: String,
    company: String,
}

impl From<TvChannelRow> for TvChannel {
    fn from(r: TvChannelRow) -> Self {
        TvChannel {
            id: r.id,
            name: r.name,
            language: r.language,
            specifics: r.specifics,
            company: r.company,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BroadcastRow {
    id: i32,
    coverage_from: f64,
    coverage_to: f64,
    satellite_id: i32,
    tv_channel_id: i32,
}

impl From<BroadcastRow> for Broadcast {
    fn from(r: BroadcastRow) -> Self {
        Broadcast {
            id: r.id,
            coverage_from: r.coverage_from,
            coverage_to: r.coverage_to,
            satellite_id: r.satellite_id,
            tv_channel_id: r.tv_channel_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satellite_row_maps_all_columns() {
        let row = SatelliteRow {
            id: 4,
            name: "Astra 1M".to_string(),
            lifetime: 15,
            orbit_radius: 42164.0,
        };
        let sat: Satellite = row.into();
        assert_eq!(sat.id, 4);
        assert_eq!(sat.name, "Astra 1M");
        assert_eq!(sat.lifetime, 15);
        assert_eq!(sat.orbit_radius, 42164.0);
    }

    #[test]
    fn broadcast_row_keeps_foreign_keys() {
        let row = BroadcastRow {
            id: 1,
            coverage_from: -10.0,
            coverage_to: 60.0,
            satellite_id: 4,
            tv_channel_id: 9,
        };
        let broadcast: Broadcast = row.into();
        assert_eq!(broadcast.satellite_id, 4);
        assert_eq!(broadcast.tv_channel_id, 9);
    }
}
