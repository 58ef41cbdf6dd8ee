//! # PostgreSQL Car Repository
//!
//! PostgreSQL implementation of [`CarRepository`].
//!
//! The descriptive record is mapped to flat columns. Only authoritative
//! fields are persisted: derived enrichment has no columns. Ids come from a
//! `BIGSERIAL` sequence, which never reuses a value after deletion.

use crate::domain::entities::Car;
use crate::domain::value_objects::{CarId, Condition, Details, Location, Manufacturer};
use crate::infrastructure::persistence::traits::{
    CarRepository, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;

const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS cars (
    id              BIGSERIAL PRIMARY KEY,
    condition       TEXT NOT NULL,
    manufacturer_code INTEGER NOT NULL,
    manufacturer_name TEXT NOT NULL,
    model           TEXT NOT NULL,
    body            TEXT NOT NULL,
    mileage         INTEGER NOT NULL,
    external_color  TEXT NOT NULL,
    engine          TEXT NOT NULL,
    fuel_type       TEXT NOT NULL,
    model_year      INTEGER NOT NULL,
    production_year INTEGER NOT NULL,
    number_of_doors INTEGER NOT NULL,
    lat             DOUBLE PRECISION NOT NULL,
    lon             DOUBLE PRECISION NOT NULL,
    created_at      TIMESTAMPTZ NOT NULL,
    modified_at     TIMESTAMPTZ NOT NULL
)";

const COLUMNS: &str = "id, condition, manufacturer_code, manufacturer_name, model, body, \
     mileage, external_color, engine, fuel_type, model_year, production_year, \
     number_of_doors, lat, lon, created_at, modified_at";

/// PostgreSQL implementation of [`CarRepository`].
#[derive(Debug, Clone)]
pub struct PostgresCarRepository {
    pool: PgPool,
}

impl PostgresCarRepository {
    /// Creates a repository over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the database and creates the schema if needed.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Connection`] if the database is
    /// unreachable.
    pub async fn connect(url: &str, max_connections: u32) -> RepositoryResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| RepositoryError::connection(e.to_string()))?;

        sqlx::query(SCHEMA)
            .execute(&pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl CarRepository for PostgresCarRepository {
    async fn create(&self, mut car: Car) -> RepositoryResult<Car> {
        let row = sqlx::query(
            "INSERT INTO cars (condition, manufacturer_code, manufacturer_name, model, body, \
             mileage, external_color, engine, fuel_type, model_year, production_year, \
             number_of_doors, lat, lon, created_at, modified_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, now(), now()) \
             RETURNING id, created_at, modified_at",
        )
        .bind(car.condition.to_string())
        .bind(car.details.manufacturer.code)
        .bind(&car.details.manufacturer.name)
        .bind(&car.details.model)
        .bind(&car.details.body)
        .bind(car.details.mileage)
        .bind(&car.details.external_color)
        .bind(&car.details.engine)
        .bind(&car.details.fuel_type)
        .bind(car.details.model_year)
        .bind(car.details.production_year)
        .bind(car.details.number_of_doors)
        .bind(car.location.lat)
        .bind(car.location.lon)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        car.id = Some(CarId::new(
            row.try_get::<i64, _>("id").map_err(map_sqlx_error)?,
        ));
        car.created_at = Some(
            row.try_get::<DateTime<Utc>, _>("created_at")
                .map_err(map_sqlx_error)?,
        );
        car.modified_at = Some(
            row.try_get::<DateTime<Utc>, _>("modified_at")
                .map_err(map_sqlx_error)?,
        );
        Ok(car)
    }

    async fn get(&self, id: CarId) -> RepositoryResult<Option<Car>> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM cars WHERE id = $1"))
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(|r| car_from_row(&r)).transpose()
    }

    async fn update(&self, id: CarId, mut car: Car) -> RepositoryResult<Option<Car>> {
        let row = sqlx::query(
            "UPDATE cars SET condition = $1, manufacturer_code = $2, manufacturer_name = $3, \
             model = $4, body = $5, mileage = $6, external_color = $7, engine = $8, \
             fuel_type = $9, model_year = $10, production_year = $11, number_of_doors = $12, \
             lat = $13, lon = $14, modified_at = now() \
             WHERE id = $15 RETURNING created_at, modified_at",
        )
        .bind(car.condition.to_string())
        .bind(car.details.manufacturer.code)
        .bind(&car.details.manufacturer.name)
        .bind(&car.details.model)
        .bind(&car.details.body)
        .bind(car.details.mileage)
        .bind(&car.details.external_color)
        .bind(&car.details.engine)
        .bind(&car.details.fuel_type)
        .bind(car.details.model_year)
        .bind(car.details.production_year)
        .bind(car.details.number_of_doors)
        .bind(car.location.lat)
        .bind(car.location.lon)
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        match row {
            Some(r) => {
                car.id = Some(id);
                car.created_at = Some(
                    r.try_get::<DateTime<Utc>, _>("created_at")
                        .map_err(map_sqlx_error)?,
                );
                car.modified_at = Some(
                    r.try_get::<DateTime<Utc>, _>("modified_at")
                        .map_err(map_sqlx_error)?,
                );
                Ok(Some(car))
            }
            None => Ok(None),
        }
    }

    async fn list(&self) -> RepositoryResult<Vec<Car>> {
        let rows = sqlx::query(&format!("SELECT {COLUMNS} FROM cars ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(car_from_row).collect()
    }

    async fn delete(&self, id: CarId) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM cars")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        let total: i64 = row.try_get("total").map_err(map_sqlx_error)?;
        Ok(total.unsigned_abs())
    }
}

/// Reconstructs a [`Car`] from a database row.
fn car_from_row(row: &PgRow) -> RepositoryResult<Car> {
    let condition: String = row.try_get("condition").map_err(map_sqlx_error)?;
    let condition: Condition = condition
        .parse()
        .map_err(|e: crate::domain::value_objects::ParseConditionError| {
            RepositoryError::serialization(e.to_string())
        })?;

    let details = Details {
        manufacturer: Manufacturer::new(
            row.try_get("manufacturer_code").map_err(map_sqlx_error)?,
            row.try_get::<String, _>("manufacturer_name")
                .map_err(map_sqlx_error)?,
        ),
        model: row.try_get("model").map_err(map_sqlx_error)?,
        body: row.try_get("body").map_err(map_sqlx_error)?,
        mileage: row.try_get("mileage").map_err(map_sqlx_error)?,
        external_color: row.try_get("external_color").map_err(map_sqlx_error)?,
        engine: row.try_get("engine").map_err(map_sqlx_error)?,
        fuel_type: row.try_get("fuel_type").map_err(map_sqlx_error)?,
        model_year: row.try_get("model_year").map_err(map_sqlx_error)?,
        production_year: row.try_get("production_year").map_err(map_sqlx_error)?,
        number_of_doors: row.try_get("number_of_doors").map_err(map_sqlx_error)?,
    };

    let location = Location {
        lat: row.try_get("lat").map_err(map_sqlx_error)?,
        lon: row.try_get("lon").map_err(map_sqlx_error)?,
        address: None,
        city: None,
        state: None,
        zip: None,
    };

    Ok(Car {
        id: Some(CarId::new(
            row.try_get::<i64, _>("id").map_err(map_sqlx_error)?,
        )),
        condition,
        details,
        location,
        price: None,
        created_at: Some(row.try_get("created_at").map_err(map_sqlx_error)?),
        modified_at: Some(row.try_get("modified_at").map_err(map_sqlx_error)?),
    })
}

/// Maps a sqlx error to a [`RepositoryError`].
fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match error {
        sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            RepositoryError::connection(error.to_string())
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            RepositoryError::serialization(error.to_string())
        }
        other => RepositoryError::query(other.to_string()),
    }
}
