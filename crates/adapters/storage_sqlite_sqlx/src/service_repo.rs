//! `SQLite` implementation of [`ServiceRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use printbill_app::ports::ServiceRepository;
use printbill_domain::error::{ConflictError, PrintBillError};
use printbill_domain::id::ServiceId;
use printbill_domain::service::Service;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Service`].
struct Wrapper(Service);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Service> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let variable_pricing: bool = row.try_get("variable_pricing")?;
        let min_price: Option<f64> = row.try_get("min_price")?;
        let max_price: Option<f64> = row.try_get("max_price")?;

        let id = ServiceId::new(id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Service {
            id,
            name,
            variable_pricing,
            min_price,
            max_price,
        }))
    }
}

const INSERT: &str = "INSERT INTO services (id, name, variable_pricing, min_price, max_price) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM services WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM services ORDER BY name, id";
const DELETE_BY_ID: &str = "DELETE FROM services WHERE id = ?";

/// `SQLite`-backed service catalog repository.
pub struct SqliteServiceRepository {
    pool: SqlitePool,
}

impl SqliteServiceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ServiceRepository for SqliteServiceRepository {
    fn create(
        &self,
        service: Service,
    ) -> impl Future<Output = Result<Service, PrintBillError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(service.id.as_str())
                .bind(&service.name)
                .bind(service.variable_pricing)
                .bind(service.min_price)
                .bind(service.max_price)
                .execute(&pool)
                .await
                .map_err(|err| {
                    if matches!(&err, sqlx::Error::Database(db) if db.is_unique_violation()) {
                        PrintBillError::from(ConflictError {
                            entity: "Service",
                            id: service.id.to_string(),
                        })
                    } else {
                        StorageError::from(err).into()
                    }
                })?;

            Ok(service)
        }
    }

    fn get_by_id(
        &self,
        id: &ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, PrintBillError>> + Send {
        let pool = self.pool.clone();
        let id = id.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_str())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, PrintBillError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete(&self, id: &ServiceId) -> impl Future<Output = Result<(), PrintBillError>> + Send {
        let pool = self.pool.clone();
        let id = id.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteServiceRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteServiceRepository::new(db.pool().clone())
    }

    fn poster() -> Service {
        Service::builder()
            .id("42")
            .name("Poster print")
            .variable_pricing(true)
            .min_price(5.0)
            .max_price(100.0)
            .build()
            .unwrap()
    }

    fn id(value: &str) -> ServiceId {
        ServiceId::new(value).unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_service_when_valid() {
        let repo = setup().await;

        repo.create(poster()).await.unwrap();

        let fetched = repo.get_by_id(&id("42")).await.unwrap().unwrap();
        assert_eq!(fetched, poster());
    }

    #[tokio::test]
    async fn should_keep_absent_bounds_absent() {
        let repo = setup().await;
        let service = Service::builder()
            .id("7")
            .name("Custom framing")
            .variable_pricing(true)
            .build()
            .unwrap();

        repo.create(service).await.unwrap();

        let fetched = repo.get_by_id(&id("7")).await.unwrap().unwrap();
        assert!(fetched.variable_pricing);
        assert!(fetched.min_price.is_none());
        assert!(fetched.max_price.is_none());
    }

    #[tokio::test]
    async fn should_return_none_when_service_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(&id("99")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_report_conflict_when_creating_duplicate_id() {
        let repo = setup().await;
        repo.create(poster()).await.unwrap();

        let result = repo.create(poster()).await;
        assert!(matches!(
            result,
            Err(PrintBillError::Conflict(ConflictError { ref id, .. })) if id == "42"
        ));
    }

    #[tokio::test]
    async fn should_list_all_services_ordered_by_name() {
        let repo = setup().await;
        repo.create(poster()).await.unwrap();
        repo.create(
            Service::builder()
                .id("3")
                .name("Business cards")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

        let all = repo.get_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Business cards", "Poster print"]);
    }

    #[tokio::test]
    async fn should_delete_service() {
        let repo = setup().await;
        repo.create(poster()).await.unwrap();

        repo.delete(&id("42")).await.unwrap();

        assert!(repo.get_by_id(&id("42")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_not_fail_when_deleting_unknown_service() {
        let repo = setup().await;
        assert!(repo.delete(&id("nope")).await.is_ok());
    }
}
