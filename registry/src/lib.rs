use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::book::BookRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use kernel::repository::book::BookRepository;
use kernel::repository::health::HealthCheckRepository;

/// Dependency-injection container handed to the router as shared state.
#[derive(Clone)]
pub struct AppRegistry {
    book_repository: Arc<dyn BookRepository>,
    health_check_repository: Arc<dyn HealthCheckRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        Self::from_repositories(
            Arc::new(BookRepositoryImpl::new(pool.clone())),
            Arc::new(HealthCheckRepositoryImpl::new(pool)),
        )
    }

    /// Wires the registry from already constructed repositories; the seam
    /// tests use to inject mocks.
    pub fn from_repositories(
        book_repository: Arc<dyn BookRepository>,
        health_check_repository: Arc<dyn HealthCheckRepository>,
    ) -> Self {
        Self {
            book_repository,
            health_check_repository,
        }
    }

    pub fn book_repository(&self) -> Arc<dyn BookRepository> {
        self.book_repository.clone()
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }
}
