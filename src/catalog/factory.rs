use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::utils::sql::DbPool;

pub(crate) fn create_catalog_service(pool: &DbPool) -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository(pool);
    Box::new(CatalogServiceImpl::new(book_repo))
}

#[cfg(test)]
pub(crate) async fn create_test_catalog_service() -> Box<dyn CatalogService> {
    create_catalog_service(&crate::utils::sql::build_test_pool().await)
}
