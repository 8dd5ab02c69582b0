use async_trait::async_trait;
use crate::catalog::domain::CatalogResult;

// Command adapts one transport request to one catalog operation
#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> CatalogResult<Response>;
}
