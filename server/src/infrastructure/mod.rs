mod helpers;
mod tracing;

pub use crate::infrastructure::tracing::*;
pub use helpers::*;

pub async fn init_infrastructure() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing()
}
