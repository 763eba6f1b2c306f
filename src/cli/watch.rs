use crate::application::filter::{DatasetFilter, SortKey};
use crate::domain::entities::combined_record::CombinedRecord;
use crate::domain::error::DomainError;
use crate::Web3Pulse;
use std::future::Future;
use std::time::Duration;

/// Render the dashboard every `period` until `shutdown` resolves, returning
/// the number of renders. `shutdown` is pinned once and outlives each render.
pub async fn watch<S, R>(
    app: &Web3Pulse,
    filter: &DatasetFilter,
    sort: SortKey,
    limit: Option<usize>,
    period: Duration,
    shutdown: S,
    mut render: R,
) -> usize
where
    S: Future<Output = ()>,
    R: FnMut(Result<Vec<CombinedRecord>, DomainError>),
{
    let mut ticker = tokio::time::interval(period);
    tokio::pin!(shutdown);
    let mut renders = 0;
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                render(app.dashboard(filter, sort, limit).await);
                renders += 1;
            }
            _ = &mut shutdown => break,
        }
    }
    renders
}
