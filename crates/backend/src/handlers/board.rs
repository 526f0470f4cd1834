use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use contracts::dashboards::d100_simorgh_adoption::AdoptionEntry;
use contracts::domain::a001_catalogue::Service;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_probe_board::{BoardRequest, BoardResponse, ProbeBoard};

use super::AppState;
use crate::dashboards::d100_simorgh_adoption;
use crate::shared::catalogue;
use crate::usecases::u101_probe_board::{BoardExecutor, BoardSink};

/// GET /api/board
///
/// Probes every catalogue cell matching the query filter and returns the
/// painted board. The adoption summary always scans the full catalogue,
/// independent of the filter.
pub async fn get_board(
    State(state): State<AppState>,
    Query(request): Query<BoardRequest>,
) -> Json<BoardResponse> {
    tracing::info!("{} requested: {:?}", ProbeBoard::full_name(), request);

    let catalogue = catalogue::catalogue();
    let sink = Arc::new(BoardSink::for_catalogue(catalogue));

    let executor = BoardExecutor::new(
        Arc::clone(&state.fetcher),
        state.config.probe.max_concurrent,
    );
    let cells = executor.run(catalogue, &request, &sink).await;

    let summary = d100_simorgh_adoption::compute(catalogue);
    d100_simorgh_adoption::render(&sink, &summary);

    let failed = cells
        .iter()
        .filter(|c| c.verdict == contracts::usecases::u101_probe_board::CellVerdict::Fail)
        .count();
    tracing::info!("Board run finished: {} cells probed, {} failing", cells.len(), failed);

    Json(BoardResponse {
        slots: sink.snapshot(),
        cells,
        summary,
        checked_at: Utc::now(),
    })
}

/// GET /api/summary
pub async fn get_summary() -> Json<Vec<AdoptionEntry>> {
    Json(d100_simorgh_adoption::compute(catalogue::catalogue()))
}

/// GET /api/catalogue
pub async fn get_catalogue() -> Json<Vec<Service>> {
    Json(catalogue::catalogue().to_vec())
}
