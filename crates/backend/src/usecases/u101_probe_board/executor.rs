//! Executor for UseCase u101: traversal, per-cell aggregation, rendering.

use std::sync::Arc;

use chrono::Utc;
use contracts::domain::a001_catalogue::{Environment, Service};
use contracts::enums::{Category, PageKind, Renderer};
use contracts::usecases::u101_probe_board::{BoardRequest, CellReport, CellVerdict, Slot};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use super::classifier::page_status;
use super::fetch_gateway::Fetcher;
use super::media_prober::media_status;
use super::sink::{element_id, label_id, BoardSink};
use super::url_builder::{amp_url, page_url};

/// Probe one eligible cell and aggregate every status contribution into a
/// single verdict.
///
/// Simorgh cells fetch the canonical page and its `.amp` variant; media
/// page types additionally probe the embedded player on both. PAL cells
/// make a single canonical fetch. Contributions are collected in the order
/// canonical page, canonical media, AMP page, AMP media; non-empty ones are
/// joined with `", "`. The verdict is Fail iff the joined message contains
/// the substring `Error`; an empty message is a Pass.
pub async fn probe_cell(
    fetcher: &dyn Fetcher,
    slug: &str,
    kind: PageKind,
    environment: &Environment,
) -> CellReport {
    let url = page_url(slug, &environment.env, &environment.path);
    let is_media = kind.category() == Category::Media;

    let mut statuses: Vec<String> = Vec::new();

    match environment.renderer {
        Renderer::Simorgh => {
            let canonical = fetcher.fetch(&url).await.into_body();
            let amp = fetcher.fetch(&amp_url(&url)).await.into_body();

            statuses.push(page_status(canonical.as_deref(), Renderer::Simorgh, "Canonical"));
            if is_media {
                statuses.push(media_status(fetcher, canonical.as_deref(), false).await);
            }
            statuses.push(page_status(amp.as_deref(), Renderer::Simorgh, "AMP"));
            if is_media {
                statuses.push(media_status(fetcher, amp.as_deref(), true).await);
            }
        }
        Renderer::Pal => {
            let canonical = fetcher.fetch(&url).await.into_body();
            statuses.push(page_status(canonical.as_deref(), Renderer::Pal, "Canonical"));
        }
        // Placeholder renderers are skipped by the traversal and never
        // reach this function
        Renderer::NotApplicable | Renderer::None => {}
    }

    let message = statuses
        .into_iter()
        .filter(|status| !status.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    let verdict = if message.contains("Error") {
        CellVerdict::Fail
    } else {
        CellVerdict::Pass
    };

    CellReport {
        service: slug.to_string(),
        env: environment.env.clone(),
        page_type: kind.code().to_string(),
        renderer: environment.renderer.code().to_string(),
        url,
        message,
        verdict,
        checked_at: Utc::now(),
    }
}

fn render_cell(sink: &BoardSink, slug: &str, kind: PageKind, env: &str, report: &CellReport) {
    let status_slot = match report.verdict {
        CellVerdict::Pass => Slot::text("✓"),
        CellVerdict::Fail => Slot::with_title("✗", report.message.clone()),
    };
    sink.write(&element_id(slug, env, kind, "status"), status_slot);

    let renderer_label = Renderer::from_code(&report.renderer)
        .map(|r| r.link_label())
        .unwrap_or_default();
    sink.write(
        &element_id(slug, env, kind, "renderer"),
        Slot::link(renderer_label, report.url.clone()),
    );
}

/// Runs the board traversal with a bounded probe fan-out.
pub struct BoardExecutor {
    fetcher: Arc<dyn Fetcher>,
    max_concurrent: usize,
}

impl BoardExecutor {
    pub fn new(fetcher: Arc<dyn Fetcher>, max_concurrent: usize) -> Self {
        Self {
            fetcher,
            max_concurrent,
        }
    }

    /// Traverse the catalogue, probe every cell matching the request, and
    /// render verdicts into the sink.
    ///
    /// Cells run concurrently under a semaphore; completion order across
    /// cells is unspecified. A probe never fails the traversal; panicked
    /// tasks are logged and dropped.
    pub async fn run(
        &self,
        catalogue: &[Service],
        request: &BoardRequest,
        sink: &Arc<BoardSink>,
    ) -> Vec<CellReport> {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent.max(1)));
        let mut tasks: JoinSet<CellReport> = JoinSet::new();

        for service in catalogue {
            if let Some(filter) = &request.service {
                if *filter != service.id {
                    continue;
                }
            }
            let slug = service.slug();

            for page_type in &service.page_types {
                let kind = page_type.kind;
                if let Some(filter) = &request.page_type {
                    if *filter != kind.code() {
                        continue;
                    }
                }
                if let Some(filter) = &request.category {
                    if *filter != kind.category().code() {
                        continue;
                    }
                }

                sink.write(&label_id(&slug, kind), Slot::text(kind.display_name()));

                for environment in &page_type.environments {
                    if let Some(filter) = &request.env {
                        if *filter != environment.env {
                            continue;
                        }
                    }
                    if let Some(filter) = &request.renderer {
                        if *filter != environment.renderer.code() {
                            continue;
                        }
                    }
                    if !environment.renderer.is_probeable() {
                        continue;
                    }

                    let fetcher = Arc::clone(&self.fetcher);
                    let semaphore = Arc::clone(&semaphore);
                    let sink = Arc::clone(sink);
                    let slug = slug.clone();
                    let environment = environment.clone();

                    tasks.spawn(async move {
                        let _permit = semaphore.acquire_owned().await.ok();
                        let report =
                            probe_cell(fetcher.as_ref(), &slug, kind, &environment).await;
                        render_cell(&sink, &slug, kind, &environment.env, &report);
                        report
                    });
                }
            }
        }

        let mut cells = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(report) => cells.push(report),
                Err(e) => tracing::error!("Probe task failed: {}", e),
            }
        }
        cells
    }
}
