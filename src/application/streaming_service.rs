// Streaming dashboard service - Progressive loading over chunked JSON
use crate::application::dashboard_service::DashboardService;
use crate::domain::dashboard::{ChartKind, ChartValues, View};
use crate::domain::metrics::Trend;
use crate::domain::time_range::TimeRange;
use serde::Serialize;
use std::time::Instant;
use tokio::sync::mpsc;

const CHANNEL_CAPACITY: usize = 100;

#[derive(Debug, Clone, Serialize)]
pub struct TileSkeleton {
    pub id: String,
    pub title: String,
    pub unit: String,
    pub precision: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSkeleton {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub unit: Option<String>,
    /// Points the time-series update will carry; unset for breakdown charts
    pub expected_points: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSkeleton {
    pub view: View,
    pub title: String,
    pub range: TimeRange,
    pub tiles: Vec<TileSkeleton>,
    pub charts: Vec<ChartSkeleton>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamMessage {
    Skeleton(DashboardSkeleton),
    TileUpdate {
        id: String,
        value: f64,
        change: f64,
        trend: Trend,
    },
    ChartUpdate {
        id: String,
        values: ChartValues,
    },
    Complete {
        widgets: usize,
        duration_ms: u64,
    },
}

#[derive(Clone)]
pub struct StreamingDashboardService {
    dashboard_service: DashboardService,
}

impl StreamingDashboardService {
    pub fn new(dashboard_service: DashboardService) -> Self {
        Self { dashboard_service }
    }

    /// Send the skeleton first, then one update per widget, then `Complete`.
    pub fn stream_dashboard(&self, view: View, range: TimeRange) -> mpsc::Receiver<StreamMessage> {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let service = self.dashboard_service.clone();

        tokio::spawn(async move {
            if let Err(e) = produce(service, view, range, tx).await {
                tracing::debug!(%view, "Dashboard stream closed early: {}", e);
            }
        });

        rx
    }
}

async fn produce(
    service: DashboardService,
    view: View,
    range: TimeRange,
    tx: mpsc::Sender<StreamMessage>,
) -> Result<(), mpsc::error::SendError<StreamMessage>> {
    let start_time = Instant::now();

    let tiles = service.tiles(view.tile_set()).await.unwrap_or_else(|e| {
        tracing::error!(%view, error = %e, "Error fetching tiles");
        Vec::new()
    });
    let specs = view.charts();

    let mut charts = Vec::with_capacity(specs.len());
    for spec in &specs {
        let expected_points = service.expected_points(spec, range).await.unwrap_or_else(|e| {
            tracing::error!(chart = spec.id, error = %e, "Error sizing chart");
            None
        });
        charts.push(ChartSkeleton {
            id: spec.id.to_string(),
            title: spec.title.to_string(),
            kind: spec.kind,
            unit: spec.unit.map(str::to_string),
            expected_points,
        });
    }

    let skeleton = DashboardSkeleton {
        view,
        title: view.heading(range),
        range,
        tiles: tiles
            .iter()
            .map(|t| TileSkeleton {
                id: t.id.clone(),
                title: t.title.clone(),
                unit: t.unit.clone(),
                precision: t.precision,
            })
            .collect(),
        charts,
    };
    let total_widgets = skeleton.tiles.len() + skeleton.charts.len();
    tx.send(StreamMessage::Skeleton(skeleton)).await?;

    for tile in tiles {
        tx.send(StreamMessage::TileUpdate {
            id: tile.id,
            value: tile.value,
            change: tile.change,
            trend: tile.trend,
        })
        .await?;
    }

    for spec in &specs {
        match service.chart_values(spec, range).await {
            Ok(values) if !values.is_empty() => {
                tx.send(StreamMessage::ChartUpdate {
                    id: spec.id.to_string(),
                    values,
                })
                .await?;
            }
            Ok(_) => {
                tracing::debug!(chart = spec.id, "Skipping chart update without data");
            }
            Err(e) => {
                tracing::error!(chart = spec.id, error = %e, "Error fetching chart data");
            }
        }
    }

    let duration_ms = start_time.elapsed().as_millis() as u64;
    tx.send(StreamMessage::Complete {
        widgets: total_widgets,
        duration_ms,
    })
    .await
}
