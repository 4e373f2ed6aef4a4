
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tokio::task::spawn_blocking;
use tracing::error;

use crate::view::{DraftInput, ViewActor};

/// One row of a seed file: the four form fields, raw. The store-side
/// fields (id, date) are assigned on append like any other submission.
#[derive(Debug, Deserialize)]
struct SeedRow {
    item: String,
    amount: String,
    category: String,
    #[serde(default, rename = "paymentMethod")]
    payment_method: String
}

/// Outcome of a replay: how many rows passed the submission gate and how
/// many the gate rejected. Unparsable rows are logged and skipped, counted
/// in neither bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayOutcome {
    pub accepted: usize,
    pub rejected: usize
}

/// Replays a CSV of form rows through the draft and submission path, as if
/// a user had typed each row into the form and pressed add.
pub async fn replay_csv(path: &Path, view: &ViewActor) -> Result<ReplayOutcome> {
    let rows = read_rows(path.to_path_buf()).await?;
    let mut outcome = ReplayOutcome::default();

    for row in rows {
        view.edit(DraftInput::Item(row.item));
        view.edit(DraftInput::Amount(row.amount));
        view.edit(DraftInput::Category(row.category));
        view.edit(DraftInput::Payment(row.payment_method));

        match view.submit().await {
            Some(true) => outcome.accepted += 1,
            Some(false) => outcome.rejected += 1,
            None => bail!("View task ended during replay")
        }
    }

    Ok(outcome)
}

async fn read_rows(path: PathBuf) -> Result<Vec<SeedRow>> {
    spawn_blocking(move || {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_path(&path)
            .with_context(|| format!("Opening seed file {}", path.display()))?;

        let mut rows = Vec::new();

        for result in reader.deserialize::<SeedRow>() {
            match result {
                Ok(row) => rows.push(row),
                Err(error) => error!("Seed row skipped: {error}")
            }
        }

        Ok(rows)
    })
    .await?
}
