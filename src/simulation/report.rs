use crate::card::{DeckError, ShuffleKind};
use crate::simulation::decompose::{decompose_with_cap, Decomposition};
use crate::simulation::order::closed_form_restoration;
use crate::simulation::restore::{restoration_count_with_cap, Restoration};
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Everything the engine knows about one deck size
#[derive(Debug, Clone, Serialize)]
pub struct SizeReport {
    pub size: usize,
    pub out_restoration: Restoration,
    pub in_restoration: Restoration,
    pub out_closed_form: Option<usize>,
    pub in_closed_form: Option<usize>,
    /// `None` when no restoring split was found within the cap
    pub decomposition: Option<Decomposition>,
}

impl SizeReport {
    pub fn build(size: usize, cap: usize) -> Result<Self, DeckError> {
        Ok(SizeReport {
            size,
            out_restoration: restoration_count_with_cap(size, ShuffleKind::Out, cap)?,
            in_restoration: restoration_count_with_cap(size, ShuffleKind::In, cap)?,
            out_closed_form: closed_form_restoration(size, ShuffleKind::Out),
            in_closed_form: closed_form_restoration(size, ShuffleKind::In),
            decomposition: decompose_with_cap(size, cap)?,
        })
    }

    /// Whether both simulated counts are exact and match number theory
    pub fn consistent(&self) -> bool {
        self.out_restoration.exact() == self.out_closed_form
            && self.in_restoration.exact() == self.in_closed_form
    }
}

/// Saved sweep, with metadata
#[derive(Debug, Serialize)]
pub struct SweepReport {
    pub generated_at: String,
    pub restore_cap: usize,
    pub sizes: Vec<SizeReport>,
}

/// Build reports for each size in parallel. `on_done` runs once per size,
/// from worker threads.
pub fn sweep<F>(sizes: &[usize], cap: usize, on_done: F) -> Result<Vec<SizeReport>, DeckError>
where
    F: Fn(&SizeReport) + Sync,
{
    sizes
        .par_iter()
        .map(|&size| {
            let report = SizeReport::build(size, cap)?;
            on_done(&report);
            Ok(report)
        })
        .collect()
}

/// Save a sweep to a timestamped JSON file, returning the filename
pub fn save_report(sizes: Vec<SizeReport>, cap: usize) -> Result<String, ReportError> {
    let now = chrono::Local::now();
    let filename = format!("faro_report_{}.json", now.format("%Y%m%d_%H%M%S"));

    let report = SweepReport {
        generated_at: now.to_rfc3339(),
        restore_cap: cap,
        sizes,
    };
    let content = serde_json::to_string_pretty(&report)?;
    std::fs::write(&filename, content)?;

    log::info!("saved {} size reports to {}", report.sizes.len(), filename);
    Ok(filename)
}
