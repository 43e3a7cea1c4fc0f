//! Console front end for one conversion: runs the builder and turns the
//! outcome into the printed summary plus a success flag.

use tracing::error;

use icoforge_core::{BuildReport, IconError};

use crate::config::IconConfig;

/// Convert `config.source` into `config.destination`, printing the outcome.
///
/// Returns `false` on any conversion failure; never panics for one.
pub fn create_ico(config: &IconConfig) -> bool {
    match config.builder().build(&config.source, &config.destination) {
        Ok(report) => {
            println!("{}", success_message(&report));
            true
        }
        Err(e) => {
            error!("Conversion failed: {e:?}");
            println!("{}", failure_message(&e));
            false
        }
    }
}

pub fn success_message(report: &BuildReport) -> String {
    format!(
        "✓ Successfully created {}\n  Sizes included: {}",
        report.destination.display(),
        report.sizes_label()
    )
}

pub fn failure_message(error: &IconError) -> String {
    format!("✗ Error: {error}")
}
