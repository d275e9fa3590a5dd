//! Shared helper functions for CLI commands

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::GlobalOpts;
use crate::core::{load_approaches, load_neos, NeoDatabase};

/// Load both catalogs and build the linked database.
pub fn load_database(global: &GlobalOpts) -> Result<NeoDatabase> {
    let neos = load_neos(&global.neofile).into_diagnostic()?;
    let approaches = load_approaches(&global.cadfile).into_diagnostic()?;
    if global.verbose {
        eprintln!(
            "{} Loaded {} NEOs and {} close approaches",
            style("→").blue(),
            neos.len(),
            approaches.len()
        );
    }
    NeoDatabase::new(neos, approaches).into_diagnostic()
}
