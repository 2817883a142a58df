//! Per-market grouping, capping and rendering of ranked venues.

use crate::core::columns::render_row;
use crate::core::ranking::RankedVenue;
use crate::core::zones::ReportContext;
use crate::models::ReportRow;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyOptions {
    /// Market codes to keep. Empty means every market.
    pub markets: Vec<String>,
    pub per_market_cap: usize,
}

impl AssemblyOptions {
    pub fn allows(&self, market: &str) -> bool {
        self.markets.is_empty()
            || self
                .markets
                .iter()
                .any(|m| m.trim().eq_ignore_ascii_case(market.trim()))
    }
}

/// Group `ranked` by market keeping the ranking order inside each group, then
/// cap and render. Markets left without rows are not in the result.
pub fn assemble(
    ranked: &[RankedVenue<'_>],
    options: &AssemblyOptions,
    ctx: &ReportContext,
) -> BTreeMap<String, Vec<ReportRow>> {
    let mut grouped: BTreeMap<String, Vec<ReportRow>> = BTreeMap::new();

    for entry in ranked {
        let market = entry.venue.market();
        if !options.allows(market) {
            continue;
        }

        let rows = grouped.entry(market.to_string()).or_default();
        if rows.len() < options.per_market_cap {
            rows.push(render_row(entry.venue, ctx));
        }
    }

    grouped.retain(|_, rows| !rows.is_empty());
    grouped
}
