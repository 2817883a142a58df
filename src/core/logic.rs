use crate::config::defaults;
use crate::core::assembler::{self, AssemblyOptions};
use crate::core::eligibility::{self, EligibilityCriteria};
use crate::core::index::{IngestStats, VenueIndex, row_predates};
use crate::core::ranking::{self, RankWindow};
use crate::core::zones::ReportContext;
use crate::errors::{AppError, AppResult};
use crate::models::{IdentityScheme, ReportRow, Row};
use crate::utils::date::display_date;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Resolved parameters of one report run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportParams {
    /// Rows whose dates all predate this are ignored. `None` keeps everything.
    pub cutoff: Option<NaiveDate>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub saturation_weeks: u32,
    pub prox_weeks: u32,
    pub min_rsvps: i64,
    pub min_ror: f64,
    pub per_market_cap: usize,
    pub markets: Vec<String>,
    pub identity: IdentityScheme,
}

impl ReportParams {
    /// Parameters for the given window with every threshold at its default.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            cutoff: None,
            start_date,
            end_date,
            saturation_weeks: defaults::SATURATION_WEEKS,
            prox_weeks: defaults::PROX_WEEKS,
            min_rsvps: defaults::MIN_RSVPS,
            min_ror: defaults::MIN_ROR,
            per_market_cap: defaults::VENUES_PER_MARKET,
            markets: Vec::new(),
            identity: IdentityScheme::default(),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.start_date > self.end_date {
            return Err(AppError::InvalidDateRange {
                start: display_date(self.start_date),
                end: display_date(self.end_date),
            });
        }
        if self.per_market_cap == 0 {
            return Err(AppError::Config(
                "venues per market must be at least 1".to_string(),
            ));
        }
        if !self.min_ror.is_finite() {
            return Err(AppError::Config(format!(
                "minimum ROR must be a number, got {}",
                self.min_ror
            )));
        }
        Ok(())
    }

    pub fn criteria(&self) -> EligibilityCriteria {
        EligibilityCriteria {
            saturation_weeks: self.saturation_weeks,
            ref_date: self.start_date,
            min_rsvps: self.min_rsvps,
            min_ror: self.min_ror,
        }
    }

    pub fn window(&self) -> RankWindow {
        RankWindow {
            start_date: self.start_date,
            end_date: self.end_date,
            prox_weeks: self.prox_weeks,
        }
    }

    pub fn assembly(&self) -> AssemblyOptions {
        AssemblyOptions {
            markets: self.markets.clone(),
            per_market_cap: self.per_market_cap,
        }
    }
}

/// Result of a run: ordered, capped rows per market plus run counters.
#[derive(Debug, Clone)]
pub struct Report {
    pub markets: BTreeMap<String, Vec<ReportRow>>,
    pub stats: IngestStats,
    pub venues: usize,
    pub saturated_zones: usize,
    pub eligible: usize,
    pub proximal: usize,
}

impl Report {
    pub fn total_rows(&self) -> usize {
        self.markets.values().map(Vec::len).sum()
    }
}

/// High-level report pipeline.
pub struct ReportLogic;

impl ReportLogic {
    /// Feed rows into a fresh index, dropping outdated rows first.
    pub fn build_index<I>(rows: I, cutoff: Option<NaiveDate>, scheme: IdentityScheme) -> VenueIndex
    where
        I: IntoIterator<Item = Row>,
    {
        let mut index = VenueIndex::new(scheme);
        for row in rows {
            feed(&mut index, &row, cutoff);
        }
        index
    }

    /// [`build_index`](Self::build_index) over a fallible row source such as
    /// [`RowReader`](crate::input::RowReader). Each row is filtered as soon
    /// as it is read; the first read error aborts.
    pub fn try_build_index<I>(
        rows: I,
        cutoff: Option<NaiveDate>,
        scheme: IdentityScheme,
    ) -> AppResult<VenueIndex>
    where
        I: IntoIterator<Item = AppResult<Row>>,
    {
        let mut index = VenueIndex::new(scheme);
        for row in rows {
            feed(&mut index, &row?, cutoff);
        }
        Ok(index)
    }

    /// rows → dedup → filter → rank → group/cap/render.
    pub fn run<I>(rows: I, params: &ReportParams) -> AppResult<Report>
    where
        I: IntoIterator<Item = Row>,
    {
        params.validate()?;
        let index = Self::build_index(rows, params.cutoff, params.identity);
        Ok(Self::finish(index, params))
    }

    /// [`run`](Self::run) over a fallible row source.
    pub fn try_run<I>(rows: I, params: &ReportParams) -> AppResult<Report>
    where
        I: IntoIterator<Item = AppResult<Row>>,
    {
        params.validate()?;
        let index = Self::try_build_index(rows, params.cutoff, params.identity)?;
        Ok(Self::finish(index, params))
    }

    fn finish(index: VenueIndex, params: &ReportParams) -> Report {
        let stats = index.stats().clone();
        let venues = index.into_venues();

        let ctx = ReportContext::build(&venues, params.start_date);
        let criteria = params.criteria();
        let saturated =
            eligibility::saturated_zones(&venues, criteria.saturation_weeks, criteria.ref_date);
        let eligible = eligibility::filter(&venues, &criteria);
        let ranked = ranking::rank(&eligible, &params.window());
        let markets = assembler::assemble(&ranked, &params.assembly(), &ctx);

        Report {
            markets,
            stats,
            venues: venues.len(),
            saturated_zones: saturated.len(),
            eligible: eligible.len(),
            proximal: ranked.iter().filter(|r| r.proximal).count(),
        }
    }
}

fn feed(index: &mut VenueIndex, row: &Row, cutoff: Option<NaiveDate>) {
    if let Some(c) = cutoff
        && row_predates(row, c)
    {
        index.skip_outdated();
        return;
    }
    index.ingest(row);
}
