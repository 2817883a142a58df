use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Report, ReportLogic, ReportParams};
use crate::errors::AppResult;
use crate::export::ReportWriter;
use crate::export::logic::report_dir_name;
use crate::input::open_rows;
use crate::ui::messages::{header, info, set_quiet, success};
use crate::utils::colors::{RESET, YELLOW, colorize_optional};
use crate::utils::date::{display_date, parse_user_date, today};
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// Handle the `report` command
///
/// 1. resolve parameters (command line over config file)
/// 2. validate the input headers
/// 3. stream the rows through the reconciliation pipeline
/// 4. write one file per market
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        input,
        start,
        end,
        out,
        cutoff,
        saturation_weeks,
        prox_weeks,
        min_rsvps,
        min_ror,
        cap,
        markets,
        format,
        identity,
        force,
        quiet,
    } = cmd
    {
        set_quiet(*quiet);

        let start_date = parse_user_date(start)?;
        let end_date = parse_user_date(end)?;
        let cutoff_date = match cutoff {
            Some(s) => parse_user_date(s)?,
            None => cfg.cutoff_date(today()),
        };

        let market_list = split_markets(markets);

        let params = ReportParams {
            cutoff: Some(cutoff_date),
            start_date,
            end_date,
            saturation_weeks: saturation_weeks.unwrap_or(cfg.saturation_weeks),
            prox_weeks: prox_weeks.unwrap_or(cfg.prox_weeks),
            min_rsvps: min_rsvps.unwrap_or(cfg.min_rsvps),
            min_ror: min_ror.unwrap_or(cfg.min_ror),
            per_market_cap: cap.unwrap_or(cfg.venues_per_market),
            markets: if market_list.is_empty() {
                cfg.markets.clone()
            } else {
                market_list
            },
            identity: identity.unwrap_or(cfg.identity_scheme),
        };

        // Bad windows are rejected before the (possibly large) input is read.
        params.validate()?;

        header(format!(
            "Venue report {} → {}",
            display_date(start_date),
            display_date(end_date)
        ));

        let path = expand_tilde(input);
        info(format!(
            "Reading input file: {} (cutoff {})",
            path.display(),
            display_date(cutoff_date)
        ));
        let rows = open_rows(&path)?;

        let report = ReportLogic::try_run(rows, &params)?;
        print_summary(&report);

        let out_dir = out
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| PathBuf::from("."));
        let format = format.unwrap_or(cfg.output_format);

        let written = ReportWriter::write(&report, &out_dir, format, start_date, end_date, *force)?;

        if !written.is_empty() {
            success(format!(
                "{} report file(s) saved in {}",
                written.len(),
                out_dir.join(report_dir_name(start_date, end_date)).display()
            ));
        }
    }
    Ok(())
}

/// Accept `--markets HOU PDX` as well as `--markets HOU,PDX`.
fn split_markets(raw: &[String]) -> Vec<String> {
    raw.iter()
        .flat_map(|m| m.split([',', ' ']))
        .map(|m| m.trim().to_uppercase())
        .filter(|m| !m.is_empty())
        .collect()
}

fn print_summary(report: &Report) {
    let s = &report.stats;

    info(format!(
        "Rows: {} read, {} outdated, {} blank, {} malformed, {} without sessions, {} without identity",
        s.rows_seen,
        colorize_optional(&s.outdated.to_string()),
        colorize_optional(&s.blank.to_string()),
        colorize_optional(&s.malformed.to_string()),
        colorize_optional(&s.no_sessions.to_string()),
        colorize_optional(&s.no_identity.to_string()),
    ));
    info(format!(
        "Venues: {} unique ({} jobs merged, {} duplicate jobs ignored)",
        report.venues, s.jobs_merged, s.duplicate_jobs
    ));
    info(format!(
        "Eligible: {}{}{} ({} saturated zones, {} proximal to last year)",
        YELLOW, report.eligible, RESET, report.saturated_zones, report.proximal
    ));
    for (market, rows) in &report.markets {
        info(format!("  {market}: {} venues", rows.len()));
    }
}
