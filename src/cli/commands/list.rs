use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ReportLogic;
use crate::errors::AppResult;
use crate::input::open_rows;
use crate::ui::messages::{info, warning};
use crate::utils::colors::{colorize_market, colorize_ror};
use crate::utils::date::{parse_user_date, today};
use crate::utils::format_percent;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};

/// Handle the `list` command: print the deduplicated venues.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        input,
        cutoff,
        market,
        identity,
    } = cmd
    {
        let path = expand_tilde(input);
        let cutoff = match cutoff {
            Some(s) => parse_user_date(s)?,
            None => cfg.cutoff_date(today()),
        };
        let scheme = identity.unwrap_or(cfg.identity_scheme);

        let rows = open_rows(&path)?;
        let index = ReportLogic::try_build_index(rows, Some(cutoff), scheme)?;

        let mut table = Table::new(vec![
            Column::left("MKT"),
            Column::right("LOC#"),
            Column::left("Zone"),
            Column::left("Restaurant"),
            Column::left("City"),
            Column::right("Jobs"),
            Column::right("Avg RSVPs"),
            Column::right("ROR%"),
            Column::right("Avg ROR%"),
            Column::left("Last session"),
        ]);

        for venue in index.venues() {
            if let Some(m) = market
                && !m.trim().eq_ignore_ascii_case(venue.market())
            {
                continue;
            }

            let latest = venue.latest_job();
            table.add_row(vec![
                colorize_market(venue.market()),
                venue.loc_num().to_string(),
                venue.zone().to_string(),
                venue.restaurant().to_string(),
                venue.city().to_string(),
                venue.jobs().len().to_string(),
                venue.average_rsvps().to_string(),
                colorize_ror(latest.ror(), &format_percent(latest.ror()), cfg.min_ror),
                format_percent(venue.average_ror()),
                venue.last_session().format("%Y-%m-%d %H:%M").to_string(),
            ]);
        }

        if table.rows.is_empty() {
            warning("No venues found.");
        } else {
            print!("{}", table.render());
        }

        let stats = index.stats();
        info(format!(
            "{} venues shown, {} rows read, {} skipped (identity scheme: {}).",
            table.rows.len(),
            stats.rows_seen,
            stats.skipped(),
            scheme.as_str()
        ));
    }
    Ok(())
}
