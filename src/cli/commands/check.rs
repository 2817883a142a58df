use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::input::{open_rows, required_columns};
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Handle the `check` command: header validation, then a row count.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Check { input } = cmd {
        let path = expand_tilde(input);

        info(format!("Validating file headers: {}", path.display()));
        let count = open_rows(&path)?.try_fold(0usize, |n, row| row.map(|_| n + 1))?;

        success(format!(
            "All {} expected columns present, {} data rows.",
            required_columns().len(),
            count
        ));
    }
    Ok(())
}
