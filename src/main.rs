//! rVenueReport main entrypoint.

use rvenuereport::run;
use rvenuereport::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
