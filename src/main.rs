//! rWorkHours main entrypoint.

use rworkhours::run;
use rworkhours::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
