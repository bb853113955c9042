use std::process::exit;

use colored::Colorize;

#[tokio::main]
async fn main() {
    if let Err(message) = crewdex::app::run().await {
        eprintln!(
            "{}{}{} {}",
            "[".bold().white(),
            "ERR".bold().red(),
            "]".bold().white(),
            message
        );
        exit(1);
    }
}
