use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "crewdex",
    version,
    about = "terminal employee-directory browser",
    long_about = "Crewdex fetches a batch of randomly generated employees from a public directory provider and lets you browse them in the terminal: a grid of cards, a detail overlay with next/prev navigation, and a name filter.\n\nExamples:\n  crewdex\n  crewdex -n 24 --nat GB\n  crewdex --config ~/.crewdex/config.yml\n\nTip: Use --config to persist settings and keep CLI invocations short."
)]
pub struct CliArgs {
    #[arg(
        short = 'n',
        long = "count",
        value_name = "N",
        help_heading = "Directory",
        help = "Number of employees to fetch (1-100)."
    )]
    pub count: Option<u32>,

    #[arg(
        long = "nat",
        visible_alias = "nationality",
        value_name = "CODE",
        help_heading = "Directory",
        help = "Provider nationality filter (two-letter code, e.g. US, GB)."
    )]
    pub nationality: Option<String>,

    #[arg(
        long = "endpoint",
        value_name = "URL",
        help_heading = "Directory",
        help = "Directory provider endpoint."
    )]
    pub endpoint: Option<String>,

    #[arg(
        short = 't',
        long = "timeout",
        value_name = "SECONDS",
        help_heading = "HTTP",
        help = "Request timeout in seconds."
    )]
    pub timeout: Option<u64>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.crewdex/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        long = "log-file",
        value_name = "FILE",
        help_heading = "Output",
        help = "Write diagnostics to this file (defaults to ~/.crewdex/crewdex.log)."
    )]
    pub log_file: Option<String>,

    #[arg(
        short = 'v',
        long = "vb",
        visible_alias = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase diagnostic verbosity (-v, -vv)."
    )]
    pub verbose: u8,
}
