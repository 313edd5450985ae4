use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Personal Name Parser
///
/// Splits a free-form personal name into prefix, first, middle, and last
/// name plus suffix, with a confidence score between 0 and 1. Supports the
/// "Last, First Middle" comma convention, honorific prefixes, generational
/// and academic suffixes, grouped initials, and lowercase family-name
/// particles ("van", "de", ...).
///
/// Custom word lists can be stored in the config file; low confidence
/// (<= 0.1) means the parse is unreliable and should be reviewed manually.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// The full name to parse, quoted as a single argument.
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Output the parsed record as JSON instead of the field listing.
    #[arg(short = 'j', long = "json", help_heading = "Display Options")]
    pub json: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Enable debug mode: log output is mirrored to stdout at debug level.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written
    /// to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
