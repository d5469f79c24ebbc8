//! Command-line arguments.

use clap::Parser;

use crate::config::OutputFormat;
use crate::input::RawCheckoutInput;

/// Tool rental point-of-sale console.
///
/// With no checkout flags the console prompts for each value. Passing
/// `--tool`, `--days`, `--discount` and `--date` prices one rental without
/// prompting.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "toolrent", version, about)]
pub struct Cli {
    /// Tool code (e.g. LADW, CHNS, JAKD, JAKR)
    #[arg(short = 't', long = "tool", requires_all = ["days", "discount", "date"])]
    pub tool: Option<String>,

    /// Rental day count
    #[arg(short = 'd', long = "days", allow_hyphen_values = true, requires = "tool")]
    pub days: Option<String>,

    /// Discount percent (0-100)
    #[arg(short = 'p', long = "discount", allow_hyphen_values = true, requires = "tool")]
    pub discount: Option<String>,

    /// Checkout date (mm/dd/yyyy)
    #[arg(short = 'c', long = "date", requires = "tool")]
    pub date: Option<String>,

    /// Print the tool catalog and exit
    #[arg(long = "list-tools", conflicts_with = "tool")]
    pub list_tools: bool,

    /// Output format (overrides TOOLRENT_OUTPUT)
    #[arg(short = 'f', long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Log filter (overrides TOOLRENT_LOG; RUST_LOG still wins)
    #[arg(long = "log")]
    pub log: Option<String>,
}

impl Cli {
    /// The one-shot checkout values, if all four flags were given.
    pub fn one_shot(&self) -> Option<RawCheckoutInput> {
        match (&self.tool, &self.days, &self.discount, &self.date) {
            (Some(tool), Some(days), Some(discount), Some(date)) => Some(RawCheckoutInput {
                tool_code: tool.clone(),
                rental_days: days.clone(),
                discount_percent: discount.clone(),
                checkout_date: date.clone(),
            }),
            _ => None,
        }
    }
}
