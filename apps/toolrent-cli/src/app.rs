//! # Counter Session
//!
//! Drives one checkout (interactive or from flags) and reports the result.
//!
//! ## Interactive Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Enter tool code (e.g., LADW, CHNS, JAKD, JAKR): ladw                   │
//! │  Enter rental day count: 3                                              │
//! │  Enter discount percent (0-100): 10                                     │
//! │  Enter checkout date (mm/dd/yyyy): 07/02/2020                           │
//! │                                                                         │
//! │  Rental Agreement:                                                      │
//! │  Tool code: LADW                                                        │
//! │  ...                                                                    │
//! │                                                                         │
//! │  Any failure stops the session with "Error: <message>".                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! I/O and serialization failures are returned as `Err`; everything the
//! clerk caused is printed and reported as `Ok(false)`.

use std::io::{BufRead, Write};

use toolrent_core::validation::normalize_tool_code;
use toolrent_core::{CheckoutService, RentalAgreement};
use tracing::{debug, warn};

use crate::config::OutputFormat;
use crate::error::CliError;
use crate::input::{
    parse_checkout_date, parse_discount_percent, parse_rental_days, read_field, CheckoutRequest,
    RawCheckoutInput,
};
use crate::presenter::{render_agreement, render_catalog, AgreementDocument};

pub const TOOL_CODE_PROMPT: &str = "Enter tool code (e.g., LADW, CHNS, JAKD, JAKR): ";
pub const RENTAL_DAYS_PROMPT: &str = "Enter rental day count: ";
pub const DISCOUNT_PROMPT: &str = "Enter discount percent (0-100): ";
pub const CHECKOUT_DATE_PROMPT: &str = "Enter checkout date (mm/dd/yyyy): ";

/// One counter session against a checkout service.
pub struct Session<'a> {
    service: &'a CheckoutService,
    format: OutputFormat,
}

impl<'a> Session<'a> {
    pub fn new(service: &'a CheckoutService, format: OutputFormat) -> Self {
        Session { service, format }
    }

    /// Prompts for the four values, prices the rental and prints the result.
    ///
    /// Prompts are only written in text mode so JSON output stays parseable.
    pub fn run_interactive<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut out: W,
    ) -> Result<bool, CliError> {
        let result = self
            .prompt_request(&mut input, &mut out)
            .and_then(|request| self.price(&request));
        self.report(result, &mut out)
    }

    /// Prices a rental from already-collected raw values.
    pub fn run_once<W: Write>(&self, raw: &RawCheckoutInput, mut out: W) -> Result<bool, CliError> {
        let result = raw
            .parse()
            .map_err(CliError::from)
            .and_then(|request| self.price(&request));
        self.report(result, &mut out)
    }

    /// Prints the catalog.
    pub fn list_tools<W: Write>(&self, mut out: W) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Text => out.write_all(render_catalog(self.service.catalog()).as_bytes())?,
            OutputFormat::Json => {
                let tools: Vec<_> = self.service.catalog().iter().collect();
                serde_json::to_writer_pretty(&mut out, &tools)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Reads and parses fields one prompt at a time, stopping at the first
    /// malformed value.
    fn prompt_request<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> Result<CheckoutRequest, CliError> {
        let tool_code = self.ask(input, out, TOOL_CODE_PROMPT, "tool code")?;
        let rental_days =
            parse_rental_days(&self.ask(input, out, RENTAL_DAYS_PROMPT, "rental day count")?)?;
        let discount_percent =
            parse_discount_percent(&self.ask(input, out, DISCOUNT_PROMPT, "discount percent")?)?;
        let checkout_date =
            parse_checkout_date(&self.ask(input, out, CHECKOUT_DATE_PROMPT, "checkout date")?)?;

        Ok(CheckoutRequest {
            tool_code: normalize_tool_code(&tool_code),
            rental_days,
            discount_percent,
            checkout_date,
        })
    }

    fn ask<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
        prompt: &str,
        field: &'static str,
    ) -> Result<String, CliError> {
        self.prompt(out, prompt)?;
        read_field(input, field)
    }

    fn prompt<W: Write>(&self, out: &mut W, prompt: &str) -> Result<(), CliError> {
        if self.format == OutputFormat::Text {
            out.write_all(prompt.as_bytes())?;
            out.flush()?;
        }
        Ok(())
    }

    fn price(&self, request: &CheckoutRequest) -> Result<RentalAgreement, CliError> {
        debug!(?request, "checkout requested");
        let agreement = self.service.checkout(
            &request.tool_code,
            request.rental_days,
            request.discount_percent,
            request.checkout_date,
        )?;
        Ok(agreement)
    }

    fn report<W: Write>(
        &self,
        result: Result<RentalAgreement, CliError>,
        out: &mut W,
    ) -> Result<bool, CliError> {
        let success = match result {
            Ok(agreement) => {
                match self.format {
                    OutputFormat::Text => {
                        writeln!(out)?;
                        writeln!(out, "Rental Agreement:")?;
                        out.write_all(render_agreement(&agreement).as_bytes())?;
                    }
                    OutputFormat::Json => {
                        serde_json::to_writer_pretty(&mut *out, &AgreementDocument::from(&agreement))?;
                        writeln!(out)?;
                    }
                }
                true
            }
            Err(err) if err.is_user_error() => {
                warn!(code = ?err.code(), error = %err, "checkout rejected");
                err.write_to(self.format, &mut *out)?;
                false
            }
            Err(err) => return Err(err),
        };

        out.flush()?;
        Ok(success)
    }
}
