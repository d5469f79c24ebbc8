//! # Agreement Presenter
//!
//! Renders agreements and the catalog for the counter.
//!
//! ## Printed Agreement
//! ```text
//! Tool code: LADW
//! Tool type: Ladder
//! Tool brand: Werner
//! Rental days: 3
//! Check out date: 07/02/20
//! Due date: 07/05/20
//! Daily rental charge: $1.99
//! Charge days: 2
//! Pre-discount charge: $3.98
//! Discount percent: 10%
//! Discount amount: $0.40
//! Final charge: $3.59
//! ```

use chrono::NaiveDate;
use serde::Serialize;
use toolrent_core::{RentalAgreement, ToolCatalog, ToolSpec};

/// chrono pattern for dates on the printed agreement.
pub const AGREEMENT_DATE_FORMAT: &str = "%m/%d/%y";

fn short_date(date: NaiveDate) -> String {
    date.format(AGREEMENT_DATE_FORMAT).to_string()
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// One line per field, each ending in `\n`.
pub fn render_agreement(agreement: &RentalAgreement) -> String {
    let lines = [
        format!("Tool code: {}", agreement.tool_code),
        format!("Tool type: {}", agreement.tool_type),
        format!("Tool brand: {}", agreement.brand),
        format!("Rental days: {}", agreement.rental_days),
        format!("Check out date: {}", short_date(agreement.checkout_date)),
        format!("Due date: {}", short_date(agreement.due_date)),
        format!("Daily rental charge: {}", agreement.daily_charge),
        format!("Charge days: {}", agreement.charge_days),
        format!("Pre-discount charge: {}", agreement.pre_discount_charge),
        format!("Discount percent: {}%", agreement.discount_percent),
        format!("Discount amount: {}", agreement.discount_amount),
        format!("Final charge: {}", agreement.final_charge),
    ];

    let mut out = String::new();
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Display strings that accompany the cent amounts in JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct FormattedAmounts {
    pub checkout_date: String,
    pub due_date: String,
    pub daily_charge: String,
    pub pre_discount_charge: String,
    pub discount_percent: String,
    pub discount_amount: String,
    pub final_charge: String,
}

/// JSON document for a priced agreement.
#[derive(Debug, Clone, Serialize)]
pub struct AgreementDocument<'a> {
    #[serde(flatten)]
    pub agreement: &'a RentalAgreement,
    pub formatted: FormattedAmounts,
}

impl<'a> From<&'a RentalAgreement> for AgreementDocument<'a> {
    fn from(agreement: &'a RentalAgreement) -> Self {
        AgreementDocument {
            agreement,
            formatted: FormattedAmounts {
                checkout_date: short_date(agreement.checkout_date),
                due_date: short_date(agreement.due_date),
                daily_charge: agreement.daily_charge.to_string(),
                pre_discount_charge: agreement.pre_discount_charge.to_string(),
                discount_percent: format!("{}%", agreement.discount_percent),
                discount_amount: agreement.discount_amount.to_string(),
                final_charge: agreement.final_charge.to_string(),
            },
        }
    }
}

/// Fixed-width catalog table.
pub fn render_catalog(catalog: &ToolCatalog) -> String {
    let mut out = format!(
        "{:<6}{:<12}{:<8}{:<8}{:<9}{:<9}{}\n",
        "Code", "Type", "Brand", "Daily", "Weekday", "Weekend", "Holiday"
    );
    for tool in catalog.iter() {
        out.push_str(&catalog_row(tool));
    }
    out
}

fn catalog_row(tool: &ToolSpec) -> String {
    format!(
        "{:<6}{:<12}{:<8}{:<8}{:<9}{:<9}{}\n",
        tool.code,
        tool.tool_type,
        tool.brand,
        tool.daily_charge.to_string(),
        yes_no(tool.charges.weekday),
        yes_no(tool.charges.weekend),
        yes_no(tool.charges.holiday),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolrent_core::CheckoutService;

    fn ladder_agreement() -> RentalAgreement {
        CheckoutService::default()
            .checkout("LADW", 3, 10, NaiveDate::from_ymd_opt(2020, 7, 2).unwrap())
            .unwrap()
    }

    #[test]
    fn test_render_agreement() {
        let expected = "\
Tool code: LADW
Tool type: Ladder
Tool brand: Werner
Rental days: 3
Check out date: 07/02/20
Due date: 07/05/20
Daily rental charge: $1.99
Charge days: 2
Pre-discount charge: $3.98
Discount percent: 10%
Discount amount: $0.40
Final charge: $3.59
";
        assert_eq!(render_agreement(&ladder_agreement()), expected);
    }

    #[test]
    fn test_zero_discount_renders_zero_amount() {
        let agreement = CheckoutService::default()
            .checkout("JAKD", 6, 0, NaiveDate::from_ymd_opt(2015, 9, 3).unwrap())
            .unwrap();
        let text = render_agreement(&agreement);
        assert!(text.contains("Discount percent: 0%\n"));
        assert!(text.contains("Discount amount: $0.00\n"));
        assert!(text.contains("Final charge: $8.97\n"));
        assert!(text.contains("Due date: 09/09/15\n"));
    }

    #[test]
    fn test_agreement_document_json() {
        let agreement = ladder_agreement();
        let json = serde_json::to_value(AgreementDocument::from(&agreement)).unwrap();

        assert_eq!(json["tool_code"], "LADW");
        assert_eq!(json["charge_days"], 2);
        assert_eq!(json["final_charge"], 359);
        assert_eq!(json["formatted"]["final_charge"], "$3.59");
        assert_eq!(json["formatted"]["due_date"], "07/05/20");
        assert_eq!(json["formatted"]["discount_percent"], "10%");
    }

    #[test]
    fn test_render_catalog() {
        let table = render_catalog(&ToolCatalog::standard());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Code  Type"));
        assert_eq!(lines[1], "CHNS  Chainsaw    Stihl   $1.49   Yes      No       Yes");
        assert_eq!(lines[4], "LADW  Ladder      Werner  $1.99   Yes      Yes      No");
    }
}
