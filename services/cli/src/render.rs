use mortgage_quote::quote::{format_amount, FieldErrors, MortgageApplication, MortgageOption};

/// Dollar figure with grouped thousands; odd values (negative, non-finite) render
/// raw so a bad flag is still visible before validation reports it.
fn dollars(value: f64) -> String {
    if value.is_finite() && value >= 0.0 {
        format!("${}", format_amount(value.round() as u64))
    } else {
        format!("${value}")
    }
}

pub(crate) fn print_request_summary(application: &MortgageApplication) {
    println!(
        "Quoting a {} loan in {} ({} at {}, {} down, income {})",
        dollars(application.effective_loan_value()),
        application.state,
        application.home_type,
        dollars(application.property_price),
        dollars(application.down_payment),
        dollars(application.income),
    );
}

pub(crate) fn print_options(options: &[MortgageOption]) {
    if options.is_empty() {
        println!("No mortgage options returned.");
        return;
    }

    println!();
    println!(
        "{:<16} {:>9} {:>8} {:>9}",
        "Mortgage Type", "Rate (%)", "Points", "APR (%)"
    );
    for option in options {
        println!(
            "{:<16} {:>9.3} {:>8.3} {:>9.3}",
            option.mortgage_type, option.rate, option.points, option.apr
        );
        for rule in &option.applied_rules {
            println!("    - {rule}");
        }
    }
}

pub(crate) fn print_field_errors(errors: &FieldErrors) {
    eprintln!("The application has validation errors:");
    for (field, message) in errors.entries() {
        eprintln!("  {field}: {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dollars_groups_thousands() {
        assert_eq!(dollars(400_000.0), "$400,000");
        assert_eq!(dollars(0.0), "$0");
    }

    #[test]
    fn dollars_leaves_negative_values_raw() {
        assert_eq!(dollars(-5.0), "$-5");
    }
}
