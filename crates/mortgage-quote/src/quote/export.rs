use std::io::Write;
use std::path::Path;

use super::domain::MortgageOption;

/// Write the option table as CSV, one record per option. Rates, points, and APR
/// carry three decimals to match the on-screen table; applied rules collapse into
/// one cell joined with "; ".
pub fn write_options<W: Write>(writer: W, options: &[MortgageOption]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "Mortgage Type",
        "Rate (%)",
        "Points",
        "APR (%)",
        "Applied Rules",
    ])?;

    for option in options {
        csv_writer.write_record([
            option.mortgage_type.as_str(),
            &format!("{:.3}", option.rate),
            &format!("{:.3}", option.points),
            &format!("{:.3}", option.apr),
            &option.applied_rules.join("; "),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn export_to_path(path: &Path, options: &[MortgageOption]) -> Result<(), csv::Error> {
    let file = std::fs::File::create(path)?;
    write_options(file, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_options() -> Vec<MortgageOption> {
        vec![
            MortgageOption {
                mortgage_type: "30-Year Fixed".to_string(),
                rate: 7.5,
                points: 0.25,
                apr: 7.8125,
                applied_rules: vec![
                    "Small Loan Amount (< $500,000): +1.00% to rate".to_string(),
                    "New York State: +0.25 points".to_string(),
                ],
            },
            MortgageOption {
                mortgage_type: "5/1 ARM".to_string(),
                rate: 5.875,
                points: 0.0,
                apr: 6.1,
                applied_rules: vec![],
            },
        ]
    }

    #[test]
    fn writes_header_and_one_record_per_option() {
        let mut buffer = Vec::new();
        write_options(&mut buffer, &sample_options()).expect("writes");
        let text = String::from_utf8(buffer).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Mortgage Type,Rate (%),Points,APR (%),Applied Rules"
        );
        assert!(lines[1].starts_with("30-Year Fixed,7.500,0.250,7.813,"));
        assert!(lines[1].contains("Small Loan Amount"));
        assert_eq!(lines[2], "5/1 ARM,5.875,0.000,6.100,");
    }

    #[test]
    fn rule_cell_joins_with_semicolons() {
        let mut buffer = Vec::new();
        write_options(&mut buffer, &sample_options()).expect("writes");
        let text = String::from_utf8(buffer).expect("utf8");
        assert!(text.contains("to rate; New York State"));
    }

    #[test]
    fn empty_option_list_is_just_the_header() {
        let mut buffer = Vec::new();
        write_options(&mut buffer, &[]).expect("writes");
        let text = String::from_utf8(buffer).expect("utf8");
        assert_eq!(text.lines().count(), 1);
    }
}
