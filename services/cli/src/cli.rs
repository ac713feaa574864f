use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use mortgage_quote::config::AppConfig;
use mortgage_quote::error::AppError;
use mortgage_quote::quote::{
    export, validate, MortgageApplication, QuoteClient, QuoteSession, SubmitOutcome,
};
use mortgage_quote::telemetry;

use crate::render;

#[derive(Parser, Debug)]
#[command(
    name = "mortgage-quote",
    about = "Validate a mortgage application and request rate quotes from the pricing backend",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit an application and print the returned mortgage options (default command)
    Quote(QuoteArgs),
    /// Run field validation only, without contacting the backend
    Validate(ApplicationArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuoteArgs {
    #[command(flatten)]
    pub(crate) application: ApplicationArgs,
    /// Override the configured backend base URL
    #[arg(long)]
    pub(crate) base_url: Option<String>,
    /// Also write the option table to this CSV file
    #[arg(long, value_name = "PATH")]
    pub(crate) csv: Option<PathBuf>,
}

/// Applicant fields; anything omitted keeps the form default.
#[derive(Args, Debug, Default)]
pub(crate) struct ApplicationArgs {
    /// Credit score, 300-850
    #[arg(long)]
    pub(crate) credit_score: Option<i32>,
    /// Two-letter state code (for example NY)
    #[arg(long)]
    pub(crate) state: Option<String>,
    /// Home type: Single Family, Condo, Townhouse, Multi-Family, or Manufactured
    #[arg(long)]
    pub(crate) home_type: Option<String>,
    /// Property price in dollars
    #[arg(long)]
    pub(crate) property_price: Option<f64>,
    /// Down payment in dollars
    #[arg(long)]
    pub(crate) down_payment: Option<f64>,
    /// Annual income in dollars
    #[arg(long)]
    pub(crate) income: Option<f64>,
    /// Points, typically in 0.125 increments
    #[arg(long)]
    pub(crate) points: Option<f64>,
    /// Assets under management in dollars
    #[arg(long)]
    pub(crate) assets_under_management: Option<f64>,
    /// Loan value; omit to derive it as property price minus down payment
    #[arg(long)]
    pub(crate) loan_value: Option<f64>,
}

impl ApplicationArgs {
    /// Fold the provided flags into an application snapshot.
    pub(crate) fn apply(&self, application: &mut MortgageApplication) -> Result<(), AppError> {
        if let Some(credit_score) = self.credit_score {
            application.credit_score = credit_score;
        }
        if let Some(state) = &self.state {
            application.state = state
                .parse()
                .map_err(|err| AppError::Argument(format!("{err}")))?;
        }
        if let Some(home_type) = &self.home_type {
            application.home_type = home_type
                .parse()
                .map_err(|err| AppError::Argument(format!("{err}")))?;
        }
        if let Some(property_price) = self.property_price {
            application.property_price = property_price;
        }
        if let Some(down_payment) = self.down_payment {
            application.down_payment = down_payment;
        }
        if let Some(income) = self.income {
            application.income = income;
        }
        if let Some(points) = self.points {
            application.points = points;
        }
        if let Some(assets) = self.assets_under_management {
            application.assets_under_management = assets;
        }
        if let Some(loan_value) = self.loan_value {
            application.loan_value = Some(loan_value);
        }
        Ok(())
    }
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Quote(QuoteArgs::default()));

    match command {
        Command::Quote(args) => run_quote(args).await,
        Command::Validate(args) => run_validate(args),
    }
}

async fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let mut session = QuoteSession::new();
    args.application.apply(session.application_mut())?;

    let base_url = args.base_url.unwrap_or(config.api.base_url);
    let client = QuoteClient::new(base_url);
    info!(base_url = client.base_url(), "submitting mortgage application");

    render::print_request_summary(session.application());

    match session.submit(&client).await {
        SubmitOutcome::Quoted => {
            render::print_options(session.options());
            if let Some(path) = args.csv {
                export::export_to_path(&path, session.options())?;
                println!("Wrote {} option(s) to {}", session.options().len(), path.display());
            }
            Ok(())
        }
        SubmitOutcome::Invalid => {
            render::print_field_errors(session.field_errors());
            Err(AppError::Validation)
        }
        SubmitOutcome::Failed => {
            let message = session
                .api_error()
                .unwrap_or(mortgage_quote::quote::FALLBACK_ERROR)
                .to_string();
            Err(AppError::Quote(mortgage_quote::quote::QuoteError::Rejected(
                message,
            )))
        }
        // A fresh session can never have a request outstanding.
        SubmitOutcome::Pending => Ok(()),
    }
}

fn run_validate(args: ApplicationArgs) -> Result<(), AppError> {
    let mut application = MortgageApplication::default();
    args.apply(&mut application)?;

    let errors = validate(&application);
    if errors.is_empty() {
        println!("Application is valid.");
        return Ok(());
    }

    render::print_field_errors(&errors);
    Err(AppError::Validation)
}
