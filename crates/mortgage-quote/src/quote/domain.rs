use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! us_states {
    ($($code:ident),+ $(,)?) => {
        /// Two-letter postal codes accepted by the pricing backend: the fifty states
        /// plus DC, Puerto Rico, and the US Virgin Islands.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum UsState {
            $($code,)+
        }

        impl UsState {
            pub const ALL: &'static [UsState] = &[$(UsState::$code,)+];

            pub const fn code(self) -> &'static str {
                match self {
                    $(UsState::$code => stringify!($code),)+
                }
            }
        }
    };
}

us_states![
    AL, AK, AZ, AR, CA, CO, CT, DE, FL, GA, HI, ID, IL, IN, IA, KS, KY, LA, ME, MD, MA,
    MI, MN, MS, MO, MT, NE, NV, NH, NJ, NM, NY, NC, ND, OH, OK, OR, PA, RI, SC, SD, TN,
    TX, UT, VT, VA, WA, WV, WI, WY, DC, PR, VI,
];

impl FromStr for UsState {
    type Err = UnknownState;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_uppercase();
        UsState::ALL
            .iter()
            .copied()
            .find(|state| state.code() == wanted)
            .ok_or(UnknownState(wanted))
    }
}

impl fmt::Display for UsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown state code '{0}'")]
pub struct UnknownState(pub String);

/// Property categories offered on the application form. Wire values carry the
/// human-readable labels the backend expects ("Single Family", not "SingleFamily").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomeType {
    #[serde(rename = "Single Family")]
    SingleFamily,
    Condo,
    Townhouse,
    #[serde(rename = "Multi-Family")]
    MultiFamily,
    Manufactured,
}

impl HomeType {
    pub const ALL: &'static [HomeType] = &[
        HomeType::SingleFamily,
        HomeType::Condo,
        HomeType::Townhouse,
        HomeType::MultiFamily,
        HomeType::Manufactured,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            HomeType::SingleFamily => "Single Family",
            HomeType::Condo => "Condo",
            HomeType::Townhouse => "Townhouse",
            HomeType::MultiFamily => "Multi-Family",
            HomeType::Manufactured => "Manufactured",
        }
    }
}

impl FromStr for HomeType {
    type Err = UnknownHomeType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        HomeType::ALL
            .iter()
            .copied()
            .find(|home_type| home_type.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownHomeType(wanted.to_string()))
    }
}

impl fmt::Display for HomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown home type '{0}'")]
pub struct UnknownHomeType(pub String);

/// Mutable applicant form state.
///
/// `loan_value` distinguishes the two payload-construction variants: `None` derives
/// the loan as `property_price - down_payment` when the payload is built, `Some`
/// carries a directly entered amount through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageApplication {
    pub credit_score: i32,
    pub state: UsState,
    pub home_type: HomeType,
    pub property_price: f64,
    pub down_payment: f64,
    pub income: f64,
    pub points: f64,
    pub assets_under_management: f64,
    pub loan_value: Option<f64>,
}

impl MortgageApplication {
    /// Loan amount that will be submitted: the direct entry when present, otherwise
    /// derived from price and down payment.
    pub fn effective_loan_value(&self) -> f64 {
        self.loan_value
            .unwrap_or(self.property_price - self.down_payment)
    }
}

impl Default for MortgageApplication {
    fn default() -> Self {
        Self {
            credit_score: 750,
            state: UsState::CA,
            home_type: HomeType::SingleFamily,
            property_price: 500_000.0,
            down_payment: 100_000.0,
            income: 120_000.0,
            points: 0.0,
            assets_under_management: 200_000.0,
            loan_value: None,
        }
    }
}

/// Normalized payload posted to `POST {base_url}/mortgage/calculate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub credit_score: i32,
    pub state: UsState,
    pub home_type: HomeType,
    pub property_price: f64,
    pub down_payment: f64,
    pub income: f64,
    pub points: f64,
    pub assets_under_management: f64,
    pub loan_value: f64,
}

impl QuoteRequest {
    /// Snapshot the application into a wire payload, folding in the loan value.
    pub fn from_application(application: &MortgageApplication) -> Self {
        Self {
            credit_score: application.credit_score,
            state: application.state,
            home_type: application.home_type,
            property_price: application.property_price,
            down_payment: application.down_payment,
            income: application.income,
            points: application.points,
            assets_under_management: application.assets_under_management,
            loan_value: application.effective_loan_value(),
        }
    }
}

/// One priced product returned by the backend. `applied_rules` lists the pricing
/// adjustments the backend used, in the order it applied them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageOption {
    pub mortgage_type: String,
    pub rate: f64,
    pub points: f64,
    pub apr: f64,
    #[serde(default)]
    pub applied_rules: Vec<String>,
}
