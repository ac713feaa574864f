use super::domain::MortgageApplication;

/// Per-field validation outcome. One slot per validated field keeps coverage visible
/// at compile time instead of hiding it behind a string-keyed map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub credit_score: Option<String>,
    pub property_price: Option<String>,
    pub down_payment: Option<String>,
    pub income: Option<String>,
    pub assets_under_management: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.credit_score.is_none()
            && self.property_price.is_none()
            && self.down_payment.is_none()
            && self.income.is_none()
            && self.assets_under_management.is_none()
    }

    /// Populated slots as `(field, message)` pairs, in form order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("creditScore", &self.credit_score),
            ("propertyPrice", &self.property_price),
            ("downPayment", &self.down_payment),
            ("income", &self.income),
            ("assetsUnderManagement", &self.assets_under_management),
        ]
        .into_iter()
        .filter_map(|(field, slot)| slot.as_deref().map(|message| (field, message)))
    }
}

/// Check an application snapshot against the domain constraints.
///
/// Every rule runs, no short-circuit. The two down-payment rules share a slot and the
/// later one (exceeds property price) wins when both fire. `points` and `loan_value`
/// carry no runtime constraints.
pub fn validate(application: &MortgageApplication) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if application.credit_score < 300 || application.credit_score > 850 {
        errors.credit_score = Some("Credit score must be between 300 and 850".to_string());
    }

    if application.property_price <= 0.0 {
        errors.property_price = Some("Property price must be positive".to_string());
    }

    if application.down_payment < 0.0 {
        errors.down_payment = Some("Down payment must be positive or zero".to_string());
    }

    if application.down_payment > application.property_price {
        errors.down_payment = Some("Down payment cannot exceed property price".to_string());
    }

    if application.income <= 0.0 {
        errors.income = Some("Income must be positive".to_string());
    }

    if application.assets_under_management < 0.0 {
        errors.assets_under_management =
            Some("Assets under management must be positive or zero".to_string());
    }

    errors
}
