//! Tunable fiscal constants and the process-wide settings holder.

use std::sync::{Arc, PoisonError, RwLock};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::{FactureError, ValidationError, join_errors};

/// Legal minimum of the fiscal stamp duty, in currency units.
pub const STAMP_DUTY_FLOOR: Decimal = dec!(5);

/// What to do with a discount value outside its meaningful range
/// (percentage outside 0–100, negative fixed amount).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountPolicy {
    /// Bring the value back into range.
    #[default]
    Clamp,
    /// Fail with [`FactureError::Discount`].
    Reject,
}

/// Snapshot of the fiscal rates used by every calculation.
///
/// Rates are percentages (`19` means 19%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiscalConfiguration {
    /// Standard VAT rate.
    pub standard_vat_rate: Decimal,
    /// Reduced VAT rate.
    pub reduced_vat_rate: Decimal,
    /// Stamp duty rate applied to the TTC total.
    pub stamp_duty_rate: Decimal,
    /// Upper bound of the stamp duty.
    pub stamp_duty_cap: Decimal,
    /// Rate used by [`compute_withholding`](super::compute_withholding).
    pub default_withholding_rate: Decimal,
    /// Handling of out-of-range discounts.
    pub discount_policy: DiscountPolicy,
}

impl Default for FiscalConfiguration {
    fn default() -> Self {
        Self {
            standard_vat_rate: dec!(19),
            reduced_vat_rate: dec!(9),
            stamp_duty_rate: dec!(1),
            stamp_duty_cap: dec!(2500),
            default_withholding_rate: Decimal::ZERO,
            discount_policy: DiscountPolicy::Clamp,
        }
    }
}

impl FiscalConfiguration {
    /// The fixed legal minimum of the stamp duty.
    pub fn stamp_duty_floor(&self) -> Decimal {
        STAMP_DUTY_FLOOR
    }

    /// Check the configuration for inconsistent values.
    /// Returns all errors (not just the first).
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        let rates = [
            ("standard_vat_rate", self.standard_vat_rate),
            ("reduced_vat_rate", self.reduced_vat_rate),
            ("stamp_duty_rate", self.stamp_duty_rate),
            ("default_withholding_rate", self.default_withholding_rate),
        ];
        for (field, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED {
                errors.push(ValidationError::new(
                    field,
                    format!("rate {rate} must be between 0 and 100"),
                ));
            }
        }

        if self.stamp_duty_cap < STAMP_DUTY_FLOOR {
            errors.push(ValidationError::new(
                "stamp_duty_cap",
                format!(
                    "cap {} must not be below the legal floor {STAMP_DUTY_FLOOR}",
                    self.stamp_duty_cap
                ),
            ));
        }

        errors
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    #[cfg(feature = "settings")]
    pub fn from_json(json: &str) -> Result<Self, FactureError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| FactureError::Config(format!("invalid settings JSON: {e}")))?;
        let errors = config.validate();
        if !errors.is_empty() {
            return Err(FactureError::Validation(join_errors(&errors)));
        }
        Ok(config)
    }

    /// Serialize the configuration to pretty-printed JSON.
    #[cfg(feature = "settings")]
    pub fn to_json(&self) -> Result<String, FactureError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FactureError::Config(format!("cannot serialize settings: {e}")))
    }
}

/// Builder for [`FiscalConfiguration`], starting from the defaults.
#[derive(Debug, Clone, Default)]
pub struct FiscalConfigurationBuilder {
    config: FiscalConfiguration,
}

impl FiscalConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard_vat_rate(mut self, rate: Decimal) -> Self {
        self.config.standard_vat_rate = rate;
        self
    }

    pub fn reduced_vat_rate(mut self, rate: Decimal) -> Self {
        self.config.reduced_vat_rate = rate;
        self
    }

    pub fn stamp_duty_rate(mut self, rate: Decimal) -> Self {
        self.config.stamp_duty_rate = rate;
        self
    }

    pub fn stamp_duty_cap(mut self, cap: Decimal) -> Self {
        self.config.stamp_duty_cap = cap;
        self
    }

    pub fn default_withholding_rate(mut self, rate: Decimal) -> Self {
        self.config.default_withholding_rate = rate;
        self
    }

    pub fn discount_policy(mut self, policy: DiscountPolicy) -> Self {
        self.config.discount_policy = policy;
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<FiscalConfiguration, FactureError> {
        let errors = self.config.validate();
        if !errors.is_empty() {
            return Err(FactureError::Validation(join_errors(&errors)));
        }
        Ok(self.config)
    }
}

/// Shared holder for the current [`FiscalConfiguration`].
///
/// Readers take an immutable snapshot with [`snapshot`](Self::snapshot) and keep
/// using it for the whole calculation; [`update`](Self::update) swaps in a new
/// snapshot without affecting calculations already in flight.
#[derive(Debug, Clone, Default)]
pub struct FiscalSettings {
    current: Arc<RwLock<Arc<FiscalConfiguration>>>,
}

impl FiscalSettings {
    pub fn new(config: FiscalConfiguration) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(config))),
        }
    }

    /// The configuration in effect right now.
    pub fn snapshot(&self) -> Arc<FiscalConfiguration> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the configuration. Invalid configurations are refused and the
    /// previous snapshot stays in effect.
    pub fn update(&self, config: FiscalConfiguration) -> Result<(), FactureError> {
        let errors = config.validate();
        if !errors.is_empty() {
            return Err(FactureError::Validation(join_errors(&errors)));
        }

        info!(
            standard_vat_rate = %config.standard_vat_rate,
            reduced_vat_rate = %config.reduced_vat_rate,
            stamp_duty_rate = %config.stamp_duty_rate,
            stamp_duty_cap = %config.stamp_duty_cap,
            "fiscal settings updated"
        );

        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(config);
        Ok(())
    }
}
