use serde::{Deserialize, Serialize};

use crate::calc::WaterBalanceInput;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Default inputs for the water-balance calculator.
pub struct CalculatorOptions {
    /// Collecting roof area, m².
    pub roof_area_m2: f32,
    /// Runoff coefficient (fraction of rainfall actually captured).
    pub runoff_coefficient: f32,
    /// First-flush and treatment losses, percent.
    pub loss_percent: f32,
    /// Annual rainfall, millimeters.
    pub annual_rainfall_mm: f32,
    /// Water used per wash, liters.
    pub liters_per_wash: f32,
    /// Washes per day.
    pub washes_per_day: f32,
}

impl CalculatorOptions {
    /// Calculator input with these values.
    #[must_use]
    pub fn to_input(&self) -> WaterBalanceInput {
        WaterBalanceInput {
            roof_area_m2: f64::from(self.roof_area_m2),
            runoff_coefficient: f64::from(self.runoff_coefficient),
            loss_percent: f64::from(self.loss_percent),
            annual_rainfall_mm: f64::from(self.annual_rainfall_mm),
            liters_per_wash: f64::from(self.liters_per_wash),
            washes_per_day: f64::from(self.washes_per_day),
        }
    }
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            roof_area_m2: 100.0,
            runoff_coefficient: 0.8,
            loss_percent: 10.0,
            annual_rainfall_mm: 1880.0,
            liters_per_wash: 80.0,
            washes_per_day: 20.0,
        }
    }
}
