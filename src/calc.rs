//! Rainwater sustainability calculator.
//!
//! Linear annual/daily water balance for the installation: how much rain
//! the canopy captures versus what the wash bays consume. Inputs are
//! clamped to the same plausibility ranges the original installation sheet
//! uses, never rejected.

/// Calculator inputs. All fields are clamped by [`evaluate`], so any value
/// is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterBalanceInput {
    /// Collecting roof area in square meters (clamped 1..=10 000).
    pub roof_area_m2: f64,
    /// Runoff coefficient of the roof surface (clamped 0.1..=0.98).
    pub runoff_coefficient: f64,
    /// System losses in percent (clamped 0..=50).
    pub loss_percent: f64,
    /// Annual rainfall in millimeters (clamped 200..=4000).
    pub annual_rainfall_mm: f64,
    /// Water used per car wash in liters (clamped 10..=1000).
    pub liters_per_wash: f64,
    /// Washes per day (clamped 1..=1000).
    pub washes_per_day: f64,
}

impl Default for WaterBalanceInput {
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

/// Calculator outputs, all in liters (coverage in percent).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterBalanceReport {
    /// Captured volume per year.
    pub annual_capture_l: f64,
    /// Captured volume per day (annual / 365).
    pub daily_capture_l: f64,
    /// Daily wash demand.
    pub daily_demand_l: f64,
    /// Share of the daily demand covered by capture, capped at 100.
    pub coverage_percent: f64,
}

/// Evaluate the water balance for the given inputs.
///
/// Annual capture is `A * (R/1000) * C * (1 - loss)` cubic meters,
/// converted to liters.
#[must_use]
pub fn evaluate(input: &WaterBalanceInput) -> WaterBalanceReport {
    let area = input.roof_area_m2.clamp(1.0, 10_000.0);
    let runoff = input.runoff_coefficient.clamp(0.1, 0.98);
    let loss = input.loss_percent.clamp(0.0, 50.0) / 100.0;
    let rainfall_m = input.annual_rainfall_mm.clamp(200.0, 4000.0) / 1000.0;

    let annual_capture_l =
        area * rainfall_m * runoff * (1.0 - loss) * 1000.0;
    let daily_capture_l = annual_capture_l / 365.0;

    let daily_demand_l = input.liters_per_wash.clamp(10.0, 1000.0)
        * input.washes_per_day.clamp(1.0, 1000.0);

    let coverage_percent = if daily_demand_l > 0.0 {
        (daily_capture_l / daily_demand_l * 100.0).min(100.0)
    } else {
        0.0
    };

    WaterBalanceReport {
        annual_capture_l,
        daily_capture_l,
        daily_demand_l,
        coverage_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_installation() {
        let report = evaluate(&WaterBalanceInput::default());
        assert!((report.annual_capture_l - 135_360.0).abs() < 1e-6);
        assert!((report.daily_capture_l - 370.849_315).abs() < 1e-3);
        assert!((report.daily_demand_l - 1600.0).abs() < 1e-9);
        // 370.85 / 1600 ≈ 23.2 %
        assert!((report.coverage_percent - 23.178_082).abs() < 1e-3);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        let input = WaterBalanceInput {
            roof_area_m2: -5.0,
            runoff_coefficient: 2.0,
            loss_percent: 90.0,
            annual_rainfall_mm: 10_000.0,
            liters_per_wash: 0.0,
            washes_per_day: 0.0,
        };
        let report = evaluate(&input);
        // 1 m², C=0.98, loss 50 %, 4000 mm
        assert!((report.annual_capture_l - 1960.0).abs() < 1e-9);
        assert!((report.daily_demand_l - 10.0).abs() < 1e-9);
    }

    #[test]
    fn coverage_is_capped_at_100() {
        let input = WaterBalanceInput {
            roof_area_m2: 10_000.0,
            washes_per_day: 1.0,
            liters_per_wash: 10.0,
            ..WaterBalanceInput::default()
        };
        let report = evaluate(&input);
        assert_eq!(report.coverage_percent, 100.0);
    }
}
