//! Re-evaluates a scenario across the range of one slider.

use clap::ValueEnum;
use thiserror::Error;
use tracing::info;

use equity_core::{FormField, RawInputs, evaluate};

use crate::session::Outcome;

/// The inputs that have a slider next to the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SweepField {
    NewHomePrice,
    AdditionalSavings,
    DebtPayoffPercentage,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SweepField {
    pub fn field(self) -> FormField {
        match self {
            Self::NewHomePrice => FormField::NewHomePrice,
            Self::AdditionalSavings => FormField::AdditionalSavings,
            Self::DebtPayoffPercentage => FormField::DebtPayoffPercentage,
        }
    }

    pub fn default_range(self) -> SliderRange {
        match self {
            Self::NewHomePrice => SliderRange {
                min: 100000.0,
                max: 2000000.0,
                step: 5000.0,
            },
            Self::AdditionalSavings => SliderRange {
                min: 0.0,
                max: 200000.0,
                step: 1000.0,
            },
            Self::DebtPayoffPercentage => SliderRange {
                min: 0.0,
                max: 100.0,
                step: 5.0,
            },
        }
    }
}

/// Upper bound on the number of slider positions in one sweep.
pub const MAX_SWEEP_POINTS: u64 = 100_000;

#[derive(Debug, Error, PartialEq)]
pub enum SweepError {
    #[error("step must be a positive number, got {0}")]
    InvalidStep(f64),

    #[error("range {min}..{max} is empty")]
    EmptyRange { min: f64, max: f64 },

    #[error("range would produce {count} points; at most {max} are allowed", max = MAX_SWEEP_POINTS)]
    TooManyPoints { count: u64 },
}

impl SliderRange {
    /// Slider positions from `min` to `max` inclusive.
    ///
    /// Positions are computed as `min + i * step` so that rounding error does
    /// not accumulate across a long range.
    pub fn values(&self) -> Result<Vec<f64>, SweepError> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(SweepError::InvalidStep(self.step));
        }
        if !(self.min.is_finite() && self.max.is_finite()) || self.min > self.max {
            return Err(SweepError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        let count = ((self.max - self.min) / self.step + 1e-9).floor() + 1.0;
        if !(count <= MAX_SWEEP_POINTS as f64) {
            // `as` saturates, so an infinite count reports as u64::MAX
            return Err(SweepError::TooManyPoints {
                count: count as u64,
            });
        }
        let count = count as usize;
        Ok((0..count).map(|i| self.min + i as f64 * self.step).collect())
    }
}

/// One slider position and the full outcome at that position.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub value: f64,
    pub outcome: Outcome,
}

/// Evaluates `base` once per slider position, changing only `field`.
pub fn sweep(
    base: &RawInputs,
    field: SweepField,
    range: SliderRange,
) -> Result<Vec<SweepPoint>, SweepError> {
    let values = range.values()?;
    info!(
        field = field.field().as_str(),
        points = values.len(),
        "sweeping slider range"
    );

    let mut inputs = base.clone();
    Ok(values
        .into_iter()
        .map(|value| {
            inputs.set(field.field(), value.to_string());
            SweepPoint {
                value,
                outcome: evaluate(&inputs),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_inputs() -> RawInputs {
        let mut raw = RawInputs::starter();
        raw.set(FormField::NewInterestRate, "6.5");
        raw
    }

    #[test]
    fn default_ranges_match_the_sliders() {
        assert_eq!(SweepField::NewHomePrice.default_range().values().unwrap().len(), 381);
        assert_eq!(SweepField::AdditionalSavings.default_range().values().unwrap().len(), 201);
        assert_eq!(SweepField::DebtPayoffPercentage.default_range().values().unwrap().len(), 21);
    }

    #[test]
    fn range_includes_both_ends() {
        let range = SliderRange {
            min: 0.0,
            max: 10.0,
            step: 2.5,
        };
        assert_eq!(range.values().unwrap(), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    }

    #[test]
    fn max_not_on_a_step_is_excluded() {
        let range = SliderRange {
            min: 0.0,
            max: 9.0,
            step: 4.0,
        };
        assert_eq!(range.values().unwrap(), vec![0.0, 4.0, 8.0]);
    }

    #[test]
    fn zero_step_is_rejected() {
        let range = SliderRange {
            min: 0.0,
            max: 10.0,
            step: 0.0,
        };
        assert_eq!(range.values(), Err(SweepError::InvalidStep(0.0)));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let range = SliderRange {
            min: 10.0,
            max: 0.0,
            step: 1.0,
        };
        assert!(matches!(range.values(), Err(SweepError::EmptyRange { .. })));
    }

    #[test]
    fn tiny_step_is_rejected_before_allocating() {
        let range = SliderRange {
            min: 100000.0,
            max: 2000000.0,
            step: 0.01,
        };
        assert_eq!(
            range.values(),
            Err(SweepError::TooManyPoints { count: 190000001 })
        );
    }

    #[test]
    fn huge_range_is_rejected_without_overflow() {
        let range = SliderRange {
            min: 0.0,
            max: 1e300,
            step: 1e-300,
        };
        assert_eq!(
            range.values(),
            Err(SweepError::TooManyPoints { count: u64::MAX })
        );
    }

    #[test]
    fn range_at_the_cap_is_accepted() {
        let range = SliderRange {
            min: 1.0,
            max: MAX_SWEEP_POINTS as f64,
            step: 1.0,
        };
        assert_eq!(range.values().unwrap().len(), MAX_SWEEP_POINTS as usize);
    }

    #[test]
    fn payoff_sweep_frees_more_cash_as_percentage_rises() {
        let points = sweep(
            &valid_inputs(),
            SweepField::DebtPayoffPercentage,
            SweepField::DebtPayoffPercentage.default_range(),
        )
        .unwrap();

        let paid_off: Vec<f64> = points
            .iter()
            .map(|p| p.outcome.as_ref().unwrap().debts_paid_off)
            .collect();
        assert!(paid_off.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(paid_off.first(), Some(&0.0));
        assert_eq!(paid_off.last(), Some(&25000.0));
    }

    #[test]
    fn each_point_equals_a_direct_evaluation() {
        let range = SliderRange {
            min: 600000.0,
            max: 610000.0,
            step: 5000.0,
        };
        let points = sweep(&valid_inputs(), SweepField::NewHomePrice, range).unwrap();

        for point in &points {
            let mut raw = valid_inputs();
            raw.set(FormField::NewHomePrice, point.value.to_string());
            assert_eq!(point.outcome, evaluate(&raw));
        }
    }
}
