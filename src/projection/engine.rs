//! Projection engine dispatching plans to the simulators

use super::goal::{plan_goal, ContributionTiming, GoalResult};
use super::inflation::{deflate_series, real_annual_return, real_rate_pct, DeflatedRow, InflationAdjustment};
use super::lump_sum::project_lump_sum;
use super::series::{GrowthSeries, SeriesSummary};
use super::sip::project_sip;
use super::step_up::project_step_up;
use crate::plan::{InvestmentParams, InvestmentPlan, Scheme};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Configuration for a projection run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Contribution timing used when back-solving goals
    pub timing: ContributionTiming,

    /// Inflation convention for the adjusted view
    pub adjustment: InflationAdjustment,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            timing: ContributionTiming::EndOfPeriod,
            adjustment: InflationAdjustment::PointDeflation,
        }
    }
}

/// Inflation-adjusted companion to a nominal series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AdjustedView {
    /// The simulator rerun at the real rate of return
    RealRate(GrowthSeries),
    /// The nominal series deflated period by period
    Deflated(Vec<DeflatedRow>),
}

impl AdjustedView {
    /// Present-day value at the end of the horizon
    pub fn final_value(&self) -> f64 {
        match self {
            AdjustedView::RealRate(series) => series.final_value(),
            AdjustedView::Deflated(rows) => rows.last().map(|r| r.real_value).unwrap_or(0.0),
        }
    }
}

/// Complete projection result for one plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub plan_id: u32,
    pub scheme: Scheme,

    /// Nominal growth series (for goals, the verification run)
    pub nominal: GrowthSeries,

    /// Present-day view, when the plan carries an inflation rate
    pub adjusted: Option<AdjustedView>,

    /// Back-solved contribution, for goal plans
    pub goal: Option<GoalResult>,

    /// Real annual return as a decimal, when the plan carries an inflation rate
    pub real_return: Option<f64>,
}

impl ProjectionResult {
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary {
            plan_id: self.plan_id,
            scheme: self.scheme,
            series: self.nominal.summary(),
            adjusted_final_value: self.adjusted.as_ref().map(AdjustedView::final_value),
            monthly_contribution: self.goal.as_ref().map(|g| g.monthly_contribution),
            real_return: self.real_return,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub plan_id: u32,
    pub scheme: Scheme,
    #[serde(flatten)]
    pub series: SeriesSummary,
    pub adjusted_final_value: Option<f64>,
    pub monthly_contribution: Option<f64>,
    pub real_return: Option<f64>,
}

/// Main projection engine
///
/// Holds only configuration; every projection is a pure function of the
/// plan, so one engine can serve any number of plans.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the projection for a single plan
    pub fn project(&self, plan: &InvestmentPlan) -> ProjectionResult {
        let params = &plan.params;
        debug!(
            "Projecting plan {} ({}): amount={} rate={}% years={}",
            plan.plan_id, plan.scheme, params.amount, params.annual_rate_pct, params.years
        );

        let goal = match plan.scheme {
            Scheme::Goal => Some(plan_goal(
                params.amount,
                params.annual_rate_pct,
                params.years,
                params.inflation_pct,
                self.config.timing,
            )),
            _ => None,
        };

        let nominal = match &goal {
            Some(goal) => goal.verify(),
            None => self.simulate(plan.plan_id, plan.scheme, params, params.annual_rate_pct),
        };

        let adjusted = match (plan.scheme, params.inflation_pct) {
            // A goal's target is already inflated, its series is in future currency by design
            (Scheme::Goal, _) | (_, None) => None,
            (scheme, Some(inflation)) => Some(match self.config.adjustment {
                InflationAdjustment::RealRate => {
                    let real_pct = real_rate_pct(params.annual_rate_pct, inflation);
                    AdjustedView::RealRate(self.simulate(plan.plan_id, scheme, params, real_pct))
                }
                InflationAdjustment::PointDeflation => {
                    AdjustedView::Deflated(deflate_series(&nominal, inflation))
                }
            }),
        };

        let real_return = params
            .inflation_pct
            .map(|inflation| real_annual_return(params.annual_rate_pct, inflation));

        ProjectionResult {
            plan_id: plan.plan_id,
            scheme: plan.scheme,
            nominal,
            adjusted,
            goal,
            real_return,
        }
    }

    /// Run the scheme's simulator at the given rate
    fn simulate(
        &self,
        plan_id: u32,
        scheme: Scheme,
        params: &InvestmentParams,
        annual_rate_pct: f64,
    ) -> GrowthSeries {
        match scheme {
            Scheme::Sip | Scheme::Goal => project_sip(params.amount, annual_rate_pct, params.years),
            Scheme::LumpSum => project_lump_sum(params.amount, annual_rate_pct, params.years),
            Scheme::StepUp => {
                let step_up = params.step_up_pct.unwrap_or_else(|| {
                    warn!("Plan {} has no step-up rate, projecting with 0%", plan_id);
                    0.0
                });
                project_step_up(params.amount, step_up, annual_rate_pct, params.years)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn plan(scheme: Scheme, params: InvestmentParams) -> InvestmentPlan {
        InvestmentPlan::new(1, scheme, params)
    }

    #[test]
    fn test_sip_projection_without_inflation() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&plan(Scheme::Sip, InvestmentParams::new(1000.0, 12.0, 1)));

        assert_eq!(result.nominal.len(), 12);
        assert!(result.adjusted.is_none());
        assert!(result.goal.is_none());
        assert!(result.real_return.is_none());
    }

    #[test]
    fn test_point_deflation_view() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&plan(
            Scheme::LumpSum,
            InvestmentParams::new(100_000.0, 10.0, 5).with_inflation(5.0),
        ));

        match result.adjusted.as_ref().unwrap() {
            AdjustedView::Deflated(rows) => assert_eq!(rows.len(), 6),
            other => panic!("expected deflated view, got {:?}", other),
        }
        assert_relative_eq!(
            result.summary().adjusted_final_value.unwrap(),
            100_000.0 * (1.1_f64 / 1.05).powi(5),
            max_relative = 1e-10
        );
    }

    #[test]
    fn test_real_rate_view() {
        let engine = ProjectionEngine::new(ProjectionConfig {
            adjustment: InflationAdjustment::RealRate,
            ..Default::default()
        });
        let result = engine.project(&plan(
            Scheme::Sip,
            InvestmentParams::new(1000.0, 12.0, 10).with_inflation(6.0),
        ));

        let expected = project_sip(1000.0, real_rate_pct(12.0, 6.0), 10);
        assert_eq!(result.adjusted, Some(AdjustedView::RealRate(expected)));
        assert_relative_eq!(result.real_return.unwrap(), 0.06 / 1.06, max_relative = 1e-10);
    }

    #[test]
    fn test_goal_projection_verifies_target() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&plan(
            Scheme::Goal,
            InvestmentParams::new(1_000_000.0, 12.0, 15).with_inflation(6.0),
        ));

        let goal = result.goal.as_ref().unwrap();
        assert!(result.adjusted.is_none());
        assert_eq!(result.nominal.len(), 180);
        assert_relative_eq!(result.nominal.final_value(), goal.adjusted_target, max_relative = 1e-6);
        assert_eq!(result.summary().monthly_contribution, Some(goal.monthly_contribution));
    }

    #[test]
    fn test_step_up_projection() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&plan(
            Scheme::StepUp,
            InvestmentParams::new(1000.0, 12.0, 3).with_step_up(10.0),
        ));
        assert_relative_eq!(result.nominal.rows[12].contribution, 1100.0, max_relative = 1e-12);
    }
}
