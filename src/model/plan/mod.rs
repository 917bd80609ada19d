mod leg_result;
mod plan_error;
mod plan_summary;
mod planned_leg;
mod trip_plan_request;
mod trip_planner;

pub use leg_result::LegResult;
pub use plan_error::PlanError;
pub use plan_summary::PlanSummary;
pub use planned_leg::PlannedLeg;
pub use trip_plan_request::TripPlanRequest;
pub use trip_planner::TripPlanner;
