//! Planning module - orchestration of strategies and alerts over stored debts.

mod planning_model;
mod planning_service;
mod planning_traits;

pub use planning_model::DebtSummary;
pub use planning_service::PlanningService;
pub use planning_traits::PlanningServiceTrait;
