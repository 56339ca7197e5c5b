mod cost_schedule;

pub use cost_schedule::CostSchedule;
