//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for API boundaries and use case inputs/outputs.

mod plan_dto;

pub use plan_dto::{FillDto, PlanRequestDto, PlanResponseDto};
