// Per-tick simulation systems. Each operates on domain state only; the tick
// order is fixed by `use_cases::game::advance_tick`.

pub mod collision;
pub mod food;
pub mod kinematics;
