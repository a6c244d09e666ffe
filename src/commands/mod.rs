//! Command implementations

pub mod first_round;
pub mod menu;
pub mod score;
pub mod second_round;

pub use first_round::run_first_round;
pub use menu::run_menu;
pub use score::run_score;
pub use second_round::{PROGRESS_THRESHOLD, run_second_round};

use crate::solver::StrikeMode;

/// Settings shared by the report commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub strike_mode: StrikeMode,
    /// Show a progress bar during long second-round sweeps
    pub progress: bool,
}
