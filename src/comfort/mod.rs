//! 온열 쾌적성(PMV/PPD) 계산 모듈 모음.

pub mod pmv;
pub mod sensation;
pub mod validation;

pub use pmv::*;
pub use sensation::*;
pub use validation::*;
