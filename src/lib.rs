//! PMV/PPD 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 코어를 쓰도록 한다.

pub mod app;
pub mod comfort;
pub mod config;
pub mod ui_cli;
pub mod units;
