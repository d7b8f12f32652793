//! 교체 투자 경제성 계산 모듈 모음.

pub mod portfolio;
pub mod roi;

pub use roi::*;
