//! 램프/설비 교체 추천 엔진.

pub mod engine;
pub mod policy;
pub mod rules;
pub mod types;

pub use engine::*;
pub use policy::*;
pub use types::*;
