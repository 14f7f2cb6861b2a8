//! 연료 가스 물성 계산과 적합성 판정 모듈 모음.

pub mod components;
pub mod composition;
pub mod error;
pub mod limits;
pub mod presets;
pub mod properties;
pub mod suitability;

pub use components::{Component, ComponentData, COMPONENTS};
pub use composition::{Composition, NormalizedComposition};
pub use error::{GasError, GasResult};
pub use limits::{AcceptanceLimit, LimitKey, LimitSet};
pub use properties::{calculate, calculate_named, PropertyRecord};
pub use suitability::{evaluate, LimitCheck, SuitabilityReport, Verdict};
