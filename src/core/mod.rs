pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{
    AnalysisResult, BalanceTips, BirthDate, Branch, Element, FourPillarsResult, Gender,
    MbtiResponse, MbtiResult, Polarity, RelationshipTips, SanmeiResult, SeimeiResult, Stem,
    TemperamentType,
};
