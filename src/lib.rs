// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod report;
pub mod request;
pub mod server;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{
    AnalysisResult, BalanceTips, BirthDate, Branch, Element, Error, FourPillarsResult, Gender,
    MbtiResponse, MbtiResult, Polarity, RelationshipTips, Result, SanmeiResult, SeimeiResult,
    Stem, TemperamentType,
};

pub use crate::analysis::{
    calculate_four_pillars, calculate_seimei, classify_sanmei, classify_temperament,
    run_assessment, strokes_of, total_strokes, DEFAULT_STROKES,
};

pub use crate::report::assemble;

pub use crate::request::AssessmentRequest;

pub use crate::storage::{AssessmentRecord, AssessmentStore, MemStorage, NewAssessment};

pub use crate::io::{create_writer, OutputFormat, OutputWriter};
