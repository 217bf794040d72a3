pub mod candidate;
pub mod learning;
pub mod pair_map;
pub mod person;
pub mod score;
pub mod verdict;

pub use candidate::{Candidate, Platform, Provenance};
pub use learning::{
    ChannelStats, LearningStats, PatternKey, QueryStats, ThresholdKey, VerificationRecord,
};
pub use person::PersonContext;
pub use score::ScoreResult;
pub use verdict::{StageVerdict, VerificationOutcome};
