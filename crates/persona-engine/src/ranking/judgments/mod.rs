mod domain;
mod log;

pub use domain::{
    FeedbackKind, JudgmentRecord, PairCandidate, PreferencePair, RewardEntry, RewardUpdate,
};
pub use log::JudgmentLog;
