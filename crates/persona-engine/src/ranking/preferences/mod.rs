mod derive;
mod domain;
mod store;

pub(crate) use derive::apply_judgment;
pub use domain::{Polarity, PreferenceCategory, PreferenceEntry, PreferenceError};
pub use store::PreferenceStore;
