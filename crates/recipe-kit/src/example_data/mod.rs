//! Sample recipes and users for demos, previews and fixtures.
//!
//! Two sources are offered: the fixed [`catalogue`] and seeded generation
//! through [`load_samples`], configured by [`SampleDataSettings`].

pub mod config;
mod samples;

pub use self::config::SampleDataSettings;
pub use self::samples::{
    SampleDataError, SampleSet, catalogue, convert_recipe, convert_user, load_samples,
};
