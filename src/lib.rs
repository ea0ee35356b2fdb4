pub mod bodies;
pub mod constants;
mod conversion;
pub mod ephemeris;
pub mod orrery_errors;
pub mod playback;

pub use bodies::{Body, BodyStyle, Rgb};
pub use ephemeris::schema::TableSchema;
pub use ephemeris::{EphemerisTable, TableSummary};
pub use orrery_errors::OrreryError;
pub use playback::params::PlaybackParams;
pub use playback::sampler::SampledSeries;
pub use playback::session::{BodyFrame, FrameState, PlaybackSession};
pub use playback::viewport::Viewport;
