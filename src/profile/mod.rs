//! Maps loosely-shaped user and chart records into a [`NormalizedProfile`].

pub mod coalesce;
pub mod load;
pub mod model;
pub mod normalize;
pub mod record;

pub use load::{StoreKeys, load_viewer_profile};
pub use model::{Astrology, BirthInfo, Location, NormalizedProfile, PrivacySettings};
pub use normalize::{DEFAULT_BIO, NormalizeOptions, normalize, normalize_with};
pub use record::Record;
