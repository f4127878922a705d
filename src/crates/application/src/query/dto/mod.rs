pub mod artist;
pub mod audiotrack;

pub use artist::ArtistView;
pub use audiotrack::AudiotrackView;
