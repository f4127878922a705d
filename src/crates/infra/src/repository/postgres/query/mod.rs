pub mod artist;
pub mod audiotrack;

pub use artist::ArtistDaoImpl;
pub use audiotrack::AudiotrackDaoImpl;
