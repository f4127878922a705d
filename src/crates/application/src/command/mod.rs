pub mod artist;
pub mod audiotrack;
pub mod shared;
