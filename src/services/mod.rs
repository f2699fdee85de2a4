pub mod formatter;
pub mod kodi;

pub use kodi::KodiClient;
