mod anime;

pub use anime::Anime;
