mod maplen;

pub use maplen::MaplenScraper;
