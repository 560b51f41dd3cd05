mod lottery;

pub use lottery::Lottery;
