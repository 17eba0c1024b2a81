pub mod data_feed;
pub mod initiable;
pub mod strategist;
