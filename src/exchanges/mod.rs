pub mod huobi;
pub mod okex;
