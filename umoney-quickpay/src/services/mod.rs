pub mod quickpay;

pub use quickpay::QuickPayClient;
