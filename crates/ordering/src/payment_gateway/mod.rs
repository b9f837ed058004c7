mod razorpay;

pub use self::razorpay::RazorpayGateway;
