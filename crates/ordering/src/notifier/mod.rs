mod twilio;

pub use self::twilio::TwilioNotifier;
