use anyhow::{Context, Result, anyhow};

/// Payment gateway credentials. Absence of either key is a startup error so
/// an operator can tell "our fault" apart from a user mistake.
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    pub key_id: String,
    pub key_secret: String,
    pub api_url: String,
}

impl PaymentConfig {
    pub fn init() -> Result<Self> {
        let key_id = std::env::var("PAYMENT_KEY_ID")
            .context("Missing environment variable: PAYMENT_KEY_ID")?;

        let key_secret = std::env::var("PAYMENT_KEY_SECRET")
            .context("Missing environment variable: PAYMENT_KEY_SECRET")?;

        let api_url = std::env::var("PAYMENT_API_URL")
            .unwrap_or_else(|_| "https://api.razorpay.com".to_string());

        Ok(Self {
            key_id,
            key_secret,
            api_url,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NotifyConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_phone: String,
    pub admin_phone: String,
    pub api_url: String,
}

impl NotifyConfig {
    pub fn init() -> Result<Self> {
        let account_sid = std::env::var("NOTIFY_ACCOUNT_SID")
            .context("Missing environment variable: NOTIFY_ACCOUNT_SID")?;

        let auth_token = std::env::var("NOTIFY_AUTH_TOKEN")
            .context("Missing environment variable: NOTIFY_AUTH_TOKEN")?;

        let from_phone = std::env::var("NOTIFY_FROM_PHONE")
            .context("Missing environment variable: NOTIFY_FROM_PHONE")?;

        let admin_phone = std::env::var("NOTIFY_ADMIN_PHONE")
            .context("Missing environment variable: NOTIFY_ADMIN_PHONE")?;

        let api_url = std::env::var("NOTIFY_API_URL")
            .unwrap_or_else(|_| "https://api.twilio.com".to_string());

        Ok(Self {
            account_sid,
            auth_token,
            from_phone,
            admin_phone,
            api_url,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub run_migrations: bool,
    pub port: u16,
    pub db_min_conn: u32,
    pub db_max_conn: u32,
    pub payment: PaymentConfig,
    pub notify: NotifyConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let jwt_secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;
        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let db_min_conn = std::env::var("DB_MIN_CONN")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<u32>()
            .context("DB_MIN_CONN must be a valid u32 integer")?;

        let db_max_conn = std::env::var("DB_MAX_CONN")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("DB_MAX_CONN must be a valid u32 integer")?;

        let payment = PaymentConfig::init().context("failed payment gateway config")?;
        let notify = NotifyConfig::init().context("failed notification config")?;

        Ok(Self {
            database_url,
            jwt_secret,
            run_migrations,
            port,
            db_min_conn,
            db_max_conn,
            payment,
            notify,
        })
    }
}
