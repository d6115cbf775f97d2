use std::env;
use std::time::Duration;

/// Fixed artificial delays standing in for network round trips.
#[derive(Clone, Debug)]
pub struct SimulatedLatency {
    pub match_drivers: Duration,
    pub contact: Duration,
    pub login: Duration,
    pub signup: Duration,
    pub driver_application: Duration,
}

impl SimulatedLatency {
    pub fn none() -> Self {
        Self {
            match_drivers: Duration::ZERO,
            contact: Duration::ZERO,
            login: Duration::ZERO,
            signup: Duration::ZERO,
            driver_application: Duration::ZERO,
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            match_drivers: Duration::from_millis(2000),
            contact: Duration::from_millis(2000),
            login: Duration::from_millis(1500),
            signup: Duration::from_millis(2000),
            driver_application: Duration::from_millis(2500),
        }
    }
}

/// Per-IP request budget for the served API.
#[derive(Clone, Debug)]
pub struct RateLimit {
    pub replenish_ms: u64,
    pub burst: u32,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            replenish_ms: 600,
            burst: 100,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub latency: SimulatedLatency,
    pub rate_limit: RateLimit,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = SimulatedLatency::default();
        let limits = RateLimit::default();

        Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            latency: SimulatedLatency {
                match_drivers: delay_from_env("MATCH_DELAY_MS", defaults.match_drivers),
                contact: delay_from_env("CONTACT_DELAY_MS", defaults.contact),
                login: delay_from_env("LOGIN_DELAY_MS", defaults.login),
                signup: delay_from_env("SIGNUP_DELAY_MS", defaults.signup),
                driver_application: delay_from_env(
                    "DRIVER_APPLICATION_DELAY_MS",
                    defaults.driver_application,
                ),
            },
            rate_limit: RateLimit {
                replenish_ms: env::var("RATE_LIMIT_REPLENISH_MS")
                    .map(|v| v.parse().expect("RATE_LIMIT_REPLENISH_MS must be a number"))
                    .unwrap_or(limits.replenish_ms),
                burst: env::var("RATE_LIMIT_BURST")
                    .map(|v| v.parse().expect("RATE_LIMIT_BURST must be a number"))
                    .unwrap_or(limits.burst),
            },
        }
    }

    /// Configuration with no artificial delays, for tests and local tooling.
    pub fn instant() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
            latency: SimulatedLatency::none(),
            rate_limit: RateLimit::default(),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn delay_from_env(key: &str, default: Duration) -> Duration {
    match env::var(key) {
        Ok(value) => Duration::from_millis(
            value
                .parse()
                .unwrap_or_else(|_| panic!("{} must be a number of milliseconds", key)),
        ),
        Err(_) => default,
    }
}
