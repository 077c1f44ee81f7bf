use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    pub attendance_file: String,
    pub timezone: String,
    pub time_api_base: String,
    pub time_api_timeout_secs: u64,

    // Rate limiting
    pub rate_list_per_min: u32,
    pub rate_form_per_min: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            attendance_file: env::var("ATTENDANCE_FILE")
                .unwrap_or_else(|_| "asistencia.json".to_string()),
            timezone: env::var("TIMEZONE").unwrap_or_else(|_| "America/Mexico_City".to_string()),
            time_api_base: env::var("TIME_API_BASE")
                .unwrap_or_else(|_| "http://worldtimeapi.org/api/timezone".to_string()),
            time_api_timeout_secs: env::var("TIME_API_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap(),

            rate_list_per_min: env::var("RATE_LIST_PER_MIN")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .unwrap(),
            rate_form_per_min: env::var("RATE_FORM_PER_MIN")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap(),
        }
    }
}
