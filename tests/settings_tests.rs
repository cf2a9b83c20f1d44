use creator_portfolio::settings::{AppConfig, AppEnvironment};

// Kept as the only test in this binary: it mutates process-wide variables.
#[test]
fn mixed_case_app_env_loads() {
    unsafe {
        std::env::set_var("APP_ENV", "Production");
        std::env::set_var("PORT", "9123");
    }

    let config = AppConfig::new();

    unsafe {
        std::env::remove_var("APP_ENV");
        std::env::remove_var("PORT");
    }

    let config = config.expect("mixed-case APP_ENV should load");
    assert_eq!(config.env, AppEnvironment::Production);
    assert_eq!(config.port, 9123);
}
