//! Twin Agent Backend - Main Entry Point
//!
//! Runs the startup profile loader once and reports, per source,
//! whether real data or the fallback was loaded. Used as a deployment
//! smoke check for the ./data layout.

use twin_agent::profile::{load_profile, ProfilePaths};
use twin_agent::profile::types::{
    LINKEDIN_FALLBACK, RESUME_FALLBACK, STYLE_FALLBACK, SUMMARY_FALLBACK,
};

fn main() {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    println!("╔════════════════════════════════════════════════╗");
    println!("║   Twin Agent - Profile Loader                  ║");
    println!("╚════════════════════════════════════════════════╝");
    println!();

    let data_dir = std::env::var("TWIN_DATA_DIR").unwrap_or_else(|_| "./data".to_string());
    println!("Data directory: {}", data_dir);

    let profile = load_profile(&ProfilePaths::from_dir(&data_dir));

    report_text("linkedin.pdf", &profile.linkedin, LINKEDIN_FALLBACK);
    report_text("resume.pdf", &profile.resume, RESUME_FALLBACK);
    report_text("summary.txt", &profile.summary, SUMMARY_FALLBACK);
    report_text("style.txt", &profile.style, STYLE_FALLBACK);

    if profile.facts.is_empty() {
        println!("   facts.json      - fallback (empty facts)");
    } else {
        println!("   facts.json      - loaded ({} keys)", profile.facts.len());
    }
}

fn report_text(source: &str, value: &str, fallback: &str) {
    if value == fallback {
        println!("   {:<15} - fallback", source);
    } else {
        println!("   {:<15} - loaded ({} chars)", source, value.len());
    }
}
