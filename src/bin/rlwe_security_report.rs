use log::info;

use rlwe_security::estimator::{estimate_batch, SecurityEstimate};
use rlwe_security::params::presets;
use rlwe_security::report::{render_recommendations, render_report, render_summary};

type AppResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
    env_logger::init();

    println!("RLWE Blind Signature - Security Parameter Analysis");
    println!();
    println!("Note: These are SIMPLIFIED estimates. For production systems,");
    println!("use the lattice-estimator: https://github.com/malb/lattice-estimator");
    println!();

    let configs = presets::all()?;
    let params: Vec<_> = configs.iter().map(|p| p.params).collect();
    let estimates = estimate_batch(&params)?;
    info!("estimated {} parameter sets", estimates.len());

    for (i, (preset, est)) in configs.iter().zip(&estimates).enumerate() {
        match i {
            0 => print_section("CURRENT IMPLEMENTATION PARAMETERS (FROM CODE)"),
            2 => print_section("RECOMMENDED SECURE PARAMETERS"),
            _ => {}
        }
        println!();
        println!("{}. {}:", i + 1, preset.title);
        print!("{}", render_report(est));
    }

    print_section("SUMMARY COMPARISON");
    println!();
    let rows: Vec<(&str, &SecurityEstimate)> = configs
        .iter()
        .map(|p| p.name)
        .zip(&estimates)
        .collect();
    print!("{}", render_summary(&rows));

    println!();
    print!("{}", render_recommendations());
    Ok(())
}

fn print_section(title: &str) {
    println!();
    println!("{}", "#".repeat(70));
    println!("# {}", title);
    println!("{}", "#".repeat(70));
}
