use std::fs;
use std::process;

use ascent_model::config::presets;
use ascent_model::io::csv;
use ascent_model::sim;

fn main() {
    // -----------------------------------------------------------------------
    // Reference vehicle: Soyuz-2.1b + Fregat, Luna-25 class payload
    // -----------------------------------------------------------------------
    let cfg = presets::soyuz_fregat();

    let log = match sim::simulate(&cfg) {
        Ok(log) => log,
        Err(err) => {
            eprintln!("configuration rejected: {err}");
            process::exit(1);
        }
    };

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  REFERENCE ASCENT TRAJECTORY");
    println!("====================================================================");
    println!();
    println!("  Vehicle Parameters");
    println!("  ------------------------------------------------------------------");
    println!(
        "  First stage:   {:>9.0} kg dry   {:>9.0} kg propellant",
        cfg.first_stage.dry_mass, cfg.first_stage.propellant_mass
    );
    println!(
        "  Second stage:  {:>9.0} kg dry   {:>9.0} kg propellant",
        cfg.second_stage.dry_mass, cfg.second_stage.propellant_mass
    );
    println!(
        "  Payload:       {:>9.0} kg       Cd*A: {:.3} m^2",
        cfg.payload_mass,
        cfg.drag_coefficient * cfg.effective_area
    );
    println!(
        "  Nominal burn:  {:>9.1} s (first stage, vacuum flow)",
        cfg.first_stage.nominal_burn_time()
    );
    println!();
    println!("  Run");
    println!("  ------------------------------------------------------------------");
    println!(
        "  {} steps at dt = {} s, one sample per {} steps",
        cfg.steps, cfg.dt, cfg.sample_every
    );

    for sep in &log.separations {
        println!(
            "  Stage separation at t = {:.2} s, altitude {:.2} m",
            sep.time, sep.altitude
        );
    }

    if let Some(last) = log.final_sample() {
        println!(
            "  Final sample:  t = {:.2} s, mass {:.2} t, altitude {:.2} m, speed {:.2} m/s",
            last.time,
            last.mass / 1000.0,
            last.altitude,
            last.speed
        );
        println!("  Max altitude:  {:.2} m", log.max_altitude());
    }

    // -----------------------------------------------------------------------
    // Write the series for the telemetry comparison
    // -----------------------------------------------------------------------
    let out = "data/reference_trajectory.csv";
    if let Err(err) = fs::create_dir_all("data")
        .and_then(|_| csv::write_series_file(out, &log.samples))
    {
        eprintln!("failed to write {out}: {err}");
        process::exit(1);
    }
    println!();
    println!("  Series written to {out}");
    println!();
}
