use std::{fmt::Write as _, fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use hvac_sizing::models::cooling::sizing::{
    Appliance, CalculatorInput, Derivation, DesignConstants, HeatBreakdown, SizingModel, cities,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hvac-size")]
#[command(about = "Room cooling load and air-conditioner sizing", long_about = None)]
struct Cli {
    /// Log more detail (-v for debug, -vv for trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sizes the room described by a JSON input file
    Compute {
        /// Calculator input (JSON)
        input: PathBuf,

        /// Design constants overriding the published set (JSON)
        #[arg(short, long)]
        constants: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Also print the intermediate quantities
        #[arg(long)]
        explain: bool,
    },
    /// Lists the supported cities and their design conditions
    Cities,
    /// Lists the appliance catalog
    Appliances,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Compute {
            input,
            constants,
            format,
            explain,
        } => {
            let input: CalculatorInput = read_json(&input)?;
            let constants = match constants {
                Some(path) => read_json(&path)?,
                None => DesignConstants::default(),
            };
            let model = SizingModel::new(constants)?;

            let breakdown = model.compute(&input)?;
            let derivation = if explain {
                Some(model.explain(&input)?)
            } else {
                None
            };

            let output = match format {
                Format::Text => render_text(&breakdown, derivation.as_ref()),
                Format::Json => {
                    let value = serde_json::json!({
                        "breakdown": breakdown,
                        "recommendedTons": breakdown.recommended_tons(),
                        "derivation": derivation,
                    });
                    serde_json::to_string_pretty(&value)?
                }
            };
            println!("{output}");
        }
        Commands::Cities => {
            println!(
                "{:<12} {:>7} {:>7} {:>8} {:>6} {:>7} {:>8}",
                "City", "DB °F", "WB °F", "Range", "RH %", "DP °F", "gr/lb"
            );
            for c in cities() {
                println!(
                    "{:<12} {:>7.1} {:>7.1} {:>8.1} {:>6.0} {:>7.1} {:>8.1}",
                    c.name,
                    c.dry_bulb_f,
                    c.wet_bulb_f,
                    c.diurnal_range,
                    c.relative_humidity_pct,
                    c.dew_point_f,
                    c.grains_per_pound
                );
            }
        }
        Commands::Appliances => {
            for appliance in Appliance::ALL {
                println!("{:<16} {:>6.3} kW", appliance.name(), appliance.kilowatts());
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn render_text(b: &HeatBreakdown, derivation: Option<&Derivation>) -> String {
    let mut out = String::new();
    let mut line = |label: &str, value: f64| {
        let _ = writeln!(out, "  {label:<24} {value:>12.2} BTU/hr");
    };

    let rs = &b.room_sensible;
    line("Glass", rs.glass);
    line("Wall", rs.wall);
    line("Floor", rs.floor);
    line("Roof", rs.roof);
    line("People (sensible)", rs.people);
    line("Equipment", rs.equipment);
    line("Lighting", rs.lighting);
    line("Supply duct gain", rs.duct_gain);
    line("Fan heat", rs.fan_heat);
    line("Room sensible total", rs.total);
    line("People (latent)", b.room_latent.people);
    line("Infiltration (latent)", b.room_latent.infiltration);
    line("Room latent total", b.room_latent.total);
    line("Outside air sensible", b.outside_air.sensible);
    line("Outside air latent", b.outside_air.latent);
    line("Outside air total", b.outside_air.total);
    line("Subtotal", b.grand_total.subtotal);
    line("Safety margin", b.grand_total.safety_margin);
    line("Final load", b.grand_total.final_total);

    let _ = writeln!(out, "  {:<24} {:>12.3} tons", "Tonnage", b.tonnage);
    let _ = writeln!(out, "Recommended AC size: {:.1} tons", b.recommended_tons());

    if let Some(d) = derivation {
        let _ = writeln!(out);
        let _ = writeln!(out, "City: {} ({} °F dry bulb)", d.climate.name, d.climate.dry_bulb_f);
        let _ = writeln!(out, "Floor area: {:.1} ft², volume: {:.1} ft³", d.floor_area, d.volume);
        let _ = writeln!(out, "ΔT: {:.1} °F, Δgrains: {:.1} gr/lb", d.delta_t, d.delta_grains);
        let _ = writeln!(
            out,
            "Ventilation: {:.2} CFM ({:?})",
            d.ventilation.cfm, d.ventilation.basis
        );
        let _ = writeln!(out, "Occupants: {}, roof: {}", d.occupants, d.roof);
        let _ = writeln!(
            out,
            "U-factors: glass {}, wall {}, floor {}, roof {}",
            d.u_glass, d.u_wall, d.u_floor, d.u_roof
        );
        let _ = writeln!(
            out,
            "Window solar exposure: {:.0} BTU/hr over {:.1} ft² of glass",
            d.window_solar_exposure, d.window_area
        );
    }

    out
}
