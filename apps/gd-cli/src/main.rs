use clap::{Parser, Subcommand};
use gd_gas::{Gas, GasProperties, UnitSystem, gas_catalog};
use gd_isentropic::{
    FlowError, FlowResult, MachRange, choked_mdot, entropy_produced, mach_area_ratio_choked,
    mach_from_area_ratio, sonic_velocity, stagnation_pressure, stagnation_table,
    stagnation_temperature,
};

#[derive(Parser)]
#[command(name = "gd-cli")]
#[command(about = "Isentropic compressible-flow relations for a perfect gas", long_about = None)]
struct Cli {
    /// Gas name (air, methane, argon, ...)
    #[arg(long, global = true, default_value = "air")]
    gas: String,

    /// Unit system: metric or us
    #[arg(long, global = true, default_value = "metric")]
    units: String,

    /// Override gamma for a custom gas (requires --r)
    #[arg(long, global = true, requires = "r")]
    gamma: Option<f64>,

    /// Override the specific gas constant for a custom gas (requires --gamma)
    #[arg(long, global = true, requires = "gamma")]
    r: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the isentropic flow table over a Mach range
    Table {
        /// Starting Mach number
        #[arg(long, default_value_t = 0.0)]
        min: f64,
        /// Ending Mach number (inclusive)
        #[arg(long, default_value_t = 5.0)]
        max: f64,
        /// Increment between rows
        #[arg(long, default_value_t = 0.1)]
        inc: f64,
        /// Emit rows as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// List the supported gas registry
    Gases {
        /// Optional name filter
        query: Option<String>,
    },
    /// Local speed of sound at a static temperature
    Sonic {
        /// Static temperature
        #[arg(long)]
        temp: f64,
    },
    /// Solve the stagnation-pressure relation (supply exactly two)
    StagnationPressure {
        /// Stagnation pressure
        #[arg(long)]
        pt: Option<f64>,
        /// Static pressure
        #[arg(long)]
        p: Option<f64>,
        /// Mach number
        #[arg(long)]
        mach: Option<f64>,
    },
    /// Solve the stagnation-temperature relation (supply exactly two)
    StagnationTemperature {
        /// Stagnation temperature
        #[arg(long)]
        tt: Option<f64>,
        /// Static temperature
        #[arg(long)]
        t: Option<f64>,
        /// Mach number
        #[arg(long)]
        mach: Option<f64>,
    },
    /// Choked-area ratio A/A* at a Mach number, or both Mach roots for a ratio
    Area {
        /// Mach number to evaluate A/A* at
        #[arg(long, conflicts_with = "ratio")]
        mach: Option<f64>,
        /// Area ratio A/A* to invert for Mach number
        #[arg(long)]
        ratio: Option<f64>,
    },
    /// Maximum mass flow rate per unit choked area
    Mdot {
        /// Stagnation pressure (Pa in metric)
        #[arg(long)]
        pt: f64,
        /// Stagnation temperature (K in metric)
        #[arg(long)]
        tt: f64,
    },
    /// Specific entropy produced between two stagnation pressures
    Entropy {
        /// Stagnation pressure at station 1
        #[arg(long)]
        pt1: f64,
        /// Stagnation pressure at station 2
        #[arg(long)]
        pt2: f64,
    },
}

fn main() -> FlowResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let units: UnitSystem = cli
        .units
        .parse()
        .map_err(|_| FlowError::InvalidInput {
            what: "unit system must be 'metric' or 'us'",
        })?;
    let props = resolve_gas(&cli, units)?;
    tracing::debug!(gamma = props.gamma, r = props.r, %units, "resolved gas properties");

    match cli.command {
        Commands::Table {
            min,
            max,
            inc,
            json,
        } => cmd_table(props, min, max, inc, json),
        Commands::Gases { query } => cmd_gases(units, query.as_deref()),
        Commands::Sonic { temp } => {
            let a = sonic_velocity(props, temp)?;
            println!("{a}");
            Ok(())
        }
        Commands::StagnationPressure { pt, p, mach } => {
            let value = stagnation_pressure(props, pt, p, mach)?;
            println!("{value}");
            Ok(())
        }
        Commands::StagnationTemperature { tt, t, mach } => {
            let value = stagnation_temperature(props, tt, t, mach)?;
            println!("{value}");
            Ok(())
        }
        Commands::Area { mach, ratio } => cmd_area(props, mach, ratio),
        Commands::Mdot { pt, tt } => {
            let flux = choked_mdot(props, pt, tt)?;
            println!("{flux}");
            Ok(())
        }
        Commands::Entropy { pt1, pt2 } => {
            let ds = entropy_produced(props, pt1, pt2)?;
            println!("{ds}");
            Ok(())
        }
    }
}

fn resolve_gas(cli: &Cli, units: UnitSystem) -> FlowResult<GasProperties> {
    if let (Some(gamma), Some(r)) = (cli.gamma, cli.r) {
        return Ok(GasProperties::custom(gamma, r, units)?);
    }
    let gas: Gas = cli.gas.parse().map_err(FlowError::Gas)?;
    Ok(GasProperties::of(gas, units))
}

fn cmd_table(props: GasProperties, min: f64, max: f64, inc: f64, json: bool) -> FlowResult<()> {
    let range = MachRange::new(min, max, inc)?;
    let rows = stagnation_table(props, &range)?;

    if json {
        let out = serde_json::to_string_pretty(&rows).expect("table rows serialize");
        println!("{out}");
        return Ok(());
    }

    println!("Isentropic Flow Parameters for gamma = {}", props.gamma);
    for row in &rows {
        println!(
            "M: {:.3}   |   P/Pt: {:.3}    |    T/Tt: {:.3}    |    A/A*: {:.3}    |   rho/rho_t: {:.3}",
            row.mach, row.p_over_pt, row.t_over_tt, row.area_ratio, row.rho_over_rho_t
        );
    }
    Ok(())
}

fn cmd_gases(units: UnitSystem, query: Option<&str>) -> FlowResult<()> {
    println!("Supported gases (R in {}):", units.gas_constant_label());
    for entry in gas_catalog() {
        if let Some(query) = query {
            if !entry.matches_query(query) {
                continue;
            }
        }
        println!(
            "  {:<4} {:<16} gamma = {:<5} R = {}",
            entry.canonical_id,
            entry.display_name,
            entry.gamma(),
            entry.gas_constant(units)
        );
    }
    Ok(())
}

fn cmd_area(props: GasProperties, mach: Option<f64>, ratio: Option<f64>) -> FlowResult<()> {
    match (mach, ratio) {
        (Some(m), None) => {
            let ratio = mach_area_ratio_choked(props, m)?;
            println!("{ratio}");
            Ok(())
        }
        (None, Some(target)) => {
            let roots = mach_from_area_ratio(props, target)?;
            println!("subsonic:   {}", roots.subsonic);
            println!("supersonic: {}", roots.supersonic);
            Ok(())
        }
        _ => Err(FlowError::InvalidInput {
            what: "area needs exactly one of --mach or --ratio",
        }),
    }
}
