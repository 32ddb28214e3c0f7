use super::{pipelines, BeelineAppError};
use crate::config::{BeelineConfiguration, FallbackPolicy};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct BeelineAppArguments {
    #[command(subcommand)]
    pub app: App,
}

#[derive(Subcommand)]
pub enum App {
    /// keep only the road links used as matching targets
    FilterNetwork {
        #[arg(long, help = "path to network .json or .json.gz file")]
        network_file: String,
        #[arg(long, help = "output path for the filtered network")]
        output_file: String,
        #[arg(long, help = "path to .toml or .json file with beeline parameters")]
        configuration_file: Option<String>,
    },
    /// merge the public transit modes of a network into one mode
    ConvertModes {
        #[arg(long, help = "path to network .json or .json.gz file")]
        network_file: String,
        #[arg(long, help = "output path for the converted network")]
        output_file: String,
        #[arg(long, help = "path to .toml or .json file with beeline parameters")]
        configuration_file: Option<String>,
    },
    /// move stop facilities onto road links used by the same lines
    RebaseStops {
        #[arg(long, help = "schedule whose stops are moved")]
        schedule_file: String,
        #[arg(long, help = "network the schedule currently runs on")]
        network_file: String,
        #[arg(long, help = "schedule prepared on another network version, source of line usage")]
        prepared_schedule_file: String,
        #[arg(long, help = "network of the prepared schedule")]
        prepared_network_file: String,
        #[arg(long, help = "output path for the rebased schedule")]
        output_schedule_file: String,
        #[arg(long, help = "directory for CSV reports")]
        report_directory: Option<String>,
        #[arg(long, help = "path to .toml or .json file with beeline parameters")]
        configuration_file: Option<String>,
        #[arg(long, help = "write the schedule without routes that cannot be rewired")]
        drop_disconnected_routes: bool,
        #[arg(long, value_enum, help = "overrides the configured stop fallback policy")]
        stop_fallback: Option<FallbackPolicy>,
    },
    /// add dedicated bus lane links for bus lane features
    BusLanes {
        #[arg(long, help = "path to network .json or .json.gz file")]
        network_file: String,
        #[arg(long, help = "GeoJSON FeatureCollection of tagged street geometries")]
        features_file: String,
        #[arg(long, help = "output path for the network with bus lanes")]
        output_network_file: String,
        #[arg(long, help = "schedule to move onto the bus lanes", requires = "output_schedule_file")]
        schedule_file: Option<String>,
        #[arg(long, help = "output path for the rewired schedule")]
        output_schedule_file: Option<String>,
        #[arg(long, help = "directory for CSV reports")]
        report_directory: Option<String>,
        #[arg(long, help = "path to .toml or .json file with beeline parameters")]
        configuration_file: Option<String>,
        #[arg(long, help = "write the schedule without routes that cannot be rewired")]
        drop_disconnected_routes: bool,
        #[arg(long, value_enum, help = "overrides the configured feature fallback policy")]
        feature_fallback: Option<FallbackPolicy>,
    },
    /// write vehicle, facility, link usage and point lookup tables
    ReferenceTables {
        #[arg(long, help = "path to schedule .json or .json.gz file")]
        schedule_file: String,
        #[arg(long, help = "network the schedule runs on")]
        network_file: String,
        #[arg(long, help = "CSV file with name,x,y records to locate on the road network")]
        points_file: Option<String>,
        #[arg(long, help = "output directory for the tables")]
        output_directory: String,
        #[arg(long, help = "path to .toml or .json file with beeline parameters")]
        configuration_file: Option<String>,
    },
}

impl App {
    fn configuration_file(&self) -> Option<&String> {
        match self {
            App::FilterNetwork {
                configuration_file, ..
            }
            | App::ConvertModes {
                configuration_file, ..
            }
            | App::RebaseStops {
                configuration_file, ..
            }
            | App::BusLanes {
                configuration_file, ..
            }
            | App::ReferenceTables {
                configuration_file, ..
            } => configuration_file.as_ref(),
        }
    }

    /// applies command line options that take precedence over the configuration file
    fn apply_overrides(&self, conf: &mut BeelineConfiguration) {
        match self {
            App::RebaseStops {
                stop_fallback: Some(policy),
                ..
            } => conf.stop_fallback = *policy,
            App::BusLanes {
                feature_fallback: Some(policy),
                ..
            } => conf.feature_fallback = *policy,
            _ => {}
        }
    }
}

pub fn run(app: &App) -> Result<(), BeelineAppError> {
    env_logger::init();
    let mut conf = match app.configuration_file() {
        None => Ok(BeelineConfiguration::default()),
        Some(f) => {
            log::info!("reading beeline configuration from {f}");
            BeelineConfiguration::try_from(f)
        }
    }?;
    app.apply_overrides(&mut conf);
    match app {
        App::FilterNetwork {
            network_file,
            output_file,
            ..
        } => pipelines::filter_network(&conf, network_file, output_file),
        App::ConvertModes {
            network_file,
            output_file,
            ..
        } => pipelines::convert_modes(&conf, network_file, output_file),
        App::RebaseStops {
            schedule_file,
            network_file,
            prepared_schedule_file,
            prepared_network_file,
            output_schedule_file,
            report_directory,
            drop_disconnected_routes,
            ..
        } => pipelines::rebase_stops(
            &conf,
            schedule_file,
            network_file,
            prepared_schedule_file,
            prepared_network_file,
            output_schedule_file,
            report_directory.as_deref(),
            *drop_disconnected_routes,
        ),
        App::BusLanes {
            network_file,
            features_file,
            output_network_file,
            schedule_file,
            output_schedule_file,
            report_directory,
            drop_disconnected_routes,
            ..
        } => pipelines::bus_lanes(
            &conf,
            network_file,
            features_file,
            output_network_file,
            schedule_file.as_deref(),
            output_schedule_file.as_deref(),
            report_directory.as_deref(),
            *drop_disconnected_routes,
        ),
        App::ReferenceTables {
            schedule_file,
            network_file,
            points_file,
            output_directory,
            ..
        } => pipelines::reference_tables(
            &conf,
            schedule_file,
            network_file,
            points_file.as_deref(),
            output_directory,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bus_lanes() {
        let args = BeelineAppArguments::try_parse_from([
            "beeline",
            "bus-lanes",
            "--network-file",
            "network.json.gz",
            "--features-file",
            "streets.geojson",
            "--output-network-file",
            "out.json.gz",
            "--drop-disconnected-routes",
            "--feature-fallback",
            "lenient",
        ])
        .unwrap();
        let mut conf = BeelineConfiguration::default();
        args.app.apply_overrides(&mut conf);
        assert_eq!(conf.feature_fallback, FallbackPolicy::Lenient);
        match args.app {
            App::BusLanes {
                schedule_file,
                drop_disconnected_routes,
                ..
            } => {
                assert!(schedule_file.is_none());
                assert!(drop_disconnected_routes);
            }
            _ => panic!("expected bus-lanes"),
        }
    }

    #[test]
    fn test_schedule_requires_output() {
        let result = BeelineAppArguments::try_parse_from([
            "beeline",
            "bus-lanes",
            "--network-file",
            "network.json",
            "--features-file",
            "streets.geojson",
            "--output-network-file",
            "out.json",
            "--schedule-file",
            "schedule.json",
        ]);
        assert!(result.is_err());
    }
}
