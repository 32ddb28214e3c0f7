//! the end-to-end runs behind each command.
use super::BeelineAppError;
use crate::algorithm::{
    lanes::{LaneSynthesizer, LinkSubstitutionMap},
    matching::LinkTransfer,
    network_preparation,
    rebase::{
        reassign_substituted_facilities, LineUsage, RewiringOutcome, RouteRewiring,
        StopReassignment,
    },
};
use crate::config::BeelineConfiguration;
use crate::io;
use crate::report::{self, reference_tables, LinkMatchRow, MatchFailureRow, ReassignmentRow};
use beeline_core::{model::schedule::TransitSchedule, spatial::LinkSpatialIndex};
use std::path::Path;

pub fn filter_network(
    conf: &BeelineConfiguration,
    network_file: &str,
    output_file: &str,
) -> Result<(), BeelineAppError> {
    let network = io::read_network(network_file)?;
    let roads =
        network_preparation::road_network(&network, &conf.base_modes, &conf.excluded_link_types);
    io::write_network(output_file, &roads, true)?;
    Ok(())
}

pub fn convert_modes(
    conf: &BeelineConfiguration,
    network_file: &str,
    output_file: &str,
) -> Result<(), BeelineAppError> {
    let network = io::read_network(network_file)?;
    let unified =
        network_preparation::unify_transit_modes(&network, &conf.pt_source_modes, &conf.lane_mode);
    io::write_network(output_file, &unified, true)?;
    Ok(())
}

/// moves the stops of `schedule_file` onto the road links of `network_file`
/// that carry the same lines in a prepared schedule, then rewires the routes.
#[allow(clippy::too_many_arguments)]
pub fn rebase_stops(
    conf: &BeelineConfiguration,
    schedule_file: &str,
    network_file: &str,
    prepared_schedule_file: &str,
    prepared_network_file: &str,
    output_schedule_file: &str,
    report_directory: Option<&str>,
    drop_disconnected_routes: bool,
) -> Result<(), BeelineAppError> {
    let schedule = io::read_schedule(schedule_file)?;
    let network = io::read_network(network_file)?;
    let prepared_schedule = io::read_schedule(prepared_schedule_file)?;
    let prepared_network = io::read_network(prepared_network_file)?;

    let roads =
        network_preparation::road_network(&network, &conf.base_modes, &conf.excluded_link_types);
    let index = LinkSpatialIndex::new(&roads)?;
    let link_transfer = LinkTransfer::new(&roads, &index, &conf.transfer);
    let usage = LineUsage::transfer(
        &prepared_schedule,
        &prepared_network,
        &link_transfer,
        &conf.usage_modes,
        &conf.prepared_line_names,
        conf.parallelize,
    )?;
    log::info!("{} road links carry prepared lines", usage.iter().count());

    let reassignment =
        StopReassignment::from(conf).run(&schedule, &network, &roads, &index, &usage)?;
    if let Some(dir) = report_directory {
        let rows = reassignment
            .outcomes
            .iter()
            .map(ReassignmentRow::from)
            .collect::<Vec<_>>();
        report::write_rows(&report_path(dir, "stop_reassignments.csv"), &rows, true)?;
    }

    let outcome = RouteRewiring::new(reassignment.facilities).run(
        &schedule,
        &LinkSubstitutionMap::empty(),
        &network,
    )?;
    let rebased = finish_rewiring(outcome, report_directory, drop_disconnected_routes)?;
    io::write_schedule(output_schedule_file, &rebased, true)?;
    Ok(())
}

/// adds bus lane links for the bus lane features of `features_file` and, when a
/// schedule is given, moves its stops and routes onto the new lanes.
#[allow(clippy::too_many_arguments)]
pub fn bus_lanes(
    conf: &BeelineConfiguration,
    network_file: &str,
    features_file: &str,
    output_network_file: &str,
    schedule_file: Option<&str>,
    output_schedule_file: Option<&str>,
    report_directory: Option<&str>,
    drop_disconnected_routes: bool,
) -> Result<(), BeelineAppError> {
    let network = io::read_network(network_file)?;
    let features = io::read_features(features_file)?;
    let schedule = schedule_file.map(io::read_schedule).transpose()?;

    let synthesis = LaneSynthesizer::from(conf).run(&network, &features)?;
    io::write_network(output_network_file, &synthesis.network, true)?;

    if let Some(dir) = report_directory {
        let usage = match &schedule {
            Some(s) => LineUsage::from_schedule(s, &conf.usage_modes, &conf.schedule_line_names),
            None => LineUsage::default(),
        };
        let (usage, lanes_network) = (&usage, &synthesis.network);
        let matches = synthesis
            .matched
            .iter()
            .flat_map(|(feature_id, links)| {
                links.iter().map(move |link_id| {
                    LinkMatchRow::new(feature_id.as_str(), link_id, lanes_network, usage)
                })
            })
            .collect::<Vec<_>>();
        report::write_rows(&report_path(dir, "bus_lane_matches.csv"), &matches, true)?;
        let failures = synthesis
            .failures
            .iter()
            .map(MatchFailureRow::from)
            .collect::<Vec<_>>();
        report::write_rows(&report_path(dir, "bus_lane_failures.csv"), &failures, true)?;
    }

    let (Some(schedule), Some(output_schedule_file)) = (schedule, output_schedule_file) else {
        return Ok(());
    };
    let facilities =
        reassign_substituted_facilities(schedule.facilities(), &synthesis.substitutions);
    let outcome = RouteRewiring::new(facilities).run(
        &schedule,
        &synthesis.substitutions,
        &synthesis.network,
    )?;
    let rebased = finish_rewiring(outcome, report_directory, drop_disconnected_routes)?;
    io::write_schedule(output_schedule_file, &rebased, true)?;
    Ok(())
}

pub fn reference_tables(
    conf: &BeelineConfiguration,
    schedule_file: &str,
    network_file: &str,
    points_file: Option<&str>,
    output_directory: &str,
) -> Result<(), BeelineAppError> {
    let schedule = io::read_schedule(schedule_file)?;
    let network = io::read_network(network_file)?;
    let names = &conf.schedule_line_names;
    let usage = LineUsage::from_schedule(&schedule, &conf.usage_modes, names);

    let vehicles = reference_tables::vehicle_lines(&schedule, names);
    report::write_rows(&report_path(output_directory, "vehicle_lines.csv"), &vehicles, true)?;
    let facilities = reference_tables::facility_lines(&schedule, names);
    report::write_rows(
        &report_path(output_directory, "facility_lines.csv"),
        &facilities,
        true,
    )?;
    let links = reference_tables::link_usage(&network, &usage);
    report::write_rows(&report_path(output_directory, "link_usage.csv"), &links, true)?;

    if let Some(points_file) = points_file {
        let points = io::read_points(points_file)?;
        let roads = network_preparation::road_network(
            &network,
            &conf.base_modes,
            &conf.excluded_link_types,
        );
        let index = LinkSpatialIndex::new(&roads)?;
        let rows = reference_tables::point_links(&points, &roads, &index, &usage);
        report::write_rows(&report_path(output_directory, "point_links.csv"), &rows, true)?;
    }
    Ok(())
}

/// reports failed routes, then either drops them or aborts.
fn finish_rewiring(
    outcome: RewiringOutcome,
    report_directory: Option<&str>,
    drop_disconnected_routes: bool,
) -> Result<TransitSchedule, BeelineAppError> {
    if let Some(dir) = report_directory {
        let rows = outcome
            .failures
            .iter()
            .map(MatchFailureRow::from)
            .collect::<Vec<_>>();
        report::write_rows(&report_path(dir, "route_failures.csv"), &rows, true)?;
    }
    match outcome.failures.first() {
        Some(first) if !drop_disconnected_routes => Err(BeelineAppError::RewiringFailed {
            count: outcome.failures.len(),
            first: first.clone(),
        }),
        _ => {
            if !outcome.is_complete() {
                log::warn!("dropped {} routes that could not be rewired", outcome.failures.len());
            }
            Ok(outcome.schedule)
        }
    }
}

fn report_path(directory: &str, filename: &str) -> String {
    Path::new(directory).join(filename).to_string_lossy().to_string()
}
