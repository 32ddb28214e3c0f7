//! a straight two-way road a - b - c - d with 100 unit links, once with the
//! link ids of an older network version ("old_ab") and once with the ids of
//! the current one ("ab"), plus a schedule on the older network.
use beeline_core::model::{
    network::{Link, LinkId, Network, Node, NodeId},
    schedule::{
        StopFacility, StopFacilityId, TransitLine, TransitLineId, TransitRoute, TransitRouteId,
        TransitRouteStop, TransitSchedule,
    },
};

pub fn link(id: &str, from: &str, to: &str, modes: &[&str]) -> Link {
    Link {
        id: LinkId::from(id),
        from: NodeId::from(from),
        to: NodeId::from(to),
        length: 100.0,
        freespeed: 13.9,
        capacity: 600.0,
        permlanes: 1.0,
        modes: modes.iter().map(|m| m.to_string()).collect(),
        link_type: None,
    }
}

fn create_road(prefix: &str) -> Network {
    let mut network = Network::new();
    for (id, x) in [("a", 0.0), ("b", 100.0), ("c", 200.0), ("d", 300.0)] {
        network.add_node(Node::new(NodeId::from(id), x, 0.0)).unwrap();
    }
    for (from, to) in [("a", "b"), ("b", "c"), ("c", "d")] {
        let forward = format!("{prefix}{from}{to}");
        let backward = format!("{prefix}{to}{from}");
        network
            .add_link(link(&forward, from, to, &["car", "bus"]))
            .unwrap();
        network
            .add_link(link(&backward, to, from, &["car", "bus"]))
            .unwrap();
    }
    network
}

pub fn create_source_network() -> Network {
    create_road("old_")
}

pub fn create_target_network() -> Network {
    create_road("")
}

pub fn facility(id: &str, x: f64, y: f64, link: &str) -> StopFacility {
    StopFacility {
        id: StopFacilityId::from(id),
        name: None,
        x,
        y,
        link: LinkId::from(link),
        is_blocking: false,
    }
}

pub fn route(id: &str, mode: &str, links: &[&str], stops: &[&str]) -> TransitRoute {
    TransitRoute {
        id: TransitRouteId::from(id),
        transport_mode: String::from(mode),
        links: links.iter().map(|l| LinkId::from(*l)).collect(),
        stops: stops
            .iter()
            .map(|s| TransitRouteStop::new(StopFacilityId::from(*s)))
            .collect(),
        departures: vec![],
    }
}

pub fn line(id: &str, routes: Vec<TransitRoute>) -> TransitLine {
    let mut line = TransitLine::new(TransitLineId::from(id), None);
    for r in routes {
        line.routes.insert(r.id.clone(), r);
    }
    line
}

/// bus line L1 runs the whole road eastbound stopping at s1, s2 and s3. bus
/// line L2 only serves s1. tram line T1 serves s4 on the last link.
pub fn create_schedule() -> TransitSchedule {
    let mut schedule = TransitSchedule::new();
    for f in [
        facility("s1", 50.0, 3.0, "old_ab"),
        facility("s2", 150.0, 3.0, "old_bc"),
        facility("s3", 250.0, 3.0, "old_cd"),
        facility("s4", 250.0, -3.0, "old_cd"),
    ] {
        schedule.add_facility(f).unwrap();
    }
    let l1 = line(
        "L1",
        vec![route(
            "r1",
            "bus",
            &["old_ab", "old_bc", "old_cd"],
            &["s1", "s2", "s3"],
        )],
    );
    let l2 = line("L2", vec![route("r1", "bus", &["old_ab"], &["s1"])]);
    let t1 = line("T1", vec![route("r1", "tram", &["old_cd"], &["s4"])]);
    for l in [l1, l2, t1] {
        schedule.add_line(l).unwrap();
    }
    schedule
}
