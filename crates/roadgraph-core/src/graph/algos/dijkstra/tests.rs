use super::*;
use crate::error::RoadGraphError;

/// I1 --5-- I2 --5-- I3 --5-- I4
fn straight_road() -> RoadNetwork {
    let mut network = RoadNetwork::new(100).unwrap();
    for i in 1..=4 {
        network.add_vertex(&format!("I{}", i)).unwrap();
    }
    network.add_edge("I1", "I2", "R1", "Main St", 10.0, 5.0).unwrap();
    network.add_edge("I2", "I3", "R2", "2nd St", 10.0, 5.0).unwrap();
    network.add_edge("I3", "I4", "R3", "3rd St", 10.0, 5.0).unwrap();
    network
}

#[test]
fn test_dijkstra_straight_road() {
    let network = straight_road();
    let distances = dijkstra(&network, "I1").unwrap();

    assert_eq!(distances.source, "I1");
    assert_eq!(distances["I1"], 0.0);
    assert_eq!(distances["I2"], 5.0);
    assert_eq!(distances["I3"], 10.0);
    assert_eq!(distances["I4"], 15.0);
}

#[test]
fn test_dijkstra_source_is_zero_for_every_vertex() {
    let network = straight_road();
    for id in network.vertex_ids() {
        let distances = dijkstra(&network, id).unwrap();
        assert_eq!(distances[id], 0.0, "source {} should cost nothing", id);
    }
}

#[test]
fn test_dijkstra_covers_every_registered_vertex() {
    let mut network = straight_road();
    network.add_vertex("I50").unwrap();

    let distances = dijkstra(&network, "I1").unwrap();
    assert_eq!(distances.len(), network.vertex_count());
    let ids: Vec<&str> = distances.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["I1", "I2", "I3", "I4", "I50"]);
}

#[test]
fn test_dijkstra_unreachable_is_infinite() {
    let mut network = straight_road();
    network.add_vertex("I9").unwrap();
    network.add_vertex("I10").unwrap();
    network.add_edge("I9", "I10", "R9", "Island Rd", 1.0, 1.0).unwrap();

    let distances = dijkstra(&network, "I1").unwrap();
    assert!(!distances["I9"].is_finite());
    assert!(!distances["I10"].is_finite());
    assert_eq!(distances["I9"], Cost::INFINITY);
    assert_eq!(distances.reachable().count(), 4);
}

#[test]
fn test_dijkstra_prefers_cheaper_detour() {
    // I1 --10-- I2, I1 --2-- I3 --3-- I2
    let mut network = RoadNetwork::new(10).unwrap();
    for id in ["I1", "I2", "I3"] {
        network.add_vertex(id).unwrap();
    }
    network.add_edge("I1", "I2", "R1", "Direct", 1.0, 10.0).unwrap();
    network.add_edge("I1", "I3", "R2", "Detour A", 1.0, 2.0).unwrap();
    network.add_edge("I3", "I2", "R3", "Detour B", 1.0, 3.0).unwrap();

    let distances = dijkstra(&network, "I1").unwrap();
    assert_eq!(distances["I2"], 5.0);
}

#[test]
fn test_dijkstra_is_symmetric_on_undirected_roads() {
    let network = straight_road();
    let from_start = dijkstra(&network, "I1").unwrap();
    let from_end = dijkstra(&network, "I4").unwrap();
    assert_eq!(from_start["I4"], from_end["I1"]);
}

#[test]
fn test_dijkstra_zero_weight_edges() {
    let mut network = RoadNetwork::new(10).unwrap();
    for id in ["I1", "I2", "I3"] {
        network.add_vertex(id).unwrap();
    }
    network.add_edge("I1", "I2", "R1", "Ramp", 1.0, 0.0).unwrap();
    network.add_edge("I2", "I3", "R2", "Road", 1.0, 4.0).unwrap();

    let distances = dijkstra(&network, "I1").unwrap();
    assert_eq!(distances["I2"], 0.0);
    assert_eq!(distances["I3"], 4.0);
}

#[test]
fn test_dijkstra_skips_stale_entries() {
    // I2 is first pushed at 10 via the direct road, then improved to 5
    let mut network = RoadNetwork::new(10).unwrap();
    for id in ["I1", "I2", "I3"] {
        network.add_vertex(id).unwrap();
    }
    network.add_edge("I1", "I2", "R1", "Direct", 1.0, 10.0).unwrap();
    network.add_edge("I1", "I3", "R2", "Detour A", 1.0, 2.0).unwrap();
    network.add_edge("I3", "I2", "R3", "Detour B", 1.0, 3.0).unwrap();

    let distances = dijkstra(&network, "I1").unwrap();
    assert_eq!(distances.stats.nodes_expanded, 3);
    assert_eq!(distances.stats.stale_skipped, 1);
    assert_eq!(distances.stats.nodes_generated, 4);
}

#[test]
fn test_dijkstra_unknown_start() {
    let network = straight_road();
    let err = dijkstra(&network, "I77").unwrap_err();
    assert!(matches!(err, RoadGraphError::UnknownVertex { ref id } if id == "I77"));
}
