use tracing::debug;

use crate::error::Result;
use crate::graph::algos::dijkstra;
use crate::graph::network::RoadNetwork;
use crate::graph::types::HouseDistance;

/// Cost of the cheapest route from a house to `destination`.
///
/// Returns `HouseDistance::NoStartingPoint` when the house was never
/// attached. The search starts at the house's own vertex, so the cost
/// includes the access road to its road vertex. The whole distance map is
/// computed for one answer; at 100 vertices that is cheap enough.
pub fn shortest_path_to_house(
    network: &RoadNetwork,
    house_id: &str,
    destination: &str,
) -> Result<HouseDistance> {
    let Some(house) = network.house(house_id) else {
        debug!(house_id, "no starting point for house");
        return Ok(HouseDistance::NoStartingPoint);
    };
    network.require_vertex(destination)?;

    debug!(house_id, attachment = %house.vertex, destination, "house_query");

    let distances = dijkstra(network, &house.id)?;
    Ok(HouseDistance::Reached(distances[destination]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoadGraphError;
    use crate::graph::types::Cost;

    /// Road I1 - I2 - I3 - I4 (weight 5 each), I5 off the road, house H1 on I5
    fn network_with_house() -> RoadNetwork {
        let mut network = RoadNetwork::new(10).unwrap();
        for id in ["I1", "I2", "I3", "I4", "I5"] {
            network.add_vertex(id).unwrap();
        }
        network.add_edge("I1", "I2", "R1", "Main St", 10.0, 5.0).unwrap();
        network.add_edge("I2", "I3", "R2", "2nd St", 10.0, 5.0).unwrap();
        network.add_edge("I3", "I4", "R3", "3rd St", 10.0, 5.0).unwrap();
        network.add_house("H1", "I5").unwrap();
        network
    }

    #[test]
    fn test_house_to_its_attachment_costs_the_access_road() {
        let network = network_with_house();
        let result = shortest_path_to_house(&network, "H1", "I5").unwrap();
        assert_eq!(result, HouseDistance::Reached(Cost::from(1)));
    }

    #[test]
    fn test_house_on_its_own_slot() {
        let mut network = RoadNetwork::new(10).unwrap();
        network.add_vertex("I5").unwrap();
        network.add_house("H7", "I5").unwrap();

        let result = shortest_path_to_house(&network, "H7", "I5").unwrap();
        assert_eq!(result, HouseDistance::Reached(Cost::from(1)));
    }

    #[test]
    fn test_house_to_distant_vertex() {
        let network = network_with_house();
        // H1 shares slot 0 with I1, so the road is reachable from the house
        let result = shortest_path_to_house(&network, "H1", "I4").unwrap();
        assert_eq!(result.cost(), Some(Cost::from(15)));
    }

    #[test]
    fn test_house_to_itself_is_free() {
        let network = network_with_house();
        let result = shortest_path_to_house(&network, "H1", "H1").unwrap();
        assert_eq!(result, HouseDistance::Reached(Cost::ZERO));
    }

    #[test]
    fn test_unattached_house_has_no_starting_point() {
        let network = network_with_house();
        let result = shortest_path_to_house(&network, "H9", "I1").unwrap();
        assert_eq!(result, HouseDistance::NoStartingPoint);
        assert_eq!(result.cost(), None);
    }

    #[test]
    fn test_unreachable_destination_is_infinite() {
        let mut network = network_with_house();
        network.add_vertex("I9").unwrap();

        let result = shortest_path_to_house(&network, "H1", "I9").unwrap();
        let cost = result.cost().unwrap();
        assert!(!cost.is_finite());
    }

    #[test]
    fn test_unknown_destination_is_an_error() {
        let network = network_with_house();
        let err = shortest_path_to_house(&network, "H1", "I8").unwrap_err();
        assert!(matches!(err, RoadGraphError::UnknownVertex { ref id } if id == "I8"));
    }
}
