use roadgraph_core::graph::HeuristicKind;

/// Parse heuristic kind from string
pub fn parse_heuristic(s: &str) -> std::result::Result<HeuristicKind, String> {
    s.parse::<HeuristicKind>().map_err(|e| e.to_string())
}
