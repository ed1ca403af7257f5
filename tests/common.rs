use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn roadgraph() -> Command {
    let mut cmd = cargo_bin_cmd!("roadgraph");
    cmd.env_remove("ROADGRAPH_NETWORK")
        .env_remove("ROADGRAPH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Four-block main road I1..I5, house H15 at its end, house H12 on the
/// isolated intersection I10
pub const CITY: &str = r#"
vertices = ["I1", "I2", "I3", "I4", "I5", "I10"]

[graph]
capacity = 20

[[edges]]
id = "R1"
name = "Main St"
from = "I1"
to = "I2"
length = 10.0
weight = 5.0

[[edges]]
id = "R2"
name = "2nd St"
from = "I2"
to = "I3"
length = 10.0
weight = 5.0

[[edges]]
id = "R3"
name = "3rd St"
from = "I3"
to = "I4"
length = 10.0
weight = 5.0

[[edges]]
id = "R4"
name = "4th St"
from = "I4"
to = "I5"
length = 10.0
weight = 5.0

[[houses]]
id = "H15"
vertex = "I5"

[[houses]]
id = "H12"
vertex = "I10"
"#;

/// A definition with one bad entry of each kind
#[allow(dead_code)]
pub const BROKEN: &str = r#"
vertices = ["I1", "I2", "I2"]

[graph]
capacity = 10

[[edges]]
id = "R1"
from = "I1"
to = "I2"
weight = 3.0

[[edges]]
id = "R2"
from = "I1"
to = "I7"
weight = 3.0

[[houses]]
id = "H5"
vertex = "I9"
"#;

/// Write `content` to `name` inside `dir` and return its path
pub fn write_network(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write network file");
    path
}
