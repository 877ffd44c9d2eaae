//! Run a fixed query script against a random polygon collection.
//!
//! Usage:
//!   cargo run -p polyquery --example random_session -- 25
//!
//! Prints the generated collection, then each command next to its answer.

use polyquery::rand::{draw_collection, RadialCfg};
use polyquery::{PolygonStore, Session, SessionCfg};

const SCRIPT: &[&str] = &[
    "AREA EVEN",
    "AREA ODD",
    "AREA MEAN",
    "MAX AREA",
    "MIN VERTEXES",
    "COUNT 4",
    "LESSAREA 4 0 0 0 20 20 20 20 0",
    "INFRAME 3 0 0 5 5 10 0",
    "AREA 2",
];

fn main() {
    let count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(10usize);
    let store = PolygonStore::new(draw_collection(RadialCfg::default(), 2025, count));
    for p in &store {
        println!("{p}");
    }
    println!();
    let session = Session::new(&store, SessionCfg::default());
    for line in SCRIPT {
        match session.eval(line) {
            Some(Ok(resp)) => println!("{line:<36} {resp}"),
            Some(Err(err)) => println!("{line:<36} error: {err}"),
            None => {}
        }
    }
}
