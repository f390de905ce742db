//! Probes whether XCB is usable on this host. Exits successfully either
//! way; the answer is the printed line. Build with `--features log` and
//! run with `RUST_LOG=debug` to see which libraries and entry points
//! resolved.

use xcb_wrangler::InitStatus;

fn main() {
    env_logger::init();
    if xcb_wrangler::init() == InitStatus::Success {
        println!("XCB found");
    } else {
        println!("XCB not found");
    }
}
