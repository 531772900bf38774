//! # Voxel Sim Entry Point
//!
//! Entry point for the headless demo binary. It simply calls into the
//! library's `run()` function, which initializes logging and drives the
//! simulation loop.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release
//! ```

fn main() {
    voxel_sim::run();
}
