//! End-to-end tests: spawn the server on 127.0.0.1:0 and talk HTTP to it.
//! Run with `cargo test -p serve -- --nocapture` to see received bodies.

mod common;
mod generate;
mod page;
