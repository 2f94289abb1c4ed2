// This binary crate is intentionally minimal.
// All the library logic lives in src/lib.rs and its modules.
// Run demos with:
//   cargo run --example xor
fn main() {
    println!("graphite-nn: a from-scratch, layer-based deep learning library in Rust.");
    println!("Run `cargo run --example xor` or `cargo run --example fizzbuzz` to see it train.");
}
