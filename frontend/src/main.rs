//! Entry point for the WASM application

fn main() {
    sharexpress_frontend::run()
}
