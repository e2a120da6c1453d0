//! Entry point for the WASM application

pub fn main() {
    imgpredict_frontend::start();
}
