#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm entry point lives in lib.rs behind #[wasm_bindgen(start)];
    // trunk links the cdylib, so this binary stays empty on wasm.
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("presence-frontend targets wasm32; build it with trunk.");
}
