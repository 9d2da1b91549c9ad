//! Vaporwave Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    vaporwave_pong::platform::web::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use vaporwave_pong::Settings;
    use vaporwave_pong::platform::HeadlessSession;

    env_logger::init();
    log::info!("Vaporwave Pong (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the playable web version");

    let settings = Settings::load();
    let mut session = HeadlessSession::mount(&settings);

    // Scripted rally: both players nudge their paddles every so often
    session.toggle();
    let script = [
        settings.keys.left_up.as_str(),
        settings.keys.right_down.as_str(),
        settings.keys.left_down.as_str(),
        settings.keys.right_up.as_str(),
    ];
    let mut fired = 0;
    while fired < settings.headless_frames {
        if fired % 30 == 0 {
            session.key_down(script[(fired as usize / 30) % script.len()]);
        }
        if !session.pump() {
            break;
        }
        fired += 1;
    }
    session.toggle();

    log::info!(
        "Ran {} frames, button now reads {:?}",
        session.game().frames(),
        session.button_label()
    );
    match serde_json::to_string_pretty(session.game().state()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not serialize final state: {e}"),
    }

    let teardown = session.unmount();
    log::info!("Unmounted: {:?}", teardown);
}
