use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use crate::engine::loading::progress::LoadProgress;
use crate::rpc::web_rpc::WebRpcInterface;

pub fn notify_load_progress(
    loading_progress: Res<LoadProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !loading_progress.is_changed() {
        return;
    }

    rpc_interface.send_notification(
        "load_progress",
        serde_json::json!({
            "fraction": loading_progress.fraction(),
            "complete": loading_progress.is_complete(),
        }),
    );
}

pub fn notify_state_changed(state: Res<State<AppState>>, mut rpc_interface: ResMut<WebRpcInterface>) {
    if !state.is_changed() {
        return;
    }

    rpc_interface.send_notification(
        "state_changed",
        serde_json::json!({ "state": state.get().as_str() }),
    );
}

/// Make a failed load visible instead of leaving the loader up forever.
pub fn report_load_failure(
    loading_progress: Res<LoadProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let message = loading_progress.failure().unwrap_or("unknown error");
    error!("Scene failed to load: {}", message);

    rpc_interface.send_notification("load_failed", serde_json::json!({ "message": message }));

    #[cfg(target_arch = "wasm32")]
    crate::page::dom::mark_load_failed(message);
}
