use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::core::app_state::AppState;
use crate::engine::loading::progress::LoadProgress;
use crate::page::layout::{PageLayout, SectionRect};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC error structure following specification.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource queueing messages for the host page until the end of the frame.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Notifications queued and not yet sent.
    pub fn pending_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing the postMessage channel with the embedding page.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Shared between the JS callback and the ECS.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(e) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {:?}", e);
        }
    }

    // Ownership moves to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Raw RPC message received from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    state: Res<State<AppState>>,
    loading_progress: Res<LoadProgress>,
    mut layout: ResMut<PageLayout>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                if let Some(response) =
                    handle_rpc_request(&request, *state.get(), &loading_progress, &mut layout)
                {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => warn!("Discarding malformed RPC message: {}", parse_error),
        }
    }
}

/// Handle individual RPC request and generate response based on method.
/// Requests without an ID are applied but get no response.
fn handle_rpc_request(
    request: &RpcRequest,
    state: AppState,
    loading_progress: &LoadProgress,
    layout: &mut PageLayout,
) -> Option<RpcResponse> {
    let result = match request.method.as_str() {
        "get_state" => Ok(serde_json::json!({ "state": state.as_str() })),
        "get_load_progress" => handle_get_load_progress(loading_progress),
        "scroll_update" => handle_scroll_update(&request.params, layout),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            return request.id.clone().map(|id| {
                create_error_response(
                    id,
                    -32601,
                    "Method not found",
                    Some(serde_json::json!({"method": request.method})),
                )
            });
        }
    };

    let id = request.id.clone()?;
    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

fn handle_get_load_progress(
    loading_progress: &LoadProgress,
) -> Result<serde_json::Value, RpcError> {
    Ok(serde_json::json!({
        "fraction": loading_progress.fraction(),
        "complete": loading_progress.is_complete(),
        "error": loading_progress.failure(),
    }))
}

/// Replace the scroll layout with one measured by the host page. From then
/// on the engine stops sampling the layout itself.
fn handle_scroll_update(
    params: &serde_json::Value,
    layout: &mut PageLayout,
) -> Result<serde_json::Value, RpcError> {
    #[derive(Deserialize)]
    struct SectionParams {
        name: String,
        top: f32,
        height: f32,
    }

    #[derive(Deserialize)]
    struct ScrollParams {
        scroll_y: f32,
        viewport_height: f32,
        sections: Option<Vec<SectionParams>>,
    }

    let scroll = serde_json::from_value::<ScrollParams>(params.clone()).map_err(|_| {
        RpcError::invalid_params("Expected 'scroll_y' and 'viewport_height' parameters")
    })?;
    if !scroll.scroll_y.is_finite() || !scroll.viewport_height.is_finite() {
        return Err(RpcError::invalid_params("Scroll values must be finite"));
    }

    if let Some(section) = scroll.sections.iter().flatten().find(|section| {
        !section.top.is_finite() || !section.height.is_finite() || section.height < 0.0
    }) {
        return Err(RpcError::invalid_params(&format!(
            "Section '{}' needs a finite top and a finite, non-negative height",
            section.name
        )));
    }

    layout.scroll_y = scroll.scroll_y;
    layout.viewport_height = scroll.viewport_height;
    if let Some(sections) = scroll.sections {
        layout.clear_sections();
        for section in sections {
            layout.set_section(
                section.name,
                SectionRect {
                    top: section.top,
                    height: section.height,
                },
            );
        }
    }
    if !layout.host_driven {
        info!("Scroll layout is now driven by the host page");
        layout.host_driven = true;
    }

    Ok(serde_json::json!({ "success": true }))
}

/// Create standardized error response with optional data payload.
fn create_error_response(
    id: serde_json::Value,
    code: i32,
    message: &str,
    data: Option<serde_json::Value>,
) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(RpcError {
            code,
            message: message.to_string(),
            data,
        }),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to the parent window.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}

impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(method: &str, params: serde_json::Value) -> RpcRequest {
        RpcRequest {
            jsonrpc: "2.0".into(),
            method: method.into(),
            params,
            id: Some(json!(7)),
        }
    }

    #[test]
    fn state_and_progress_queries_report_current_values() {
        let mut progress = LoadProgress::default();
        progress.report(0.6);
        let mut layout = PageLayout::default();

        let response = handle_rpc_request(
            &request("get_state", json!(null)),
            AppState::Loading,
            &progress,
            &mut layout,
        )
        .unwrap();
        assert_eq!(response.id, Some(json!(7)));
        assert_eq!(response.result, Some(json!({ "state": "loading" })));

        let response = handle_rpc_request(
            &request("get_load_progress", json!({})),
            AppState::Loading,
            &progress,
            &mut layout,
        )
        .unwrap();
        let result = response.result.unwrap();
        assert_eq!(result["fraction"], json!(0.6f32));
        assert_eq!(result["complete"], json!(false));
        assert!(result["error"].is_null());
    }

    #[test]
    fn scroll_update_takes_over_the_layout() {
        let progress = LoadProgress::default();
        let mut layout = PageLayout::default();

        let response = handle_rpc_request(
            &request(
                "scroll_update",
                json!({
                    "scroll_y": 420.0,
                    "viewport_height": 900.0,
                    "sections": [{ "name": "section-two", "top": 900.0, "height": 900.0 }]
                }),
            ),
            AppState::ScrollBound,
            &progress,
            &mut layout,
        )
        .unwrap();

        assert!(response.error.is_none());
        assert!(layout.host_driven);
        assert_eq!(layout.scroll_y, 420.0);
        assert_eq!(layout.viewport_height, 900.0);
        assert_eq!(
            layout.section("section-two"),
            Some(SectionRect { top: 900.0, height: 900.0 })
        );
    }

    #[test]
    fn malformed_scroll_update_is_rejected() {
        let progress = LoadProgress::default();
        let mut layout = PageLayout::default();

        let response = handle_rpc_request(
            &request("scroll_update", json!({ "scroll_y": "down" })),
            AppState::ScrollBound,
            &progress,
            &mut layout,
        )
        .unwrap();
        assert_eq!(response.error.map(|e| e.code), Some(-32602));
        assert!(!layout.host_driven);
    }

    #[test]
    fn out_of_range_sections_are_rejected() {
        let progress = LoadProgress::default();
        let mut layout = PageLayout::default();
        layout.set_section("section-two", SectionRect { top: 1000.0, height: 1000.0 });

        for section in [
            json!({ "name": "section-two", "top": 1000.0, "height": 1e39 }),
            json!({ "name": "section-two", "top": -1e39, "height": 1000.0 }),
            json!({ "name": "section-two", "top": 1000.0, "height": -5.0 }),
        ] {
            let response = handle_rpc_request(
                &request(
                    "scroll_update",
                    json!({ "scroll_y": 500.0, "viewport_height": 1000.0, "sections": [section] }),
                ),
                AppState::ScrollBound,
                &progress,
                &mut layout,
            )
            .unwrap();
            assert_eq!(response.error.map(|e| e.code), Some(-32602));
        }

        // The previous layout is left untouched.
        assert!(!layout.host_driven);
        assert_eq!(layout.scroll_y, 0.0);
        assert_eq!(
            layout.section("section-two"),
            Some(SectionRect { top: 1000.0, height: 1000.0 })
        );
    }

    #[test]
    fn unknown_methods_get_method_not_found() {
        let progress = LoadProgress::default();
        let mut layout = PageLayout::default();

        let response = handle_rpc_request(
            &request("get_fps", json!({})),
            AppState::ScrollBound,
            &progress,
            &mut layout,
        )
        .unwrap();
        assert_eq!(response.error.map(|e| e.code), Some(-32601));
    }

    #[test]
    fn notifications_without_id_get_no_response() {
        let progress = LoadProgress::default();
        let mut layout = PageLayout::default();
        let mut notification = request(
            "scroll_update",
            json!({ "scroll_y": 10.0, "viewport_height": 500.0 }),
        );
        notification.id = None;

        assert!(handle_rpc_request(&notification, AppState::ScrollBound, &progress, &mut layout).is_none());
        assert_eq!(layout.scroll_y, 10.0);
    }

    #[test]
    fn incoming_messages_are_answered_in_frame() {
        use bevy::state::app::StatesPlugin;

        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .insert_state(AppState::IntroPlaying)
            .init_resource::<LoadProgress>()
            .init_resource::<PageLayout>()
            .init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(Update, handle_rpc_messages);

        app.world_mut().send_event(IncomingRpcMessage {
            content: r#"{"jsonrpc":"2.0","method":"get_state","id":1}"#.into(),
        });
        app.update();

        let interface = app.world().resource::<WebRpcInterface>();
        assert_eq!(interface.outgoing_responses.len(), 1);
        assert_eq!(
            interface.outgoing_responses[0].result,
            Some(json!({ "state": "intro_playing" }))
        );
    }
}
