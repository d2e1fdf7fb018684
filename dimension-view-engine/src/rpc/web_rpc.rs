use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use chrono::NaiveDate;
use crate::engine::core::app_state::{AppState, FrameSet};
use crate::engine::scene::SceneData;
use crate::engine::systems::fps_tracking::current_fps;
use crate::engine::systems::view_actions::{ViewActionEvent, ViewStore};
use crate::shell::detail_panel::file_details;
use dimension_model::{
    Dataset, FileId, GroupId, ParseError, Priority, ViewAction, ViewMode, ViewState,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

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

/// Resource queueing notifications and responses for the host page.
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

    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// What a parsed request asks the engine to do.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcCommand {
    /// Forward these actions to the reducer, in order.
    Dispatch(Vec<ViewAction>),
    GetViewState,
    GetFps,
}

/// Plugin establishing the WebRPC layer for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (process_incoming_messages, handle_rpc_messages)
                    .chain()
                    .in_set(FrameSet::Input)
                    .run_if(in_state(AppState::Running)),
            )
            .add_systems(
                Update,
                notify_view_changes
                    .in_set(FrameSet::Reflect)
                    .run_if(in_state(AppState::Running)),
            )
            .add_systems(Update, send_outgoing_messages.after(FrameSet::Reflect));

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Messages arrive on the JS event loop and are drained once per frame.
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
        window
            .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
            .expect("Failed to register message listener");
    }

    // JS keeps the closure alive from here on.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Raw message received from the host page.
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
    diagnostics: Res<DiagnosticsStore>,
    store: Res<ViewStore>,
    scene: Res<SceneData>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut actions: EventWriter<ViewActionEvent>,
) {
    for event in events.read() {
        let request = match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => request,
            Err(parse_error) => {
                warn!("Dropping malformed RPC message: {}", parse_error);
                continue;
            }
        };

        debug!("Processing RPC method: {}", request.method);
        let result = parse_command(&request.method, &request.params, &scene.dataset).map(
            |command| match command {
                RpcCommand::Dispatch(batch) => {
                    let count = batch.len();
                    actions.write_batch(batch.into_iter().map(ViewActionEvent));
                    serde_json::json!({ "success": true, "actions": count })
                }
                RpcCommand::GetViewState => view_state_json(&store.state),
                RpcCommand::GetFps => serde_json::json!({
                    "fps": current_fps(&diagnostics).unwrap_or(0.0) as f32
                }),
            },
        );

        if let Err(error) = &result {
            warn!("RPC {} failed: {}", request.method, error.message);
        }

        // Requests without an id are notifications and get no reply.
        if let Some(id) = request.id {
            rpc_interface.queue_response(create_response(id, result));
        }
    }
}

/// Map a method and its params onto engine work, validating ids and days
/// against the dataset.
pub fn parse_command(
    method: &str,
    params: &serde_json::Value,
    dataset: &Dataset,
) -> Result<RpcCommand, RpcError> {
    match method {
        "set_view_mode" => {
            #[derive(Deserialize)]
            struct ModeParams {
                mode: String,
            }

            let parsed: ModeParams = parse_params(params, "Expected 'mode' parameter")?;
            let mode = parse_value::<ViewMode>(&parsed.mode)?;
            Ok(RpcCommand::Dispatch(vec![ViewAction::SetViewMode(mode)]))
        }
        "set_filter" => {
            #[derive(Deserialize)]
            struct FilterParams {
                group: Option<GroupId>,
                priority: Option<String>,
                date: Option<NaiveDate>,
            }

            let parsed: FilterParams = parse_params(
                params,
                "Expected 'group' (g-N), 'priority' (p1..p9) or 'date' (YYYY-MM-DD)",
            )?;

            let mut batch = Vec::new();
            if let Some(group) = parsed.group {
                if dataset.group(group).is_none() {
                    return Err(RpcError::invalid_params(&format!("Unknown group: {}", group)));
                }
                batch.push(ViewAction::SetFilterGroup(group));
            }
            if let Some(priority) = parsed.priority {
                let priority = parse_value::<Priority>(&priority)?;
                batch.push(ViewAction::SetFilterPriority(priority));
            }
            if let Some(date) = parsed.date {
                if !dataset.contains_day(date) {
                    return Err(RpcError::invalid_params(&format!(
                        "Date outside the timeline: {}",
                        date
                    )));
                }
                batch.push(ViewAction::SetFilterDate(date));
            }

            if batch.is_empty() {
                return Err(RpcError::invalid_params(
                    "Expected at least one of 'group', 'priority' or 'date'",
                ));
            }
            Ok(RpcCommand::Dispatch(batch))
        }
        "clear_filters" => Ok(RpcCommand::Dispatch(vec![ViewAction::ClearFilters])),
        "select_file" => {
            #[derive(Deserialize)]
            struct SelectParams {
                id: Option<FileId>,
            }

            let parsed: SelectParams = parse_params(params, "Expected 'id' (f-N) or null")?;
            if let Some(id) = parsed.id {
                if dataset.file(id).is_none() {
                    return Err(RpcError::invalid_params(&format!("Unknown file: {}", id)));
                }
            }
            Ok(RpcCommand::Dispatch(vec![ViewAction::SelectFile(parsed.id)]))
        }
        "set_scroll" => {
            #[derive(Deserialize)]
            struct ScrollParams {
                x: Option<f32>,
                y: Option<f32>,
            }

            let parsed: ScrollParams = parse_params(params, "Expected numeric 'x' or 'y'")?;
            let batch: Vec<_> = parsed
                .x
                .map(ViewAction::SetScrollX)
                .into_iter()
                .chain(parsed.y.map(ViewAction::SetScrollY))
                .collect();

            if batch.is_empty() {
                return Err(RpcError::invalid_params("Expected at least one of 'x' or 'y'"));
            }
            Ok(RpcCommand::Dispatch(batch))
        }
        "get_view_state" => Ok(RpcCommand::GetViewState),
        "get_fps" => Ok(RpcCommand::GetFps),
        _ => Err(RpcError::method_not_found(method)),
    }
}

fn parse_params<T: serde::de::DeserializeOwned>(
    params: &serde_json::Value,
    expected: &str,
) -> Result<T, RpcError> {
    // Methods whose fields are all optional also accept a missing params object.
    let params = if params.is_null() {
        serde_json::json!({})
    } else {
        params.clone()
    };
    serde_json::from_value::<T>(params).map_err(|_| RpcError::invalid_params(expected))
}

/// Enum names are matched case-insensitively and the parse error becomes the message.
fn parse_value<T>(value: &str) -> Result<T, RpcError>
where
    T: FromStr<Err = ParseError>,
{
    value
        .parse()
        .map_err(|error: ParseError| RpcError::invalid_params(&error.to_string()))
}

fn view_state_json(state: &ViewState) -> serde_json::Value {
    serde_json::to_value(state).unwrap_or(serde_json::Value::Null)
}

/// Whether the host should hear about the transition from `previous` to
/// `current`. Scroll-only changes are left out since they arrive every frame
/// while panning.
pub fn view_changed(previous: &ViewState, current: &ViewState) -> bool {
    previous.view_mode() != current.view_mode()
        || previous.filters() != current.filters()
        || previous.selected() != current.selected()
}

fn notify_view_changes(
    store: Res<ViewStore>,
    scene: Res<SceneData>,
    mut last_state: Local<Option<ViewState>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !store.is_changed() {
        return;
    }
    let current = &store.state;

    let (notify_view, notify_selection) = match last_state.as_ref() {
        None => (true, false),
        Some(previous) => (
            view_changed(previous, current),
            previous.selected() != current.selected(),
        ),
    };

    if notify_selection {
        let details = current
            .selected()
            .and_then(|id| scene.dataset.file(id))
            .map(|file| file_details(&scene.dataset, file));
        rpc_interface.send_notification(
            "selection_changed",
            serde_json::json!({ "file": details }),
        );
    }
    if notify_view {
        rpc_interface.send_notification("view_state_changed", view_state_json(current));
    }

    *last_state = Some(current.clone());
}

fn create_response(
    id: serde_json::Value,
    result: Result<serde_json::Value, RpcError>,
) -> RpcResponse {
    match result {
        Ok(result_value) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        },
        Err(error) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        },
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
                    } else {
                        warn!("No parent window available for message transmission");
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
        // Native builds have no host page.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(serde_json::json!({ "method": method })),
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}
