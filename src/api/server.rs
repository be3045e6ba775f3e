//! API Server Module
//!
//! This module implements a JSON-RPC server over the registry and the prize
//! ledger. Each lookup page of the old site maps to one RPC method:
//!
//! | method             | params             |
//! |--------------------|--------------------|
//! | `listHolders`      | none               |
//! | `verifyTicket`     | `{name, number}`   |
//! | `findOwner`        | `{number}`         |
//! | `listNumbers`      | none               |
//! | `detectDuplicates` | none               |
//! | `listPrizes`       | none               |
//! | `totalsByPerson`   | none               |

use crate::{
    Prize, Verdict, VerdictStatus,
    config::Config,
    prizes,
    registry::{Registry, validate_format},
    validation::Validator,
};
use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{error, info, warn};

const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;
const INTERNAL_ERROR: i32 = -32603;

/// Shared application state that is accessible across all request handlers
///
/// Everything here is read-only after startup, so handlers share it through
/// `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<Registry>,
    prizes: Arc<Vec<Prize>>,
    validator: Arc<Validator>,
}

impl AppState {
    pub fn new(registry: Registry, prizes: Vec<Prize>) -> Self {
        let registry = Arc::new(registry);
        let validator = Arc::new(Validator::new(registry.clone()));

        Self {
            registry,
            prizes: Arc::new(prizes),
            validator,
        }
    }
}

/// The main API server struct
pub struct Server {
    config: Config,
    state: AppState,
}

impl Server {
    /// Creates a new API server over an already loaded registry and prize list
    pub fn new(config: Config, registry: Registry, prizes: Vec<Prize>) -> Self {
        Self {
            config,
            state: AppState::new(registry, prizes),
        }
    }

    /// Starts the API server and begins listening for incoming requests
    ///
    /// This method:
    /// 1. Builds the router with the single JSON-RPC endpoint at "/"
    /// 2. Binds it to the configured host and port
    /// 3. Serves requests until the process is stopped
    ///
    /// # Returns
    /// `Ok(())` when the server shuts down, or an error if binding fails
    pub async fn start(self) -> anyhow::Result<()> {
        // Every handler shares the same read-only state
        let app = router(self.state);

        // Format the listening address from config
        let addr = format!("{}:{}", self.config.api.host, self.config.api.port);
        info!("API server listening on {}", addr);

        // Bind to the TCP address and start serving
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Router with the single JSON-RPC endpoint at "/"
pub fn router(state: AppState) -> Router {
    Router::new().route("/", post(handle_rpc)).with_state(state)
}

/// JSON-RPC 2.0 request structure
///
/// - `jsonrpc`: Protocol version, must be "2.0"
/// - `method`: The RPC method to call (e.g., "verifyTicket")
/// - `params`: Method parameters, absent for the listing methods
/// - `id`: Request identifier echoed back in the response
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    #[serde(default)]
    params: Value,
    #[serde(default)]
    id: Value,
}

/// JSON-RPC 2.0 response structure
///
/// Either `result` or `error` is populated, never both:
/// - `jsonrpc`: Protocol version ("2.0")
/// - `result`: Method result on success
/// - `error`: Error information if the request failed
/// - `id`: Request identifier matching the original request
#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
    id: Value,
}

/// JSON-RPC error object
///
/// - `code`: Error code (-32600 invalid request, -32601 method not found,
///   -32602 invalid params, -32603 internal error)
/// - `message`: Human-readable error description
#[derive(Debug, Serialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

impl JsonRpcResponse {
    fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    fn failure(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
            id,
        }
    }

    /// Serialize `result`, falling back to an internal error
    fn from_result<T: Serialize>(id: Value, result: &T) -> Self {
        match serde_json::to_value(result) {
            Ok(value) => Self::success(id, value),
            Err(e) => {
                error!("Failed to serialize result: {}", e);
                Self::failure(id, INTERNAL_ERROR, "Internal error")
            }
        }
    }
}

/// Params of "verifyTicket": the name as typed and the 5-digit number
#[derive(Debug, Deserialize)]
struct VerifyParams {
    name: String,
    number: String,
}

/// Params of "findOwner"
#[derive(Debug, Deserialize)]
struct FindOwnerParams {
    number: String,
}

/// Main RPC request handler
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> Json<JsonRpcResponse> {
    info!("Received RPC request: {}", request.method);
    Json(dispatch(&state, request))
}

/// Route a request to the handler for its method
fn dispatch(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != "2.0" {
        warn!("Rejecting request with jsonrpc version {:?}", request.jsonrpc);
        return JsonRpcResponse::failure(request.id, INVALID_REQUEST, "Invalid Request");
    }

    // Route to the appropriate handler based on the method name
    match request.method.as_str() {
        "listHolders" => {
            let names = state.registry.names_sorted();
            let result = json!({ "total": names.len(), "names": names });
            JsonRpcResponse::success(request.id, result)
        }
        "verifyTicket" => handle_verify_ticket(state, request),
        "findOwner" => handle_find_owner(state, request),
        "listNumbers" => {
            let numbers = state.registry.list_all();
            let result = json!({ "total": numbers.len(), "numbers": numbers });
            JsonRpcResponse::success(request.id, result)
        }
        "detectDuplicates" => {
            JsonRpcResponse::from_result(request.id, &state.registry.detect_duplicates())
        }
        "listPrizes" => {
            let ranked = prizes::ranked_prizes(&state.registry, &state.prizes);
            let result = json!({
                "total_amount": prizes::total_prize_amount(&state.prizes),
                "prizes": ranked,
            });
            JsonRpcResponse::success(request.id, result)
        }
        "totalsByPerson" => {
            let people =
                prizes::rank_totals(prizes::totals_by_person(&state.registry, &state.prizes));
            let result = json!({
                "total_amount": prizes::total_prize_amount(&state.prizes),
                "people": people,
            });
            JsonRpcResponse::success(request.id, result)
        }
        // Return "Method not found" error for unsupported methods
        _ => JsonRpcResponse::failure(request.id, METHOD_NOT_FOUND, "Method not found"),
    }
}

/// Decode method params, or build the invalid params response
fn parse_params<T: DeserializeOwned>(request: &JsonRpcRequest) -> Result<T, JsonRpcResponse> {
    serde_json::from_value(request.params.clone()).map_err(|e| {
        error!("Failed to deserialize params for {}: {}", request.method, e);
        JsonRpcResponse::failure(
            request.id.clone(),
            INVALID_PARAMS,
            format!("Invalid params: {}", e),
        )
    })
}

/// Handles the "verifyTicket" RPC method
///
/// A request that fails validation is still a successful RPC call; the
/// verdict carries the rejection reason instead of an outcome.
fn handle_verify_ticket(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    // Step 1: Deserialize the name and number from the request parameters
    let params: VerifyParams = match parse_params(&request) {
        Ok(params) => params,
        Err(response) => return response,
    };
    let name = params.name.trim();
    let number = params.number.trim();

    // Step 2: Validate the request (name present, format, duplicates)
    let status = match state.validator.validate(name, number) {
        // Step 3: Only a valid request reaches the registry
        Ok(()) => {
            let outcome = state.registry.verify(name, number);
            info!("Verified number {}: {:?}", number, outcome);
            VerdictStatus::Checked { outcome }
        }
        Err(rejection) => {
            warn!("Verification of number {:?} rejected: {}", number, rejection);
            VerdictStatus::Rejected {
                code: rejection.code().to_string(),
                reason: rejection.to_string(),
            }
        }
    };

    // Step 4: Stamp the verdict and send it back
    let verdict = Verdict {
        status,
        timestamp: chrono::Utc::now().timestamp() as u64,
    };
    JsonRpcResponse::from_result(request.id, &verdict)
}

/// Handles the "findOwner" RPC method
fn handle_find_owner(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let params: FindOwnerParams = match parse_params(&request) {
        Ok(params) => params,
        Err(response) => return response,
    };
    let number = params.number.trim();

    if !validate_format(number) {
        return JsonRpcResponse::failure(
            request.id,
            INVALID_PARAMS,
            format!("Invalid params: ticket number must be 5 digits, got {:?}", number),
        );
    }

    let owner = state.registry.find_owner(number);
    JsonRpcResponse::success(request.id, json!({ "number": number, "owner": owner }))
}
