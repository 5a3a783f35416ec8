//! Integration tests for the Entangle HTTP API.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::http::{HeaderValue, StatusCode, header};
use axum_test::TestServer;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};

use entangle_adapter_sim::SimulatorBackend;
use entangle_hal::{Backend, Capabilities, ExecutionResult, HalResult, StateVector};
use entangle_ir::Circuit;
use entangle_server::{AppState, ServerConfig, create_router};

// ============================================================================
// Test helpers
// ============================================================================

fn test_state() -> Arc<AppState> {
    let backend = SimulatorBackend::new().with_seed(7).with_max_shots(8192);
    Arc::new(AppState::with_config(ServerConfig::default()).with_backend(Arc::new(backend)))
}

fn strict_state() -> Arc<AppState> {
    let config = ServerConfig {
        strict_gates: true,
        ..ServerConfig::default()
    };
    Arc::new(AppState::with_config(config))
}

/// Simulator wrapper that records every time the backend is reached.
struct CountingBackend {
    inner: SimulatorBackend,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl Backend for CountingBackend {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn capabilities(&self) -> &Capabilities {
        self.inner.capabilities()
    }

    fn validate(&self, circuit: &Circuit) -> HalResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.validate(circuit)
    }

    async fn run(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.run(circuit, shots).await
    }

    async fn statevector(&self, circuit: &Circuit) -> HalResult<StateVector> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.statevector(circuit).await
    }
}

fn counting_state() -> (Arc<AppState>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let backend = CountingBackend {
        inner: SimulatorBackend::new().with_max_shots(8192),
        calls: calls.clone(),
    };
    let state = AppState::with_config(ServerConfig::default()).with_backend(Arc::new(backend));
    (Arc::new(state), calls)
}

fn cors_state(origins: &str) -> Arc<AppState> {
    let config = ServerConfig {
        cors_origins: origins.to_string(),
        ..ServerConfig::default()
    };
    config.validate().expect("valid config");
    Arc::new(AppState::with_config(config))
}

fn test_server(state: Arc<AppState>) -> TestServer {
    let router = create_router(state);
    TestServer::new(router).expect("test server")
}

fn bell_gates() -> Value {
    json!([
        { "type": "h", "target": 0 },
        { "type": "cx", "control": 0, "target": 1 }
    ])
}

fn decode_svg(image: &Value) -> String {
    let bytes = STANDARD
        .decode(image.as_str().expect("image is a bare base64 string"))
        .expect("base64");
    String::from_utf8(bytes).expect("utf8")
}

fn assert_error(body: &Value, kind: &str) {
    assert_eq!(body["error"], kind);
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
}

// ============================================================================
// Root and health
// ============================================================================

#[tokio::test]
async fn test_root_greeting() {
    let server = test_server(test_state());
    for path in ["/api", "/api/"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "Quantum Entanglement API");
    }
}

#[tokio::test]
async fn test_health_returns_ok() {
    let server = test_server(test_state());
    let response = server.get("/api/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].as_str().is_some());
    assert_eq!(body["backend"], "simulator");
}

// ============================================================================
// Status checks
// ============================================================================

#[tokio::test]
async fn test_status_create_and_list() {
    let server = test_server(test_state());

    let created: Value = server
        .post("/api/status")
        .json(&json!({ "client_name": "probe-a" }))
        .await
        .json();
    assert_eq!(created["client_name"], "probe-a");
    assert!(created["id"].as_str().is_some_and(|id| id.len() == 36));
    assert!(created["timestamp"].as_str().is_some());

    server
        .post("/api/status")
        .json(&json!({ "client_name": "probe-b" }))
        .await
        .assert_status_ok();

    let response = server.get("/api/status").await;
    response.assert_status_ok();
    let listed: Value = response.json();
    let names: Vec<_> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["client_name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["probe-a", "probe-b"]);
    assert_eq!(listed[0]["id"], created["id"]);
}

#[tokio::test]
async fn test_status_list_respects_limit() {
    let config = ServerConfig {
        status_list_limit: 2,
        ..ServerConfig::default()
    };
    let server = test_server(Arc::new(AppState::with_config(config)));
    for name in ["a", "b", "c"] {
        server
            .post("/api/status")
            .json(&json!({ "client_name": name }))
            .await
            .assert_status_ok();
    }

    let listed: Value = server.get("/api/status").await.json();
    assert_eq!(listed.as_array().unwrap().len(), 2);
    assert_eq!(listed[1]["client_name"], "b");
}

// ============================================================================
// Simulate
// ============================================================================

#[tokio::test]
async fn test_simulate_bell_pair() {
    let server = test_server(test_state());
    let response = server
        .post("/api/quantum/simulate")
        .json(&json!({ "num_qubits": 2, "gates": bell_gates(), "shots": 1024 }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["total_shots"], 1024);
    assert_eq!(body["image_format"], "svg");

    let counts = body["counts"].as_object().unwrap();
    assert!(counts.keys().all(|k| k == "00" || k == "11"));
    let total: u64 = counts.values().map(|v| v.as_u64().unwrap()).sum();
    assert_eq!(total, 1024);

    let diagram = decode_svg(&body["circuit_diagram"]);
    assert!(diagram.starts_with("<svg"));
    let histogram = decode_svg(&body["histogram"]);
    assert!(histogram.contains("Measurement Results"));
}

#[tokio::test]
async fn test_simulate_empty_circuit_measures_zero() {
    let server = test_server(test_state());
    let body: Value = server
        .post("/api/quantum/simulate")
        .json(&json!({ "num_qubits": 3, "gates": [], "shots": 512 }))
        .await
        .json();
    assert_eq!(body["counts"], json!({ "000": 512 }));
}

#[tokio::test]
async fn test_simulate_rejects_out_of_range_width() {
    let (state, calls) = counting_state();
    let server = test_server(state);
    for num_qubits in [1, 6] {
        let response = server
            .post("/api/quantum/simulate")
            .json(&json!({ "num_qubits": num_qubits, "gates": [], "shots": 1024 }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_error(&response.json(), "validation_error");
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0, "backend reached");
}

#[tokio::test]
async fn test_simulate_rejects_out_of_range_shots() {
    let (state, calls) = counting_state();
    let server = test_server(state);
    for shots in [100, 10_000] {
        let response = server
            .post("/api/quantum/simulate")
            .json(&json!({ "num_qubits": 2, "gates": bell_gates(), "shots": shots }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_error(&response.json(), "validation_error");
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0, "backend reached");

    // A request inside the bounds does reach it.
    server
        .post("/api/quantum/simulate")
        .json(&json!({ "num_qubits": 2, "gates": bell_gates(), "shots": 512 }))
        .await
        .assert_status_ok();
    assert!(calls.load(Ordering::SeqCst) > 0);
}

#[tokio::test]
async fn test_simulate_bad_target_is_circuit_error() {
    let server = test_server(test_state());
    let response = server
        .post("/api/quantum/simulate")
        .json(&json!({
            "num_qubits": 2,
            "gates": [{ "type": "x", "target": 7 }],
            "shots": 1024
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error(&response.json(), "circuit_error");
}

#[tokio::test]
async fn test_simulate_control_equals_target_is_circuit_error() {
    let server = test_server(test_state());
    let response = server
        .post("/api/quantum/simulate")
        .json(&json!({
            "num_qubits": 2,
            "gates": [{ "type": "cx", "control": 1, "target": 1 }],
            "shots": 1024
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error(&response.json(), "circuit_error");
}

#[tokio::test]
async fn test_simulate_malformed_body_is_client_error() {
    let server = test_server(test_state());
    let response = server
        .post("/api/quantum/simulate")
        .json(&json!({ "num_qubits": "two", "gates": [] }))
        .await;
    assert!(response.status_code().is_client_error());
}

// ============================================================================
// Gate handling
// ============================================================================

#[tokio::test]
async fn test_unusable_entries_are_skipped() {
    let server = test_server(test_state());
    let body: Value = server
        .post("/api/quantum/state-vector")
        .json(&json!({
            "num_qubits": 2,
            "gates": [
                { "type": "cx", "target": 1 },
                { "type": "toffoli", "target": 0 },
                { "type": "x", "target": 1 }
            ]
        }))
        .await
        .json();

    assert_eq!(body["num_states"], 1);
    assert_eq!(body["state_vector"][0]["state"], "10");
}

#[tokio::test]
async fn test_strict_mode_rejects_unknown_gate() {
    let server = test_server(strict_state());
    let response = server
        .post("/api/quantum/state-vector")
        .json(&json!({
            "num_qubits": 2,
            "gates": [{ "type": "toffoli", "target": 0 }]
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error(&response.json(), "circuit_error");
}

// ============================================================================
// State vector
// ============================================================================

#[tokio::test]
async fn test_state_vector_of_empty_circuit() {
    let server = test_server(test_state());
    let response = server
        .post("/api/quantum/state-vector")
        .json(&json!({ "num_qubits": 2, "gates": [] }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["num_states"], 1);
    let record = &body["state_vector"][0];
    assert_eq!(record["state"], "00");
    assert_eq!(record["probability"], 1.0);
    assert_eq!(record["magnitude"], 1.0);
}

#[tokio::test]
async fn test_state_vector_of_bell_pair() {
    let server = test_server(test_state());
    let body: Value = server
        .post("/api/quantum/state-vector")
        .json(&json!({ "num_qubits": 2, "gates": bell_gates() }))
        .await
        .json();

    assert_eq!(body["num_states"], 2);
    let records = body["state_vector"].as_array().unwrap();
    let mut states: Vec<_> = records.iter().map(|r| r["state"].as_str().unwrap()).collect();
    states.sort_unstable();
    assert_eq!(states, vec!["00", "11"]);
    for r in records {
        let p = r["probability"].as_f64().unwrap();
        assert!((p - 0.5).abs() < 1e-9);
    }
}

#[tokio::test]
async fn test_bloch_spheres_only_for_small_registers() {
    let server = test_server(test_state());

    let small: Value = server
        .post("/api/quantum/state-vector")
        .json(&json!({ "num_qubits": 3, "gates": [{ "type": "h", "target": 0 }] }))
        .await
        .json();
    assert_eq!(small["image_format"], "svg");
    let spheres = small["bloch_spheres"].as_array().unwrap();
    assert_eq!(spheres.len(), 1);
    assert!(decode_svg(&spheres[0]).contains("bloch-vector"));

    let wide: Value = server
        .post("/api/quantum/state-vector")
        .json(&json!({ "num_qubits": 4, "gates": [] }))
        .await
        .json();
    assert_eq!(wide["bloch_spheres"], json!([]));
}

#[tokio::test]
async fn test_state_vector_rejects_out_of_range_width() {
    let (state, calls) = counting_state();
    let server = test_server(state);
    let response = server
        .post("/api/quantum/state-vector")
        .json(&json!({ "num_qubits": 9, "gates": [] }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&response.json(), "validation_error");
    assert_eq!(calls.load(Ordering::SeqCst), 0, "backend reached");
}

// ============================================================================
// Bell histogram
// ============================================================================

#[tokio::test]
async fn test_bell_histogram_is_raw_svg() {
    let server = test_server(test_state());
    let response = server.get("/api/quantum/bell/histogram").await;
    response.assert_status_ok();
    assert_eq!(response.header(header::CONTENT_TYPE), "image/svg+xml");
    assert!(response.text().starts_with("<svg"));

    let response = server
        .get("/api/quantum/bell/histogram")
        .add_query_param("shots", 5)
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_bell_histogram_rejects_zero_shots() {
    let server = test_server(test_state());
    let response = server
        .get("/api/quantum/bell/histogram")
        .add_query_param("shots", 0)
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_bell_histogram_unparsable_shots_use_default() {
    let server = test_server(test_state());
    for value in ["abc", "", "1.5"] {
        let response = server
            .get("/api/quantum/bell/histogram")
            .add_query_param("shots", value)
            .await;
        response.assert_status_ok();
        assert!(response.text().starts_with("<svg"));
    }

    let response = server
        .get("/api/quantum/bell/histogram")
        .add_query_param("s", 50)
        .await;
    response.assert_status_ok();

    let response = server
        .get("/api/quantum/bell/histogram")
        .add_query_param("shots", -3)
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

// ============================================================================
// CORS
// ============================================================================

#[tokio::test]
async fn test_cors_wildcard_inside_origin_list_allows_any() {
    let server = test_server(cors_state("http://localhost:3000, *"));
    let response = server
        .get("/api/health")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://elsewhere.test"))
        .await;
    response.assert_status_ok();
    assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
}

#[tokio::test]
async fn test_cors_origin_list_echoes_listed_origin() {
    let server = test_server(cors_state("http://localhost:3000,http://127.0.0.1:3000"));
    let response = server
        .get("/api/health")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:3000"))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        "http://localhost:3000"
    );
}
