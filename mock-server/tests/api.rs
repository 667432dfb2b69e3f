use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use rh_mock_server::{app, app_with, Document, Employee, MockState};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn authed(method: &str, uri: &str, token: &str) -> http::request::Builder {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::AUTHORIZATION, format!("Bearer {token}"))
}

fn json_request(method: &str, uri: &str, token: &str, body: Value) -> Request<String> {
    authed(method, uri, token)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str, token: &str) -> Request<String> {
    authed(method, uri, token).body(String::new()).unwrap()
}

const BOUNDARY: &str = "rh-test-boundary";

fn multipart_request(uri: &str, token: &str, fields: &[(&str, &str)], file: (&str, &[u8])) -> Request<axum::body::Body> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n").as_bytes(),
        );
    }
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: application/pdf\r\n\r\n",
            file.0
        )
        .as_bytes(),
    );
    body.extend_from_slice(file.1);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    authed("POST", uri, token)
        .header(
            http::header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(axum::body::Body::from(body))
        .unwrap()
}

fn employee(matricule: &str, statut: &str) -> Value {
    json!({
        "matricule": matricule,
        "nom": "Rakoto",
        "prenom": "Jean",
        "dateNaissance": "1980-05-01",
        "poste": "PASTEUR_CONSACRE",
        "statut": statut
    })
}

async fn logged_in() -> (Router, MockState, String) {
    let state = MockState::new();
    let token = state.issue_token().await;
    (app_with(state.clone()), state, token)
}

// --- auth ---

#[tokio::test]
async fn login_issues_a_usable_token() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(json!({"nomUtilisateur": "admin", "motDePasse": "admin123"}).to_string())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    let token = body["token"].as_str().unwrap().to_string();
    assert_eq!(body["user"]["role"], "ADMIN");

    let resp = app
        .oneshot(empty_request("GET", "/api/auth/profile", &token))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn wrong_password_is_rejected_with_message() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(json!({"nomUtilisateur": "admin", "motDePasse": "nope"}).to_string())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = body_json(resp).await;
    assert_eq!(body["message"], "Identifiants invalides");
}

#[tokio::test]
async fn protected_routes_require_a_known_token() {
    let resp = app()
        .oneshot(Request::builder().uri("/api/employes").body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app()
        .oneshot(empty_request("GET", "/api/employes", "made-up"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = body_json(resp).await;
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn logout_revokes_the_token() {
    let (app, _, token) = logged_in().await;
    let resp = app
        .clone()
        .oneshot(empty_request("POST", "/api/auth/logout", &token))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(empty_request("GET", "/api/auth/profile", &token))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// --- employees ---

#[tokio::test]
async fn duplicate_matricule_is_a_validation_error() {
    let (app, _, token) = logged_in().await;
    let first = app
        .clone()
        .oneshot(json_request("POST", "/api/employes", &token, employee("EMP-001", "ACTIF")))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .oneshot(json_request("POST", "/api/employes", &token, employee("EMP-001", "ACTIF")))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(second).await;
    assert!(body["message"].as_str().unwrap().contains("EMP-001"));
}

#[tokio::test]
async fn counts_follow_status_and_failure_switch() {
    let (app, state, token) = logged_in().await;
    for (m, s) in [("A1", "ACTIF"), ("A2", "ACTIF"), ("I1", "INACTIF")] {
        app.clone()
            .oneshot(json_request("POST", "/api/employes", &token, employee(m, s)))
            .await
            .unwrap();
    }

    let resp = app
        .clone()
        .oneshot(empty_request("GET", "/api/employes/count/statut/ACTIF", &token))
        .await
        .unwrap();
    let count: u64 = body_json(resp).await;
    assert_eq!(count, 2);

    state.fail_count_for("INACTIF").await;
    let resp = app
        .clone()
        .oneshot(empty_request("GET", "/api/employes/count/statut/INACTIF", &token))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let resp = app
        .oneshot(empty_request("GET", "/api/employes/statut/INACTIF", &token))
        .await
        .unwrap();
    let listed: Vec<Employee> = body_json(resp).await;
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn employee_lifecycle() {
    let (app, _, token) = logged_in().await;

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/employes", &token, employee("EMP-042", "ACTIF")))
        .await
        .unwrap();
    let created: Employee = body_json(resp).await;
    let id = created.id;
    assert!(id > 0);

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/employes/{id}"),
            &token,
            json!({"statut": "EN_CONGE"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Employee = body_json(resp).await;
    assert_eq!(updated.statut, "EN_CONGE");
    assert_eq!(updated.matricule, "EMP-042");

    let resp = app
        .clone()
        .oneshot(empty_request("GET", "/api/employes/search?query=rako", &token))
        .await
        .unwrap();
    let found: Vec<Employee> = body_json(resp).await;
    assert_eq!(found.len(), 1);

    let resp = app
        .clone()
        .oneshot(empty_request("GET", "/api/employes/matricule/EMP-042", &token))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/employes/{id}"), &token))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    let resp = app
        .oneshot(empty_request("DELETE", &format!("/api/employes/{id}"), &token))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = body_json(resp).await;
    assert_eq!(body["message"], "Employé introuvable");
}

// --- documents ---

#[tokio::test]
async fn multipart_upload_then_download() {
    let (app, _, token) = logged_in().await;

    let resp = app
        .clone()
        .oneshot(multipart_request(
            "/api/documents",
            &token,
            &[("employeId", "7"), ("typeDocument", "CV")],
            ("cv.pdf", b"%PDF-1.4 test"),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let document: Document = body_json(resp).await;
    assert_eq!(document.employe_id, 7);
    assert_eq!(document.nom_fichier, "cv.pdf");
    assert!(document.description.is_none());

    let resp = app
        .clone()
        .oneshot(empty_request("GET", &format!("/api/documents/{}/download", document.id), &token))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[http::header::CONTENT_TYPE], "application/pdf");
    assert_eq!(&body_bytes(resp).await[..], b"%PDF-1.4 test");

    let resp = app
        .oneshot(empty_request("GET", "/api/documents/employe/7", &token))
        .await
        .unwrap();
    let listed: Vec<Document> = body_json(resp).await;
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn upload_without_type_is_rejected() {
    let (app, _, token) = logged_in().await;
    let resp = app
        .oneshot(multipart_request(
            "/api/documents",
            &token,
            &[("employeId", "7")],
            ("cv.pdf", b"x"),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn supporting_file_gets_a_path() {
    let (app, _, token) = logged_in().await;
    let resp = app
        .oneshot(multipart_request("/api/upload/justificatif", &token, &[], ("certificat.pdf", b"x")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    let path = body["filePath"].as_str().unwrap();
    assert!(path.starts_with("justificatifs/"));
    assert!(path.ends_with("certificat.pdf"));
}
