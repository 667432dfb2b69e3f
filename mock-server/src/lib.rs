//! In-memory stand-in for the RH backend, mounted under `/api`.
//!
//! Covers authentication, employees and documents: enough for the client's
//! integration tests to exercise JSON, multipart and binary round-trips.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, Query, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};
use uuid::Uuid;

pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "admin123";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub id: i64,
    pub matricule: String,
    pub nom: String,
    pub prenom: String,
    pub poste: String,
    #[serde(default = "default_statut")]
    pub statut: String,
    /// Every other employee field, stored as sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_statut() -> String {
    "ACTIF".to_string()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: i64,
    pub employe_id: i64,
    pub type_document: String,
    pub nom_fichier: String,
    pub chemin_fichier: String,
    pub date_upload: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub nom_utilisateur: String,
    pub mot_de_passe: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

#[derive(Clone, Debug)]
struct StoredFile {
    document: Document,
    content_type: Option<String>,
    content: Bytes,
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: i64,
    tokens: HashSet<String>,
    employees: BTreeMap<i64, Employee>,
    documents: BTreeMap<i64, StoredFile>,
    failing_count: Option<String>,
}

impl Store {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

pub type Db = Arc<RwLock<Store>>;

/// Shared state behind the router. Clones share the same store.
#[derive(Clone, Debug, Default)]
pub struct MockState {
    db: Db,
}

impl MockState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `GET /employes/count/statut/{status}` answer 500.
    pub async fn fail_count_for(&self, status: &str) {
        self.db.write().await.failing_count = Some(status.to_string());
    }

    pub async fn issue_token(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.db.write().await.tokens.insert(token.clone());
        token
    }

    pub async fn revoke_all_tokens(&self) {
        self.db.write().await.tokens.clear();
    }
}

/// Error body shared by every route: `{ "message": ... }`.
#[derive(Debug)]
pub struct ApiFailure {
    status: StatusCode,
    message: String,
}

impl ApiFailure {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn not_found(what: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("{what} introuvable"))
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}

impl From<MultipartError> for ApiFailure {
    fn from(e: MultipartError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, format!("Multipart error: {e}"))
    }
}

type ApiResult<T> = Result<T, ApiFailure>;

pub fn app() -> Router {
    app_with(MockState::new())
}

pub fn app_with(state: MockState) -> Router {
    let protected = Router::new()
        .route("/auth/logout", post(logout))
        .route("/auth/profile", get(profile))
        .route("/employes", get(list_employees).post(create_employee))
        .route(
            "/employes/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/employes/statut/{statut}", get(employees_by_status))
        .route("/employes/count/statut/{statut}", get(count_by_status))
        .route("/employes/search", get(search_employees))
        .route("/employes/matricule/{matricule}", get(employee_by_matricule))
        .route("/employes/pasteurs", get(list_pastors))
        .route("/documents", get(list_documents).post(upload_document))
        .route("/documents/{id}", get(get_document).delete(delete_document))
        .route("/documents/{id}/download", get(download_document))
        .route("/documents/employe/{id}", get(documents_by_employee))
        .route("/upload/justificatif", post(upload_supporting_file))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token));

    let api = Router::new()
        .route("/auth/login", post(login))
        .merge(protected);

    Router::new().nest("/api", api).with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, MockState::new()).await
}

/// Like [`run`], but the caller keeps a handle on the state.
pub async fn serve(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(state)).await
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

async fn require_token(
    State(state): State<MockState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiFailure> {
    let known = match bearer(req.headers()) {
        Some(token) => state.db.read().await.tokens.contains(token),
        None => false,
    };
    if !known {
        warn!(uri = %req.uri(), "rejected request without a valid token");
        return Err(ApiFailure::new(StatusCode::UNAUTHORIZED, "Token invalide ou expiré"));
    }
    Ok(next.run(req).await)
}

fn demo_user() -> Value {
    json!({
        "id": 1,
        "nomUtilisateur": DEMO_USERNAME,
        "email": "admin@rh.test",
        "role": "ADMIN",
        "actif": true
    })
}

async fn login(
    State(state): State<MockState>,
    Json(input): Json<Credentials>,
) -> ApiResult<Json<Value>> {
    if input.nom_utilisateur != DEMO_USERNAME || input.mot_de_passe != DEMO_PASSWORD {
        return Err(ApiFailure::new(StatusCode::UNAUTHORIZED, "Identifiants invalides"));
    }
    let token = state.issue_token().await;
    info!(user = %input.nom_utilisateur, "login");
    Ok(Json(json!({
        "token": token,
        "user": demo_user(),
        "message": "Connexion réussie"
    })))
}

async fn logout(State(state): State<MockState>, headers: HeaderMap) -> Json<Value> {
    if let Some(token) = bearer(&headers) {
        state.db.write().await.tokens.remove(token);
    }
    Json(json!({ "message": "Déconnexion réussie" }))
}

async fn profile() -> Json<Value> {
    Json(demo_user())
}

async fn list_employees(State(state): State<MockState>) -> Json<Vec<Employee>> {
    let store = state.db.read().await;
    Json(store.employees.values().cloned().collect())
}

async fn create_employee(
    State(state): State<MockState>,
    Json(mut input): Json<Employee>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let mut store = state.db.write().await;
    if store.employees.values().any(|e| e.matricule == input.matricule) {
        return Err(ApiFailure::new(
            StatusCode::BAD_REQUEST,
            format!("Le matricule {} existe déjà", input.matricule),
        ));
    }
    input.id = store.allocate_id();
    store.employees.insert(input.id, input.clone());
    Ok((StatusCode::CREATED, Json(input)))
}

async fn get_employee(
    State(state): State<MockState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Employee>> {
    let store = state.db.read().await;
    store
        .employees
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiFailure::not_found("Employé"))
}

/// Partial update: every key present in the body replaces the stored one.
async fn update_employee(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    Json(patch): Json<Map<String, Value>>,
) -> ApiResult<Json<Employee>> {
    let mut store = state.db.write().await;
    let current = store
        .employees
        .get(&id)
        .ok_or_else(|| ApiFailure::not_found("Employé"))?;

    let mut merged = match serde_json::to_value(current) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    merged.extend(patch);
    merged.insert("id".to_string(), json!(id));
    let updated: Employee = serde_json::from_value(Value::Object(merged))
        .map_err(|e| ApiFailure::new(StatusCode::BAD_REQUEST, e.to_string()))?;
    store.employees.insert(id, updated.clone());
    Ok(Json(updated))
}

async fn delete_employee(
    State(state): State<MockState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    let mut store = state.db.write().await;
    store
        .employees
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| ApiFailure::not_found("Employé"))
}

async fn employees_by_status(
    State(state): State<MockState>,
    Path(statut): Path<String>,
) -> Json<Vec<Employee>> {
    let store = state.db.read().await;
    Json(
        store
            .employees
            .values()
            .filter(|e| e.statut == statut)
            .cloned()
            .collect(),
    )
}

async fn count_by_status(
    State(state): State<MockState>,
    Path(statut): Path<String>,
) -> ApiResult<Json<u64>> {
    let store = state.db.read().await;
    if store.failing_count.as_deref() == Some(statut.as_str()) {
        return Err(ApiFailure::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Erreur lors du comptage",
        ));
    }
    let count = store.employees.values().filter(|e| e.statut == statut).count();
    Ok(Json(count as u64))
}

async fn search_employees(
    State(state): State<MockState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Employee>> {
    let needle = params.query.to_lowercase();
    let store = state.db.read().await;
    Json(
        store
            .employees
            .values()
            .filter(|e| {
                [&e.nom, &e.prenom, &e.matricule]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect(),
    )
}

async fn employee_by_matricule(
    State(state): State<MockState>,
    Path(matricule): Path<String>,
) -> ApiResult<Json<Employee>> {
    let store = state.db.read().await;
    store
        .employees
        .values()
        .find(|e| e.matricule == matricule)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiFailure::not_found("Employé"))
}

async fn list_pastors(State(state): State<MockState>) -> Json<Vec<Employee>> {
    let store = state.db.read().await;
    Json(
        store
            .employees
            .values()
            .filter(|e| e.poste.starts_with("PASTEUR"))
            .cloned()
            .collect(),
    )
}

struct Upload {
    file_name: String,
    content_type: Option<String>,
    content: Bytes,
    fields: BTreeMap<String, String>,
}

async fn read_upload(mut multipart: Multipart) -> ApiResult<Upload> {
    let mut file = None;
    let mut fields = BTreeMap::new();
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            let file_name = field.file_name().unwrap_or("fichier").to_string();
            let content_type = field.content_type().map(str::to_string);
            let content = field.bytes().await?;
            file = Some((file_name, content_type, content));
        } else {
            fields.insert(name, field.text().await?);
        }
    }
    let (file_name, content_type, content) =
        file.ok_or_else(|| ApiFailure::new(StatusCode::BAD_REQUEST, "Fichier manquant"))?;
    Ok(Upload {
        file_name,
        content_type,
        content,
        fields,
    })
}

fn today() -> String {
    chrono::Local::now().date_naive().to_string()
}

async fn upload_document(
    State(state): State<MockState>,
    multipart: Multipart,
) -> ApiResult<(StatusCode, Json<Document>)> {
    let mut upload = read_upload(multipart).await?;
    let employe_id = upload
        .fields
        .get("employeId")
        .and_then(|v| v.parse::<i64>().ok())
        .ok_or_else(|| ApiFailure::new(StatusCode::BAD_REQUEST, "employeId requis"))?;
    let type_document = upload
        .fields
        .remove("typeDocument")
        .ok_or_else(|| ApiFailure::new(StatusCode::BAD_REQUEST, "typeDocument requis"))?;

    let mut store = state.db.write().await;
    let id = store.allocate_id();
    let document = Document {
        id,
        employe_id,
        type_document,
        chemin_fichier: format!("uploads/{employe_id}/{}", upload.file_name),
        nom_fichier: upload.file_name,
        date_upload: today(),
        description: upload.fields.remove("description"),
    };
    store.documents.insert(
        id,
        StoredFile {
            document: document.clone(),
            content_type: upload.content_type,
            content: upload.content,
        },
    );
    Ok((StatusCode::CREATED, Json(document)))
}

async fn list_documents(State(state): State<MockState>) -> Json<Vec<Document>> {
    let store = state.db.read().await;
    Json(store.documents.values().map(|f| f.document.clone()).collect())
}

async fn get_document(
    State(state): State<MockState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Document>> {
    let store = state.db.read().await;
    store
        .documents
        .get(&id)
        .map(|f| Json(f.document.clone()))
        .ok_or_else(|| ApiFailure::not_found("Document"))
}

async fn documents_by_employee(
    State(state): State<MockState>,
    Path(employe_id): Path<i64>,
) -> Json<Vec<Document>> {
    let store = state.db.read().await;
    Json(
        store
            .documents
            .values()
            .filter(|f| f.document.employe_id == employe_id)
            .map(|f| f.document.clone())
            .collect(),
    )
}

async fn download_document(
    State(state): State<MockState>,
    Path(id): Path<i64>,
) -> ApiResult<Response> {
    let store = state.db.read().await;
    let stored = store
        .documents
        .get(&id)
        .ok_or_else(|| ApiFailure::not_found("Document"))?;
    let content_type = stored
        .content_type
        .clone()
        .unwrap_or_else(|| "application/octet-stream".to_string());
    Ok(([(header::CONTENT_TYPE, content_type)], stored.content.clone()).into_response())
}

async fn delete_document(
    State(state): State<MockState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    let mut store = state.db.write().await;
    store
        .documents
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| ApiFailure::not_found("Document"))
}

async fn upload_supporting_file(multipart: Multipart) -> ApiResult<Json<Value>> {
    let upload = read_upload(multipart).await?;
    let path = format!("justificatifs/{}-{}", Uuid::new_v4(), upload.file_name);
    Ok(Json(json!({ "filePath": path })))
}
