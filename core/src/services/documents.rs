use bytes::Bytes;

use crate::client::ApiClient;
use crate::http::FilePart;
use crate::result::ApiResult;
use crate::types::{Document, DocumentType, Id, UploadedFile};

/// `/documents`
#[derive(Debug, Clone, Copy)]
pub struct DocumentService<'a> {
    client: &'a ApiClient,
}

impl<'a> DocumentService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Document>> {
        self.client.get("/documents").await
    }

    pub async fn get(&self, id: Id) -> ApiResult<Document> {
        self.client.get(&format!("/documents/{id}")).await
    }

    /// Multipart upload: `file`, `employeId`, `typeDocument`, and
    /// `description` only when given.
    pub async fn upload(
        &self,
        file: FilePart,
        employe_id: Id,
        type_document: DocumentType,
        description: Option<&str>,
    ) -> ApiResult<Document> {
        let mut fields = vec![
            ("employeId".to_string(), employe_id.to_string()),
            ("typeDocument".to_string(), type_document.as_str().to_string()),
        ];
        if let Some(description) = description {
            fields.push(("description".to_string(), description.to_string()));
        }
        self.client.upload_file("/documents", file, fields).await
    }

    pub async fn delete(&self, id: Id) -> ApiResult<()> {
        self.client.delete(&format!("/documents/{id}")).await
    }

    pub async fn by_employee(&self, employe_id: Id) -> ApiResult<Vec<Document>> {
        self.client.get(&format!("/documents/employe/{employe_id}")).await
    }

    pub async fn by_type(&self, type_document: DocumentType) -> ApiResult<Vec<Document>> {
        self.client.get(&format!("/documents/type/{type_document}")).await
    }

    /// File content as stored by the server.
    pub async fn download(&self, id: Id) -> ApiResult<Bytes> {
        self.client.download(&format!("/documents/{id}/download")).await
    }

    /// Store a supporting file (e.g. an absence justification) and get back
    /// the server-side path to reference from another record.
    pub async fn upload_supporting_file(&self, file: FilePart) -> ApiResult<UploadedFile> {
        self.client
            .upload_file("/upload/justificatif", file, Vec::new())
            .await
    }
}
