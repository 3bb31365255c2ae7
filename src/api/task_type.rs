//! Task Type Requests
//!
//! Create/update submit one multipart payload representing the complete
//! desired end state: the full requirement list and both attachment sets.
//! The bracketed field names (taskTypeOptions[0][name], ...) are the
//! backend's binding convention.

use reqwest::multipart::{Form, Part};

use super::{client, parse_json, url, BASE_URL};
use crate::models::{NewAttachment, OptionType, TaskType, TaskTypeAttachment, TaskTypeOption};

/// New task type payload; the server assigns every id
#[derive(Debug, Clone, Default)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub attachments: Vec<NewAttachment>,
    pub task_type_options: Vec<CreateTaskTypeOption>,
}

/// Requirement row of a create payload (no ids yet)
#[derive(Debug, Clone)]
pub struct CreateTaskTypeOption {
    pub name: String,
    pub id_op_ty: u32,
    pub id_tree: Option<u32>,
    pub is_mandatory: bool,
}

/// Full desired end state of an existing task type
#[derive(Debug, Clone)]
pub struct UpdateTaskRequest {
    pub id_ta_ty: u32,
    pub title: String,
    pub description: String,
    pub new_attachments: Vec<NewAttachment>,
    /// Still-present persisted attachments; the server deletes by absence
    pub task_type_attachments: Vec<TaskTypeAttachment>,
    /// Complete requirement list, provisional ids included as-is
    pub task_type_options: Vec<TaskTypeOption>,
}

pub async fn get_task_types(token: &str) -> Result<Vec<TaskType>, String> {
    let response = client()
        .get(url("/task/get-task-types"))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

pub async fn get_task_type_by_id(token: &str, id_ta_ty: u32) -> Result<TaskType, String> {
    let response = client()
        .get(url(&format!("/task/get-task-type/{}", id_ta_ty)))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

pub async fn get_option_types(token: &str) -> Result<Vec<OptionType>, String> {
    let response = client()
        .get(url("/task/get-option-types"))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

pub async fn delete_task_type(token: &str, id_ta_ty: u32) -> Result<bool, String> {
    let response = client()
        .delete(url(&format!("/task/delete-task-type/{}", id_ta_ty)))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

pub async fn create_task_type(token: &str, request: &CreateTaskRequest) -> Result<u32, String> {
    let mut form = Form::new().text("title", request.title.clone());
    if let Some(description) = &request.description {
        form = form.text("description", description.clone());
    }
    for attachment in &request.attachments {
        form = form.part("attachments", file_part(attachment)?);
    }
    for (key, value) in create_option_fields(&request.task_type_options) {
        form = form.text(key, value);
    }

    let response = client()
        .post(url("/task/create-task"))
        .bearer_auth(token)
        .multipart(form)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

pub async fn update_task_type(token: &str, request: &UpdateTaskRequest) -> Result<TaskType, String> {
    let mut form = Form::new();
    for (key, value) in update_text_fields(request) {
        form = form.text(key, value);
    }
    for attachment in &request.new_attachments {
        form = form.part("newAttachments", file_part(attachment)?);
    }

    let response = client()
        .put(url("/task/update-task-type"))
        .bearer_auth(token)
        .multipart(form)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

/// Fetch an attachment's bytes; `url` is the storage path the backend issued
pub async fn download_attachment(token: &str, storage_url: &str) -> Result<Vec<u8>, String> {
    let response = client()
        .get(format!("{}/{}", BASE_URL, storage_url))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("Falha no download ({})", status));
    }
    let bytes = response.bytes().await.map_err(|e| e.to_string())?;
    Ok(bytes.to_vec())
}

fn file_part(attachment: &NewAttachment) -> Result<Part, String> {
    Part::bytes(attachment.bytes.clone())
        .file_name(attachment.file_name.clone())
        .mime_str(&attachment.mime_type)
        .map_err(|e| e.to_string())
}

/// Bracketed option fields of a create payload
fn create_option_fields(options: &[CreateTaskTypeOption]) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    for (index, option) in options.iter().enumerate() {
        fields.push((format!("taskTypeOptions[{}][name]", index), option.name.clone()));
        fields.push((format!("taskTypeOptions[{}][idOpTy]", index), option.id_op_ty.to_string()));
        fields.push((
            format!("taskTypeOptions[{}][isMandatory]", index),
            option.is_mandatory.to_string(),
        ));
        if let Some(id_tree) = option.id_tree {
            fields.push((format!("taskTypeOptions[{}][idTree]", index), id_tree.to_string()));
        }
    }
    fields
}

/// All text fields of an update payload: header, kept attachments, options
fn update_text_fields(request: &UpdateTaskRequest) -> Vec<(String, String)> {
    let mut fields = vec![
        ("idTaTy".to_string(), request.id_ta_ty.to_string()),
        ("title".to_string(), request.title.clone()),
        ("description".to_string(), request.description.clone()),
    ];
    for (index, att) in request.task_type_attachments.iter().enumerate() {
        fields.push((
            format!("taskTypeAttachments[{}][idTaTyAt]", index),
            att.id_ta_ty_at.to_string(),
        ));
        fields.push((
            format!("taskTypeAttachments[{}][idTaTy]", index),
            att.id_ta_ty.to_string(),
        ));
        fields.push((format!("taskTypeAttachments[{}][url]", index), att.url.clone()));
        fields.push((format!("taskTypeAttachments[{}][fileName]", index), att.file_name.clone()));
    }
    for (index, option) in request.task_type_options.iter().enumerate() {
        fields.push((
            format!("taskTypeOptions[{}][idTaTyOp]", index),
            option.id_ta_ty_op.to_string(),
        ));
        fields.push((
            format!("taskTypeOptions[{}][idTaTy]", index),
            request.id_ta_ty.to_string(),
        ));
        fields.push((format!("taskTypeOptions[{}][name]", index), option.name.clone()));
        fields.push((format!("taskTypeOptions[{}][idOpTy]", index), option.id_op_ty.to_string()));
        fields.push((
            format!("taskTypeOptions[{}][isMandatory]", index),
            option.is_mandatory.to_string(),
        ));
        // The backend treats 0 as "no tree"; skip it entirely
        match option.id_tree {
            Some(id_tree) if id_tree != 0 => {
                fields.push((format!("taskTypeOptions[{}][idTree]", index), id_tree.to_string()));
            }
            _ => {}
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(fields: &'a [(String, String)], key: &str) -> Option<&'a str> {
        fields.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_create_fields_empty_for_no_requirements() {
        assert!(create_option_fields(&[]).is_empty());
    }

    #[test]
    fn test_create_fields_skip_absent_tree() {
        let options = vec![
            CreateTaskTypeOption {
                name: "Setor".to_string(),
                id_op_ty: 1,
                id_tree: Some(7),
                is_mandatory: true,
            },
            CreateTaskTypeOption {
                name: "Observação".to_string(),
                id_op_ty: 8,
                id_tree: None,
                is_mandatory: false,
            },
        ];
        let fields = create_option_fields(&options);
        assert_eq!(lookup(&fields, "taskTypeOptions[0][idTree]"), Some("7"));
        assert_eq!(lookup(&fields, "taskTypeOptions[0][isMandatory]"), Some("true"));
        assert_eq!(lookup(&fields, "taskTypeOptions[1][name]"), Some("Observação"));
        assert!(lookup(&fields, "taskTypeOptions[1][idTree]").is_none());
    }

    #[test]
    fn test_update_fields_cover_complete_end_state() {
        let request = UpdateTaskRequest {
            id_ta_ty: 9,
            title: "Inspeção".to_string(),
            description: "Rotina".to_string(),
            new_attachments: vec![],
            task_type_attachments: vec![TaskTypeAttachment {
                id_ta_ty_at: 4,
                id_ta_ty: 9,
                url: "files/laudo.pdf".to_string(),
                file_name: "laudo.pdf".to_string(),
            }],
            task_type_options: vec![TaskTypeOption {
                id_ta_ty_op: 12,
                id_ta_ty: 9,
                name: "Conforme?".to_string(),
                id_op_ty: 2,
                id_tree: None,
                is_mandatory: true,
            }],
        };
        let fields = update_text_fields(&request);
        assert_eq!(lookup(&fields, "idTaTy"), Some("9"));
        assert_eq!(lookup(&fields, "taskTypeAttachments[0][idTaTyAt]"), Some("4"));
        assert_eq!(lookup(&fields, "taskTypeAttachments[0][fileName]"), Some("laudo.pdf"));
        assert_eq!(lookup(&fields, "taskTypeOptions[0][idTaTyOp]"), Some("12"));
        assert_eq!(lookup(&fields, "taskTypeOptions[0][idOpTy]"), Some("2"));
        assert!(lookup(&fields, "taskTypeOptions[0][idTree]").is_none());
    }

    #[test]
    fn test_update_fields_treat_zero_tree_as_absent() {
        let request = UpdateTaskRequest {
            id_ta_ty: 9,
            title: "t".to_string(),
            description: "d".to_string(),
            new_attachments: vec![],
            task_type_attachments: vec![],
            task_type_options: vec![TaskTypeOption {
                id_ta_ty_op: 1,
                id_ta_ty: 9,
                name: "Árvore".to_string(),
                id_op_ty: 1,
                id_tree: Some(0),
                is_mandatory: false,
            }],
        };
        let fields = update_text_fields(&request);
        assert!(lookup(&fields, "taskTypeOptions[0][idTree]").is_none());
    }
}
