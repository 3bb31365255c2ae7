//! Tree Requests
//!
//! Whole-record tree CRUD plus individual branch mutations. Callers re-fetch
//! the owning tree after any branch change; nothing here patches locally.

use super::{client, parse_json, url};
use crate::models::{Branch, Tree};

pub async fn get_trees(token: &str) -> Result<Vec<Tree>, String> {
    let response = client()
        .get(url("/tree/get-trees"))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

pub async fn get_tree_by_id(token: &str, id_tree: u32) -> Result<Tree, String> {
    let response = client()
        .get(url(&format!("/tree?id={}", id_tree)))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

/// Create a tree; `idTree` must be 0, the backend assigns the real id
pub async fn create_tree(token: &str, tree: &Tree) -> Result<Tree, String> {
    let response = client()
        .post(url("/tree/create-tree"))
        .bearer_auth(token)
        .json(tree)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

pub async fn update_tree(token: &str, tree: &Tree) -> Result<Tree, String> {
    let response = client()
        .put(url("/tree/update-tree"))
        .bearer_auth(token)
        .json(tree)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

pub async fn delete_tree(token: &str, id_tree: u32) -> Result<bool, String> {
    let response = client()
        .post(url(&format!("/tree/delete-tree?id={}", id_tree)))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

/// Create a branch; `idBranch` must be 0, the backend assigns the real id
pub async fn create_branch(token: &str, branch: &Branch) -> Result<Branch, String> {
    let response = client()
        .post(url("/tree/create-branch"))
        .bearer_auth(token)
        .json(branch)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

pub async fn update_branch(token: &str, branch: &Branch) -> Result<Branch, String> {
    let response = client()
        .put(url("/tree/update-branch"))
        .bearer_auth(token)
        .json(branch)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

pub async fn delete_branch(token: &str, id_branch: u32) -> Result<bool, String> {
    let response = client()
        .post(url(&format!("/tree/delete-branch?id={}", id_branch)))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}
