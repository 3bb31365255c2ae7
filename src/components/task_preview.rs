//! Task Preview Component
//!
//! Read-only preview of a task type: description, downloadable attachments
//! and the rendered dynamic form. Answers live only in page-local state and
//! are never persisted.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::api;
use crate::components::dynamic_form::{DynamicForm, FieldConfig};
use crate::context::AppContext;
use crate::download::save_bytes;
use crate::models::TaskType;
use crate::session::{token_value, use_session};

#[component]
pub fn TaskPreview(id_ta_ty: u32) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let (task_type, set_task_type) = signal::<Option<TaskType>>(None);
    let values: RwSignal<HashMap<u32, Value>> = RwSignal::new(HashMap::new());

    Effect::new(move |_| {
        let token = token_value(&session);
        spawn_local(async move {
            match api::get_task_type_by_id(&token, id_ta_ty).await {
                Ok(loaded) => set_task_type.set(Some(loaded)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[PREVIEW] task type {} fetch failed: {}", id_ta_ty, e).into(),
                    );
                    ctx.notify_error("Erro ao carregar a tarefa");
                }
            }
        });
    });

    let download = move |storage_url: String, file_name: String| {
        let token = token_value(&session);
        spawn_local(async move {
            match api::download_attachment(&token, &storage_url).await {
                Ok(bytes) => {
                    if let Err(e) = save_bytes(&bytes, &file_name) {
                        web_sys::console::error_1(&format!("[PREVIEW] save failed: {}", e).into());
                        ctx.notify_error(format!("Erro ao baixar o arquivo {}", file_name));
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[PREVIEW] download failed: {}", e).into());
                    ctx.notify_error(format!("Erro ao baixar o arquivo {}", file_name));
                }
            }
        });
    };

    view! {
        {move || match task_type.get() {
            None => view! { <p class="loading">"Carregando..."</p> }.into_any(),
            Some(task) => {
                let attachments = task.task_type_attachments.clone();
                let fields: Vec<FieldConfig> =
                    task.task_type_options.iter().map(FieldConfig::from_option).collect();
                view! {
                    <div class="task-preview">
                        <h2>{task.title.clone()}</h2>
                        <p class="task-description">
                            {task.description.clone().unwrap_or_else(|| "Sem descrição".to_string())}
                        </p>

                        <Show when={
                            let has_attachments = !attachments.is_empty();
                            move || has_attachments
                        }>
                            <div class="panel">
                                <h3>"Anexos"</h3>
                                <ul class="attachment-list">
                                    {attachments.iter().map(|att| {
                                        let url = att.url.clone();
                                        let name = att.file_name.clone();
                                        let shown = att.file_name.clone();
                                        view! {
                                            <li class="attachment-item">
                                                <span>{shown}</span>
                                                <button
                                                    class="btn"
                                                    title="Baixar"
                                                    on:click=move |_| download(url.clone(), name.clone())
                                                >
                                                    "⬇"
                                                </button>
                                            </li>
                                        }
                                    }).collect_view()}
                                </ul>
                            </div>
                        </Show>

                        <div class="panel">
                            <h3>"Campos da tarefa"</h3>
                            <DynamicForm
                                fields=Signal::derive({
                                    let fields = fields.clone();
                                    move || fields.clone()
                                })
                                values=Signal::derive(move || values.get())
                                on_change=Callback::new(move |(id, value): (u32, Value)| {
                                    values.update(|m| { m.insert(id, value); });
                                })
                            />
                        </div>
                    </div>
                }
                .into_any()
            }
        }}
    }
}
