//! Task Form Component
//!
//! Create/edit form for a task type: title, description, attachments and the
//! ordered requirement list. Each save submits the complete desired end
//! state; validation blocks the request while title or description is blank.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::api::{self, CreateTaskRequest, CreateTaskTypeOption, UpdateTaskRequest};
use crate::context::AppContext;
use crate::models::{
    NewAttachment, OptionType, TaskType, TaskTypeAttachment, TaskTypeOption, Tree,
    TREE_OPTION_TYPE,
};
use crate::requirements::{
    add_requirement, remove_requirements, set_requirement_mandatory, set_requirement_name,
    set_requirement_tree, set_requirement_type, validate_task_type, TaskTypeErrors,
};
use crate::session::{token_value, use_session};

async fn read_file(file: web_sys::File) -> Result<NewAttachment, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let mime_type = if file.type_().is_empty() {
        "application/octet-stream".to_string()
    } else {
        file.type_()
    };
    Ok(NewAttachment { file_name: file.name(), mime_type, bytes })
}

#[component]
pub fn TaskForm(
    task_id: Option<u32>,
    tasks: Signal<Vec<TaskType>>,
    #[prop(into)] on_save: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let is_new = task_id.is_none();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let new_attachments: RwSignal<Vec<NewAttachment>> = RwSignal::new(Vec::new());
    let existing_attachments: RwSignal<Vec<TaskTypeAttachment>> = RwSignal::new(Vec::new());
    let requirements: RwSignal<Vec<TaskTypeOption>> = RwSignal::new(Vec::new());
    let option_types: RwSignal<Vec<OptionType>> = RwSignal::new(Vec::new());
    let trees: RwSignal<Vec<Tree>> = RwSignal::new(Vec::new());
    let selected_rows: RwSignal<Vec<u32>> = RwSignal::new(Vec::new());
    let errors = RwSignal::new(TaskTypeErrors::default());

    // Catalog data used by the requirement rows
    Effect::new(move |_| {
        let token = token_value(&session);
        spawn_local(async move {
            match api::get_option_types(&token).await {
                Ok(loaded) => option_types.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("[TASK] option types failed: {}", e).into());
                    ctx.notify_error("Erro ao buscar tipos de campo");
                }
            }
        });
        let token = token_value(&session);
        spawn_local(async move {
            match api::get_trees(&token).await {
                Ok(loaded) => trees.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("[TASK] trees failed: {}", e).into());
                    ctx.notify_error("Erro ao buscar árvores");
                }
            }
        });
    });

    // Seed editable state from the opened task
    Effect::new(move |_| {
        let Some(id) = task_id else { return };
        if let Some(task) = tasks.get().into_iter().find(|t| t.id_ta_ty == id) {
            title.set(task.title.clone());
            description.set(task.description.clone().unwrap_or_default());
            requirements.set(task.task_type_options.clone());
            existing_attachments.set(task.task_type_attachments.clone());
        }
    });

    let on_pick_files = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_ref::<web_sys::HtmlInputElement>().cloned())
        else {
            return;
        };
        let Some(files) = input.files() else { return };
        for index in 0..files.length() {
            if let Some(file) = files.get(index) {
                spawn_local(async move {
                    match read_file(file).await {
                        Ok(attachment) => new_attachments.update(|list| list.push(attachment)),
                        Err(e) => {
                            web_sys::console::error_1(&format!("[TASK] read failed: {}", e).into());
                            ctx.notify_error("Erro ao ler o arquivo");
                        }
                    }
                });
            }
        }
        input.set_value("");
    };

    let add_row = move |_| {
        let default_op_ty = option_types
            .with(|types| types.first().map(|t| t.id_op_ty))
            .unwrap_or(TREE_OPTION_TYPE);
        requirements.update(|reqs| add_requirement(reqs, task_id.unwrap_or(0), default_op_ty));
    };

    let delete_rows = move |_| {
        let selected = selected_rows.get();
        requirements.update(|reqs| remove_requirements(reqs, &selected));
        selected_rows.set(Vec::new());
    };

    let save = move |_| {
        let current_errors = validate_task_type(&title.get(), &description.get());
        errors.set(current_errors);
        if current_errors.any() {
            return;
        }

        let token = token_value(&session);
        spawn_local(async move {
            let result = if is_new {
                let request = CreateTaskRequest {
                    title: title.get_untracked(),
                    description: Some(description.get_untracked()),
                    attachments: new_attachments.get_untracked(),
                    task_type_options: requirements
                        .get_untracked()
                        .into_iter()
                        .map(|req| CreateTaskTypeOption {
                            name: req.name,
                            id_op_ty: req.id_op_ty,
                            id_tree: req.id_tree,
                            is_mandatory: req.is_mandatory,
                        })
                        .collect(),
                };
                api::create_task_type(&token, &request).await.map(|_| ())
            } else {
                let request = UpdateTaskRequest {
                    id_ta_ty: task_id.unwrap_or(0),
                    title: title.get_untracked(),
                    description: description.get_untracked(),
                    new_attachments: new_attachments.get_untracked(),
                    task_type_attachments: existing_attachments.get_untracked(),
                    task_type_options: requirements.get_untracked(),
                };
                api::update_task_type(&token, &request).await.map(|_| ())
            };

            match result {
                Ok(()) => on_save.run(()),
                Err(e) => {
                    web_sys::console::error_1(&format!("[TASK] save failed: {}", e).into());
                    ctx.notify_error("Erro ao salvar a tarefa");
                }
            }
        });
    };

    view! {
        <div class="task-form">
            <h2>{if is_new { "Nova Tarefa" } else { "Editar Tarefa" }}</h2>

            <div class=move || if errors.get().title { "form-field invalid" } else { "form-field" }>
                <label class="editor-label">"Título"</label>
                <input
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <Show when=move || errors.get().title>
                    <span class="field-error">"O título é obrigatório."</span>
                </Show>
            </div>

            <div class=move || {
                if errors.get().description { "form-field invalid" } else { "form-field" }
            }>
                <label class="editor-label">"Descrição"</label>
                <textarea
                    rows="4"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <Show when=move || errors.get().description>
                    <span class="field-error">"A descrição é obrigatória."</span>
                </Show>
            </div>

            <label class="dropzone">
                "Arraste ou clique para adicionar anexos"
                <input
                    type="file"
                    multiple
                    accept="image/*,application/pdf"
                    class="hidden-input"
                    on:change=on_pick_files
                />
            </label>

            <ul class="attachment-list">
                <For
                    each=move || existing_attachments.get()
                    key=|att| att.id_ta_ty_at
                    children=move |att| {
                        let id = att.id_ta_ty_at;
                        view! {
                            <li class="attachment-item">
                                <span>{att.file_name.clone()}</span>
                                <button
                                    class="btn icon"
                                    title="Remover"
                                    on:click=move |_| {
                                        existing_attachments
                                            .update(|list| list.retain(|a| a.id_ta_ty_at != id));
                                    }
                                >
                                    "🗑"
                                </button>
                            </li>
                        }
                    }
                />
                <For
                    each=move || {
                        new_attachments
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, att)| (index, att.file_name))
                            .collect::<Vec<_>>()
                    }
                    key=|(index, file_name)| (*index, file_name.clone())
                    children=move |(index, file_name)| {
                        view! {
                            <li class="attachment-item new">
                                <span>{file_name.clone()}</span>
                                <button
                                    class="btn icon"
                                    title="Remover"
                                    on:click=move |_| {
                                        new_attachments.update(|list| {
                                            if index < list.len() {
                                                list.remove(index);
                                            }
                                        });
                                    }
                                >
                                    "🗑"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>

            <div class="panel">
                <div class="panel-header">
                    <h3>"Requerimentos"</h3>
                    <div class="panel-actions">
                        <button class="btn" on:click=add_row>"Novo"</button>
                        <button
                            class="btn icon"
                            title="Excluir selecionados"
                            disabled=move || selected_rows.get().is_empty()
                            on:click=delete_rows
                        >
                            "🗑"
                        </button>
                    </div>
                </div>

                <For
                    each=move || requirements.get()
                    key=|req| req.id_ta_ty_op
                    children=move |req| {
                        let id = req.id_ta_ty_op;
                        // Row widgets read their fields back through the signal
                        // so type/tree edits re-render without re-keying the row
                        let row = move |f: fn(&TaskTypeOption) -> String| {
                            requirements.with(|reqs| {
                                reqs.iter().find(|r| r.id_ta_ty_op == id).map(f).unwrap_or_default()
                            })
                        };
                        let is_tree = move || {
                            requirements.with(|reqs| {
                                reqs.iter()
                                    .find(|r| r.id_ta_ty_op == id)
                                    .map(|r| r.id_op_ty == TREE_OPTION_TYPE)
                                    .unwrap_or(false)
                            })
                        };
                        let is_mandatory = move || {
                            requirements.with(|reqs| {
                                reqs.iter()
                                    .find(|r| r.id_ta_ty_op == id)
                                    .map(|r| r.is_mandatory)
                                    .unwrap_or(false)
                            })
                        };
                        view! {
                            <div class="requirement-row">
                                <input
                                    type="text"
                                    class="requirement-name"
                                    placeholder="Nome"
                                    prop:value=move || row(|r| r.name.clone())
                                    on:input=move |ev| {
                                        requirements.update(|reqs| {
                                            set_requirement_name(reqs, id, event_target_value(&ev));
                                        });
                                    }
                                />

                                <select
                                    class="requirement-type"
                                    prop:value=move || row(|r| r.id_op_ty.to_string())
                                    on:change=move |ev| {
                                        if let Ok(code) = event_target_value(&ev).parse::<u32>() {
                                            requirements.update(|reqs| {
                                                set_requirement_type(reqs, id, code);
                                            });
                                        }
                                    }
                                >
                                    <For
                                        each=move || option_types.get()
                                        key=|opt| opt.id_op_ty
                                        children=move |opt| {
                                            view! {
                                                <option value=opt.id_op_ty.to_string()>
                                                    {opt.description.clone()}
                                                </option>
                                            }
                                        }
                                    />
                                </select>

                                // Tree picker only for tree-referencing rows
                                <Show when=is_tree>
                                    <select
                                        class="requirement-tree"
                                        prop:value=move || {
                                            row(|r| {
                                                r.id_tree.map(|t| t.to_string()).unwrap_or_default()
                                            })
                                        }
                                        on:change=move |ev| {
                                            let picked = event_target_value(&ev).parse::<u32>().ok();
                                            requirements.update(|reqs| {
                                                set_requirement_tree(reqs, id, picked);
                                            });
                                        }
                                    >
                                        <option value="">"Selecione uma árvore"</option>
                                        <For
                                            each=move || trees.get()
                                            key=|tree| tree.id_tree
                                            children=move |tree| {
                                                view! {
                                                    <option value=tree.id_tree.to_string()>
                                                        {tree.name.clone()}
                                                    </option>
                                                }
                                            }
                                        />
                                    </select>
                                </Show>

                                <label class="switch" title="Obrigatório">
                                    <input
                                        type="checkbox"
                                        prop:checked=is_mandatory
                                        on:change=move |ev| {
                                            requirements.update(|reqs| {
                                                set_requirement_mandatory(
                                                    reqs,
                                                    id,
                                                    event_target_checked(&ev),
                                                );
                                            });
                                        }
                                    />
                                    <span class="slider"></span>
                                </label>

                                <input
                                    type="checkbox"
                                    class="row-select"
                                    prop:checked=move || selected_rows.get().contains(&id)
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        selected_rows.update(|rows| {
                                            if checked {
                                                if !rows.contains(&id) {
                                                    rows.push(id);
                                                }
                                            } else {
                                                rows.retain(|r| *r != id);
                                            }
                                        });
                                    }
                                />
                            </div>
                        }
                    }
                />
            </div>

            <button class="btn primary" on:click=save>
                {if is_new { "Criar" } else { "Salvar" }}
            </button>
        </div>
    }
}
