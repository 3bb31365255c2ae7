//! Tree Admin Page
//!
//! Tree list with search and pagination, metadata editing with the three
//! policy flags, and branch management over the selected tree. After every
//! branch mutation the whole owning tree is re-fetched and replaces the
//! local copy; nothing is spliced in place.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::branch_tree_view::BranchTreeView;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pagination::{paginate, total_pages, Pagination};
use crate::context::AppContext;
use crate::models::{Branch, Tree};
use crate::session::{token_value, use_session};
use crate::tree::find_branch;

async fn refetch_tree(
    token: &str,
    id_tree: u32,
    trees: RwSignal<Vec<Tree>>,
    selected_tree: RwSignal<Option<Tree>>,
) -> Result<(), String> {
    let tree = api::get_tree_by_id(token, id_tree).await?;
    trees.update(|list| {
        if let Some(entry) = list.iter_mut().find(|t| t.id_tree == id_tree) {
            *entry = tree.clone();
        }
    });
    selected_tree.set(Some(tree));
    Ok(())
}

#[component]
pub fn TreeAdminPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let trees: RwSignal<Vec<Tree>> = RwSignal::new(Vec::new());
    let selected_tree: RwSignal<Option<Tree>> = RwSignal::new(None);
    let selected_branch = RwSignal::new(None::<u32>);
    let (search_query, set_search_query) = signal(String::new());
    let (page, set_page) = signal(1usize);
    let tree_to_delete = RwSignal::new(None::<u32>);

    // Editable detail fields, seeded from the selected tree
    let tree_name = RwSignal::new(String::new());
    let tree_description = RwSignal::new(String::new());
    let only_final_options = RwSignal::new(false);
    let tabulation_tree = RwSignal::new(false);
    let conformity_tree = RwSignal::new(false);

    // New tree dialog
    let new_tree_open = RwSignal::new(false);
    let new_tree_name = RwSignal::new(String::new());
    let new_tree_description = RwSignal::new(String::new());
    let new_only_final = RwSignal::new(false);
    let new_tabulation = RwSignal::new(false);
    let new_conformity = RwSignal::new(false);

    // Branch dialog (create and edit share it)
    let branch_dialog_open = RwSignal::new(false);
    let is_new_branch = RwSignal::new(true);
    let branch_name = RwSignal::new(String::new());
    let branch_description = RwSignal::new(String::new());
    let branch_tags = RwSignal::new(String::new());
    let parent_branch_id = RwSignal::new(None::<u32>);

    Effect::new(move |_| {
        let token = token_value(&session);
        spawn_local(async move {
            match api::get_trees(&token).await {
                Ok(loaded) => trees.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("[TREES] list failed: {}", e).into());
                    ctx.notify_error("Erro ao buscar árvores");
                }
            }
        });
    });

    Effect::new(move |_| {
        match selected_tree.get() {
            Some(tree) => {
                tree_name.set(tree.name.clone());
                tree_description.set(tree.description.clone().unwrap_or_default());
                only_final_options.set(tree.only_final_options);
                tabulation_tree.set(tree.tabulation_tree);
                conformity_tree.set(tree.conformity_tree);
            }
            None => {
                tree_name.set(String::new());
                tree_description.set(String::new());
                only_final_options.set(false);
                tabulation_tree.set(false);
                conformity_tree.set(false);
            }
        }
    });

    let filtered = Memo::new(move |_| {
        let query = search_query.get().to_lowercase();
        trees
            .get()
            .into_iter()
            .filter(|tree| tree.name.to_lowercase().contains(&query))
            .collect::<Vec<_>>()
    });

    // The list row carries only a summary; selection fetches the full detail
    let select_tree = move |id_tree: u32| {
        let token = token_value(&session);
        spawn_local(async move {
            match api::get_tree_by_id(&token, id_tree).await {
                Ok(tree) => {
                    selected_branch.set(None);
                    selected_tree.set(Some(tree));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[TREES] detail failed: {}", e).into());
                    ctx.notify_error("Erro ao carregar a árvore");
                }
            }
        });
    };

    let save_tree_details = move |_| {
        let Some(current) = selected_tree.get_untracked() else { return };
        let token = token_value(&session);
        let updated = Tree {
            name: tree_name.get_untracked(),
            description: Some(tree_description.get_untracked()),
            only_final_options: only_final_options.get_untracked(),
            tabulation_tree: tabulation_tree.get_untracked(),
            conformity_tree: conformity_tree.get_untracked(),
            ..current
        };
        spawn_local(async move {
            let result = async {
                api::update_tree(&token, &updated).await?;
                refetch_tree(&token, updated.id_tree, trees, selected_tree).await
            }
            .await;
            match result {
                Ok(()) => ctx.notify_success("Detalhes da árvore salvos com sucesso!"),
                Err(e) => {
                    web_sys::console::error_1(&format!("[TREES] update failed: {}", e).into());
                    ctx.notify_error("Erro ao salvar os detalhes da árvore.");
                }
            }
        });
    };

    let save_new_tree = move |_| {
        let token = token_value(&session);
        let new_tree = Tree {
            id_tree: 0,
            name: new_tree_name.get_untracked(),
            description: Some(new_tree_description.get_untracked()),
            only_final_options: new_only_final.get_untracked(),
            tabulation_tree: new_tabulation.get_untracked(),
            conformity_tree: new_conformity.get_untracked(),
            is_active: true,
            branches: vec![],
        };
        spawn_local(async move {
            let result = async {
                api::create_tree(&token, &new_tree).await?;
                api::get_trees(&token).await
            }
            .await;
            match result {
                Ok(list) => {
                    trees.set(list);
                    ctx.notify_success("Árvore criada com sucesso!");
                    new_tree_open.set(false);
                    new_tree_name.set(String::new());
                    new_tree_description.set(String::new());
                    new_only_final.set(false);
                    new_tabulation.set(false);
                    new_conformity.set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[TREES] create failed: {}", e).into());
                    ctx.notify_error("Erro ao criar a árvore.");
                }
            }
        });
    };

    let delete_tree = move |_| {
        let Some(id) = tree_to_delete.get_untracked() else { return };
        tree_to_delete.set(None);
        let token = token_value(&session);
        spawn_local(async move {
            match api::delete_tree(&token, id).await {
                Ok(true) => {
                    trees.update(|list| list.retain(|t| t.id_tree != id));
                    selected_tree.set(None);
                    selected_branch.set(None);
                    ctx.notify_success("Árvore deletada com sucesso!");
                }
                Ok(false) => ctx.notify_error("Erro ao deletar a árvore."),
                Err(e) => {
                    web_sys::console::error_1(&format!("[TREES] delete failed: {}", e).into());
                    ctx.notify_error("Erro ao deletar a árvore.");
                }
            }
        });
    };

    let open_new_branch_dialog = move |is_root: bool| {
        is_new_branch.set(true);
        parent_branch_id.set(if is_root { None } else { selected_branch.get_untracked() });
        branch_name.set(String::new());
        branch_description.set(String::new());
        branch_tags.set(String::new());
        branch_dialog_open.set(true);
    };

    let open_edit_branch_dialog = move |_| {
        let Some(id) = selected_branch.get_untracked() else { return };
        let Some(tree) = selected_tree.get_untracked() else { return };
        if let Some(branch) = find_branch(&tree.branches, id) {
            is_new_branch.set(false);
            branch_name.set(branch.name.clone());
            branch_description.set(branch.description.clone().unwrap_or_default());
            branch_tags.set(branch.tags.clone().unwrap_or_default());
            parent_branch_id.set(branch.parent_branch_id);
            branch_dialog_open.set(true);
        }
    };

    let delete_branch = move |_| {
        let Some(id) = selected_branch.get_untracked() else { return };
        let Some(tree) = selected_tree.get_untracked() else { return };
        let token = token_value(&session);
        spawn_local(async move {
            match api::delete_branch(&token, id).await {
                Ok(true) => {
                    // Children are cascaded server-side; the re-fetch is the
                    // only way the local copy learns the new shape
                    if let Err(e) = refetch_tree(&token, tree.id_tree, trees, selected_tree).await {
                        web_sys::console::error_1(&format!("[TREES] refetch failed: {}", e).into());
                    }
                    selected_branch.set(None);
                    ctx.notify_success("Ramo deletado com sucesso!");
                }
                Ok(false) => ctx.notify_error("Erro ao deletar o ramo."),
                Err(e) => {
                    web_sys::console::error_1(&format!("[TREES] branch delete failed: {}", e).into());
                    ctx.notify_error("Erro ao deletar o ramo.");
                }
            }
        });
    };

    let save_branch = move |_| {
        let Some(tree) = selected_tree.get_untracked() else { return };
        let is_new = is_new_branch.get_untracked();
        let token = token_value(&session);
        let description = branch_description.get_untracked();
        let tags = branch_tags.get_untracked().trim().to_string();
        let branch = Branch {
            id_branch: if is_new { 0 } else { selected_branch.get_untracked().unwrap_or(0) },
            id_tree: tree.id_tree,
            name: branch_name.get_untracked(),
            description: if description.is_empty() { None } else { Some(description) },
            parent_branch_id: parent_branch_id.get_untracked(),
            tags: if tags.is_empty() { None } else { Some(tags) },
            is_active: true,
            child_branches: vec![],
        };
        spawn_local(async move {
            let result = async {
                if is_new {
                    api::create_branch(&token, &branch).await?;
                } else {
                    api::update_branch(&token, &branch).await?;
                }
                refetch_tree(&token, tree.id_tree, trees, selected_tree).await
            }
            .await;
            match result {
                Ok(()) => {
                    if is_new {
                        ctx.notify_success("Ramo criado com sucesso!");
                    } else {
                        ctx.notify_success("Ramo atualizado com sucesso!");
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[TREES] branch save failed: {}", e).into());
                    ctx.notify_error("Erro ao salvar o ramo.");
                }
            }
            branch_dialog_open.set(false);
            branch_name.set(String::new());
            branch_description.set(String::new());
            branch_tags.set(String::new());
            parent_branch_id.set(None);
        });
    };

    let has_selected_branch = move || selected_branch.get().is_some();

    view! {
        <div class="admin-page">
            <h1>"Gerenciar Árvores"</h1>

            <div class="tree-admin-columns">
                // Tree list
                <div class="panel list-panel">
                    <div class="list-toolbar">
                        <input
                            type="text"
                            placeholder="Pesquisar"
                            prop:value=move || search_query.get()
                            on:input=move |ev| {
                                set_search_query.set(event_target_value(&ev));
                                set_page.set(1);
                            }
                        />
                        <button class="btn primary" on:click=move |_| new_tree_open.set(true)>
                            "+ Novo"
                        </button>
                    </div>

                    <ul class="record-list">
                        <For
                            each=move || paginate(&filtered.get(), page.get())
                            key=|tree| tree.id_tree
                            children=move |tree| {
                                let id = tree.id_tree;
                                let is_selected = move || {
                                    selected_tree.with(|t| {
                                        t.as_ref().map(|t| t.id_tree) == Some(id)
                                    })
                                };
                                view! {
                                    <li
                                        class=move || {
                                            if is_selected() {
                                                "record-item selected"
                                            } else {
                                                "record-item"
                                            }
                                        }
                                        on:click=move |_| select_tree(id)
                                    >
                                        <span class="record-title">{tree.name.clone()}</span>
                                        <button
                                            class="btn icon danger"
                                            title="Excluir"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                tree_to_delete.set(Some(id));
                                            }
                                        >
                                            "🗑"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>

                    <Pagination
                        page=page
                        set_page=set_page
                        total_pages=Signal::derive(move || total_pages(filtered.get().len()))
                    />
                </div>

                <div class="tree-admin-detail">
                    // Editable tree metadata
                    <div class="panel">
                        <div class="panel-header">
                            <h3>
                                {move || if selected_tree.get().is_some() {
                                    "Editar Detalhes da Árvore"
                                } else {
                                    "Selecione uma árvore"
                                }}
                            </h3>
                            <Show when=move || selected_tree.get().is_some()>
                                <button class="btn primary" on:click=save_tree_details>
                                    "Salvar"
                                </button>
                            </Show>
                        </div>

                        <Show when=move || selected_tree.get().is_some()>
                            <div class="form-field">
                                <label class="editor-label">"Nome"</label>
                                <input
                                    type="text"
                                    prop:value=move || tree_name.get()
                                    on:input=move |ev| tree_name.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-field">
                                <label class="editor-label">"Descrição"</label>
                                <textarea
                                    rows="3"
                                    prop:value=move || tree_description.get()
                                    on:input=move |ev| {
                                        tree_description.set(event_target_value(&ev))
                                    }
                                ></textarea>
                            </div>
                            <label class="switch-row">
                                <input
                                    type="checkbox"
                                    prop:checked=move || only_final_options.get()
                                    on:change=move |ev| {
                                        only_final_options.set(event_target_checked(&ev))
                                    }
                                />
                                "Apenas Opções Finais"
                            </label>
                            <label class="switch-row">
                                <input
                                    type="checkbox"
                                    prop:checked=move || tabulation_tree.get()
                                    on:change=move |ev| {
                                        tabulation_tree.set(event_target_checked(&ev))
                                    }
                                />
                                "Árvore de Tabulação"
                            </label>
                            <label class="switch-row">
                                <input
                                    type="checkbox"
                                    prop:checked=move || conformity_tree.get()
                                    on:change=move |ev| {
                                        conformity_tree.set(event_target_checked(&ev))
                                    }
                                />
                                "Árvore de Conformidade"
                            </label>
                        </Show>
                    </div>

                    // Branch forest with the mutation actions
                    <div class="panel">
                        <div class="panel-header">
                            <h3>"Visualização da Árvore"</h3>
                            <Show when=move || selected_tree.get().is_some()>
                                <div class="panel-actions">
                                    <button
                                        class="btn"
                                        on:click=move |_| open_new_branch_dialog(true)
                                    >
                                        "Nova Raiz"
                                    </button>
                                    <button
                                        class="btn"
                                        disabled=move || !has_selected_branch()
                                        on:click=move |_| open_new_branch_dialog(false)
                                    >
                                        "Novo Ramo"
                                    </button>
                                    <button
                                        class="btn"
                                        disabled=move || !has_selected_branch()
                                        on:click=open_edit_branch_dialog
                                    >
                                        "Editar"
                                    </button>
                                    <button
                                        class="btn danger"
                                        disabled=move || !has_selected_branch()
                                        on:click=delete_branch
                                    >
                                        "Excluir"
                                    </button>
                                </div>
                            </Show>
                        </div>

                        <Show when=move || selected_tree.get().is_some()>
                            <BranchTreeView
                                branches=Signal::derive(move || {
                                    selected_tree
                                        .get()
                                        .map(|t| t.branches)
                                        .unwrap_or_default()
                                })
                                selected=Signal::derive(move || selected_branch.get())
                                on_select=Callback::new(move |id: u32| {
                                    selected_branch.set(Some(id));
                                })
                            />
                        </Show>
                    </div>
                </div>
            </div>

            <ConfirmDialog
                open=Signal::derive(move || tree_to_delete.get().is_some())
                title="Confirmar Exclusão"
                message="Tem certeza de que deseja excluir esta árvore? Esta ação não pode ser desfeita."
                on_confirm=Callback::new(delete_tree)
                on_cancel=Callback::new(move |_| tree_to_delete.set(None))
            />

            // New tree dialog
            <Show when=move || new_tree_open.get()>
                <div class="modal-overlay" on:click=move |_| new_tree_open.set(false)>
                    <div class="modal-dialog" on:click=|ev| ev.stop_propagation()>
                        <h3 class="modal-title">"Nova Árvore"</h3>
                        <div class="form-field">
                            <label class="editor-label">"Nome"</label>
                            <input
                                type="text"
                                prop:value=move || new_tree_name.get()
                                on:input=move |ev| new_tree_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-field">
                            <label class="editor-label">"Descrição"</label>
                            <textarea
                                rows="3"
                                prop:value=move || new_tree_description.get()
                                on:input=move |ev| {
                                    new_tree_description.set(event_target_value(&ev))
                                }
                            ></textarea>
                        </div>
                        <label class="switch-row">
                            <input
                                type="checkbox"
                                prop:checked=move || new_only_final.get()
                                on:change=move |ev| new_only_final.set(event_target_checked(&ev))
                            />
                            "Apenas Opções Finais"
                        </label>
                        <label class="switch-row">
                            <input
                                type="checkbox"
                                prop:checked=move || new_tabulation.get()
                                on:change=move |ev| new_tabulation.set(event_target_checked(&ev))
                            />
                            "Árvore de Tabulação"
                        </label>
                        <label class="switch-row">
                            <input
                                type="checkbox"
                                prop:checked=move || new_conformity.get()
                                on:change=move |ev| new_conformity.set(event_target_checked(&ev))
                            />
                            "Árvore de Conformidade"
                        </label>
                        <div class="modal-actions">
                            <button class="btn" on:click=move |_| new_tree_open.set(false)>
                                "Cancelar"
                            </button>
                            <button class="btn primary" on:click=save_new_tree>"Salvar"</button>
                        </div>
                    </div>
                </div>
            </Show>

            // New/edit branch dialog
            <Show when=move || branch_dialog_open.get()>
                <div class="modal-overlay" on:click=move |_| branch_dialog_open.set(false)>
                    <div class="modal-dialog" on:click=|ev| ev.stop_propagation()>
                        <h3 class="modal-title">
                            {move || if is_new_branch.get() { "Novo Ramo" } else { "Editar Ramo" }}
                        </h3>
                        <div class="form-field">
                            <label class="editor-label">"Nome"</label>
                            <input
                                type="text"
                                prop:value=move || branch_name.get()
                                on:input=move |ev| branch_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-field">
                            <label class="editor-label">"Descrição"</label>
                            <textarea
                                rows="3"
                                prop:value=move || branch_description.get()
                                on:input=move |ev| {
                                    branch_description.set(event_target_value(&ev))
                                }
                            ></textarea>
                        </div>
                        <div class="form-field">
                            <label class="editor-label">"Tags"</label>
                            <input
                                type="text"
                                prop:value=move || branch_tags.get()
                                on:input=move |ev| branch_tags.set(event_target_value(&ev))
                            />
                            <span class="field-note">
                                "Valores separados por vírgula (ex: tag1, tag2, tag3)"
                            </span>
                        </div>
                        {move || {
                            (is_new_branch.get())
                                .then(|| parent_branch_id.get())
                                .flatten()
                                .map(|parent| view! {
                                    <p class="field-note">
                                        {format!(
                                            "Será criado como sub-ramo do ramo com ID: {}",
                                            parent,
                                        )}
                                    </p>
                                })
                        }}
                        <div class="modal-actions">
                            <button class="btn" on:click=move |_| branch_dialog_open.set(false)>
                                "Cancelar"
                            </button>
                            <button
                                class="btn primary"
                                disabled=move || branch_name.get().trim().is_empty()
                                on:click=save_branch
                            >
                                "Salvar"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
