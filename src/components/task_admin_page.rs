//! Task Admin Page
//!
//! Task-type list with search and pagination, a tab strip for open editors
//! (at most one "new" tab plus one tab per task id), a read-only preview
//! dialog and delete confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pagination::{paginate, total_pages, Pagination};
use crate::components::task_form::TaskForm;
use crate::components::task_preview::TaskPreview;
use crate::context::AppContext;
use crate::models::TaskType;
use crate::session::{token_value, use_session};

/// One open editor tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskTab {
    List,
    New,
    Task(u32),
}

impl TaskTab {
    fn label(&self) -> String {
        match self {
            TaskTab::List => "Lista de Tarefas".to_string(),
            TaskTab::New => "Nova Tarefa".to_string(),
            TaskTab::Task(id) => format!("Tarefa {}", id),
        }
    }
}

#[component]
pub fn TaskAdminPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let tasks: RwSignal<Vec<TaskType>> = RwSignal::new(Vec::new());
    let open_tabs: RwSignal<Vec<TaskTab>> = RwSignal::new(Vec::new());
    let active_tab = RwSignal::new(TaskTab::List);
    let (search_query, set_search_query) = signal(String::new());
    let (page, set_page) = signal(1usize);
    let preview_task = RwSignal::new(None::<u32>);
    let task_to_delete = RwSignal::new(None::<u32>);

    let reload_tasks = move || {
        let token = token_value(&session);
        spawn_local(async move {
            match api::get_task_types(&token).await {
                Ok(loaded) => tasks.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("[TASKS] list failed: {}", e).into());
                    ctx.notify_error("Erro ao buscar tarefas");
                }
            }
        });
    };

    Effect::new(move |_| {
        reload_tasks();
    });

    let filtered = Memo::new(move |_| {
        let query = search_query.get().to_lowercase();
        tasks
            .get()
            .into_iter()
            .filter(|task| {
                format!("{} {}", task.title, task.description.clone().unwrap_or_default())
                    .to_lowercase()
                    .contains(&query)
            })
            .collect::<Vec<_>>()
    });

    let open_tab = move |tab: TaskTab| {
        open_tabs.update(|tabs| {
            if !tabs.contains(&tab) {
                tabs.push(tab);
            }
        });
        active_tab.set(tab);
    };

    let close_tab = move |tab: TaskTab| {
        open_tabs.update(|tabs| tabs.retain(|t| *t != tab));
        if active_tab.get_untracked() == tab {
            active_tab.set(TaskTab::List);
        }
    };

    let on_task_saved = move |saved_tab: TaskTab| {
        reload_tasks();
        ctx.notify_success("Tarefa salva com sucesso!");
        close_tab(saved_tab);
    };

    let delete_task = move |_| {
        let Some(id) = task_to_delete.get_untracked() else { return };
        task_to_delete.set(None);
        let token = token_value(&session);
        spawn_local(async move {
            match api::delete_task_type(&token, id).await {
                Ok(true) => {
                    tasks.update(|list| list.retain(|t| t.id_ta_ty != id));
                    close_tab(TaskTab::Task(id));
                    ctx.notify_success("Tarefa deletada com sucesso!");
                }
                Ok(false) => ctx.notify_error("Erro ao deletar a tarefa."),
                Err(e) => {
                    web_sys::console::error_1(&format!("[TASKS] delete failed: {}", e).into());
                    ctx.notify_error("Erro ao deletar a tarefa.");
                }
            }
        });
    };

    view! {
        <div class="admin-page">
            <h1>"Gerenciar Tarefas"</h1>

            // Tab strip
            <div class="tab-bar">
                <button
                    class=move || {
                        if active_tab.get() == TaskTab::List { "tab active" } else { "tab" }
                    }
                    on:click=move |_| active_tab.set(TaskTab::List)
                >
                    {TaskTab::List.label()}
                </button>
                <For
                    each=move || open_tabs.get()
                    key=|tab| *tab
                    children=move |tab| {
                        let is_active = move || active_tab.get() == tab;
                        view! {
                            <button
                                class=move || if is_active() { "tab active" } else { "tab" }
                                on:click=move |_| active_tab.set(tab)
                            >
                                {tab.label()}
                                <span
                                    class="tab-close"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        close_tab(tab);
                                    }
                                >
                                    "×"
                                </span>
                            </button>
                        }
                    }
                />
            </div>

            // List view
            <Show when=move || active_tab.get() == TaskTab::List>
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
                        <button class="btn primary" on:click=move |_| open_tab(TaskTab::New)>
                            "+ Novo"
                        </button>
                    </div>

                    <ul class="record-list">
                        <For
                            each=move || paginate(&filtered.get(), page.get())
                            key=|task| task.id_ta_ty
                            children=move |task| {
                                let id = task.id_ta_ty;
                                let summary = task
                                    .description
                                    .clone()
                                    .map(|d| {
                                        if d.chars().count() > 30 {
                                            format!("{}...", d.chars().take(30).collect::<String>())
                                        } else {
                                            d
                                        }
                                    })
                                    .unwrap_or_default();
                                view! {
                                    <li class="record-item" on:click=move |_| open_tab(TaskTab::Task(id))>
                                        <button
                                            class="btn icon"
                                            title="Pré-visualizar"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                preview_task.set(Some(id));
                                            }
                                        >
                                            "👁"
                                        </button>
                                        <div class="record-text">
                                            <span class="record-title">{task.title.clone()}</span>
                                            <span class="record-summary">{summary}</span>
                                        </div>
                                        <button
                                            class="btn icon danger"
                                            title="Excluir"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                task_to_delete.set(Some(id));
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
            </Show>

            // Open editors stay mounted; only the active one is visible
            <For
                each=move || open_tabs.get()
                key=|tab| *tab
                children=move |tab| {
                    let task_id = match tab {
                        TaskTab::Task(id) => Some(id),
                        _ => None,
                    };
                    let visible = move || active_tab.get() == tab;
                    view! {
                        <div class=move || if visible() { "tab-content" } else { "tab-content hidden" }>
                            <TaskForm
                                task_id=task_id
                                tasks=Signal::derive(move || tasks.get())
                                on_save=Callback::new(move |_| on_task_saved(tab))
                            />
                        </div>
                    }
                }
            />

            // Preview dialog
            {move || preview_task.get().map(|id| view! {
                <div class="modal-overlay" on:click=move |_| preview_task.set(None)>
                    <div class="modal-dialog wide" on:click=|ev| ev.stop_propagation()>
                        <div class="modal-header">
                            <h3 class="modal-title">"Pré Visualizar Tarefa"</h3>
                            <button class="close-btn" on:click=move |_| preview_task.set(None)>
                                "×"
                            </button>
                        </div>
                        <TaskPreview id_ta_ty=id />
                    </div>
                </div>
            })}

            <ConfirmDialog
                open=Signal::derive(move || task_to_delete.get().is_some())
                title="Confirmar Exclusão"
                message="Tem certeza de que deseja excluir esta tarefa? Esta ação não pode ser desfeita."
                on_confirm=Callback::new(delete_task)
                on_cancel=Callback::new(move |_| task_to_delete.set(None))
            />
        </div>
    }
}
