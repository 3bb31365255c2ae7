//! Signature Field Component
//!
//! Freehand drawing surface. Serializes to a PNG data URL at the end of
//! each stroke and on the explicit save action; clearing emits null.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::field_inputs::FieldLabel;

const CANVAS_WIDTH: u32 = 500;
const CANVAS_HEIGHT: u32 = 200;

fn context_2d(canvas: &web_sys::HtmlCanvasElement) -> Option<web_sys::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
}

#[component]
pub fn SignatureField(
    #[prop(into)] label: String,
    value: Signal<Option<String>>,
    #[prop(into)] on_change: Callback<Option<String>>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let (drawing, set_drawing) = signal(false);

    let serialize = move || {
        let Some(canvas) = canvas_ref.get_untracked() else { return };
        match canvas.to_data_url() {
            Ok(data_url) => on_change.run(Some(data_url)),
            Err(e) => web_sys::console::error_1(&format!("[SIGNATURE] serialize failed: {:?}", e).into()),
        }
    };

    let on_mousedown = move |ev: web_sys::MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else { return };
        let Some(context) = context_2d(&canvas) else { return };
        context.begin_path();
        context.set_line_width(2.0);
        context.move_to(ev.offset_x() as f64, ev.offset_y() as f64);
        set_drawing.set(true);
    };

    let on_mousemove = move |ev: web_sys::MouseEvent| {
        if !drawing.get_untracked() {
            return;
        }
        let Some(canvas) = canvas_ref.get_untracked() else { return };
        let Some(context) = context_2d(&canvas) else { return };
        context.line_to(ev.offset_x() as f64, ev.offset_y() as f64);
        context.stroke();
    };

    // Stroke completion saves automatically
    let end_stroke = move |_: web_sys::MouseEvent| {
        if drawing.get_untracked() {
            set_drawing.set(false);
            serialize();
        }
    };

    let clear = move |_| {
        if let Some(canvas) = canvas_ref.get_untracked() {
            if let Some(context) = context_2d(&canvas) {
                context.clear_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
            }
        }
        on_change.run(None);
    };

    view! {
        <div class="field signature-field">
            <FieldLabel label=label required=required />
            <canvas
                class="signature-canvas"
                width=CANVAS_WIDTH
                height=CANVAS_HEIGHT
                node_ref=canvas_ref
                on:mousedown=on_mousedown
                on:mousemove=on_mousemove
                on:mouseup=end_stroke
                on:mouseleave=end_stroke
            ></canvas>
            <div class="signature-actions">
                <button type="button" class="btn" on:click=clear>"Limpar"</button>
                <button type="button" class="btn primary" on:click=move |_| serialize()>
                    "Salvar Assinatura"
                </button>
            </div>
            {move || value.get().map(|data_url| view! {
                <div class="signature-preview">
                    <span class="field-label">"Assinatura Atual:"</span>
                    <img src=data_url alt="Assinatura" />
                </div>
            })}
        </div>
    }
}
