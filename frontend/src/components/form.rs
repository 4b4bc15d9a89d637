//! 表单控件：带标签与逐字段错误提示

use charity_directory::validation::FieldErrors;
use leptos::prelude::*;

/// 某个字段的错误文案（随校验结果更新）
pub fn field_error(errors: RwSignal<FieldErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    value: RwSignal<String>,
    error: Signal<Option<String>>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    /// 用户修改字段时回调（通常用于清除该字段的错误）
    #[prop(optional)]
    on_edit: Option<Callback<()>>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    let input_class = move || {
        if error.get().is_some() {
            "input input-bordered input-error w-full"
        } else {
            "input input-bordered w-full"
        }
    };

    view! {
        <label class="form-control w-full">
            <div class="label">
                <span class="label-text">{label}</span>
            </div>
            <input
                id=name.clone()
                name=name
                type=input_type
                placeholder=placeholder.unwrap_or_default()
                class=input_class
                prop:value=value
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    if let Some(cb) = on_edit {
                        cb.run(());
                    }
                }
            />
            {move || error.get().map(|message| view! {
                <div class="label">
                    <span class="label-text-alt text-error">{message}</span>
                </div>
            })}
        </label>
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    value: RwSignal<String>,
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <label class="form-control w-full">
            <div class="label">
                <span class="label-text">{label}</span>
            </div>
            <textarea
                id=name.clone()
                name=name
                rows="5"
                class="textarea textarea-bordered w-full"
                prop:value=value
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
            {move || error.get().map(|message| view! {
                <div class="label">
                    <span class="label-text-alt text-error">{message}</span>
                </div>
            })}
        </label>
    }
}

#[component]
pub fn SubmitButton(
    #[prop(into)] label: String,
    #[prop(into)] busy_label: String,
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <button type="submit" class="btn btn-primary w-full" disabled=move || busy.get()>
            {move || if busy.get() {
                view! { <span class="loading loading-spinner"></span> {busy_label.clone()} }.into_any()
            } else {
                label.clone().into_any()
            }}
        </button>
    }
}
