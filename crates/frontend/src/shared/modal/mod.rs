//! Modal content: a shared header plus the message and confirmation dialogs.
//!
//! Every save, delete or bulk operation reports its outcome through [`Feedback`],
//! which pushes exactly one message modal onto the stack.

use crate::shared::icons::icon;
use crate::shared::modal_stack::{use_modal_stack, ModalStackService};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

/// Title bar of a modal with optional action buttons and a close button.
#[component]
pub fn ModalHeader(
    #[prop(into)]
    title: Signal<String>,
    on_close: Callback<()>,
    #[prop(optional)]
    action_buttons: Option<ChildrenFn>,
) -> impl IntoView {
    view! {
        <div class="modal-header">
            <h2 class="modal-title">{move || title.get()}</h2>
            <div class="modal-header-actions">
                {move || action_buttons.as_ref().map(|buttons| buttons())}
                <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                    {icon("x")}
                </button>
            </div>
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    fn title(&self) -> &'static str {
        match self {
            MessageKind::Success => "Success",
            MessageKind::Error => "Error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            MessageKind::Success => "check",
            MessageKind::Error => "alert",
        }
    }
}

#[component]
pub fn MessageModal(
    kind: MessageKind,
    #[prop(into)]
    message: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let class = match kind {
        MessageKind::Success => "message-modal message-modal--success",
        MessageKind::Error => "message-modal message-modal--error",
    };

    view! {
        <div class=class>
            <ModalHeader title=kind.title().to_string() on_close=on_close />
            <div class="modal-body">
                <Flex gap=FlexGap::Medium align=FlexAlign::Center>
                    <span class="message-modal__icon">{icon(kind.icon())}</span>
                    <span class="message-modal__text">{message}</span>
                </Flex>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_close.run(())>
                    "OK"
                </Button>
            </div>
        </div>
    }
}

#[component]
pub fn ConfirmModal(
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: String,
    #[prop(into)]
    confirm_label: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="confirm-modal">
            <ModalHeader title=title on_close=on_cancel />
            <div class="modal-body">{message}</div>
            <div class="modal-footer">
                <Flex gap=FlexGap::Small justify=FlexJustify::End>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        "Cancel"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </Button>
                </Flex>
            </div>
        </div>
    }
}

/// Pushes outcome and confirmation modals; grab it while the component is built.
#[derive(Clone, Copy)]
pub struct Feedback {
    stack: ModalStackService,
}

impl Feedback {
    pub fn new(stack: ModalStackService) -> Self {
        Self { stack }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.message(MessageKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.message(MessageKind::Error, message.into());
    }

    fn message(&self, kind: MessageKind, message: String) {
        match kind {
            MessageKind::Success => log::info!("{}", message),
            MessageKind::Error => log::warn!("{}", message),
        }
        self.stack.push(move |handle| {
            view! {
                <MessageModal
                    kind=kind
                    message=message.clone()
                    on_close=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    }

    /// Asks before a destructive action; `on_confirm` runs after the dialog closes.
    pub fn confirm<F>(&self, title: impl Into<String>, message: impl Into<String>, on_confirm: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        let title = title.into();
        let message = message.into();
        let on_confirm = Arc::new(on_confirm);
        self.stack.push(move |handle| {
            let on_confirm = on_confirm.clone();
            view! {
                <ConfirmModal
                    title=title.clone()
                    message=message.clone()
                    confirm_label="Delete"
                    on_confirm=Callback::new(move |_| {
                        handle.close();
                        on_confirm();
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    }

    /// Standard question for deleting one record.
    pub fn confirm_delete<F>(&self, element: &str, name: &str, on_confirm: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.confirm(
            format!("Delete {}", element),
            delete_question(element, name),
            on_confirm,
        );
    }
}

pub fn use_feedback() -> Feedback {
    Feedback::new(use_modal_stack())
}

pub fn delete_question(element: &str, name: &str) -> String {
    format!(
        "Are you sure you want to delete {} \"{}\"? This cannot be undone.",
        element.to_lowercase(),
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_question() {
        assert_eq!(
            delete_question("Bank Account", "Petty Cash"),
            "Are you sure you want to delete bank account \"Petty Cash\"? This cannot be undone."
        );
    }
}
