//! Top bar with back, delete and share actions

use dioxus::prelude::*;

use crate::theme;

/// One entry of the share dropdown: a label plus the action it triggers.
/// Built fresh on every render; nothing is persisted.
#[derive(Clone, PartialEq)]
pub struct ShareActionItem {
    pub label: String,
    pub on_select: EventHandler<()>,
}

/// Application top bar
#[component]
pub fn TopBar(
    title: String,
    on_back: EventHandler<()>,
    on_delete: EventHandler<()>,
    share_actions: Vec<ShareActionItem>,
) -> Element {
    let mut dropdown_open = use_signal(|| false);
    let colors = theme::palette();

    rsx! {
        div {
            class: "top-bar",
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                padding: 10px 12px;
                background: {colors.bg_surface};
                border-bottom: 1px solid {colors.border};
                position: relative;
            ",

            button {
                class: "top-bar-back",
                style: "border: none; background: transparent; cursor: pointer; font-size: 16px;",
                title: "Back",
                onclick: move |_| on_back.call(()),
                "\u{2190}"
            }

            p {
                style: "margin: 0; flex: 1; font-size: 16px; font-weight: 600; color: {colors.text_primary};",
                "{title}"
            }

            button {
                class: "top-bar-delete",
                style: "border: none; background: transparent; cursor: pointer; font-size: 16px; color: {colors.text_danger};",
                title: "Delete",
                onclick: move |_| on_delete.call(()),
                "\u{1f5d1}"
            }

            button {
                class: "top-bar-share",
                style: "border: none; background: transparent; cursor: pointer; font-size: 16px;",
                title: "Share",
                onclick: move |_| dropdown_open.set(true),
                "\u{2197}"
            }

            if dropdown_open() {
                ShareDropdown {
                    actions: share_actions.clone(),
                    on_dismiss: move |()| dropdown_open.set(false),
                }
            }
        }
    }
}

/// Transient dropdown listing the available share actions
#[component]
fn ShareDropdown(actions: Vec<ShareActionItem>, on_dismiss: EventHandler<()>) -> Element {
    let colors = theme::palette();

    rsx! {
        // Click-away backdrop
        div {
            style: "position: fixed; inset: 0; z-index: 40;",
            onclick: move |_| on_dismiss.call(()),
        }

        div {
            class: "share-dropdown",
            style: "
                position: absolute;
                top: 100%;
                right: 8px;
                z-index: 50;
                min-width: 120px;
                background: {colors.bg_surface};
                border: 1px solid {colors.border};
                border-radius: 8px;
                box-shadow: 0 4px 12px rgba(17, 24, 39, 0.12);
                display: flex;
                flex-direction: column;
            ",

            for action in actions {
                {
                    let on_select = action.on_select;
                    rsx! {
                        button {
                            key: "{action.label}",
                            style: "
                                border: none;
                                background: transparent;
                                cursor: pointer;
                                text-align: left;
                                padding: 8px 12px;
                                font-size: 14px;
                                color: {colors.text_primary};
                            ",
                            onclick: move |_| {
                                on_dismiss.call(());
                                on_select.call(());
                            },
                            "{action.label}"
                        }
                    }
                }
            }
        }
    }
}
