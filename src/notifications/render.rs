// SPDX-License-Identifier: MPL-2.0
//! Builds the element tree of a toast.
//!
//! Markup contract, stable for external stylesheets:
//!
//! ```text
//! div#toast-<n>.toast.toast-<severity>
//!   div.toast-icon            icon markup
//!   div.toast-content
//!     div.toast-title         only when a title is given
//!     div.toast-message
//!   button.toast-action       only with an action
//!   button.toast-close        only when closable
//! ```
//!
//! The `show` class is added once the entry delay has passed; `hide`
//! replaces it while the exit animation plays.

use super::icons;
use super::notification::{ActionSpec, Severity, ToastId};
use crate::diagnostics::DismissReason;
use crate::page::{EventKind, NodeId, Page};
use std::cell::RefCell;
use std::rc::Rc;

pub const TOAST_CLASS: &str = "toast";
pub const CONTAINER_CLASS: &str = "toast-container";
pub const ICON_CLASS: &str = "toast-icon";
pub const CONTENT_CLASS: &str = "toast-content";
pub const TITLE_CLASS: &str = "toast-title";
pub const MESSAGE_CLASS: &str = "toast-message";
pub const ACTION_CLASS: &str = "toast-action";
pub const CLOSE_CLASS: &str = "toast-close";
pub const LOADING_CLASS: &str = "toast-loading";
pub const SHOW_CLASS: &str = "show";
pub const HIDE_CLASS: &str = "hide";

/// Work posted by element listeners, applied by the manager once the
/// event has finished dispatching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Request {
    Dismiss(ToastId, DismissReason),
}

pub(crate) type Outbox = Rc<RefCell<Vec<Request>>>;

/// Everything needed to draw one toast.
pub(crate) struct ToastView {
    pub id: ToastId,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub icon: String,
    pub closable: bool,
    pub action: Option<ActionSpec>,
}

/// Creates the detached toast element and wires its controls.
pub(crate) fn build<P: Page>(page: &mut P, view: ToastView, outbox: &Outbox) -> NodeId {
    let root = page.create_element("div");
    page.set_id(root, &view.id.to_string());
    page.add_class(root, TOAST_CLASS);
    page.add_class(root, view.severity.css_class());

    let icon = page.create_element("div");
    page.add_class(icon, ICON_CLASS);
    page.set_markup(icon, &view.icon);
    page.append_child(root, icon);

    let content = page.create_element("div");
    page.add_class(content, CONTENT_CLASS);
    if !view.title.is_empty() {
        let title = page.create_element("div");
        page.add_class(title, TITLE_CLASS);
        page.set_text(title, &view.title);
        page.append_child(content, title);
    }
    let message = page.create_element("div");
    page.add_class(message, MESSAGE_CLASS);
    page.set_text(message, &view.message);
    page.append_child(content, message);
    page.append_child(root, content);

    if let Some(action) = view.action {
        let (label, callback) = action.into_parts();
        let button = page.create_element("button");
        page.add_class(button, ACTION_CLASS);
        page.set_text(button, &label);
        let id = view.id;
        match callback {
            Some(mut on_click) => {
                let outbox = Rc::clone(outbox);
                page.add_event_listener(
                    button,
                    EventKind::Click,
                    Box::new(move |event| {
                        event.stop_propagation();
                        on_click();
                        outbox
                            .borrow_mut()
                            .push(Request::Dismiss(id, DismissReason::Action));
                    }),
                );
            }
            None => {
                page.add_event_listener(
                    button,
                    EventKind::Click,
                    Box::new(|event| event.stop_propagation()),
                );
            }
        }
        page.append_child(root, button);
    }

    if view.closable {
        let button = page.create_element("button");
        page.add_class(button, CLOSE_CLASS);
        page.set_markup(button, icons::CLOSE_LABEL);
        let outbox = Rc::clone(outbox);
        let id = view.id;
        page.add_event_listener(
            button,
            EventKind::Click,
            Box::new(move |_| {
                outbox
                    .borrow_mut()
                    .push(Request::Dismiss(id, DismissReason::Manual));
            }),
        );
        page.append_child(root, button);
    }

    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Document;
    use std::cell::Cell;

    fn view(closable: bool, action: Option<ActionSpec>) -> ToastView {
        ToastView {
            id: "toast-9".parse().expect("valid id"),
            severity: Severity::Warning,
            title: "Heads up".to_string(),
            message: "Disk almost full".to_string(),
            icon: Severity::Warning.icon_markup().to_string(),
            closable,
            action,
        }
    }

    #[test]
    fn build_follows_markup_contract() {
        let mut doc = Document::new();
        let outbox = Outbox::default();
        let root = build(&mut doc, view(true, None), &outbox);

        assert_eq!(doc.element_id(root), Some("toast-9"));
        assert!(doc.has_class(root, TOAST_CLASS));
        assert!(doc.has_class(root, "toast-warning"));
        assert!(!doc.has_class(root, SHOW_CLASS));

        let icon = doc.find_by_class(root, ICON_CLASS).expect("icon region");
        assert_eq!(doc.markup(icon), icons::WARNING);
        let title = doc.find_by_class(root, TITLE_CLASS).expect("title region");
        assert_eq!(doc.text(title), "Heads up");
        let message = doc.find_by_class(root, MESSAGE_CLASS).expect("message region");
        assert_eq!(doc.text(message), "Disk almost full");
        assert!(doc.find_by_class(root, CLOSE_CLASS).is_some());
        assert!(doc.find_by_class(root, ACTION_CLASS).is_none());
    }

    #[test]
    fn empty_title_is_not_rendered() {
        let mut doc = Document::new();
        let outbox = Outbox::default();
        let mut toast = view(true, None);
        toast.title.clear();
        let root = build(&mut doc, toast, &outbox);
        assert!(doc.find_by_class(root, TITLE_CLASS).is_none());
    }

    #[test]
    fn non_closable_toast_has_no_close_control() {
        let mut doc = Document::new();
        let outbox = Outbox::default();
        let root = build(&mut doc, view(false, None), &outbox);
        assert!(doc.find_by_class(root, CLOSE_CLASS).is_none());
    }

    #[test]
    fn close_click_posts_manual_dismiss() {
        let mut doc = Document::new();
        let outbox = Outbox::default();
        let root = build(&mut doc, view(true, None), &outbox);
        let close = doc.find_by_class(root, CLOSE_CLASS).expect("close control");

        doc.dispatch_event(close, EventKind::Click);
        let id = "toast-9".parse().expect("valid id");
        assert_eq!(
            *outbox.borrow(),
            vec![Request::Dismiss(id, DismissReason::Manual)]
        );
    }

    #[test]
    fn action_click_runs_callback_then_posts_dismiss() {
        let mut doc = Document::new();
        let outbox = Outbox::default();
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let pending = Rc::clone(&outbox);
        let action = ActionSpec::new("Undo", move || {
            // The dismiss request must not be posted before the callback runs.
            assert!(pending.borrow().is_empty());
            counter.set(counter.get() + 1);
        });
        let root = build(&mut doc, view(true, Some(action)), &outbox);
        let button = doc.find_by_class(root, ACTION_CLASS).expect("action control");
        assert_eq!(doc.text(button), "Undo");

        doc.dispatch_event(button, EventKind::Click);
        assert_eq!(clicks.get(), 1);
        assert_eq!(outbox.borrow().len(), 1);
    }

    #[test]
    fn action_without_callback_only_stops_propagation() {
        let mut doc = Document::new();
        let outbox = Outbox::default();
        let root = build(
            &mut doc,
            view(true, Some(ActionSpec::label_only("Details"))),
            &outbox,
        );
        let bubbled = Rc::new(Cell::new(false));
        let flag = Rc::clone(&bubbled);
        doc.add_event_listener(root, EventKind::Click, Box::new(move |_| flag.set(true)));

        let button = doc.find_by_class(root, ACTION_CLASS).expect("action control");
        assert!(doc.dispatch_event(button, EventKind::Click));
        assert!(outbox.borrow().is_empty());
        assert!(!bubbled.get());
    }
}
