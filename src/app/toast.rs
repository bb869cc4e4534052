use std::time::Duration;

use leptos::prelude::*;

const DISMISS: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Toast {
    id: u32,
    level: Level,
    message: String,
}

/// Fire-and-forget notification handle, provided as context from `App`.
/// Callers never read anything back; toasts dismiss themselves.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Level::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Level::Error, message.into());
    }

    fn push(&self, level: Level, message: String) {
        let id = self.next_id.with_value(|id| *id);
        self.next_id.update_value(|id| *id += 1);
        self.items.update(|items| {
            items.push(Toast { id, level, message });
        });

        let items = self.items;
        set_timeout(
            move || {
                items.update(|items| items.retain(|t| t.id != id));
            },
            DISMISS,
        );
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="fixed top-20 right-4 z-[60] flex flex-col items-end gap-2 pointer-events-none">
            <For each=move || toasts.items.get() key=|toast| toast.id let:toast>
                <div class=match toast.level {
                    Level::Success => {
                        "toast-enter max-w-sm px-4 py-3 rounded-lg shadow-lg text-sm font-medium bg-emerald-600 text-white"
                    }
                    Level::Error => {
                        "toast-enter max-w-sm px-4 py-3 rounded-lg shadow-lg text-sm font-medium bg-red-600 text-white"
                    }
                }>{toast.message}</div>
            </For>
        </div>
    }
}
