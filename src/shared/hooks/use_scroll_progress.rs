use dioxus::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
use crate::domain::services::scroll_percentage;

/// Page scroll progress (0-100), updated on every window scroll event.
pub fn use_scroll_progress() -> Signal<u8> {
    let progress = use_signal(|| 0u8);

    #[cfg(target_arch = "wasm32")]
    {
        let mut progress = progress;
        let listener = use_hook(move || {
            std::rc::Rc::new(browser::ScrollListener::attach(move |pct| progress.set(pct)))
        });

        // Once at mount, before any scroll event
        use_effect(move || progress.set(browser::read_scroll_percentage()));

        use_drop(move || listener.detach());
    }

    // Desktop: the page lives in a webview, so the listener is injected as
    // script and reports raw metrics back over the eval channel.
    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut progress = progress;
        let task = use_hook(move || {
            spawn(async move {
                let mut listener = document::eval(SCROLL_METRICS_JS);
                while let Ok([offset, document_height, viewport]) = listener.recv::<[f64; 3]>().await {
                    progress.set(scroll_percentage(offset, document_height, viewport));
                }
            })
        });
        use_drop(move || task.cancel());
    }

    progress
}

#[cfg(not(target_arch = "wasm32"))]
const SCROLL_METRICS_JS: &str = r#"
    const report = () => dioxus.send([
        window.scrollY,
        document.documentElement.scrollHeight,
        window.innerHeight,
    ]);
    window.addEventListener("scroll", report, { passive: true });
    report();
    await new Promise(() => {});
"#;

/// Smooth scroll back to the top of the page.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_top() {
    spawn(async {
        let _ = document::eval(r#"window.scrollTo({ top: 0, behavior: "smooth" });"#).await;
    });
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::cell::RefCell;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use crate::domain::services::scroll_percentage;

    pub fn read_scroll_percentage() -> u8 {
        let Some(window) = web_sys::window() else {
            return 0;
        };
        let offset = window.scroll_y().unwrap_or(0.0);
        let viewport = window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        let document_height = window
            .document()
            .and_then(|document| document.document_element())
            .map(|root| f64::from(root.scroll_height()))
            .unwrap_or(0.0);

        scroll_percentage(offset, document_height, viewport)
    }

    /// Window `scroll` listener removed explicitly on unmount.
    pub struct ScrollListener {
        callback: RefCell<Option<Closure<dyn FnMut()>>>,
    }

    impl ScrollListener {
        pub fn attach(mut on_change: impl FnMut(u8) + 'static) -> Self {
            let callback = Closure::<dyn FnMut()>::new(move || on_change(read_scroll_percentage()));
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            }
            Self {
                callback: RefCell::new(Some(callback)),
            }
        }

        pub fn detach(&self) {
            let Some(callback) = self.callback.borrow_mut().take() else {
                return;
            };
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    callback.as_ref().unchecked_ref(),
                );
            }
        }
    }
}
