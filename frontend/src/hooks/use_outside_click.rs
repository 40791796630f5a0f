use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, Node};
use yew::prelude::*;

/// Events that count as interacting with the page
const OUTSIDE_EVENTS: [&str; 3] = ["mousedown", "touchstart", "focusin"];

/// Document-level listeners that report pointer/focus events landing outside
/// `boundary`. Dropping the guard removes every listener it added.
pub struct OutsideClickGuard {
    _listeners: Vec<EventListener>,
}

impl OutsideClickGuard {
    pub fn new(target: &EventTarget, boundary: Element, on_outside: Callback<()>) -> Self {
        let listeners = OUTSIDE_EVENTS
            .iter()
            .map(|event_type| {
                let boundary = boundary.clone();
                let on_outside = on_outside.clone();
                EventListener::new(target, *event_type, move |event| {
                    let inside = event
                        .target()
                        .and_then(|target| target.dyn_into::<Node>().ok())
                        .is_some_and(|node| boundary.contains(Some(&node)));
                    if !inside {
                        on_outside.emit(());
                    }
                })
            })
            .collect();

        Self { _listeners: listeners }
    }
}

/// Hook that calls `on_outside` when the user interacts outside the element
/// behind `boundary`, but only while `active` is true.
///
/// The listeners live exactly as long as the effect: they are removed when
/// `active` turns false and when the component unmounts, so every instance
/// owns and tears down its own subscription.
#[hook]
pub fn use_outside_click(boundary: NodeRef, active: bool, on_outside: Callback<()>) {
    use_effect_with(active, move |active| {
        let guard = if *active {
            let document = web_sys::window().and_then(|window| window.document());
            match (document, boundary.cast::<Element>()) {
                (Some(document), Some(element)) => {
                    Some(OutsideClickGuard::new(&document, element, on_outside))
                }
                _ => None,
            }
        } else {
            None
        };

        move || drop(guard)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;
    use wasm_bindgen_test::*;
    use web_sys::{Document, Event, EventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn fire(target: &Element, event_type: &str) {
        let mut init = EventInit::new();
        init.bubbles(true);
        let event = Event::new_with_event_init_dict(event_type, &init).unwrap();
        target.dispatch_event(&event).unwrap();
    }

    fn counter() -> (Rc<Cell<u32>>, Callback<()>) {
        let hits = Rc::new(Cell::new(0));
        let callback = {
            let hits = hits.clone();
            Callback::from(move |_: ()| hits.set(hits.get() + 1))
        };
        (hits, callback)
    }

    struct Fixture {
        boundary: Element,
        inside: Element,
        outside: Element,
    }

    impl Fixture {
        fn new() -> Self {
            let document = document();
            let body = document.body().unwrap();

            let boundary = document.create_element("div").unwrap();
            let inside = document.create_element("button").unwrap();
            boundary.append_child(&inside).unwrap();
            let outside = document.create_element("span").unwrap();

            body.append_child(&boundary).unwrap();
            body.append_child(&outside).unwrap();
            Self { boundary, inside, outside }
        }
    }

    impl Drop for Fixture {
        fn drop(&mut self) {
            self.boundary.remove();
            self.outside.remove();
        }
    }

    #[wasm_bindgen_test]
    fn test_only_outside_events_are_reported() {
        let fixture = Fixture::new();
        let (hits, on_outside) = counter();
        let _guard = OutsideClickGuard::new(&document(), fixture.boundary.clone(), on_outside);

        fire(&fixture.inside, "mousedown");
        fire(&fixture.boundary, "focusin");
        assert_eq!(hits.get(), 0);

        fire(&fixture.outside, "mousedown");
        fire(&fixture.outside, "focusin");
        assert_eq!(hits.get(), 2);
    }

    #[wasm_bindgen_test]
    fn test_dropping_guard_removes_listeners() {
        let fixture = Fixture::new();
        let (hits, on_outside) = counter();
        let guard = OutsideClickGuard::new(&document(), fixture.boundary.clone(), on_outside);

        fire(&fixture.outside, "mousedown");
        assert_eq!(hits.get(), 1);

        drop(guard);
        fire(&fixture.outside, "mousedown");
        fire(&fixture.outside, "touchstart");
        assert_eq!(hits.get(), 1);
    }

    #[wasm_bindgen_test]
    fn test_instances_do_not_interfere() {
        let first = Fixture::new();
        let second = Fixture::new();
        let (first_hits, first_cb) = counter();
        let (second_hits, second_cb) = counter();

        let first_guard = OutsideClickGuard::new(&document(), first.boundary.clone(), first_cb);
        let _second_guard = OutsideClickGuard::new(&document(), second.boundary.clone(), second_cb);

        // A click inside the second picker is outside the first one
        fire(&second.inside, "mousedown");
        assert_eq!(first_hits.get(), 1);
        assert_eq!(second_hits.get(), 0);

        drop(first_guard);
        fire(&first.inside, "mousedown");
        assert_eq!(first_hits.get(), 1);
        assert_eq!(second_hits.get(), 1);
    }

    #[derive(Properties, PartialEq)]
    struct WatcherProps {
        active: bool,
        on_outside: Callback<()>,
    }

    #[function_component(Watcher)]
    fn watcher(props: &WatcherProps) -> Html {
        let boundary = use_node_ref();
        use_outside_click(boundary.clone(), props.active, props.on_outside.clone());
        html! { <div ref={boundary}><button>{"inside"}</button></div> }
    }

    async fn settle() {
        yew::platform::time::sleep(Duration::from_millis(10)).await;
    }

    #[wasm_bindgen_test]
    async fn test_hook_follows_active_flag_and_unmount() {
        let fixture = Fixture::new();
        let (hits, on_outside) = counter();
        let mut app = yew::Renderer::<Watcher>::with_root_and_props(
            fixture.boundary.clone(),
            WatcherProps {
                active: true,
                on_outside: on_outside.clone(),
            },
        )
        .render();
        settle().await;

        let rendered_button = fixture.boundary.query_selector("button").unwrap().unwrap();
        fire(&rendered_button, "mousedown");
        assert_eq!(hits.get(), 0);
        fire(&fixture.outside, "mousedown");
        assert_eq!(hits.get(), 1);

        app.update(WatcherProps {
            active: false,
            on_outside: on_outside.clone(),
        });
        settle().await;
        fire(&fixture.outside, "mousedown");
        assert_eq!(hits.get(), 1);

        app.update(WatcherProps {
            active: true,
            on_outside,
        });
        settle().await;
        fire(&fixture.outside, "touchstart");
        assert_eq!(hits.get(), 2);

        app.destroy();
        settle().await;
        fire(&fixture.outside, "mousedown");
        fire(&fixture.outside, "focusin");
        assert_eq!(hits.get(), 2);
    }
}
