use cardsmith_core::{apply_gesture, GestureEvent, GestureState, PhotoTransform};
use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

/// Wires pointer, wheel, and touch input on the editor canvas into the
/// gesture state machine.
///
/// Every DOM event is normalized to a `cardsmith_core::GestureEvent` before
/// it reaches any transform logic, so mouse and touch drags share one code
/// path and every mutation funnels through the clamping/normalizing
/// transform operations. The transform signal is only written when a
/// gesture actually changed it, which is what drives redraws.
pub fn use_photo_gestures(
    canvas_ref: NodeRef<leptos::html::Canvas>,
    transform: RwSignal<PhotoTransform>,
) {
    let gesture_state = store_value(GestureState::new());

    let dispatch = move |event: GestureEvent| {
        let mut current = transform.get_untracked();
        let changed = gesture_state
            .try_update_value(|state| apply_gesture(state, &mut current, event))
            .unwrap_or(false);
        if changed {
            transform.set(current);
        }
    };

    // Client coordinates -> viewport-local coordinates.
    let viewport_point = move |client_x: f64, client_y: f64| -> Option<(f64, f64)> {
        let canvas = canvas_ref.get_untracked()?;
        let rect = canvas.unchecked_ref::<HtmlCanvasElement>().get_bounding_client_rect();
        Some((client_x - rect.left(), client_y - rect.top()))
    };

    // Pointer events cover mouse pens and (in modern browsers) touch.
    let _ = leptos_use::use_event_listener(canvas_ref, ev::pointerdown, move |ev| {
        ev.prevent_default();
        if let Some((x, y)) = viewport_point(ev.client_x() as f64, ev.client_y() as f64) {
            dispatch(GestureEvent::PointerDown { x, y });
        }
    });

    let _ = leptos_use::use_event_listener(canvas_ref, ev::pointermove, move |ev| {
        if let Some((x, y)) = viewport_point(ev.client_x() as f64, ev.client_y() as f64) {
            dispatch(GestureEvent::PointerMove { x, y });
        }
    });

    let _ = leptos_use::use_event_listener(canvas_ref, ev::pointerup, move |_| {
        dispatch(GestureEvent::PointerUp);
    });

    let _ = leptos_use::use_event_listener(canvas_ref, ev::pointerleave, move |_| {
        dispatch(GestureEvent::PointerUp);
    });

    // Wheel and touch need non-default listener options (non-passive so
    // prevent_default can stop page scroll), which the ev:: helpers do not
    // expose, so these are wired manually. The handlers are kept in a
    // stored Vec; each remount of the canvas replaces the previous set,
    // which drops the old closures.
    let manual_listeners = store_value(Vec::<Closure<dyn Fn(web_sys::Event)>>::new());

    create_effect(move |_| {
        let Some(canvas_el) = canvas_ref.get() else {
            return;
        };
        let canvas = canvas_el.unchecked_ref::<HtmlCanvasElement>();

        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(false);

        let wheel_handler = Closure::wrap(Box::new(move |ev: web_sys::Event| {
            ev.prevent_default();
            let ev = ev.unchecked_into::<web_sys::WheelEvent>();
            dispatch(GestureEvent::Wheel {
                delta_y: ev.delta_y(),
            });
        }) as Box<dyn Fn(web_sys::Event)>);

        // Single-touch drag for browsers that deliver touch without pointer
        // events. Re-anchoring on pointerdown makes the duplicate events on
        // browsers that deliver both harmless.
        let touch_point = move |ev: &web_sys::TouchEvent| -> Option<(f64, f64)> {
            let touch = ev.touches().get(0)?;
            viewport_point(touch.client_x() as f64, touch.client_y() as f64)
        };

        let touch_start = Closure::wrap(Box::new(move |ev: web_sys::Event| {
            ev.prevent_default();
            let ev = ev.unchecked_into::<web_sys::TouchEvent>();
            if let Some((x, y)) = touch_point(&ev) {
                dispatch(GestureEvent::PointerDown { x, y });
            }
        }) as Box<dyn Fn(web_sys::Event)>);

        let touch_move = Closure::wrap(Box::new(move |ev: web_sys::Event| {
            ev.prevent_default();
            let ev = ev.unchecked_into::<web_sys::TouchEvent>();
            if let Some((x, y)) = touch_point(&ev) {
                dispatch(GestureEvent::PointerMove { x, y });
            }
        }) as Box<dyn Fn(web_sys::Event)>);

        let touch_end = Closure::wrap(Box::new(move |_: web_sys::Event| {
            dispatch(GestureEvent::PointerUp);
        }) as Box<dyn Fn(web_sys::Event)>);

        for (name, handler) in [
            ("wheel", &wheel_handler),
            ("touchstart", &touch_start),
            ("touchmove", &touch_move),
            ("touchend", &touch_end),
        ] {
            canvas
                .add_event_listener_with_callback_and_add_event_listener_options(
                    name,
                    handler.as_ref().unchecked_ref(),
                    &options,
                )
                .expect("should add canvas listener");
        }

        manual_listeners.update_value(|kept| {
            *kept = vec![wheel_handler, touch_start, touch_move, touch_end];
        });
    });
}
