// ============================================================================
// MONITOR DE INACTIVIDAD - logout forzado tras un periodo sin actividad
// ============================================================================
// Una sola cuenta atrás por instancia; la App monta como mucho UNA instancia
// mientras haya una vista protegida visible. A diferencia de los listeners
// globales registrados una vez en init() (donde forget() es seguro), este
// monitor se monta y desmonta con las vistas: guarda sus closures y las
// retira en Drop. Un listener o timer filtrado provocaría logouts dobles.
// ============================================================================

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Event;

/// Señales de actividad vigiladas sobre document
const ACTIVITY_EVENTS: [&str; 5] = ["mousedown", "mousemove", "keypress", "scroll", "touchstart"];

/// Antelación del aviso de expiración inminente
const WARNING_LEAD_MS: u32 = 60_000;

pub struct InactivityMonitor {
    countdown: Rc<RefCell<Option<Timeout>>>,
    warning: Rc<RefCell<Option<Timeout>>>,
    listeners: Vec<Closure<dyn FnMut(Event)>>,
}

impl InactivityMonitor {
    /// Armar la vigilancia. Cada señal de actividad cancela la cuenta
    /// pendiente y arranca una nueva por el `timeout_ms` completo.
    ///
    /// - `on_activity` se dispara en cada reset (para ocultar el aviso)
    /// - `on_warn` se dispara 60s antes del vencimiento, con los segundos
    ///   restantes
    /// - `on_expire` se dispara al vencer la cuenta sin actividad
    pub fn start<A, W, F>(
        timeout_ms: u32,
        on_activity: A,
        on_warn: W,
        on_expire: F,
    ) -> Result<Self, JsValue>
    where
        A: Fn() + Clone + 'static,
        W: Fn(u32) + Clone + 'static,
        F: Fn() + Clone + 'static,
    {
        let countdown: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let warning: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        // Closure que (re)arma la cuenta atrás completa. Soltar el handle de
        // un Timeout lo cancela, así que basta con reemplazarlo.
        let arm = {
            let countdown = countdown.clone();
            let warning = warning.clone();
            Rc::new(move || {
                countdown.borrow_mut().take();
                warning.borrow_mut().take();

                let on_expire = on_expire.clone();
                *countdown.borrow_mut() = Some(Timeout::new(timeout_ms, move || {
                    on_expire();
                }));

                if timeout_ms > WARNING_LEAD_MS {
                    let on_warn = on_warn.clone();
                    *warning.borrow_mut() = Some(Timeout::new(
                        timeout_ms - WARNING_LEAD_MS,
                        move || on_warn(WARNING_LEAD_MS / 1000),
                    ));
                }
            })
        };

        // Primera cuenta atrás: empieza al montar, no al primer movimiento
        arm();

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let mut listeners = Vec::with_capacity(ACTIVITY_EVENTS.len());
        for event_name in ACTIVITY_EVENTS {
            let arm = arm.clone();
            let on_activity = on_activity.clone();
            let closure = Closure::wrap(Box::new(move |_e: Event| {
                on_activity();
                arm();
            }) as Box<dyn FnMut(Event)>);
            document.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
            listeners.push(closure);
        }

        log::info!("⏱️ [INACTIVITY] Vigilancia armada ({} ms)", timeout_ms);
        Ok(Self {
            countdown,
            warning,
            listeners,
        })
    }
}

impl Drop for InactivityMonitor {
    fn drop(&mut self) {
        // Cancelar la cuenta pendiente y retirar todos los listeners
        self.countdown.borrow_mut().take();
        self.warning.borrow_mut().take();
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            for (event_name, closure) in ACTIVITY_EVENTS.iter().zip(self.listeners.iter()) {
                let _ = document
                    .remove_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            }
        }
        log::info!("⏱️ [INACTIVITY] Vigilancia desmontada");
    }
}
