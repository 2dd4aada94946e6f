//! Full-page canvas that plays the confetti celebration.
//!
//! Restarts whenever `UiState::celebration_seq` changes. The particle field is
//! stepped on a fixed interval and the interval is dropped once the field has
//! finished.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::state::ui::UiState;

#[component]
pub fn ConfettiLayer() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use gloo_timers::callback::Interval;

        let ui = expect_context::<RwSignal<UiState>>();
        let ticker = Rc::new(RefCell::new(None::<Interval>));
        Effect::new(move || {
            let (seq, duration_ms) = ui.with(|u| (u.celebration_seq, u.celebration_ms));
            if seq == 0 {
                return;
            }
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            browser::start(&canvas, seq, duration_ms, &ticker);
        });
    }

    view! { <canvas class="confetti" aria-hidden="true" node_ref=canvas_ref></canvas> }
}

#[cfg(feature = "csr")]
mod browser {
    use std::cell::RefCell;
    use std::f64::consts::TAU;
    use std::rc::Rc;

    use gloo_timers::callback::{Interval, Timeout};
    use log::{debug, warn};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use crate::util::confetti::{ConfettiField, FRAME_MS, Shape};

    pub(super) fn start(canvas: &HtmlCanvasElement, seq: u64, duration_ms: u32, ticker: &Rc<RefCell<Option<Interval>>>) {
        let Some(ctx) = context_2d(canvas) else {
            warn!("confetti: 2d context unavailable");
            return;
        };
        let (width, height) = viewport_size();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
        }
        debug!("confetti: start #{seq} for {duration_ms}ms");

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seed = seq ^ (js_sys::Date::now() as u64);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field = ConfettiField::new(duration_ms, width, height);
        let mut finished = false;
        let holder = Rc::clone(ticker);

        let interval = Interval::new(FRAME_MS, move || {
            if finished {
                return;
            }
            field.step(FRAME_MS, &mut rng);
            if let Err(e) = draw(&ctx, &field, width, height) {
                warn!("confetti: draw failed: {e:?}");
            }
            if field.is_finished() {
                finished = true;
                ctx.clear_rect(0.0, 0.0, width, height);
                // The interval cannot be dropped from inside its own callback.
                let holder = Rc::clone(&holder);
                Timeout::new(0, move || {
                    holder.borrow_mut().take();
                })
                .forget();
            }
        });
        *ticker.borrow_mut() = Some(interval);
    }

    fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
        canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    }

    fn viewport_size() -> (f64, f64) {
        let Some(window) = web_sys::window() else {
            return (0.0, 0.0);
        };
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (width, height)
    }

    fn draw(ctx: &CanvasRenderingContext2d, field: &ConfettiField, width: f64, height: f64) -> Result<(), JsValue> {
        ctx.clear_rect(0.0, 0.0, width, height);
        for particle in field.particles() {
            let (w, h) = particle.size();
            ctx.save();
            ctx.set_global_alpha(particle.opacity());
            ctx.set_fill_style_str(particle.color);
            ctx.translate(particle.x, particle.y)?;
            ctx.rotate(particle.tilt)?;
            match particle.shape {
                Shape::Square => ctx.fill_rect(-w / 2.0, -h / 2.0, w, h),
                Shape::Circle => {
                    ctx.begin_path();
                    ctx.arc(0.0, 0.0, w / 2.0, 0.0, TAU)?;
                    ctx.fill();
                }
            }
            ctx.restore();
        }
        Ok(())
    }
}
