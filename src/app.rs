//! Browser glue: canvas setup, pointer listeners and the animation-frame loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window, window};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::Game;
use crate::geometry::{Vec2, Viewport};
use crate::input::PointerTracker;
use crate::render::{self, CanvasMeasure};

/// Runtime app state shared between DOM listeners and the frame loop.
struct AppState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    game: Game,
    pointer: PointerTracker,
    last_ts: Option<f64>,
    fit_to_window: bool,
}

thread_local! {
    static APP: RefCell<Option<AppState>> = const { RefCell::new(None) };
    static LOOP_RUNNING: Cell<bool> = const { Cell::new(false) };
}

fn window_size(win: &Window) -> Option<(u32, u32)> {
    let w = win.inner_width().ok()?.as_f64()?;
    let h = win.inner_height().ok()?.as_f64()?;
    (w >= 1.0 && h >= 1.0).then_some((w as u32, h as u32))
}

pub fn start(cfg: GameConfig) -> Result<(), GameError> {
    let win = window().ok_or(GameError::NoWindow)?;
    let doc = win.document().ok_or(GameError::NoDocument)?;

    // Create / reuse the canvas.
    let existing = doc.get_element_by_id(&cfg.canvas_id);
    let fresh_canvas = existing.is_none();
    let canvas: HtmlCanvasElement = match existing {
        Some(el) => el
            .dyn_into()
            .map_err(|_| GameError::NotACanvas(cfg.canvas_id.clone()))?,
        None => {
            let c: HtmlCanvasElement = doc
                .create_element("canvas")?
                .dyn_into()
                .map_err(|_| GameError::NotACanvas(cfg.canvas_id.clone()))?;
            c.set_id(&cfg.canvas_id);
            c.set_attribute("style", "display:block; position:fixed; left:0; top:0; cursor:pointer;")?;
            doc.body().ok_or(GameError::NoBody)?.append_child(&c)?;
            c
        }
    };

    let (width, height) = if cfg.fit_to_window {
        window_size(&win).unwrap_or((cfg.width, cfg.height))
    } else {
        (cfg.width, cfg.height)
    };
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(GameError::NoContext)?
        .dyn_into()
        .map_err(|_| GameError::NoContext)?;

    let game = Game::new(&cfg, Viewport::new(width as f64, height as f64));
    info!(
        "starting on #{} at {}x{} ({} questions per round)",
        cfg.canvas_id, width, height, cfg.questions_per_round
    );

    // Listeners stay attached to a reused canvas across restarts.
    if fresh_canvas || APP.with(|a| a.borrow().is_none()) {
        attach_pointer_listeners(&canvas)?;
    }

    APP.with(|a| {
        a.replace(Some(AppState {
            canvas,
            ctx,
            game,
            pointer: PointerTracker::default(),
            last_ts: None,
            fit_to_window: cfg.fit_to_window,
        }))
    });

    if !LOOP_RUNNING.with(Cell::get) {
        start_loop();
    }
    Ok(())
}

fn pointer_pos(evt: &MouseEvent) -> Vec2 {
    // offset_x / offset_y are canvas-local.
    Vec2::new(evt.offset_x() as f64, evt.offset_y() as f64)
}

fn listen(
    canvas: &HtmlCanvasElement,
    event: &str,
    handler: fn(&mut PointerTracker, &MouseEvent),
) -> Result<(), GameError> {
    let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
        APP.with(|cell| {
            if let Some(state) = cell.borrow_mut().as_mut() {
                handler(&mut state.pointer, &evt);
            }
        });
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn attach_pointer_listeners(canvas: &HtmlCanvasElement) -> Result<(), GameError> {
    listen(canvas, "mousemove", |p, evt| p.on_move(pointer_pos(evt)))?;
    listen(canvas, "mousedown", |p, evt| {
        if evt.button() == 0 {
            p.on_down(pointer_pos(evt));
        }
    })?;
    listen(canvas, "mouseup", |p, evt| {
        if evt.button() == 0 {
            p.on_up(pointer_pos(evt));
        }
    })?;
    listen(canvas, "mouseleave", |p, _| p.on_leave())?;
    Ok(())
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(cb: &FrameCallback) {
    if let (Some(w), Some(f)) = (window(), cb.borrow().as_ref()) {
        if let Err(e) = w.request_animation_frame(f.as_ref().unchecked_ref()) {
            warn!("requestAnimationFrame failed: {e:?}");
        }
    }
}

fn start_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        let keep_going = APP.with(|cell| {
            cell.borrow_mut()
                .as_mut()
                .map(|state| app_tick(state, ts))
                .unwrap_or(false)
        });
        if keep_going {
            request_frame(&f);
        } else {
            LOOP_RUNNING.with(|r| r.set(false));
            info!("frame loop stopped");
        }
    }) as Box<dyn FnMut(f64)>));
    LOOP_RUNNING.with(|r| r.set(true));
    request_frame(&g);
}

/// One frame: resize, input, update, draw. Returns `false` once the game quit.
fn app_tick(state: &mut AppState, ts: f64) -> bool {
    let dt = state.last_ts.map_or(0.0, |last| ((ts - last) / 1000.0).max(0.0));
    state.last_ts = Some(ts);

    if state.fit_to_window {
        sync_size(state);
    }

    let pointer = state.pointer.take_frame();
    let measure = CanvasMeasure::new(&state.ctx);
    state.game.frame(pointer, dt, &measure);
    render::draw(&state.ctx, &state.game);
    !state.game.is_exited()
}

fn sync_size(state: &mut AppState) {
    let Some((w, h)) = window().as_ref().and_then(window_size) else {
        return;
    };
    if w == state.canvas.width() && h == state.canvas.height() {
        return;
    }
    debug!("resize to {w}x{h}");
    state.canvas.set_width(w);
    state.canvas.set_height(h);
    let measure = CanvasMeasure::new(&state.ctx);
    state.game.resize(Viewport::new(w as f64, h as f64), &measure);
}
