//! Teaching Clock
//!
//! An analog clock for learning to tell time: read a time off the face, set
//! the hands to a time, explore freely, or watch the live clock. All teaching
//! logic lives in `tutor_core`; this binary draws it and feeds it input.

mod drawing;
mod face;
mod logging;
mod ui;

use nannou::prelude::*;
use nannou::winit::event::{TouchPhase as WinitTouchPhase, WindowEvent};
use nannou_egui::{self, Egui};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tutor_core::{Action, ConfigError, SystemClock, Tutor, TutorConfig};

use crate::face::FaceGeometry;
use crate::ui::PanelResult;

const CLOCK_NAME: &str = "teaching_clock";
const PANEL_HEIGHT: f32 = 150.0;

fn main() {
    nannou::app(model).update(update).run();
}

/// Application state
struct Model {
    tutor: Tutor<SystemClock, StdRng>,
    /// egui integration
    egui: Egui,
}

impl Model {
    fn geometry(&self, app: &App) -> FaceGeometry {
        FaceGeometry::calculate(app.window_rect(), PANEL_HEIGHT)
    }

    fn act(&mut self, app: &App, action: Action) {
        self.tutor.handle(action, app.duration.since_start);
    }

    /// Pointer pressed on the face: grab whichever hand is under it
    fn pointer_down(&mut self, app: &App, pos: Point2) {
        if self.egui.ctx().is_pointer_over_area() {
            return;
        }
        let view = self.tutor.view();
        let geometry = self.geometry(app);
        if let Some(hand) = geometry.hit_test_hand(pos.x, pos.y, &view.degrees, view.show_second_hand)
        {
            self.act(app, Action::HandPointerDown(hand));
        }
    }

    fn pointer_moved(&mut self, app: &App, pos: Point2) {
        let (x, y) = FaceGeometry::to_screen(pos);
        self.act(app, Action::PointerMove { x, y });
    }

    fn apply_panel(&mut self, app: &App, result: PanelResult) {
        if let Some(mode) = result.select_mode {
            self.act(app, Action::SelectMode(mode));
        }
        for (hand, text) in result.edits {
            self.act(app, Action::EditField(hand, text));
        }
        if result.held_control != self.tutor.held_control() {
            match result.held_control {
                Some((hand, direction)) => self.act(app, Action::ControlPress(hand, direction)),
                None => self.act(app, Action::ControlRelease),
            }
        }
        if result.check_answer {
            self.act(app, Action::CheckAnswer);
        }
        if result.back {
            self.act(app, Action::BackToEntry);
        }
    }
}

/// Settings from disk, creating the file with the system zone on first run
fn load_settings() -> (TutorConfig, Option<ConfigError>) {
    match tutor_core::load_config::<TutorConfig>(CLOCK_NAME) {
        Ok(Some(config)) => (config, None),
        Ok(None) => {
            let mut config = TutorConfig::default();
            if let Some(tz) = tutor_core::system_timezone() {
                config.timezone = tz.name().to_string();
            }
            let error = tutor_core::save_config(CLOCK_NAME, &config).err();
            (config, error)
        }
        Err(e) => (TutorConfig::default(), Some(e)),
    }
}

fn model(app: &App) -> Model {
    let (config, config_error) = load_settings();
    logging::init(config.debug_logging);
    if let Some(e) = config_error {
        warn!("Failed to load or save config: {}", e);
    }
    info!(timezone = %config.tz(), "starting teaching clock");

    let window_id = app
        .new_window()
        .title("Teaching Clock")
        .size(720, 860)
        .min_size(420, 560)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .mouse_moved(mouse_moved)
        .mouse_exited(mouse_exited)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    Model {
        tutor: Tutor::new(config, SystemClock, StdRng::from_entropy()),
        egui,
    }
}

fn update(app: &App, model: &mut Model, update: Update) {
    model.tutor.handle(Action::Tick, update.since_start);

    let center = model.geometry(app).center;
    let (cx, cy) = FaceGeometry::to_screen(center);
    model.tutor.set_face_center(cx, cy);

    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();

    let view = model.tutor.view();
    let result = if view.is_entry_screen() {
        ui::draw_entry_screen(&ctx)
    } else {
        ui::draw_clock_panel(&ctx, &view)
    };

    drop(ctx);

    model.apply_panel(app, result);
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    draw.background().color(drawing::colors::BACKGROUND);

    let clock_view = model.tutor.view();
    if !clock_view.is_entry_screen() {
        let geometry = model.geometry(app);
        drawing::draw_title(&draw, clock_view.title, window_rect);
        drawing::draw_face(&draw, &geometry, &clock_view, model.tutor.dragging());
        if let Some(feedback) = &clock_view.feedback {
            drawing::draw_feedback_banner(&draw, feedback, &geometry);
        }
    }

    draw.to_frame(app, &frame).unwrap();

    model.egui.draw_to_frame(&frame).unwrap();
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.pointer_down(app, app.mouse.position());
    }
}

fn mouse_released(app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.act(app, Action::PointerUp);
    }
}

fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    model.pointer_moved(app, pos);
}

fn mouse_exited(app: &App, model: &mut Model) {
    model.act(app, Action::PointerUp);
}

fn raw_window_event(app: &App, model: &mut Model, event: &WindowEvent) {
    model.egui.handle_raw_event(event);

    // Touch is mapped onto the same single-pointer actions as the mouse
    if let WindowEvent::Touch(touch) = event {
        let window_rect = app.window_rect();
        let pos = pt2(
            touch.location.x as f32 - window_rect.w() / 2.0,
            window_rect.h() / 2.0 - touch.location.y as f32,
        );

        match touch.phase {
            WinitTouchPhase::Started => model.pointer_down(app, pos),
            WinitTouchPhase::Moved => model.pointer_moved(app, pos),
            WinitTouchPhase::Ended | WinitTouchPhase::Cancelled => {
                model.act(app, Action::PointerUp)
            }
        }
    }
}
