//! Teaching clock core
//!
//! Hand manipulation, 12-hour time arithmetic and the teaching-mode state
//! machine, independent of any rendering.

pub mod angle;
pub mod config;
pub mod drag;
pub mod repeat;
pub mod session;
pub mod time_engine;
pub mod time_math;
pub mod timer;
pub mod tutor;
pub mod view;

pub use angle::{angle_for_unit, angle_of, quantize, shortest_unit_delta};
pub use config::{config_dir, config_path, load_config, save_config, ConfigError, TutorConfig};
pub use drag::DragController;
pub use repeat::RepeatPress;
pub use session::{Feedback, FeedbackKind, Mode, Session};
pub use time_engine::{
    parse_timezone, read_clock, reading_at, system_timezone, FixedClock, SystemClock, WallClock,
};
pub use time_math::{
    apply_delta, apply_hand_delta, degrees_for, Direction, Hand, HandDegrees, HandDelta, TimeOfDay,
};
pub use tutor::{Action, Tutor};
pub use view::{ClockView, FieldRow};
