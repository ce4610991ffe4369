//! Security alarm built on the engine.
//!
//! Three states (`Disarmed`, `Armed`, `Alarm`) respond to five events
//! (`arm`, `disarm`, `breach`, `panic`, `reset`). The `Panel` context holds
//! the secret code, the policy, and the sink that receives every notice.
//!
//! # Example
//!
//! ```rust
//! use tripwire::alarm::{AlarmConfig, Notice, Recorder, System};
//!
//! let recorder = Recorder::new();
//! let mut system = System::new(AlarmConfig::new("1234"), recorder.clone());
//!
//! system.arm();
//! for code in ["0000", "1111", "2222", "3333"] {
//!     system.disarm(code);
//! }
//!
//! assert!(system.state().is_alarm());
//! assert!(recorder.notices().contains(&Notice::AdministratorInformed));
//! ```

pub mod config;
pub mod error;
pub mod notice;
pub mod panel;
pub mod states;
pub mod system;

pub use config::{AlarmConfig, AlarmPolicy};
pub use error::{ConfigError, ConfigViolation};
pub use notice::{Entry, Notice, NotificationSink, Recorder, TracingSink};
pub use panel::Panel;
pub use states::{Alarm, AlarmEvents, AlarmState, AlarmTransition, Armed, Disarmed};
pub use system::{AlarmEvent, SharedSystem, System};
