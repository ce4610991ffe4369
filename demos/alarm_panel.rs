//! Alarm Panel
//!
//! Drives three alarm systems through scripted events and logs every
//! notice and transition.
//!
//! Key concepts:
//! - Unhandled events are silent no-ops
//! - Entry/exit hooks announce state changes
//! - Failed disarm attempts escalate with a one-shot effect
//!
//! Run with: RUST_LOG=debug cargo run --example alarm_panel

use tracing_subscriber::EnvFilter;
use tripwire::alarm::{AlarmConfig, AlarmPolicy, System, TracingSink};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Classic panel ===");
    let mut system = System::new(
        AlarmConfig::new("1234").with_policy(AlarmPolicy::classic()),
        TracingSink,
    );
    system.breach();
    system.panic();
    system.arm();
    system.breach();
    system.reset("1234");
    system.arm();
    system.disarm("0000");
    system.disarm("1234");

    println!("\n=== Panic while disarmed ===");
    let mut system = System::new(AlarmConfig::new("1234"), TracingSink);
    system.panic();

    println!("\n=== Too many wrong codes ===");
    let mut system = System::new(AlarmConfig::new("1234"), TracingSink);
    system.arm();
    for code in ["0000", "1111", "2222", "3333"] {
        system.disarm(code);
    }
    println!("Final state: {:?}", system.state());
}
