//! Interface Segregation Principle
//!
//! Clients should not be forced to depend on operations they do not use.

pub mod bad;
pub mod good;

use tracing::warn;

use crate::error::ScenarioResult;
use crate::narrative::Narrative;
use crate::registry::{Principle, Scenario, ScenarioKey, Variant};

use bad::Worker;
use good::Workable;

pub fn scenarios() -> [Scenario; 2] {
    [
        Scenario::new(ScenarioKey::new(Principle::Isp, Variant::Bad), run_bad),
        Scenario::new(ScenarioKey::new(Principle::Isp, Variant::Good), run_good),
    ]
}

fn run_bad() -> ScenarioResult<Narrative> {
    let title = ScenarioKey::new(Principle::Isp, Variant::Bad).title();
    let robot = bad::RobotWorker;
    let worker: &dyn Worker = &robot;
    worker.work()?;

    match worker.eat() {
        Ok(()) => Ok(Narrative::titled(title)
            .line("ISP says clients should not be forced to depend on methods they do not use.")
            .blank()
            .line("Here Worker has work, eat, and sleep.")
            .line("RobotWorker really only needs work, but is forced to implement all methods.")
            .line("Even if eat does not fail, the interface still exposes operations that do not make sense.")),
        Err(e) => {
            warn!(error = %e, "Robot refused an operation required by Worker");
            Ok(Narrative::titled(title)
                .line("Worker interface requires work, eat, and sleep.")
                .blank()
                .section(
                    "Operation sequence:",
                    [
                        "RobotWorker.work()".to_string(),
                        format!("RobotWorker.eat() -> UnsupportedOperation ({})", e.reason),
                    ],
                )
                .blank()
                .section(
                    "Problems:",
                    [
                        "RobotWorker is forced to implement methods it cannot support.",
                        "Clients depending on Worker see methods that may fail at runtime.",
                        "The interface is too large and does not reflect the real capabilities.",
                    ],
                ))
        }
    }
}

fn run_good() -> ScenarioResult<Narrative> {
    let robot = good::RobotWorker;
    let worker: &dyn Workable = &robot;
    worker.work();

    Ok(Narrative::titled(ScenarioKey::new(Principle::Isp, Variant::Good).title())
        .line("Capabilities are split into small, focused interfaces.")
        .blank()
        .section(
            "RobotWorker only implements Workable:",
            ["Workable worker = RobotWorker", "worker.work() succeeds"],
        )
        .blank()
        .section(
            "Benefits:",
            [
                "Clients that only need work depend on Workable.",
                "HumanWorker can implement Eatable and Sleepable separately.",
                "Implementations expose only the operations they truly support.",
            ],
        ))
}
