//! Small capabilities; each worker implements only what it can do.

use tracing::debug;

pub trait Workable {
    fn work(&self);
}

pub trait Eatable {
    fn eat(&self);
}

pub trait Sleepable {
    fn sleep(&self);
}

/// Works, and nothing else. There is no `eat` to call:
///
/// ```compile_fail
/// use solid_showcase::principles::isp::good::{Eatable, RobotWorker};
///
/// RobotWorker.eat();
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct RobotWorker;

impl Workable for RobotWorker {
    fn work(&self) {
        debug!("Robot working");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HumanWorker;

impl Workable for HumanWorker {
    fn work(&self) {
        debug!("Human working");
    }
}

impl Eatable for HumanWorker {
    fn eat(&self) {
        debug!("Human eating");
    }
}

impl Sleepable for HumanWorker {
    fn sleep(&self) {
        debug!("Human sleeping");
    }
}
