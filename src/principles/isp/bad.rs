use tracing::debug;

use crate::error::UnsupportedOperation;

/// One capability for everything a worker might do
pub trait Worker {
    fn work(&self) -> Result<(), UnsupportedOperation>;
    fn eat(&self) -> Result<(), UnsupportedOperation>;
    fn sleep(&self) -> Result<(), UnsupportedOperation>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HumanWorker;

impl Worker for HumanWorker {
    fn work(&self) -> Result<(), UnsupportedOperation> {
        debug!("Human working");
        Ok(())
    }

    fn eat(&self) -> Result<(), UnsupportedOperation> {
        debug!("Human eating");
        Ok(())
    }

    fn sleep(&self) -> Result<(), UnsupportedOperation> {
        debug!("Human sleeping");
        Ok(())
    }
}

/// Only `work` is real; the rest exist to satisfy `Worker`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RobotWorker;

impl Worker for RobotWorker {
    fn work(&self) -> Result<(), UnsupportedOperation> {
        debug!("Robot working");
        Ok(())
    }

    fn eat(&self) -> Result<(), UnsupportedOperation> {
        Err(UnsupportedOperation::new("eat", "Robots do not eat"))
    }

    fn sleep(&self) -> Result<(), UnsupportedOperation> {
        Err(UnsupportedOperation::new("sleep", "Robots do not sleep"))
    }
}
