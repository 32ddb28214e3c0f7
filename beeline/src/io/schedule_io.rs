use super::{file_ops, IoError};
use beeline_core::model::schedule::{ScheduleSerializable, TransitSchedule};

pub fn read_schedule(path: &str) -> Result<TransitSchedule, IoError> {
    let rows: ScheduleSerializable = file_ops::read_json(path)?;
    let schedule = TransitSchedule::try_from(rows)?;
    log::info!(
        "read schedule from {path} with {} facilities and {} lines",
        schedule.facilities().len(),
        schedule.lines().len()
    );
    Ok(schedule)
}

pub fn write_schedule(
    path: &str,
    schedule: &TransitSchedule,
    overwrite: bool,
) -> Result<(), IoError> {
    let rows = ScheduleSerializable::from(schedule);
    file_ops::write_json(path, &rows, overwrite)?;
    log::info!("wrote schedule with {} lines to {path}", schedule.lines().len());
    Ok(())
}
